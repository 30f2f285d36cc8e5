pub mod auth;
pub mod business;
pub mod dashboard;
pub mod employee;
pub mod game;
pub mod invoice;
pub mod product;
pub mod sale;
