//! sea-orm entities for the commerce service schema.

pub mod business_employees;
pub mod businesses;
pub mod invoices;
pub mod products;
pub mod sale_items;
pub mod sales;
pub mod users;
