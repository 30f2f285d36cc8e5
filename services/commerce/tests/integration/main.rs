mod helpers;

mod dashboard_test;
mod employee_test;
mod policy_test;
mod router_test;
