//! API route handlers

pub mod fact_check;
pub mod health;

pub use fact_check::fact_check_routes;
pub use health::health_routes;
