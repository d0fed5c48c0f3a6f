//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database queries, validation, and the upstream feed fetch.

pub mod seed_service;
pub mod statistics_service;
pub mod transaction_service;
