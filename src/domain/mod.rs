//! Domain layer - core value objects and business rules

pub mod config;
pub mod error;
pub mod focus;
pub mod history;
