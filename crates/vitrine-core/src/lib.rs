//! Core types for vitrine: configuration, error taxonomy, domain models, and
//! upload validation. Everything here is shared by the storage, db, and api crates.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::ValidationError;
