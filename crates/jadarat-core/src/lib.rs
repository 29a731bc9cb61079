//! Domain layer for the Jadarat admin console.
//!
//! Holds the models, the backend-facing traits and the static locale tables.
//! Nothing here performs I/O.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod locale;
pub mod navigation;
pub mod query;
pub mod settings;

// Re-export common error types
pub use error::{AuthError, JadaratError, Result, ValidationError};
