//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session`, `PendingConfirmation`, `SignUpRequest`
//! - `service`: the `AuthBackend` trait implemented by the infrastructure layer

mod model;
mod service;

pub use model::{PendingConfirmation, Session, SignUpRequest};
pub use service::AuthBackend;
