//! Row shapes returned by the backend's tables.
//!
//! DTOs stay private to the infrastructure layer; the domain only sees the
//! validated models they convert into.

mod organization;

pub use organization::{ORGANIZATION_SUMMARY_COLUMNS, OrganizationRowDto};
