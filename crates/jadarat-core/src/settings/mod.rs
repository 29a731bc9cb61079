//! Settings domain module.
//!
//! # Module Structure
//!
//! - `model`: `SettingsDraft`, `SettingValue` and the static settings schema
//! - `store`: the pluggable `SettingsStore` trait

pub mod model;
mod store;

pub use model::{
    SETTING_DESCRIPTORS, SettingDescriptor, SettingKind, SettingValue, SettingsDraft,
    SettingsSection, descriptor,
};
pub use store::SettingsStore;
