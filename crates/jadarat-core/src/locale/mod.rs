//! Locale domain module.
//!
//! # Module Structure
//!
//! - `language`: `Language`, `Direction` and the derived `LocaleState`
//! - `translations`: the static English/Arabic string tables

mod language;
mod translations;

pub use language::{Direction, Language, LocaleState};
pub use translations::TranslationTable;
