//! Platform settings draft and its schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use crate::error::{JadaratError, Result};

pub const APP_NAME: &str = "appName";
pub const APP_NAME_AR: &str = "appNameAr";
pub const SUPPORT_EMAIL: &str = "supportEmail";
pub const DEFAULT_LANGUAGE: &str = "defaultLanguage";
pub const TIMEZONE: &str = "timezone";
pub const SESSION_TIMEOUT: &str = "sessionTimeout";
pub const MAX_LOGIN_ATTEMPTS: &str = "maxLoginAttempts";
pub const ENFORCE_STRONG_PASSWORD: &str = "enforceStrongPassword";
pub const REQUIRE_2FA: &str = "require2FA";
pub const AI_PROVIDER: &str = "aiProvider";
pub const ENABLE_RESUME_PARSER: &str = "enableResumeParser";
pub const ENABLE_AUTO_SCORING: &str = "enableAutoScoring";
pub const EMAIL_NOTIFICATIONS: &str = "emailNotifications";
pub const SLACK_INTEGRATION: &str = "slackIntegration";
pub const WEBHOOK_URL: &str = "webhookUrl";

/// A single setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl SettingValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// The shape of a setting and its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text {
        default: &'static str,
    },
    Choice {
        default: &'static str,
        options: &'static [&'static str],
    },
    /// Unparseable input falls back to `default`.
    Number {
        default: i64,
    },
    Flag {
        default: bool,
    },
}

impl SettingKind {
    pub fn default_value(&self) -> SettingValue {
        match *self {
            Self::Text { default } | Self::Choice { default, .. } => default.into(),
            Self::Number { default } => default.into(),
            Self::Flag { default } => default.into(),
        }
    }

    fn accepts(&self, value: &SettingValue) -> bool {
        match (self, value) {
            (Self::Choice { options, .. }, SettingValue::Text(text)) => {
                options.contains(&text.as_str())
            }
            (Self::Text { .. }, SettingValue::Text(_))
            | (Self::Number { .. }, SettingValue::Number(_))
            | (Self::Flag { .. }, SettingValue::Flag(_)) => true,
            _ => false,
        }
    }

    fn expectation(&self) -> String {
        match self {
            Self::Choice { options, .. } => format!("expected one of {}", options.join(", ")),
            _ => format!("expected a {} value", self.name()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Choice { .. } => "choice",
            Self::Number { .. } => "number",
            Self::Flag { .. } => "flag",
        }
    }
}

/// Settings page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum SettingsSection {
    General,
    Security,
    Localization,
    Ai,
    Notifications,
    Integrations,
}

impl SettingsSection {
    /// Sections that only display platform facts and hold no draft keys.
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::Localization | Self::Integrations)
    }

    pub fn translation_key(self) -> String {
        format!("settings.section.{}", self.as_ref())
    }

    pub fn descriptors(self) -> impl Iterator<Item = &'static SettingDescriptor> {
        SETTING_DESCRIPTORS
            .iter()
            .filter(move |descriptor| descriptor.section == self)
    }
}

/// Schema entry for one editable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub key: &'static str,
    pub section: SettingsSection,
    pub kind: SettingKind,
    /// Whether the field carries a description line under its label.
    pub described: bool,
}

impl SettingDescriptor {
    pub fn label_key(&self) -> String {
        format!("settings.field.{}", self.key)
    }

    pub fn description_key(&self) -> Option<String> {
        self.described
            .then(|| format!("settings.field.{}.description", self.key))
    }
}

const LANGUAGE_OPTIONS: &[&str] = &["en", "ar"];
const TIMEZONE_OPTIONS: &[&str] = &["Asia/Riyadh", "Asia/Dubai", "Africa/Cairo", "UTC"];
const AI_PROVIDER_OPTIONS: &[&str] = &["openai", "anthropic", "azure"];

/// Every editable setting, in display order.
pub static SETTING_DESCRIPTORS: &[SettingDescriptor] = &[
    // General
    SettingDescriptor {
        key: APP_NAME,
        section: SettingsSection::General,
        kind: SettingKind::Text {
            default: "Jadarat ATS",
        },
        described: false,
    },
    SettingDescriptor {
        key: APP_NAME_AR,
        section: SettingsSection::General,
        kind: SettingKind::Text { default: "جدارات" },
        described: false,
    },
    SettingDescriptor {
        key: SUPPORT_EMAIL,
        section: SettingsSection::General,
        kind: SettingKind::Text {
            default: "support@jadarat.io",
        },
        described: false,
    },
    SettingDescriptor {
        key: DEFAULT_LANGUAGE,
        section: SettingsSection::General,
        kind: SettingKind::Choice {
            default: "en",
            options: LANGUAGE_OPTIONS,
        },
        described: false,
    },
    SettingDescriptor {
        key: TIMEZONE,
        section: SettingsSection::General,
        kind: SettingKind::Choice {
            default: "Asia/Riyadh",
            options: TIMEZONE_OPTIONS,
        },
        described: false,
    },
    // Security
    SettingDescriptor {
        key: SESSION_TIMEOUT,
        section: SettingsSection::Security,
        kind: SettingKind::Number { default: 30 },
        described: false,
    },
    SettingDescriptor {
        key: MAX_LOGIN_ATTEMPTS,
        section: SettingsSection::Security,
        kind: SettingKind::Number { default: 5 },
        described: false,
    },
    SettingDescriptor {
        key: ENFORCE_STRONG_PASSWORD,
        section: SettingsSection::Security,
        kind: SettingKind::Flag { default: true },
        described: true,
    },
    SettingDescriptor {
        key: REQUIRE_2FA,
        section: SettingsSection::Security,
        kind: SettingKind::Flag { default: false },
        described: true,
    },
    // AI Configuration
    SettingDescriptor {
        key: AI_PROVIDER,
        section: SettingsSection::Ai,
        kind: SettingKind::Choice {
            default: "openai",
            options: AI_PROVIDER_OPTIONS,
        },
        described: false,
    },
    SettingDescriptor {
        key: ENABLE_RESUME_PARSER,
        section: SettingsSection::Ai,
        kind: SettingKind::Flag { default: true },
        described: true,
    },
    SettingDescriptor {
        key: ENABLE_AUTO_SCORING,
        section: SettingsSection::Ai,
        kind: SettingKind::Flag { default: true },
        described: true,
    },
    // Notifications
    SettingDescriptor {
        key: EMAIL_NOTIFICATIONS,
        section: SettingsSection::Notifications,
        kind: SettingKind::Flag { default: true },
        described: true,
    },
    SettingDescriptor {
        key: SLACK_INTEGRATION,
        section: SettingsSection::Notifications,
        kind: SettingKind::Flag { default: false },
        described: true,
    },
    SettingDescriptor {
        key: WEBHOOK_URL,
        section: SettingsSection::Notifications,
        kind: SettingKind::Text { default: "" },
        described: true,
    },
];

/// Looks up the schema entry for `key`.
pub fn descriptor(key: &str) -> Option<&'static SettingDescriptor> {
    SETTING_DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.key == key)
}

/// The uncommitted, locally held settings being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDraft {
    values: BTreeMap<String, SettingValue>,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        let values = SETTING_DESCRIPTORS
            .iter()
            .map(|descriptor| (descriptor.key.to_string(), descriptor.kind.default_value()))
            .collect();
        Self { values }
    }
}

impl SettingsDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Replaces the value of one key. Every other key is left untouched.
    ///
    /// The value must match the field's kind, and a choice must be one of its
    /// options. There is no cross-field validation.
    pub fn update(&mut self, key: &str, value: SettingValue) -> Result<()> {
        let descriptor = Self::descriptor_for(key)?;
        if !descriptor.kind.accepts(&value) {
            return Err(JadaratError::invalid_setting(key, descriptor.kind.expectation()));
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Applies raw form input to a key.
    ///
    /// Number fields parse the leading integer of the input and fall back to
    /// the field default when nothing (or zero) parses.
    pub fn update_from_input(&mut self, key: &str, raw: &str) -> Result<()> {
        let descriptor = Self::descriptor_for(key)?;
        let value: SettingValue = match descriptor.kind {
            SettingKind::Text { .. } => raw.into(),
            SettingKind::Choice { options, .. } => {
                let choice = raw.trim();
                if !options.contains(&choice) {
                    return Err(JadaratError::invalid_setting(key, descriptor.kind.expectation()));
                }
                choice.into()
            }
            SettingKind::Number { default } => match parse_leading_int(raw) {
                Some(parsed) if parsed != 0 => parsed.into(),
                _ => default.into(),
            },
            SettingKind::Flag { .. } => parse_flag(raw)
                .ok_or_else(|| JadaratError::invalid_setting(key, "expected on/off"))?
                .into(),
        };
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Flips a flag and returns its new value.
    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        let current = self
            .get(key)
            .and_then(SettingValue::as_flag)
            .ok_or_else(|| JadaratError::invalid_setting(key, "not a flag"))?;
        self.values.insert(key.to_string(), SettingValue::Flag(!current));
        Ok(!current)
    }

    fn descriptor_for(key: &str) -> Result<&'static SettingDescriptor> {
        descriptor(key).ok_or_else(|| JadaratError::invalid_setting(key, "unknown setting"))
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
