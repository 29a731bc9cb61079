//! Settings page: a local draft, per-field edits and a pluggable save.

use std::sync::Arc;

use jadarat_core::Result;
use jadarat_core::locale::{Direction, Language};
use jadarat_core::settings::model::DEFAULT_LANGUAGE;
use jadarat_core::settings::{
    SettingDescriptor, SettingKind, SettingValue, SettingsDraft, SettingsSection, SettingsStore,
};
use strum::IntoEnumIterator;
use tokio::sync::watch;

use crate::locale_resolver::LocaleResolver;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

pub struct SettingsEditor {
    store: Arc<dyn SettingsStore>,
    locale: Arc<LocaleResolver>,
    draft: SettingsDraft,
    status: watch::Sender<SaveStatus>,
}

impl SettingsEditor {
    /// Starts from the platform defaults.
    pub fn new(store: Arc<dyn SettingsStore>, locale: Arc<LocaleResolver>) -> Self {
        Self::with_draft(store, locale, SettingsDraft::default())
    }

    pub fn with_draft(
        store: Arc<dyn SettingsStore>,
        locale: Arc<LocaleResolver>,
        draft: SettingsDraft,
    ) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            store,
            locale,
            draft,
            status,
        }
    }

    pub fn draft(&self) -> &SettingsDraft {
        &self.draft
    }

    pub fn status(&self) -> SaveStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    /// Replaces one key; every other key keeps its value.
    pub fn update_setting(&mut self, key: &str, value: impl Into<SettingValue>) -> Result<()> {
        self.draft.update(key, value.into())
    }

    /// Applies raw text from an input. Unparseable numbers fall back to the
    /// field default.
    pub fn update_from_input(&mut self, key: &str, raw: &str) -> Result<()> {
        self.draft.update_from_input(key, raw)
    }

    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        self.draft.toggle(key)
    }

    /// Hands the draft to the store and records the outcome.
    pub async fn save(&mut self) -> Result<()> {
        self.status.send_replace(SaveStatus::Saving);
        tracing::info!("[Settings] Saving {} settings", self.draft.iter().count());

        match self.store.save(&self.draft).await {
            Ok(()) => {
                self.status.send_replace(SaveStatus::Saved);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("[Settings] Save failed: {}", e);
                self.status.send_replace(SaveStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn view(&self) -> SettingsView {
        SettingsView::build(&self.draft, &self.status(), &self.locale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputView {
    Text { value: String },
    Number { value: i64 },
    Select { options: Vec<OptionView> },
    Toggle { on: bool, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingFieldView {
    pub key: &'static str,
    pub label: String,
    pub description: Option<String>,
    pub input: InputView,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub name: String,
    pub direction: Direction,
    pub direction_label: String,
    /// "Default" for the configured default language, "Enabled" otherwise.
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationView {
    pub languages: Vec<LanguageRow>,
    pub regional_format_title: String,
    pub regional_format: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationView {
    pub name: String,
    pub provider: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Fields(Vec<SettingFieldView>),
    Localization(LocalizationView),
    Integrations(Vec<IntegrationView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: SettingsSection,
    pub title: String,
    pub description: String,
    pub read_only: bool,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub direction: Direction,
    pub title: String,
    pub subtitle: String,
    pub save_label: String,
    pub save_disabled: bool,
    pub notice: Option<Notice>,
    pub sections: Vec<SectionView>,
}

impl SettingsView {
    pub fn build(draft: &SettingsDraft, status: &SaveStatus, locale: &LocaleResolver) -> Self {
        let saving = *status == SaveStatus::Saving;
        let notice = match status {
            SaveStatus::Saved => Some(Notice {
                kind: NoticeKind::Success,
                message: locale.translate("settings.saved"),
            }),
            SaveStatus::Failed(reason) => Some(Notice {
                kind: NoticeKind::Error,
                message: format!("{}: {}", locale.translate("settings.saveFailed"), reason),
            }),
            SaveStatus::Idle | SaveStatus::Saving => None,
        };

        let sections = SettingsSection::iter()
            .map(|section| SectionView {
                section,
                title: locale.translate(&section.translation_key()),
                description: locale
                    .translate(&format!("{}.description", section.translation_key())),
                read_only: section.is_read_only(),
                body: match section {
                    SettingsSection::Localization => {
                        SectionBody::Localization(localization_view(draft, locale))
                    }
                    SettingsSection::Integrations => {
                        SectionBody::Integrations(integrations_view(locale))
                    }
                    _ => SectionBody::Fields(
                        section
                            .descriptors()
                            .map(|descriptor| field_view(descriptor, draft, saving, locale))
                            .collect(),
                    ),
                },
            })
            .collect();

        Self {
            direction: locale.direction(),
            title: locale.translate("settings.title"),
            subtitle: locale.translate("settings.subtitle"),
            save_label: locale.translate(if saving {
                "settings.saving"
            } else {
                "settings.save"
            }),
            save_disabled: saving,
            notice,
            sections,
        }
    }
}

fn field_view(
    descriptor: &'static SettingDescriptor,
    draft: &SettingsDraft,
    disabled: bool,
    locale: &LocaleResolver,
) -> SettingFieldView {
    let current = draft
        .get(descriptor.key)
        .cloned()
        .unwrap_or_else(|| descriptor.kind.default_value());

    let input = match descriptor.kind {
        SettingKind::Text { .. } => InputView::Text {
            value: current.to_string(),
        },
        SettingKind::Number { default } => InputView::Number {
            value: current.as_number().unwrap_or(default),
        },
        SettingKind::Choice { options, .. } => {
            let selected = current.to_string();
            InputView::Select {
                options: options
                    .iter()
                    .map(|value| OptionView {
                        value: value.to_string(),
                        label: locale.translate(&format!("settings.option.{}", value)),
                        selected: *value == selected,
                    })
                    .collect(),
            }
        }
        SettingKind::Flag { default } => {
            let on = current.as_flag().unwrap_or(default);
            InputView::Toggle {
                on,
                label: locale.translate(if on {
                    "settings.toggle.on"
                } else {
                    "settings.toggle.off"
                }),
            }
        }
    };

    SettingFieldView {
        key: descriptor.key,
        label: locale.translate(&descriptor.label_key()),
        description: descriptor.description_key().map(|key| locale.translate(&key)),
        input,
        disabled,
    }
}

fn localization_view(draft: &SettingsDraft, locale: &LocaleResolver) -> LocalizationView {
    let default_language = draft
        .get(DEFAULT_LANGUAGE)
        .and_then(SettingValue::as_text)
        .and_then(|code| code.parse::<Language>().ok())
        .unwrap_or_default();

    let languages = Language::iter()
        .map(|language| {
            let (name_key, direction_key) = match language {
                Language::En => (
                    "settings.localization.english",
                    "settings.localization.englishDirection",
                ),
                Language::Ar => (
                    "settings.localization.arabic",
                    "settings.localization.arabicDirection",
                ),
            };
            let badge_key = if language == default_language {
                "settings.localization.default"
            } else {
                "settings.localization.enabled"
            };
            LanguageRow {
                name: locale.translate(name_key),
                direction: language.direction(),
                direction_label: locale.translate(direction_key),
                badge: locale.translate(badge_key),
            }
        })
        .collect();

    LocalizationView {
        languages,
        regional_format_title: locale.translate("settings.localization.regionalFormat"),
        regional_format: [
            "settings.localization.date",
            "settings.localization.currency",
            "settings.localization.number",
            "settings.localization.weekStart",
        ]
        .iter()
        .map(|key| locale.translate(key))
        .collect(),
    }
}

fn integrations_view(locale: &LocaleResolver) -> Vec<IntegrationView> {
    [
        (
            "settings.integrations.emailService",
            "settings.integrations.resend",
        ),
        (
            "settings.integrations.database",
            "settings.integrations.supabase",
        ),
        (
            "settings.integrations.cdn",
            "settings.integrations.supabaseStorage",
        ),
    ]
    .into_iter()
    .map(|(name, provider)| IntegrationView {
        name: locale.translate(name),
        provider: locale.translate(provider),
        status: locale.translate("settings.integrations.connected"),
    })
    .collect()
}
