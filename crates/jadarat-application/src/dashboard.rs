//! Dashboard aggregation and rendering.
//!
//! Five reads run concurrently and are awaited together; the summary is built
//! only once all of them are back. A failed or empty read shows up as zero
//! (or an empty list) and never aborts the page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jadarat_core::Result;
use jadarat_core::dashboard::{
    DashboardSource, DashboardSummary, OrganizationStatus, OrganizationSummary,
    RECENT_ORGANIZATIONS_LIMIT,
};
use jadarat_core::locale::{Direction, Language};
use jadarat_core::navigation::ORGANIZATIONS_PATH;

use crate::forms::LinkView;
use crate::locale_resolver::LocaleResolver;

pub struct DashboardAggregator {
    source: Arc<dyn DashboardSource>,
    locale: Arc<LocaleResolver>,
}

impl DashboardAggregator {
    pub fn new(source: Arc<dyn DashboardSource>, locale: Arc<LocaleResolver>) -> Self {
        Self { source, locale }
    }

    /// Runs the five reads and reduces them into a summary. Never fails.
    pub async fn load(&self) -> DashboardSummary {
        let (organizations, active_organizations, tiers, profiles, recent) = tokio::join!(
            self.source.organization_count(),
            self.source.active_organization_count(),
            self.source.active_tier_count(),
            self.source.profile_count(),
            self.source.recent_organizations(RECENT_ORGANIZATIONS_LIMIT),
        );

        let recent = recent.unwrap_or_else(|e| {
            tracing::warn!("[Dashboard] recent organizations unavailable, showing none: {}", e);
            Vec::new()
        });

        let summary = DashboardSummary::new(
            count_or_zero("organizations", organizations),
            count_or_zero("active organizations", active_organizations),
            count_or_zero("subscription tiers", tiers),
            count_or_zero("profiles", profiles),
            recent,
        );
        tracing::info!(
            "[Dashboard] Loaded: {} organizations, {} recent",
            summary.organization_count,
            summary.recent_organizations.len()
        );
        summary
    }

    /// Loads and renders in the active language.
    pub async fn load_view(&self) -> DashboardView {
        let summary = self.load().await;
        DashboardView::build(&summary, &self.locale)
    }
}

fn count_or_zero(metric: &str, result: Result<Option<u64>>) -> u64 {
    match result {
        Ok(Some(count)) => count,
        Ok(None) => {
            tracing::debug!("[Dashboard] {} returned no count, showing 0", metric);
            0
        }
        Err(e) => {
            tracing::warn!("[Dashboard] {} read failed, showing 0: {}", metric, e);
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBadge {
    pub label: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRow {
    pub name: String,
    /// Tier name, or the translated "N/A".
    pub tier: String,
    pub status: String,
    pub is_active: bool,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentOrganizationsView {
    pub title: String,
    pub view_all: LinkView,
    pub columns: [String; 4],
    pub rows: Vec<OrganizationRow>,
    /// Set exactly when `rows` is empty.
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub direction: Direction,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub quick_actions_title: String,
    pub quick_actions_body: String,
    pub health_title: String,
    pub health: Vec<HealthBadge>,
    pub recent: RecentOrganizationsView,
}

impl DashboardView {
    pub fn build(summary: &DashboardSummary, locale: &LocaleResolver) -> Self {
        let t = |key: &str| locale.translate(key);
        let stat = |label: &str, value: String, caption: &str| StatCard {
            label: t(label),
            value,
            caption: t(caption),
        };

        let stats = vec![
            stat(
                "dashboard.totalOrganizations",
                summary.organization_count.to_string(),
                "dashboard.totalOrganizationsCaption",
            ),
            stat(
                "dashboard.activeUsers",
                summary.active_user_count.to_string(),
                "dashboard.activeUsersCaption",
            ),
            stat(
                "dashboard.subscriptionTiers",
                summary.tier_count.to_string(),
                "dashboard.subscriptionTiersCaption",
            ),
            stat(
                "dashboard.monthlyRevenue",
                format!("${}", group_thousands(summary.monthly_revenue.amount())),
                "dashboard.monthlyRevenueCaption",
            ),
        ];

        // Static until a health endpoint exists.
        let health = [
            ("dashboard.health.database", "dashboard.health.healthy"),
            ("dashboard.health.api", "dashboard.health.operational"),
            ("dashboard.health.ai", "dashboard.health.active"),
        ]
        .into_iter()
        .map(|(label, status)| HealthBadge {
            label: t(label),
            status: t(status),
        })
        .collect();

        let rows: Vec<OrganizationRow> = summary
            .recent_organizations
            .iter()
            .map(|org| organization_row(org, locale))
            .collect();
        let empty_message = rows.is_empty().then(|| t("dashboard.emptyRecent"));

        Self {
            direction: locale.direction(),
            title: t("dashboard.welcomeTitle"),
            subtitle: t("dashboard.welcomeSubtitle"),
            stats,
            quick_actions_title: t("dashboard.quickActions"),
            quick_actions_body: t("dashboard.quickActionsBody"),
            health_title: t("dashboard.systemHealth"),
            health,
            recent: RecentOrganizationsView {
                title: t("dashboard.recentOrganizations"),
                view_all: LinkView {
                    prompt: None,
                    label: t("dashboard.viewAll"),
                    path: ORGANIZATIONS_PATH,
                },
                columns: [
                    t("dashboard.column.name"),
                    t("dashboard.column.tier"),
                    t("dashboard.column.status"),
                    t("dashboard.column.created"),
                ],
                rows,
                empty_message,
            },
        }
    }
}

fn organization_row(org: &OrganizationSummary, locale: &LocaleResolver) -> OrganizationRow {
    let status = match &org.status {
        OrganizationStatus::Other(raw) => raw.clone(),
        known => locale.translate(&format!("dashboard.status.{}", known.as_str())),
    };

    OrganizationRow {
        name: org.name.clone(),
        tier: org
            .tier_name
            .clone()
            .unwrap_or_else(|| locale.translate("dashboard.notAvailable")),
        status,
        is_active: org.status.is_active(),
        created: format_date(org.created_at, locale.language()),
    }
}

/// Short date in the language's customary order.
pub fn format_date(date: DateTime<Utc>, language: Language) -> String {
    match language {
        Language::En => date.format("%-m/%-d/%Y").to_string(),
        Language::Ar => date.format("%d/%m/%Y").to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jadarat_core::dashboard::MonthlyRevenue;
    use uuid::Uuid;

    fn org(name: &str, status: OrganizationStatus, tier: Option<&str>) -> OrganizationSummary {
        OrganizationSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap(),
            tier_name: tier.map(str::to_string),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_date_per_language() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(format_date(date, Language::En), "3/7/2026");
        assert_eq!(format_date(date, Language::Ar), "07/03/2026");
    }

    #[test]
    fn test_empty_summary_renders_zeros_and_empty_state() {
        let locale = LocaleResolver::new(Language::En);
        let view = DashboardView::build(&DashboardSummary::default(), &locale);

        let values: Vec<&str> = view.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["0", "0", "0", "$0"]);
        assert!(view.recent.rows.is_empty());
        assert_eq!(
            view.recent.empty_message.as_deref(),
            Some("No organizations yet. Create your first organization to get started.")
        );
        assert_eq!(view.recent.view_all.path, ORGANIZATIONS_PATH);
    }

    #[test]
    fn test_rows_show_tier_fallback_and_status() {
        let locale = LocaleResolver::new(Language::En);
        let summary = DashboardSummary {
            organization_count: 2,
            recent_organizations: vec![
                org("Acme Hiring", OrganizationStatus::Active, Some("Enterprise")),
                org("Trial Co", OrganizationStatus::Other("trial".to_string()), None),
            ],
            ..Default::default()
        };

        let view = DashboardView::build(&summary, &locale);
        let rows = &view.recent.rows;

        assert!(view.recent.empty_message.is_none());
        assert_eq!(rows[0].tier, "Enterprise");
        assert_eq!(rows[0].status, "active");
        assert!(rows[0].is_active);
        assert_eq!(rows[0].created, "3/7/2026");
        assert_eq!(rows[1].tier, "N/A");
        assert_eq!(rows[1].status, "trial");
        assert!(!rows[1].is_active);
    }

    #[test]
    fn test_arabic_view_is_rtl() {
        let locale = LocaleResolver::new(Language::Ar);
        let summary = DashboardSummary {
            monthly_revenue: MonthlyRevenue::Computed(12500),
            ..Default::default()
        };

        let view = DashboardView::build(&summary, &locale);
        assert_eq!(view.direction, Direction::Rtl);
        assert_eq!(view.stats[3].value, "$12,500");
        assert_eq!(view.health.len(), 3);
    }
}
