//! Dashboard view-model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on the recent-organizations list.
pub const RECENT_ORGANIZATIONS_LIMIT: usize = 5;

/// Lifecycle status of a tenant organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrganizationStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
    Other(String),
}

impl OrganizationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<String> for OrganizationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "pending" => Self::Pending,
            "suspended" => Self::Suspended,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrganizationStatus> for String {
    fn from(status: OrganizationStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Read-only projection of a backend organization row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: Uuid,
    pub name: String,
    pub status: OrganizationStatus,
    pub created_at: DateTime<Utc>,
    pub tier_name: Option<String>,
}

/// Monthly recurring revenue.
///
/// There is no computation path for revenue yet, so the dashboard always
/// carries `NotComputed`, which displays as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonthlyRevenue {
    #[default]
    NotComputed,
    Computed(u64),
}

impl MonthlyRevenue {
    pub fn amount(&self) -> u64 {
        match self {
            Self::NotComputed => 0,
            Self::Computed(amount) => *amount,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

/// Everything the dashboard displays, built once per visit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub organization_count: u64,
    pub active_organization_count: u64,
    pub tier_count: u64,
    pub active_user_count: u64,
    pub recent_organizations: Vec<OrganizationSummary>,
    pub monthly_revenue: MonthlyRevenue,
}

impl DashboardSummary {
    /// Builds a summary, enforcing newest-first order and the list limit.
    pub fn new(
        organization_count: u64,
        active_organization_count: u64,
        tier_count: u64,
        active_user_count: u64,
        mut recent_organizations: Vec<OrganizationSummary>,
    ) -> Self {
        recent_organizations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_organizations.truncate(RECENT_ORGANIZATIONS_LIMIT);

        Self {
            organization_count,
            active_organization_count,
            tier_count,
            active_user_count,
            recent_organizations,
            monthly_revenue: MonthlyRevenue::NotComputed,
        }
    }

    pub fn has_recent_organizations(&self) -> bool {
        !self.recent_organizations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn org(name: &str, days_ago: i64) -> OrganizationSummary {
        let base = Utc.with_ymd_and_hms(2026, 1, 31, 12, 0, 0).unwrap();
        OrganizationSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: OrganizationStatus::Active,
            created_at: base - Duration::days(days_ago),
            tier_name: None,
        }
    }

    #[test]
    fn test_default_is_all_zero() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.organization_count, 0);
        assert_eq!(summary.active_organization_count, 0);
        assert_eq!(summary.tier_count, 0);
        assert_eq!(summary.active_user_count, 0);
        assert!(summary.recent_organizations.is_empty());
        assert_eq!(summary.monthly_revenue.amount(), 0);
        assert!(!summary.monthly_revenue.is_computed());
    }

    #[test]
    fn test_new_sorts_newest_first_and_truncates() {
        let recent = (0..8).map(|i| org(&format!("org-{i}"), i * 3 % 8)).collect();
        let summary = DashboardSummary::new(8, 8, 1, 3, recent);

        assert_eq!(summary.recent_organizations.len(), RECENT_ORGANIZATIONS_LIMIT);
        assert!(
            summary
                .recent_organizations
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
        assert_eq!(summary.monthly_revenue, MonthlyRevenue::NotComputed);
    }

    #[test]
    fn test_status_round_trip_keeps_unknown_values() {
        assert_eq!(
            OrganizationStatus::from("active".to_string()),
            OrganizationStatus::Active
        );
        let trial = OrganizationStatus::from("trial".to_string());
        assert_eq!(trial, OrganizationStatus::Other("trial".to_string()));
        assert_eq!(trial.as_str(), "trial");
        assert!(!trial.is_active());
    }
}
