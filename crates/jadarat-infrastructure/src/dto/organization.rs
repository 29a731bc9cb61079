//! `organizations` rows joined with `subscription_tiers(name)`.

use chrono::{DateTime, Utc};
use jadarat_core::JadaratError;
use jadarat_core::dashboard::{OrganizationStatus, OrganizationSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Projection used by the recent-organizations read.
pub const ORGANIZATION_SUMMARY_COLUMNS: &str = "id,name,status,created_at,subscription_tiers(name)";

/// Embedded tier. PostgREST returns a to-one join as an object, but older
/// relationship definitions yield a one-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierJoinDto {
    One(TierNameDto),
    Many(Vec<TierNameDto>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierNameDto {
    #[serde(default)]
    pub name: Option<String>,
}

impl TierJoinDto {
    fn into_name(self) -> Option<String> {
        let tier = match self {
            Self::One(tier) => Some(tier),
            Self::Many(tiers) => tiers.into_iter().next(),
        };
        tier.and_then(|t| t.name).filter(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationRowDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub subscription_tiers: Option<TierJoinDto>,
}

impl OrganizationRowDto {
    pub fn from_json(row: serde_json::Value) -> Result<Self, JadaratError> {
        serde_json::from_value(row)
            .map_err(|e| JadaratError::data_fetch("organizations", format!("Malformed row: {e}")))
    }
}

impl From<OrganizationRowDto> for OrganizationSummary {
    fn from(dto: OrganizationRowDto) -> Self {
        OrganizationSummary {
            id: dto.id,
            name: dto.name,
            status: OrganizationStatus::from(dto.status.unwrap_or_default()),
            created_at: dto.created_at,
            tier_name: dto.subscription_tiers.and_then(TierJoinDto::into_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_with_object_join() {
        let row = json!({
            "id": "0d4f9a7e-2f5c-4d7a-8a47-6f5b2d1c9e01",
            "name": "Acme Hiring",
            "status": "active",
            "created_at": "2026-02-14T09:30:00+00:00",
            "subscription_tiers": {"name": "Enterprise"}
        });
        let summary: OrganizationSummary = OrganizationRowDto::from_json(row).unwrap().into();

        assert_eq!(summary.name, "Acme Hiring");
        assert_eq!(summary.status, OrganizationStatus::Active);
        assert_eq!(summary.tier_name.as_deref(), Some("Enterprise"));
    }

    #[test]
    fn test_row_with_array_or_missing_join() {
        let row = json!({
            "id": "0d4f9a7e-2f5c-4d7a-8a47-6f5b2d1c9e02",
            "name": "Nadia Talent",
            "status": "trial",
            "created_at": "2026-02-10T00:00:00Z",
            "subscription_tiers": [{"name": "Starter"}]
        });
        let summary: OrganizationSummary = OrganizationRowDto::from_json(row).unwrap().into();
        assert_eq!(summary.tier_name.as_deref(), Some("Starter"));
        assert_eq!(summary.status, OrganizationStatus::Other("trial".to_string()));

        let row = json!({
            "id": "0d4f9a7e-2f5c-4d7a-8a47-6f5b2d1c9e03",
            "name": "No Tier Co",
            "status": "pending",
            "created_at": "2026-02-01T00:00:00Z",
            "subscription_tiers": null
        });
        let summary: OrganizationSummary = OrganizationRowDto::from_json(row).unwrap().into();
        assert!(summary.tier_name.is_none());
    }

    #[test]
    fn test_malformed_row_is_a_data_fetch_error() {
        let err = OrganizationRowDto::from_json(json!({"id": "not-a-uuid", "name": "x"}))
            .unwrap_err();
        assert!(err.is_data_fetch());
    }
}
