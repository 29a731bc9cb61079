//! `DashboardSource` backed by table queries.

use std::sync::Arc;

use async_trait::async_trait;
use jadarat_core::Result;
use jadarat_core::dashboard::{DashboardSource, OrganizationSummary};
use jadarat_core::query::{QueryBackend, TableQuery};

use crate::dto::{ORGANIZATION_SUMMARY_COLUMNS, OrganizationRowDto};

pub const ORGANIZATIONS_TABLE: &str = "organizations";
pub const SUBSCRIPTION_TIERS_TABLE: &str = "subscription_tiers";
pub const PROFILES_TABLE: &str = "profiles";

pub struct QueryDashboardSource {
    backend: Arc<dyn QueryBackend>,
}

impl QueryDashboardSource {
    pub fn new(backend: Arc<dyn QueryBackend>) -> Self {
        Self { backend }
    }

    pub fn organizations_query() -> TableQuery {
        TableQuery::table(ORGANIZATIONS_TABLE)
    }

    pub fn active_organizations_query() -> TableQuery {
        TableQuery::table(ORGANIZATIONS_TABLE).eq("status", "active")
    }

    pub fn active_tiers_query() -> TableQuery {
        TableQuery::table(SUBSCRIPTION_TIERS_TABLE).eq("is_active", true)
    }

    pub fn profiles_query() -> TableQuery {
        TableQuery::table(PROFILES_TABLE)
    }

    pub fn recent_organizations_query(limit: usize) -> TableQuery {
        TableQuery::table(ORGANIZATIONS_TABLE)
            .select(ORGANIZATION_SUMMARY_COLUMNS)
            .order_desc("created_at")
            .limit(limit)
    }
}

#[async_trait]
impl DashboardSource for QueryDashboardSource {
    async fn organization_count(&self) -> Result<Option<u64>> {
        self.backend.count(&Self::organizations_query()).await
    }

    async fn active_organization_count(&self) -> Result<Option<u64>> {
        self.backend.count(&Self::active_organizations_query()).await
    }

    async fn active_tier_count(&self) -> Result<Option<u64>> {
        self.backend.count(&Self::active_tiers_query()).await
    }

    async fn profile_count(&self) -> Result<Option<u64>> {
        self.backend.count(&Self::profiles_query()).await
    }

    async fn recent_organizations(&self, limit: usize) -> Result<Vec<OrganizationSummary>> {
        let rows = self
            .backend
            .select(&Self::recent_organizations_query(limit))
            .await?;

        let summaries = rows
            .into_iter()
            .filter_map(|row| match OrganizationRowDto::from_json(row) {
                Ok(dto) => Some(OrganizationSummary::from(dto)),
                Err(e) => {
                    tracing::warn!("[Dashboard] Skipping organization row: {}", e);
                    None
                }
            })
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadarat_core::JadaratError;
    use serde_json::{Value as JsonValue, json};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        counted: Mutex<Vec<TableQuery>>,
        selected: Mutex<Vec<TableQuery>>,
        rows: Vec<JsonValue>,
    }

    #[async_trait]
    impl QueryBackend for RecordingBackend {
        async fn count(&self, query: &TableQuery) -> Result<Option<u64>> {
            self.counted.lock().unwrap().push(query.clone());
            if query.table == PROFILES_TABLE {
                return Err(JadaratError::data_fetch(PROFILES_TABLE, "permission denied"));
            }
            Ok(Some(7))
        }

        async fn select(&self, query: &TableQuery) -> Result<Vec<JsonValue>> {
            self.selected.lock().unwrap().push(query.clone());
            Ok(self.rows.clone())
        }
    }

    #[tokio::test]
    async fn test_counts_use_expected_filters() {
        let backend = Arc::new(RecordingBackend::default());
        let source = QueryDashboardSource::new(backend.clone());

        assert_eq!(source.organization_count().await.unwrap(), Some(7));
        assert_eq!(source.active_organization_count().await.unwrap(), Some(7));
        assert_eq!(source.active_tier_count().await.unwrap(), Some(7));
        assert!(source.profile_count().await.unwrap_err().is_data_fetch());

        let counted = backend.counted.lock().unwrap();
        assert_eq!(counted.len(), 4);
        assert!(counted[0].filters.is_empty());
        assert_eq!(counted[1].filters[0].column, "status");
        assert_eq!(counted[1].filters[0].value, json!("active"));
        assert_eq!(counted[2].table, SUBSCRIPTION_TIERS_TABLE);
        assert_eq!(counted[2].filters[0].value, json!(true));
    }

    #[tokio::test]
    async fn test_recent_organizations_skips_malformed_rows() {
        let backend = Arc::new(RecordingBackend {
            rows: vec![
                json!({
                    "id": "0d4f9a7e-2f5c-4d7a-8a47-6f5b2d1c9e01",
                    "name": "Acme Hiring",
                    "status": "active",
                    "created_at": "2026-02-14T09:30:00Z",
                    "subscription_tiers": {"name": "Enterprise"}
                }),
                json!({"name": "missing id"}),
            ],
            ..Default::default()
        });
        let source = QueryDashboardSource::new(backend.clone());

        let recent = source.recent_organizations(5).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name, "Acme Hiring");

        let selected = backend.selected.lock().unwrap();
        assert_eq!(selected[0].limit, Some(5));
        assert_eq!(selected[0].columns, ORGANIZATION_SUMMARY_COLUMNS);
        assert!(selected[0].order.as_ref().is_some_and(|o| !o.ascending));
    }
}
