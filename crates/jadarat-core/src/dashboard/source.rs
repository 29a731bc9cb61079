//! Typed dashboard reads.

use async_trait::async_trait;

use super::model::OrganizationSummary;
use crate::error::Result;

/// The five reads the dashboard is built from.
///
/// Counts are `None` when the backend returned no count; callers default them
/// to zero. Implementations must return `recent_organizations` already
/// decoded into validated records.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn organization_count(&self) -> Result<Option<u64>>;

    async fn active_organization_count(&self) -> Result<Option<u64>>;

    async fn active_tier_count(&self) -> Result<Option<u64>>;

    async fn profile_count(&self) -> Result<Option<u64>>;

    async fn recent_organizations(&self, limit: usize) -> Result<Vec<OrganizationSummary>>;
}
