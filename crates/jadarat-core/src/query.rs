//! Generic read contract against the managed backend.
//!
//! Only what the console needs is modeled: equality filters, a projection
//! string that may embed joined foreign fields, ordering and a row limit.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct EqFilter {
    pub column: String,
    pub value: JsonValue,
}

/// Sort order on a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

/// A read-only query against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub table: String,
    pub columns: String,
    pub filters: Vec<EqFilter>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl TableQuery {
    /// Starts a query selecting every column of `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Sets the projection, e.g. `"id,name,subscription_tiers(name)"`.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.filters.push(EqFilter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            ascending: false,
        });
        self
    }

    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            ascending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The data half of the managed backend.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Counts matching rows without fetching them. `None` means the backend
    /// answered without a count.
    async fn count(&self, query: &TableQuery) -> Result<Option<u64>>;

    /// Fetches matching rows as untyped JSON objects.
    async fn select(&self, query: &TableQuery) -> Result<Vec<JsonValue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let query = TableQuery::table("organizations")
            .select("id,name")
            .eq("status", "active")
            .order_desc("created_at")
            .limit(5);

        assert_eq!(query.table, "organizations");
        assert_eq!(query.columns, "id,name");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].value, JsonValue::from("active"));
        assert_eq!(
            query.order,
            Some(OrderBy {
                column: "created_at".to_string(),
                ascending: false
            })
        );
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_defaults_to_all_columns() {
        let query = TableQuery::table("profiles");
        assert_eq!(query.columns, "*");
        assert!(query.filters.is_empty());
        assert!(query.order.is_none());
        assert!(query.limit.is_none());
    }
}
