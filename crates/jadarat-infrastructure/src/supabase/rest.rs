//! PostgREST reads.

use async_trait::async_trait;
use jadarat_core::query::{QueryBackend, TableQuery};
use jadarat_core::{JadaratError, Result};
use reqwest::header::CONTENT_RANGE;
use serde_json::Value as JsonValue;

use super::client::SupabaseClient;
use super::dto::error_message;

/// Translates a query into PostgREST URL parameters.
///
/// `eq` filters become `column=eq.value`; ordering and limit use the
/// `order` and `limit` parameters.
pub fn query_params(query: &TableQuery) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), query.columns.clone())];

    for filter in &query.filters {
        let value = match &filter.value {
            JsonValue::String(text) => text.clone(),
            other => other.to_string(),
        };
        params.push((filter.column.clone(), format!("eq.{}", value)));
    }

    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }

    params
}

/// Reads the total from a `Content-Range` header such as `0-24/25` or `*/25`.
///
/// Returns `None` when the total is unknown (`*/*`) or the header is malformed.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

impl SupabaseClient {
    async fn checked_send(
        &self,
        table: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let response = self
            .authorize(request)
            .await
            .send()
            .await
            .map_err(|e| JadaratError::data_fetch(table, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JadaratError::data_fetch(table, error_message(status, &body)));
        }
        Ok(response)
    }
}

#[async_trait]
impl QueryBackend for SupabaseClient {
    async fn count(&self, query: &TableQuery) -> Result<Option<u64>> {
        let request = self
            .http
            .head(self.rest_url(&query.table))
            .query(&query_params(query))
            .header("Prefer", "count=exact");

        let response = self.checked_send(&query.table, request).await?;
        let count = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range);

        tracing::debug!("[Supabase] count {} -> {:?}", query.table, count);
        Ok(count)
    }

    async fn select(&self, query: &TableQuery) -> Result<Vec<JsonValue>> {
        let request = self
            .http
            .get(self.rest_url(&query.table))
            .query(&query_params(query));

        let response = self.checked_send(&query.table, request).await?;
        let rows: Vec<JsonValue> = response
            .json()
            .await
            .map_err(|e| JadaratError::data_fetch(&query.table, e.to_string()))?;

        tracing::debug!("[Supabase] select {} -> {} rows", query.table, rows.len());
        Ok(rows)
    }
}
