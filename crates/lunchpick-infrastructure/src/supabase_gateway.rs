//! Supabase gateway implementation.
//!
//! Talks to the hosted restaurant table over the PostgREST surface:
//! `GET /rest/v1/restaurants` for reads and `PATCH` with row filters for
//! counter updates. The anon key travels as both the `apikey` header and a
//! bearer token, the way supabase clients authenticate.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{Value, json};

use lunchpick_core::error::{LunchError, Result};
use lunchpick_core::restaurant::RestaurantGateway;

use crate::config::SupabaseConfig;

const RESTAURANTS_TABLE: &str = "restaurants";

/// PostgREST client for the restaurant table.
///
/// Constructed from explicit configuration and passed into whichever
/// component needs it; nothing holds a process-wide connection.
#[derive(Debug, Clone)]
pub struct SupabaseGateway {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseGateway {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, RESTAURANTS_TABLE)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".to_string());
        Err(LunchError::network(format!(
            "{action} failed with status {status}: {body}"
        )))
    }

    fn map_send_error(err: reqwest::Error, action: &str) -> LunchError {
        let kind = if err.is_connect() {
            "connect"
        } else if err.is_timeout() {
            "timeout"
        } else {
            "transport"
        };
        LunchError::network(format!("{action} failed ({kind}): {err}"))
    }
}

#[async_trait]
impl RestaurantGateway for SupabaseGateway {
    async fn fetch_all(&self) -> Result<Vec<Value>> {
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|err| Self::map_send_error(err, "fetch restaurants"))?;

        let response = Self::ensure_success(response, "fetch restaurants").await?;
        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|err| LunchError::network(format!("decode restaurants body: {err}")))?;

        tracing::debug!(rows = rows.len(), "fetched restaurant table");
        Ok(rows)
    }

    async fn update_times_picked(&self, id: &str, times_picked: u32) -> Result<()> {
        let response = self
            .authorize(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&json!({ "times_picked": times_picked }))
            .send()
            .await
            .map_err(|err| Self::map_send_error(err, "update pick count"))?;

        Self::ensure_success(response, "update pick count").await?;
        tracing::debug!(%id, times_picked, "updated pick count");
        Ok(())
    }

    async fn reset_all_times_picked(&self, times_picked: u32) -> Result<()> {
        // Match-all contract: the counter is non-negative by invariant, so
        // the `gte.0` filter selects every row.
        let response = self
            .authorize(self.client.patch(self.table_url()))
            .query(&[("times_picked", "gte.0")])
            .header("Prefer", "return=minimal")
            .json(&json!({ "times_picked": times_picked }))
            .send()
            .await
            .map_err(|err| Self::map_send_error(err, "reset pick counts"))?;

        Self::ensure_success(response, "reset pick counts").await?;
        tracing::info!(times_picked, "reset pick counts for all rows");
        Ok(())
    }
}
