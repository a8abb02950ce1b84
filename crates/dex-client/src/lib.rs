//! # dex-client
//!
//! Typed gateway over the Pokédex data store's HTTP surface.
//!
//! Every call issues one request and:
//! - maps a non-success status to [`GatewayError::Request`] carrying the body
//!   text (or `HTTP {status}` when empty)
//! - maps a success whose content type is not JSON to an absent result
//!
//! [`DexClient::get_exact_by_any_name`] additionally maps a 404 to `None`, so
//! callers can tell "does not exist" from "request failed".
//!
//! No call is retried.

mod error;
mod http;

pub use error::GatewayError;

use dex_config::ApiConfig;
use dex_core::{AuditLogEntry, BaseStats, Entry, NewEntry};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{check_response, decode_optional};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the data store.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    base_url: String,
}

impl DexClient {
    /// Create a client for `base_url` with the default timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::builder()
                .user_agent("pokedex-cli/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url,
        }
    }

    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_timeout(
            config.base_url(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of entries (0-indexed).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn list_page(&self, page: u32) -> Result<Vec<Entry>, GatewayError> {
        let entries = self
            .request::<Vec<Entry>>(Method::GET, &format!("/pokemonsByPage/{page}"), None)
            .await?;
        Ok(entries.unwrap_or_default())
    }

    /// The entire collection, used by client-side search.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn list_all(&self) -> Result<Vec<Entry>, GatewayError> {
        let entries = self
            .request::<Vec<Entry>>(Method::GET, "/pokemons", None)
            .await?;
        Ok(entries.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Entry>, GatewayError> {
        self.request(
            Method::GET,
            &format!("/pokemons/{}", urlencoding::encode(id)),
            None,
        )
        .await
    }

    /// Lookup by canonical (english) name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails (including 404) or the
    /// body cannot be parsed.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Entry>, GatewayError> {
        self.request(
            Method::GET,
            &format!("/pokemonByName/{}", urlencoding::encode(name)),
            None,
        )
        .await
    }

    /// Exact lookup by any localized name. A 404 is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] for any failure other than 404.
    pub async fn get_exact_by_any_name(&self, name: &str) -> Result<Option<Entry>, GatewayError> {
        match self
            .request(
                Method::GET,
                &format!("/pokemonExactByName/{}", urlencoding::encode(name)),
                None,
            )
            .await
        {
            Err(error) if error.is_not_found() => {
                tracing::debug!(name, "no entry with that exact name");
                Ok(None)
            }
            other => other,
        }
    }

    /// Server-side name search.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn search(&self, name: &str) -> Result<Vec<Entry>, GatewayError> {
        let entries = self
            .request::<Vec<Entry>>(
                Method::GET,
                &format!("/pokemonsSearch?name={}", urlencoding::encode(name)),
                None,
            )
            .await?;
        Ok(entries.unwrap_or_default())
    }

    /// Most recent audit records for an entry, in retrieval order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn audit_logs(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<AuditLogEntry>, GatewayError> {
        let logs = self
            .request::<Vec<AuditLogEntry>>(
                Method::GET,
                &format!("/auditLogs/{}?limit={limit}", urlencoding::encode(name)),
                None,
            )
            .await?;
        Ok(logs.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, GatewayError> {
        let body = serde_json::to_value(entry).map_err(|e| GatewayError::Parse(e.to_string()))?;
        self.request(Method::POST, "/pokemonCreate", Some(body))
            .await
    }

    /// Replace the whole stats mapping of an entry.
    ///
    /// Sends `{"$set": {"base": {...}}}`. Returns the updated entry when the
    /// store answers with one.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body cannot be parsed.
    pub async fn update_stats(
        &self,
        name: &str,
        stats: &BaseStats,
    ) -> Result<Option<Entry>, GatewayError> {
        let body = serde_json::json!({ "$set": { "base": stats } });
        self.request(
            Method::PUT,
            &format!("/pokemonUpdate/{}", urlencoding::encode(name)),
            Some(body),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn delete(&self, name: &str) -> Result<(), GatewayError> {
        self.request::<serde_json::Value>(
            Method::DELETE,
            &format!("/pokemonDelete/{}", urlencoding::encode(name)),
            None,
        )
        .await?;
        Ok(())
    }

    /// Delete every entry in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn purge(&self) -> Result<(), GatewayError> {
        self.request::<serde_json::Value>(Method::DELETE, "/pokemonsPurge", None)
            .await?;
        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<T>, GatewayError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, path, "data store request");

        let mut builder = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let resp = check_response(builder.send().await?).await?;
        decode_optional(resp).await
    }
}
