//! Ghost-style Content API client.
//!
//! The widget performs one browse call per instance lifetime (guarded by
//! [`FetchGate`](crate::fetch::FetchGate)); this module owns the wire side:
//! endpoint construction, browse-parameter filtering and payload unwrapping.

use crate::error::{FetchError, Result};
use crate::types::Record;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

/// Supported Content API versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V2,
    V3,
    V4,
    V5,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V2 => write!(f, "v2"),
            ApiVersion::V3 => write!(f, "v3"),
            ApiVersion::V4 => write!(f, "v4"),
            ApiVersion::V5 => write!(f, "v5"),
        }
    }
}

/// Connection parameters for the content API.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API host, without a trailing slash.
    pub host: String,
    /// Content API key.
    pub key: String,
    pub version: ApiVersion,
}

/// Browse-call parameters.
///
/// Only non-empty parameters are forwarded on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseParams {
    pub limit: String,
    /// Record fields to request; joined with commas on the wire.
    pub fields: Vec<String>,
    pub filter: String,
    pub include: String,
    pub order: String,
    pub formats: String,
    pub page: String,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            limit: "all".to_string(),
            fields: vec!["title".to_string(), "slug".to_string()],
            filter: String::new(),
            include: String::new(),
            order: String::new(),
            formats: String::new(),
            page: String::new(),
        }
    }
}

impl BrowseParams {
    /// Query-string pairs for every non-empty parameter.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.limit.is_empty() {
            pairs.push(("limit", self.limit.clone()));
        }
        if !self.fields.is_empty() {
            pairs.push(("fields", self.fields.join(",")));
        }
        if !self.filter.is_empty() {
            pairs.push(("filter", self.filter.clone()));
        }
        if !self.include.is_empty() {
            pairs.push(("include", self.include.clone()));
        }
        if !self.order.is_empty() {
            pairs.push(("order", self.order.clone()));
        }
        if !self.formats.is_empty() {
            pairs.push(("formats", self.formats.clone()));
        }
        if !self.page.is_empty() {
            pairs.push(("page", self.page.clone()));
        }
        pairs
    }
}

/// Source of the searchable corpus.
///
/// The widget consumes the remote API only through this seam, so tests can
/// substitute an in-memory source.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieves the full collection of records.
    async fn browse(&self) -> Result<Vec<Record>>;
}

/// Reqwest-backed content API client.
pub struct ContentApi {
    client: reqwest::Client,
    config: ApiConfig,
    resource: String,
    params: BrowseParams,
}

impl ContentApi {
    pub fn new(config: ApiConfig, resource: impl Into<String>, params: BrowseParams) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            resource: resource.into(),
            params,
        }
    }

    fn endpoint(&self) -> Result<Url> {
        let base = format!(
            "{}/ghost/api/{}/content/{}/",
            self.config.host.trim_end_matches('/'),
            self.config.version,
            self.resource
        );
        let mut url = Url::parse(&base)?;
        url.query_pairs_mut().append_pair("key", &self.config.key);
        for (name, value) in self.params.query_pairs() {
            url.query_pairs_mut().append_pair(name, &value);
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for ContentApi {
    async fn browse(&self) -> Result<Vec<Record>> {
        let url = self.endpoint()?;
        log::debug!("browsing `{}` collection", self.resource);

        let payload: Value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let records = payload
            .get(&self.resource)
            .and_then(Value::as_array)
            .ok_or_else(|| FetchError::MissingCollection(self.resource.clone()))?;

        records
            .iter()
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|err| FetchError::Payload(err.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
