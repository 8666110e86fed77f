use std::time::Duration;

use futures_core::future::BoxFuture;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::deck::Candidate;
use crate::provider::error::ProviderError;
use crate::provider::record::normalize_batch;
use crate::provider::CardProvider;

const BATCH_PATH: &str = "api/cats";

/// HTTP provider for a CATAAS-compatible API.
pub struct CatApiClient {
    client: Client,
    base_url: String,
    tags: Vec<String>,
    request_timeout: Duration,
}

impl CatApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tags: config.tags.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// `{base_url}/api/cats?limit={size}[&tags=a,b]`
    pub fn batch_url(&self, size: usize) -> Result<Url, ProviderError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), BATCH_PATH);
        let mut url = Url::parse(&raw).map_err(|e| ProviderError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &size.to_string());
            if !self.tags.is_empty() {
                query.append_pair("tags", &self.tags.join(","));
            }
        }
        Ok(url)
    }

    async fn fetch(&self, size: usize) -> Result<Vec<Candidate>, ProviderError> {
        let result = timeout(self.request_timeout, self.do_fetch(size)).await;

        match result {
            Ok(batch) => batch,
            Err(_) => Err(ProviderError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_fetch(&self, size: usize) -> Result<Vec<Candidate>, ProviderError> {
        let url = self.batch_url(size)?;
        tracing::debug!(url = %url, size, "Fetching cat batch");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ProviderError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        let records: Vec<Value> = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let candidates = normalize_batch(&records, size);
        tracing::info!(
            received = records.len(),
            kept = candidates.len(),
            "Fetched cat batch"
        );
        Ok(candidates)
    }
}

impl CardProvider for CatApiClient {
    fn fetch_batch(&self, size: usize) -> BoxFuture<'_, Result<Vec<Candidate>, ProviderError>> {
        Box::pin(self.fetch(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(base_url: &str, tags: &[&str]) -> CatApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..ApiConfig::default()
        };
        CatApiClient::new(&config).expect("client")
    }

    #[test]
    fn batch_url_has_limit() {
        let client = client_with("https://cataas.com", &[]);
        let url = client.batch_url(10).expect("url");
        assert_eq!(url.as_str(), "https://cataas.com/api/cats?limit=10");
    }

    #[test]
    fn batch_url_keeps_base_path_and_tags() {
        let client = client_with("http://localhost:9000/proxy/", &["cute", "orange"]);
        let url = client.batch_url(3).expect("url");
        assert_eq!(url.path(), "/proxy/api/cats");
        assert_eq!(url.query(), Some("limit=3&tags=cute%2Corange"));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = client_with("not a url", &[]);
        assert!(matches!(
            client.batch_url(1),
            Err(ProviderError::InvalidUrl { .. })
        ));
    }
}
