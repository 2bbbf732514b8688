use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{FetchError, FetchResult};

/// Transport used to retrieve configuration documents.
///
/// Implementations resolve a path against whatever origin they represent and
/// yield the parsed JSON body. Decoding into a typed record happens in the
/// service, so transports stay schema-agnostic.
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    async fn fetch_json(&self, path: &str) -> FetchResult<Value>;
}

/// [`ConfigFetcher`] backed by reqwest, resolving paths against a fixed
/// application origin.
pub struct HttpConfigFetcher {
    client: Client,
    base_url: String
}

impl HttpConfigFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a caller-configured client, for applications that impose their
    /// own timeouts or proxy settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string()
        }
    }
}

#[async_trait]
impl ConfigFetcher for HttpConfigFetcher {
    async fn fetch_json(&self, path: &str) -> FetchResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Requesting configuration document");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status()
            });
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

/// Scripted [`ConfigFetcher`] for tests and offline wiring.
///
/// Serves a fixed JSON document (or a fixed failure) and counts how often it
/// is asked, so callers can assert that reads never refetch.
pub struct StaticConfigFetcher {
    body: RwLock<Option<Value>>,
    calls: AtomicUsize
}

impl StaticConfigFetcher {
    /// Answers every fetch with `body`.
    pub fn serving(body: Value) -> Self {
        Self {
            body: RwLock::new(Some(body)),
            calls: AtomicUsize::new(0)
        }
    }

    /// Fails every fetch, as if the origin were unreachable.
    pub fn unavailable() -> Self {
        Self {
            body: RwLock::new(None),
            calls: AtomicUsize::new(0)
        }
    }

    /// Replaces the served document for subsequent fetches.
    pub fn set_body(&self, body: Value) {
        *self.body.write() = Some(body);
    }

    /// Makes subsequent fetches fail.
    pub fn set_unavailable(&self) {
        *self.body.write() = None;
    }

    /// Number of fetches observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for StaticConfigFetcher {
    async fn fetch_json(&self, _path: &str) -> FetchResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.body.read() {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Unavailable(
                "no document configured".to_string()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_fetcher_serves_document() {
        let fetcher = StaticConfigFetcher::serving(json!({ "apiUrl": "https://api.example.com" }));

        let body = fetcher.fetch_json("/assets/config.json").await.unwrap();
        assert_eq!(body["apiUrl"], "https://api.example.com");
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_static_fetcher_unavailable() {
        let fetcher = StaticConfigFetcher::unavailable();

        let result = fetcher.fetch_json("/assets/config.json").await;
        assert!(matches!(result, Err(FetchError::Unavailable(_))));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_static_fetcher_body_can_be_swapped() {
        let fetcher = StaticConfigFetcher::serving(json!({ "production": false }));

        fetcher.set_body(json!({ "production": true }));
        let body = fetcher.fetch_json("/assets/config.json").await.unwrap();
        assert_eq!(body["production"], true);

        fetcher.set_unavailable();
        assert!(fetcher.fetch_json("/assets/config.json").await.is_err());
        assert_eq!(fetcher.calls(), 2);
    }
}
