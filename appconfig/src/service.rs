use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::{CONFIG_PATH, DEFAULT_API_URL, RuntimeConfig};
use crate::error::FetchError;
use crate::fetcher::ConfigFetcher;

/// Runtime configuration accessor.
///
/// Holds the most recently loaded [`RuntimeConfig`] and serves it through
/// synchronous accessors. Loading is total: when the document cannot be
/// fetched or decoded the failure is logged and the fallback record stored
/// in its place, so readers always see usable values. The accessors also
/// work before any load has happened, answering with the same defaults.
pub struct ConfigService {
    fetcher: Arc<dyn ConfigFetcher>,
    config: RwLock<Option<RuntimeConfig>>
}

impl ConfigService {
    pub fn new(fetcher: Arc<dyn ConfigFetcher>) -> Self {
        Self {
            fetcher,
            config: RwLock::new(None)
        }
    }

    /// Fetches the configuration document and replaces the cached record.
    ///
    /// Every call issues a fresh request. Failures of any kind (unreachable
    /// origin, non-success status, undecodable document) leave the service
    /// on the fallback record; they are logged, never returned. Concurrent
    /// calls are not coordinated: each stores its own outcome wholesale and
    /// the last one to settle wins.
    pub async fn load(&self) {
        let result = self.fetcher.fetch_json(CONFIG_PATH).await.and_then(|body| {
            serde_json::from_value::<RuntimeConfig>(body).map_err(FetchError::from)
        });

        let record = match result {
            Ok(config) => {
                debug!(
                    api_url = ?config.api_url,
                    production = ?config.production,
                    "Loaded runtime configuration"
                );
                config
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = CONFIG_PATH,
                    "Failed to load runtime configuration, using defaults"
                );
                RuntimeConfig::fallback()
            }
        };

        *self.config.write() = Some(record);
    }

    /// API base URL from the loaded record, or the local development default
    /// when no usable value is present (nothing loaded yet, field missing,
    /// or empty string).
    pub fn api_url(&self) -> String {
        let config = self.config.read();
        config
            .as_ref()
            .and_then(|c| c.api_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    /// Whether the deployment declared itself production.
    ///
    /// `false` covers three indistinguishable cases: nothing loaded yet, a
    /// document without the flag, and a document that set it to `false`.
    pub fn is_production(&self) -> bool {
        let config = self.config.read();
        config.as_ref().and_then(|c| c.production).unwrap_or(false)
    }
}
