use serde::{Deserialize, Serialize};

/// Path of the configuration document, relative to the application origin.
/// The hosting environment serves it next to the static assets so each
/// deployment can ship different values without a rebuild.
pub const CONFIG_PATH: &str = "/assets/config.json";

/// API base URL used whenever no usable value has been loaded.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// The per-deployment configuration document.
///
/// Both fields are optional on the wire: a deployment may serve a partial
/// document and the accessors substitute defaults per field. Unknown keys in
/// the document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub api_url: Option<String>,
    pub production: Option<bool>
}

impl RuntimeConfig {
    /// The record stored when the document cannot be fetched or decoded:
    /// local development API, non-production mode.
    ///
    /// Deliberately not a `Default` impl. The derived all-`None` record is a
    /// different value (an empty document) and the two must not be conflated.
    pub fn fallback() -> Self {
        Self {
            api_url: Some(DEFAULT_API_URL.to_string()),
            production: Some(false)
        }
    }
}
