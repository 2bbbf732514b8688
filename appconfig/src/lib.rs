//! # Runtime Application Configuration
//!
//! Loads the per-deployment configuration document an application origin
//! serves alongside its static assets, and exposes the resolved values
//! through synchronous accessors.
//!
//! This crate provides:
//! - The [`RuntimeConfig`] record served at `/assets/config.json`
//! - An injectable [`ConfigFetcher`] transport with an HTTP implementation
//! - The [`ConfigService`] accessor: load on demand, fall back to local
//!   development defaults on any failure, never propagate errors to callers

pub mod config;
pub mod error;
pub mod fetcher;
pub mod service;

pub use config::{CONFIG_PATH, DEFAULT_API_URL, RuntimeConfig};
pub use error::{FetchError, FetchResult};
pub use fetcher::{ConfigFetcher, HttpConfigFetcher, StaticConfigFetcher};
pub use service::ConfigService;
