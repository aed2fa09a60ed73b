//! Optional store diagnostics
//!
//! Deployments may point the service at a document store that the design
//! agent never reads or writes. Reporting on it goes through [`StoreProbe`]
//! so a missing or failing store cannot reach the engine.

use jarvis_common::config::DiagnosticsConfig;
use serde::Serialize;

/// Snapshot reported by `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub backend: String,
    pub database: String,
    /// `"set"` when a connection URL is configured, else `"not set"`
    pub database_url: String,
    /// `"set"` when a database name is configured, else `"not set"`
    pub database_name: String,
    pub connection_status: String,
    /// Up to ten collection names
    pub collections: Vec<String>,
}

/// Health probe for an external store
pub trait StoreProbe: Send + Sync {
    fn status(&self) -> StoreStatus;
}

/// Probe that only reports configuration
///
/// No store driver is linked into this service, so the store is always
/// reported as not available and not connected.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredStoreProbe {
    config: DiagnosticsConfig,
}

impl ConfiguredStoreProbe {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self { config }
    }
}

fn set_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => "set".to_string(),
        _ => "not set".to_string(),
    }
}

impl StoreProbe for ConfiguredStoreProbe {
    fn status(&self) -> StoreStatus {
        StoreStatus {
            backend: "running".to_string(),
            database: "not available".to_string(),
            database_url: set_label(self.config.database_url.as_deref()),
            database_name: set_label(self.config.database_name.as_deref()),
            connection_status: "not connected".to_string(),
            collections: Vec::new(),
        }
    }
}
