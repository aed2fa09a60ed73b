//! jarvis-da library - Jarvis Design Agent
//!
//! Rule-derived design suggestions (ideas, palettes, font pairs, resources,
//! brief checklists) served over a small JSON API.

use axum::http::HeaderValue;
use axum::Router;
use chrono::{DateTime, Utc};
use jarvis_common::config::CorsConfig;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod api;
pub mod cli;
pub mod engine;
pub mod error;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use store::{ConfiguredStoreProbe, StoreProbe};

/// Application state shared across HTTP handlers
///
/// Nothing here is reachable from the engine.
#[derive(Clone)]
pub struct AppState {
    /// Diagnostics probe for the optional external store
    pub store_probe: Arc<dyn StoreProbe>,
    /// Cross-origin policy applied by [`build_router`]
    pub cors: CorsConfig,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store_probe: Arc<dyn StoreProbe>, cors: CorsConfig) -> Self {
        Self {
            store_probe,
            cors,
            startup_time: Utc::now(),
        }
    }
}

impl Default for AppState {
    /// Permissive CORS and an unconfigured store probe
    fn default() -> Self {
        Self::new(Arc::new(ConfiguredStoreProbe::default()), CorsConfig::default())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors);

    Router::new()
        .merge(api::root_routes())
        .merge(api::suggestion_routes())
        .merge(api::health_routes())
        .merge(api::diagnostics_routes())
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Cross-origin layer for the configured origins
///
/// `"*"` mirrors the request origin and allows credentials; otherwise only
/// the listed origins are allowed, with any method and header.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_permissive() {
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
