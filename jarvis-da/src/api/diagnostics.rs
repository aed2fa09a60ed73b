//! Store diagnostics endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::{store::StoreStatus, AppState};

/// GET /test
///
/// Reports on the optional external store through the configured probe.
pub async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreStatus> {
    Json(state.store_probe.status())
}

/// Build diagnostics routes
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new().route("/test", get(store_diagnostics))
}
