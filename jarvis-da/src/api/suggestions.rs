//! Suggestion endpoints
//!
//! Request bodies are validated by deserializing into the typed request
//! records; anything the schema rejects becomes an [`ApiError`] before the
//! engine is called.

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use jarvis_common::models::{
    Brief, BriefAnalysis, FontsRequest, FontsResponse, IdeaRequest, IdeasResponse,
    PaletteRequest, PalettesResponse, ResourceRequest, ResourcesResponse,
};

use crate::{engine, ApiResult, AppState};

/// POST /api/brief/analyze
pub async fn analyze_brief(
    payload: Result<Json<Brief>, JsonRejection>,
) -> ApiResult<Json<BriefAnalysis>> {
    let Json(brief) = payload?;
    Ok(Json(engine::analyze_brief(&brief)))
}

/// POST /api/ideas
pub async fn generate_ideas(
    payload: Result<Json<IdeaRequest>, JsonRejection>,
) -> ApiResult<Json<IdeasResponse>> {
    let Json(request) = payload?;
    Ok(Json(engine::generate_ideas(&request)))
}

/// POST /api/resources
pub async fn suggest_resources(
    payload: Result<Json<ResourceRequest>, JsonRejection>,
) -> ApiResult<Json<ResourcesResponse>> {
    let Json(request) = payload?;
    Ok(Json(engine::suggest_resources(&request)))
}

/// POST /api/palettes
pub async fn suggest_palettes(
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> ApiResult<Json<PalettesResponse>> {
    let Json(request) = payload?;
    Ok(Json(engine::suggest_palettes(&request)))
}

/// POST /api/fonts
pub async fn suggest_fonts(
    payload: Result<Json<FontsRequest>, JsonRejection>,
) -> ApiResult<Json<FontsResponse>> {
    let Json(request) = payload?;
    Ok(Json(engine::suggest_fonts(&request)))
}

/// Build suggestion routes
pub fn suggestion_routes() -> Router<AppState> {
    Router::new()
        .route("/api/brief/analyze", post(analyze_brief))
        .route("/api/ideas", post(generate_ideas))
        .route("/api/resources", post(suggest_resources))
        .route("/api/palettes", post(suggest_palettes))
        .route("/api/fonts", post(suggest_fonts))
}
