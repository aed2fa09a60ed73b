//! Integration tests for jarvis-da API endpoints
//!
//! Tests cover:
//! - Brief analysis, ideas, resources, palettes, fonts
//! - Boundary validation (unknown enum values, missing fields, bad JSON)
//! - Landing, health, build info, and store diagnostics endpoints
//! - CORS headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use jarvis_common::config::{CorsConfig, DiagnosticsConfig};
use jarvis_da::store::ConfiguredStoreProbe;
use jarvis_da::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Create app with default state
fn setup_app() -> axum::Router {
    build_router(AppState::default())
}

/// Test helper: Create GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create JSON POST request
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn post_ok(uri: &str, body: Value) -> Value {
    let response = setup_app().oneshot(post_json(uri, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await
}

fn is_hex_color(value: &Value) -> bool {
    value.as_str().map_or(false, |s| {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    })
}

// =============================================================================
// Brief Analysis
// =============================================================================

#[tokio::test]
async fn test_brief_with_only_project_type() {
    let body = post_ok("/api/brief/analyze", json!({"project_type": "poster"})).await;

    assert_eq!(body["client"], "Unknown");
    assert_eq!(body["project_type"], "poster");

    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 8);
    assert_eq!(tasks[0], "• Research audience: define segments, needs, channels");
    assert_eq!(tasks[1], "• Define tone: 3 adjectives + do/don't list");
    assert_eq!(tasks[2], "• Core message + CTA aligned to goals: clarify business outcome");
    assert_eq!(tasks[3], "• Deliverables: sizes, formats, platforms");
    assert_eq!(tasks[4], "• Constraints: brand rules, deadlines, budget");
    assert_eq!(tasks[7], "• Production plan + timeline");

    let risks = body["risks"].as_array().unwrap();
    assert_eq!(risks.len(), 3);
    assert_eq!(risks[0], "• Scope creep without clear deliverables");

    let summary = body["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 3);
    assert_eq!(summary[2], "• Design system before assets");
}

#[tokio::test]
async fn test_brief_with_fields() {
    let body = post_ok(
        "/api/brief/analyze",
        json!({
            "client": "Northwind Roasters",
            "project_type": "packaging",
            "audience": "Specialty coffee fans",
            "tone": "warm, crafted",
            "goals": null,
            "references": "earlier bags"
        }),
    )
    .await;

    assert_eq!(body["client"], "Northwind Roasters");
    assert_eq!(body["project_type"], "packaging");
    assert_eq!(body["tasks"][0], "• Research audience: Specialty coffee fans");
    assert_eq!(body["tasks"][1], "• Define tone: warm, crafted");
    assert_eq!(
        body["tasks"][2],
        "• Core message + CTA aligned to goals: clarify business outcome"
    );
}

#[tokio::test]
async fn test_brief_missing_project_type_rejected() {
    let response = setup_app()
        .oneshot(post_json("/api/brief/analyze", json!({"client": "Acme"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Ideas
// =============================================================================

#[tokio::test]
async fn test_logo_ideas_with_keywords() {
    let body = post_ok("/api/ideas", json!({"category": "logo", "keywords": "Eagle"})).await;

    assert_eq!(body["category"], "logo");
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 4);
    assert!(ideas.iter().all(|i| i.as_str().unwrap().starts_with("• ")));
    assert!(ideas[0].as_str().unwrap().contains("eagle"));
    assert!(ideas[1].as_str().unwrap().contains("geometric"));
    assert!(ideas[2].as_str().unwrap().contains("optical kerning"));
}

#[tokio::test]
async fn test_ideas_for_every_category() {
    for category in jarvis_common::Category::all_variants() {
        let body = post_ok("/api/ideas", json!({"category": category.as_str()})).await;
        assert_eq!(body["category"], category.as_str());
        assert_eq!(body["ideas"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let response = setup_app()
        .oneshot(post_json("/api/ideas", json!({"category": "billboard"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Resources
// =============================================================================

#[tokio::test]
async fn test_resources_tuned_for_topic() {
    let body = post_ok("/api/resources", json!({"topic": "coffee brand", "kind": "icons"})).await;

    assert_eq!(body["topic"], "coffee brand");
    assert_eq!(body["kind"], "icons");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    for result in results {
        assert!(result.as_str().unwrap().ends_with("— tuned for Coffee Brand"));
    }
    assert_eq!(results[0], "• Phosphor Icons — tuned for Coffee Brand");
}

#[tokio::test]
async fn test_resources_missing_topic_rejected() {
    let response = setup_app()
        .oneshot(post_json("/api/resources", json!({"kind": "ui"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Palettes
// =============================================================================

#[tokio::test]
async fn test_palettes_every_vibe_well_formed() {
    for vibe in jarvis_common::Vibe::all_variants() {
        let body = post_ok("/api/palettes", json!({"vibe": vibe.as_str()})).await;
        assert_eq!(body["vibe"], vibe.as_str());

        let palettes = body["palettes"].as_array().unwrap();
        assert_eq!(palettes.len(), 2);
        for palette in palettes {
            let colors = palette["colors"].as_array().unwrap();
            assert_eq!(colors.len(), 5);
            assert!(colors.iter().all(is_hex_color), "{:?}", colors);
        }
    }
}

#[tokio::test]
async fn test_palettes_with_accent() {
    let body = post_ok("/api/palettes", json!({"vibe": "minimal", "accent": "#ABCDEF"})).await;

    let palettes = body["palettes"].as_array().unwrap();
    assert_eq!(palettes.len(), 3);
    assert_eq!(palettes[0]["name"], "Custom with #ABCDEF");
    assert_eq!(
        palettes[0]["colors"],
        json!(["#0F172A", "#1F2937", "#ABCDEF", "#E2E8F0", "#FFFFFF"])
    );
    assert_eq!(palettes[1]["name"], "Minimal 1");
    assert_eq!(palettes[2]["name"], "Minimal 2");
}

#[tokio::test]
async fn test_high_contrast_names() {
    let body = post_ok("/api/palettes", json!({"vibe": "high-contrast"})).await;
    assert_eq!(body["palettes"][0]["name"], "High-Contrast 1");
}

// =============================================================================
// Fonts
// =============================================================================

#[tokio::test]
async fn test_fonts_every_mood() {
    for mood in jarvis_common::Mood::all_variants() {
        let body = post_ok("/api/fonts", json!({"mood": mood.as_str()})).await;
        assert_eq!(body["mood"], mood.as_str());
        let pairs = body["pairs"].as_array().unwrap();
        assert!(!pairs.is_empty());
        assert!(pairs[0]["heading"].is_string());
        assert!(pairs[0]["body"].is_string());
    }
}

#[tokio::test]
async fn test_fonts_serif_sans() {
    let body = post_ok("/api/fonts", json!({"mood": "serif+sans"})).await;
    assert_eq!(body["pairs"][1], json!({"heading": "Playfair Display", "body": "Work Sans"}));
}

#[tokio::test]
async fn test_unknown_mood_rejected_at_boundary() {
    let response = setup_app()
        .oneshot(post_json("/api/fonts", json!({"mood": "grunge"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Idempotence
// =============================================================================

#[tokio::test]
async fn test_identical_requests_identical_bodies() {
    let request = json!({"category": "social", "keywords": "Spring", "style": "Loud"});
    let first = post_ok("/api/ideas", request.clone()).await;
    let second = post_ok("/api/ideas", request).await;
    assert_eq!(first, second);
}

// =============================================================================
// Boundary errors
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/palettes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"vibe\": "))
        .unwrap();
    let response = setup_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/fonts")
        .body(Body::from(r#"{"mood": "modern"}"#))
        .unwrap();
    let response = setup_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let response = setup_app().oneshot(get_request("/api/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "/api/nope");
}

// =============================================================================
// Landing, health, diagnostics
// =============================================================================

#[tokio::test]
async fn test_root_and_hello() {
    let response = setup_app().oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Jarvis Design Agent API");

    let response = setup_app().oneshot(get_request("/api/hello")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Hello from the backend API!");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = setup_app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "jarvis-da");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_build_info() {
    let response = setup_app().oneshot(get_request("/build_info")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

#[tokio::test]
async fn test_store_diagnostics_unconfigured() {
    let response = setup_app().oneshot(get_request("/test")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "not available");
    assert_eq!(body["database_url"], "not set");
    assert_eq!(body["connection_status"], "not connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_store_diagnostics_configured() {
    let probe = ConfiguredStoreProbe::new(DiagnosticsConfig {
        database_url: Some("mongodb://localhost:27017".to_string()),
        database_name: Some("jarvis".to_string()),
    });
    let app = build_router(AppState::new(Arc::new(probe), CorsConfig::default()));

    let response = app.oneshot(get_request("/test")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["database_url"], "set");
    assert_eq!(body["database_name"], "set");
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_mirrors_any_origin_by_default() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/hello")
        .header(header::ORIGIN, "https://studio.example")
        .body(Body::empty())
        .unwrap();
    let response = setup_app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://studio.example"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let cors = CorsConfig {
        allowed_origins: vec!["https://studio.example".to_string()],
    };
    let app = build_router(AppState::new(
        Arc::new(ConfiguredStoreProbe::default()),
        cors,
    ));

    let request = Request::builder()
        .method("GET")
        .uri("/api/hello")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
