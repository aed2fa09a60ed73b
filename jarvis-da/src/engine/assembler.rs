//! Result assembler
//!
//! Packages renderer output with the echoed request fields. Textual lists
//! are bulleted here; palettes and font pairs stay structured.

use jarvis_common::models::{
    Brief, BriefAnalysis, FontsRequest, FontsResponse, IdeaRequest, IdeasResponse,
    PaletteRequest, PalettesResponse, ResourceRequest, ResourcesResponse,
};
use jarvis_common::text::bullets;
use tracing::debug;

use super::{brief, fonts, ideas, palettes, resources};

/// Task/risk checklist for a creative brief
pub fn analyze_brief(request: &Brief) -> BriefAnalysis {
    let checklist = brief::analyze(request);
    debug!(
        project_type = %request.project_type,
        tasks = checklist.tasks.len(),
        "Analyzed brief"
    );

    BriefAnalysis {
        client: brief::client_label(request),
        project_type: request.project_type,
        summary: bullets(&checklist.summary),
        tasks: bullets(&checklist.tasks),
        risks: bullets(&checklist.risks),
    }
}

/// Idea list for a category
pub fn generate_ideas(request: &IdeaRequest) -> IdeasResponse {
    let lines = ideas::category_ideas(
        request.category.as_str(),
        request.keywords.as_deref(),
        request.style.as_deref(),
    );
    debug!(category = %request.category, ideas = lines.len(), "Generated ideas");

    IdeasResponse {
        category: request.category,
        ideas: bullets(&lines),
    }
}

/// Curated resources for a topic
pub fn suggest_resources(request: &ResourceRequest) -> ResourcesResponse {
    let lines = resources::resource_suggestions(&request.topic, request.kind.as_str());
    debug!(kind = %request.kind, results = lines.len(), "Suggested resources");

    ResourcesResponse {
        topic: request.topic.clone(),
        kind: request.kind,
        results: bullets(&lines),
    }
}

/// Color groups for a vibe
pub fn suggest_palettes(request: &PaletteRequest) -> PalettesResponse {
    let groups = palettes::suggest_palettes(request.vibe.as_str(), request.accent.as_deref());
    debug!(vibe = %request.vibe, palettes = groups.len(), "Suggested palettes");

    PalettesResponse {
        vibe: request.vibe,
        palettes: groups,
    }
}

/// Font pairs for a mood
pub fn suggest_fonts(request: &FontsRequest) -> FontsResponse {
    let pairs = fonts::font_pairs(request.mood.as_str());
    debug!(mood = %request.mood, pairs = pairs.len(), "Suggested fonts");

    FontsResponse {
        mood: request.mood,
        pairs,
    }
}
