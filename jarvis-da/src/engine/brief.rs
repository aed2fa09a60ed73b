//! Brief analyzer
//!
//! Pure templating over which brief fields are filled in. Risks and summary
//! are a fixed checklist and do not look at the brief at all.

use jarvis_common::models::Brief;

use super::template::{fixed, render, slotted, LineTemplate};

/// Brief field a task line draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefField {
    Audience,
    Tone,
    Goals,
    Deliverables,
    Constraints,
}

/// Client label used when the brief names none
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Unbulleted checklist derived from a brief
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefChecklist {
    pub tasks: Vec<String>,
    pub risks: Vec<String>,
    pub summary: Vec<String>,
}

const TASKS: &[LineTemplate<BriefField>] = &[
    slotted("Research audience: {}", BriefField::Audience, "define segments, needs, channels"),
    slotted("Define tone: {}", BriefField::Tone, "3 adjectives + do/don't list"),
    slotted(
        "Core message + CTA aligned to goals: {}",
        BriefField::Goals,
        "clarify business outcome",
    ),
    slotted("Deliverables: {}", BriefField::Deliverables, "sizes, formats, platforms"),
    slotted("Constraints: {}", BriefField::Constraints, "brand rules, deadlines, budget"),
    fixed("Moodboard: 12 refs across type, color, layout, motion"),
    fixed("Creative directions: 3 distinct routes with rationale"),
    fixed("Production plan + timeline"),
];

const RISKS: &[&str] = &[
    "Scope creep without clear deliverables",
    "Low contrast harming accessibility",
    "Over-stylized type reducing legibility",
];

const SUMMARY: &[&str] = &[
    "Clarify success metrics",
    "Align tone and audience",
    "Design system before assets",
];

/// Build the task/risk/summary checklist
pub fn analyze(brief: &Brief) -> BriefChecklist {
    let tasks = render(TASKS, |field| match field {
        BriefField::Audience => brief.audience.as_deref(),
        BriefField::Tone => brief.tone.as_deref(),
        BriefField::Goals => brief.goals.as_deref(),
        BriefField::Deliverables => brief.deliverables.as_deref(),
        BriefField::Constraints => brief.constraints.as_deref(),
    });

    BriefChecklist {
        tasks,
        risks: RISKS.iter().map(|r| r.to_string()).collect(),
        summary: SUMMARY.iter().map(|s| s.to_string()).collect(),
    }
}

/// Client name, or [`UNKNOWN_CLIENT`] when absent or empty
pub fn client_label(brief: &Brief) -> String {
    jarvis_common::text::present(brief.client.as_deref())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}
