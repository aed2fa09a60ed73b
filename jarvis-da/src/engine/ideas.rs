//! Category idea renderer
//!
//! Four fixed lines per category. Keywords and style hints are lower-cased
//! before substitution.

use jarvis_common::text::present;

use super::template::{fixed, render, slotted, LineTemplate};

/// Hint a line draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaHint {
    Keywords,
    Style,
}

/// Line returned for a category with no template set
pub const GENERIC_IDEA: &str = "Simple, clear, on-brand.";

/// Idea lines for a category wire name
///
/// Unknown categories yield the single [`GENERIC_IDEA`] line.
pub fn category_ideas(category: &str, keywords: Option<&str>, style: Option<&str>) -> Vec<String> {
    let Some(lines) = template_set(category) else {
        return vec![GENERIC_IDEA.to_string()];
    };

    let keywords = present(keywords).map(str::to_lowercase);
    let style = present(style).map(str::to_lowercase);

    render(lines, |hint| match hint {
        IdeaHint::Keywords => keywords.as_deref(),
        IdeaHint::Style => style.as_deref(),
    })
}

fn template_set(category: &str) -> Option<&'static [LineTemplate<IdeaHint>]> {
    IDEAS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, lines)| *lines)
}

use IdeaHint::{Keywords, Style};

const IDEAS: &[(&str, &[LineTemplate<IdeaHint>])] = &[
    ("logo", &[
        slotted("Negative-space symbol referencing {}", Keywords, "core brand metaphor"),
        slotted("Monogram mark combining initials with {} rhythm", Style, "geometric"),
        slotted("Wordmark with custom ligatures and {}", Style, "optical kerning"),
        fixed("Badge logo adaptable to square avatars and dark mode"),
    ]),
    ("poster", &[
        slotted("Type-led layout with oversized {} headline", Style, "grotesk"),
        slotted("Grid-based collage mixing {} textures and duotones", Keywords, "brand"),
        fixed("Depth via layered shadows, gradients, and subtle noise"),
        fixed("QR focal point with motion blur trail for energy"),
    ]),
    ("banner", &[
        slotted("Asymmetrical split with product on {} and CTA on left", Style, "right"),
        fixed("Diagonal energy line guiding eyes to CTA"),
        slotted("Contrast pair: muted background + {} accent", Keywords, "vibrant"),
        fixed("System of 3 sizes sharing one modular grid"),
    ]),
    ("branding", &[
        slotted("Core logo + icon set + color system using {} rule", Style, "60/30/10"),
        slotted("Tone of voice lines distilled from {}", Keywords, "brand story"),
        fixed("Packaging mockups and social system for rollout"),
        fixed("Motion spec for reveal and micro-interactions"),
    ]),
    ("thumbnail", &[
        slotted("High-contrast face crop + {} keyword banner", Keywords, "bold"),
        fixed("Triadic color stripe for brand recognition"),
        slotted("Depth with cutout subject and {} drop shadows", Style, "soft"),
        fixed("Iterate 3 variants and A/B in analytics"),
    ]),
    ("reel", &[
        slotted("Hook in first 1s with animated {}", Keywords, "headline"),
        fixed("Beat-synced transitions; keep text < 8 words/frame"),
        slotted("End card with {} CTA and logo loop", Style, "clean"),
        fixed("Use masked gradients for futuristic aura"),
    ]),
    ("ad", &[
        slotted("Problem → Solution → Proof → CTA using {} layout", Style, "minimal"),
        slotted("Showcase {} with animated before/after", Keywords, "benefit"),
        fixed("One focal point, ruthless whitespace"),
        fixed("Test 3 headlines, 2 visuals, 2 CTAs"),
    ]),
    ("packaging", &[
        slotted("Front hero zone + {} info stack", Style, "structured"),
        slotted("Color blocking inspired by {}", Keywords, "ingredients/origin"),
        fixed("Shelf impact via bold type and tactile pattern"),
        fixed("Die-line friendly vector motifs"),
    ]),
    ("social", &[
        slotted("Carousel narrative: Hook → Value → Proof → CTA in {} slides", Style, "5"),
        slotted("Template system using {} modules", Keywords, "brand"),
        fixed("Stories: vertical rhythm with sticker moments"),
        fixed("ALT text crafted for accessibility"),
    ]),
];
