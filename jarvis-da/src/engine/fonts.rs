//! Font pair renderer
//!
//! Unlike the other renderers, an unmapped mood falls back to the
//! [`DEFAULT_MOOD`] pairs instead of returning nothing.

use jarvis_common::catalog;
use jarvis_common::models::FontPair;
use tracing::debug;

/// Mood whose pairs are served for an unmapped mood key
pub const DEFAULT_MOOD: &str = "modern";

/// Font pairs for a mood wire name, never empty
pub fn font_pairs(mood: &str) -> Vec<FontPair> {
    let mut entries = catalog::font_pairs(mood);
    if entries.is_empty() {
        debug!(mood, default = DEFAULT_MOOD, "unmapped mood, using default pairs");
        entries = catalog::font_pairs(DEFAULT_MOOD);
    }

    entries
        .iter()
        .map(|entry| FontPair {
            heading: entry.heading.to_string(),
            body: entry.body.to_string(),
        })
        .collect()
}
