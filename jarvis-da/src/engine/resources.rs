//! Resource renderer

use jarvis_common::catalog::resource_names;
use jarvis_common::text::title_case;

/// Resource names for a kind wire name, each tuned to the title-cased topic
///
/// An unmapped kind yields an empty list.
pub fn resource_suggestions(topic: &str, kind: &str) -> Vec<String> {
    let topic = title_case(topic);
    resource_names(kind)
        .iter()
        .map(|name| format!("{} — tuned for {}", name, topic))
        .collect()
}
