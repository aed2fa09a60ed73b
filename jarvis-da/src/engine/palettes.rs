//! Palette renderer

use jarvis_common::catalog::{palette_presets, ColorSet};
use jarvis_common::models::ColorGroup;
use jarvis_common::text::{present, title_case};

/// Neutral tones around a caller-supplied accent; the accent goes in
/// [`ACCENT_SLOT`]
pub const CUSTOM_NEUTRALS: [&str; 4] = ["#0F172A", "#1F2937", "#E2E8F0", "#FFFFFF"];

/// Zero-based position of the accent within a custom group
pub const ACCENT_SLOT: usize = 2;

/// Color groups for a vibe wire name
///
/// Presets are named `"<Vibe> <n>"` (title-cased vibe, 1-based ordinal) in
/// catalog order. A non-empty accent prepends a `"Custom with <accent>"`
/// group; the accent is not validated.
pub fn suggest_palettes(vibe: &str, accent: Option<&str>) -> Vec<ColorGroup> {
    let title = title_case(vibe);

    let mut groups: Vec<ColorGroup> = palette_presets(vibe)
        .iter()
        .enumerate()
        .map(|(i, colors)| ColorGroup {
            name: format!("{} {}", title, i + 1),
            colors: owned(colors),
        })
        .collect();

    if let Some(accent) = present(accent) {
        groups.insert(0, custom_group(accent));
    }

    groups
}

/// Synthesized group built around `accent`
pub fn custom_group(accent: &str) -> ColorGroup {
    let [n0, n1, n2, n3] = CUSTOM_NEUTRALS;
    ColorGroup {
        name: format!("Custom with {}", accent),
        colors: [
            n0.to_string(),
            n1.to_string(),
            accent.to_string(),
            n2.to_string(),
            n3.to_string(),
        ],
    }
}

fn owned(colors: &ColorSet) -> [String; 5] {
    colors.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_named_by_vibe() {
        let groups = suggest_palettes("high-contrast", None);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "High-Contrast 1");
        assert_eq!(groups[1].name, "High-Contrast 2");
        assert_eq!(groups[0].colors[2], "#FF1F1F");
    }

    #[test]
    fn test_accent_group_first() {
        let groups = suggest_palettes("minimal", Some("#ABCDEF"));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name, "Custom with #ABCDEF");
        assert_eq!(
            groups[0].colors,
            ["#0F172A", "#1F2937", "#ABCDEF", "#E2E8F0", "#FFFFFF"].map(String::from)
        );
        assert_eq!(groups[0].colors[ACCENT_SLOT], "#ABCDEF");
        assert_eq!(groups[1].name, "Minimal 1");
    }

    #[test]
    fn test_accent_passed_verbatim() {
        let groups = suggest_palettes("bold", Some("hotpink"));
        assert_eq!(groups[0].colors[ACCENT_SLOT], "hotpink");
    }

    #[test]
    fn test_empty_accent_ignored() {
        assert_eq!(suggest_palettes("tech", Some("")), suggest_palettes("tech", None));
    }

    #[test]
    fn test_unknown_vibe_only_custom() {
        assert!(suggest_palettes("vaporwave", None).is_empty());
        let groups = suggest_palettes("vaporwave", Some("#000000"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Custom with #000000");
    }
}
