//! Static lookup catalogs
//!
//! Category-keyed tables of candidate suggestions. Content lives in the
//! constant tables at the bottom of this file; the lookup functions never
//! change when an entry is edited.
//!
//! Keys are wire names (see [`crate::models`]) so a lookup can be made for
//! a key that no enumeration produces. Such a miss always yields an empty
//! sequence; any fallback is the caller's decision.

/// Five `#RRGGBB` colors, darkest/base first
pub type ColorSet = [&'static str; 5];

/// Catalog domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    PaletteVibe,
    FontMood,
    ResourceKind,
}

/// Heading/body font names as stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPairEntry {
    pub heading: &'static str,
    pub body: &'static str,
}

/// One catalog entry, typed by domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry {
    Colors(&'static ColorSet),
    Fonts(&'static FontPairEntry),
    Resource(&'static str),
}

/// Generic lookup across all domains (empty on miss)
pub fn lookup(domain: Domain, key: &str) -> Vec<CatalogEntry> {
    match domain {
        Domain::PaletteVibe => palette_presets(key)
            .iter()
            .map(CatalogEntry::Colors)
            .collect(),
        Domain::FontMood => font_pairs(key).iter().map(CatalogEntry::Fonts).collect(),
        Domain::ResourceKind => resource_names(key)
            .iter()
            .copied()
            .map(CatalogEntry::Resource)
            .collect(),
    }
}

/// Preset color groups for a vibe (empty on miss)
pub fn palette_presets(vibe: &str) -> &'static [ColorSet] {
    resolve(Domain::PaletteVibe, PALETTES, vibe)
}

/// Font pairs for a mood (empty on miss)
pub fn font_pairs(mood: &str) -> &'static [FontPairEntry] {
    resolve(Domain::FontMood, FONT_PAIRS, mood)
}

/// Resource names for a kind (empty on miss)
pub fn resource_names(kind: &str) -> &'static [&'static str] {
    resolve(Domain::ResourceKind, RESOURCES, kind)
}

fn resolve<T>(
    domain: Domain,
    table: &'static [(&'static str, &'static [T])],
    key: &str,
) -> &'static [T] {
    match table.iter().find(|(k, _)| *k == key) {
        Some((_, entries)) => *entries,
        None => {
            tracing::debug!(?domain, key, "catalog miss");
            &[]
        }
    }
}

// ============================================================================
// Catalog content
// ============================================================================

const PALETTES: &[(&str, &[ColorSet])] = &[
    ("minimal", &[
        ["#0F172A", "#334155", "#94A3B8", "#E2E8F0", "#FFFFFF"],
        ["#111827", "#374151", "#9CA3AF", "#F3F4F6", "#FFFFFF"],
    ]),
    ("bold", &[
        ["#0A0A0A", "#E11D48", "#22D3EE", "#F59E0B", "#F5F3FF"],
        ["#111111", "#7C3AED", "#10B981", "#F43F5E", "#F3F4F6"],
    ]),
    ("luxury", &[
        ["#0B0B0C", "#1F2937", "#D4AF37", "#F1F5F9", "#FFFFFF"],
        ["#111827", "#4B5563", "#B08D57", "#E5E7EB", "#FAFAF9"],
    ]),
    ("playful", &[
        ["#0EA5E9", "#F97316", "#22C55E", "#EAB308", "#FDE68A"],
        ["#A78BFA", "#F472B6", "#34D399", "#60A5FA", "#FDE68A"],
    ]),
    ("tech", &[
        ["#0B1020", "#1F2937", "#22D3EE", "#A78BFA", "#F8FAFC"],
        ["#020617", "#0F172A", "#38BDF8", "#7DD3FC", "#E2E8F0"],
    ]),
    ("retro", &[
        ["#2A1A1F", "#D97706", "#059669", "#B91C1C", "#FDE68A"],
        ["#1F2937", "#BE185D", "#065F46", "#CA8A04", "#FEF3C7"],
    ]),
    ("nature", &[
        ["#0B3D2E", "#065F46", "#34D399", "#A7F3D0", "#F0FDF4"],
        ["#1B4332", "#2D6A4F", "#95D5B2", "#CEEAD6", "#FAFAF9"],
    ]),
    ("pastel", &[
        ["#FEE2E2", "#E9D5FF", "#DBEAFE", "#D1FAE5", "#FEF3C7"],
        ["#FDE2F3", "#CDE8E5", "#EEF5FF", "#D9EDBF", "#FFF6E0"],
    ]),
    ("high-contrast", &[
        ["#0A0A0A", "#FFFFFF", "#FF1F1F", "#1F51FF", "#FFD400"],
        ["#000000", "#FFFFFF", "#00E5FF", "#FF3D00", "#D1D5DB"],
    ]),
];

const fn pair(heading: &'static str, body: &'static str) -> FontPairEntry {
    FontPairEntry { heading, body }
}

const FONT_PAIRS: &[(&str, &[FontPairEntry])] = &[
    ("modern", &[pair("Poppins", "Inter"), pair("Montserrat", "Roboto")]),
    ("classic", &[pair("Merriweather", "Source Sans Pro"), pair("Playfair Display", "Lato")]),
    ("friendly", &[pair("Nunito", "Rubik"), pair("Quicksand", "Inter")]),
    ("tech", &[pair("IBM Plex Sans", "Inter"), pair("Space Grotesk", "Manrope")]),
    ("luxury", &[pair("Cormorant Garamond", "Source Serif Pro"), pair("Canela", "Inter")]),
    ("editorial", &[pair("Fraunces", "Inter"), pair("Georgia", "Helvetica Neue")]),
    ("playful", &[pair("Baloo 2", "Poppins"), pair("Chewy", "Nunito")]),
    ("serif+sans", &[pair("Merriweather", "Inter"), pair("Playfair Display", "Work Sans")]),
    ("display+body", &[pair("Bebas Neue", "Inter"), pair("Oswald", "Open Sans")]),
];

const RESOURCES: &[(&str, &[&str])] = &[
    ("icons", &["Phosphor Icons", "Lucide", "Feather", "Heroicons", "Material Symbols"]),
    ("mockups", &["Device mockups (Figma)", "Smart object PSDs", "Artboard Studio", "Rotato"]),
    ("inspiration", &["Behance moodboards", "Dribbble shots", "Awwwards galleries", "Mobbin"]),
    ("palettes", &["Coolors schemes", "Adobe Color", "Happy Hues", "Color Hunt"]),
    ("references", &["Pinterest board", "Brand book PDFs", "Campaign tear-sheets"]),
    ("ui", &["Mobbin patterns", "UI Coach", "Figma Community kits", "Refactoring UI"]),
    ("templates", &["Canva set", "Figma templates", "Creative Market", "Envato Elements"]),
];
