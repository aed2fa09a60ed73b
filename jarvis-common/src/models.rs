//! Request and response value types for the design agent
//!
//! Every record here is request-scoped: built at request entry, consumed by
//! one renderer, dropped after the response is written.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Declares a closed enumeration whose serde form is its wire name.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire name as accepted in request bodies
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Parse from wire name (case-sensitive)
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// All variants in declaration order
            pub fn all_variants() -> &'static [$name] {
                &[$($name::$variant,)+]
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s).ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "unknown {} '{}'",
                        stringify!($name).to_lowercase(),
                        s
                    ))
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Project type of a brief, also the category of an idea request
    Category {
        Logo => "logo",
        Poster => "poster",
        Banner => "banner",
        Branding => "branding",
        Thumbnail => "thumbnail",
        Reel => "reel",
        Ad => "ad",
        Packaging => "packaging",
        Social => "social",
    }
}

wire_enum! {
    /// Palette vibe
    Vibe {
        Minimal => "minimal",
        Bold => "bold",
        Luxury => "luxury",
        Playful => "playful",
        Tech => "tech",
        Retro => "retro",
        Nature => "nature",
        Pastel => "pastel",
        HighContrast => "high-contrast",
    }
}

wire_enum! {
    /// Typography mood for font pairing
    Mood {
        Modern => "modern",
        Classic => "classic",
        Friendly => "friendly",
        Tech => "tech",
        Luxury => "luxury",
        Editorial => "editorial",
        Playful => "playful",
        SerifSans => "serif+sans",
        DisplayBody => "display+body",
    }
}

wire_enum! {
    /// Kind of curated resource list
    ResourceKind {
        Icons => "icons",
        Mockups => "mockups",
        Inspiration => "inspiration",
        Palettes => "palettes",
        References => "references",
        Ui => "ui",
        Templates => "templates",
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Creative brief submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// Client or brand name
    #[serde(default)]
    pub client: Option<String>,
    pub project_type: Category,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub deliverables: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    /// Accepted for client compatibility; not used by the analyzer
    #[serde(default)]
    pub references: Option<String>,
}

impl Brief {
    /// Brief with only the required project type filled in
    pub fn new(project_type: Category) -> Self {
        Self {
            client: None,
            project_type,
            goals: None,
            audience: None,
            tone: None,
            deliverables: None,
            constraints: None,
            references: None,
        }
    }
}

/// Idea list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub category: Category,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Curated resource request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub topic: String,
    pub kind: ResourceKind,
}

/// Color palette request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub vibe: Vibe,
    /// Arbitrary color string, passed through verbatim
    #[serde(default)]
    pub accent: Option<String>,
}

/// Font pairing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsRequest {
    pub mood: Mood,
}

// ============================================================================
// Responses
// ============================================================================

/// Checklist derived from a brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefAnalysis {
    pub client: String,
    pub project_type: Category,
    pub summary: Vec<String>,
    pub tasks: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub category: Category,
    pub ideas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesResponse {
    /// Topic exactly as submitted
    pub topic: String,
    pub kind: ResourceKind,
    pub results: Vec<String>,
}

/// Named group of five `#RRGGBB` colors (the custom group carries the
/// caller's accent verbatim in slot three)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    pub name: String,
    pub colors: [String; 5],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalettesResponse {
    pub vibe: Vibe,
    pub palettes: Vec<ColorGroup>,
}

/// Heading/body font pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsResponse {
    pub mood: Mood,
    pub pairs: Vec<FontPair>,
}
