//! HTTP API handlers for jarvis-da

pub mod buildinfo;
pub mod diagnostics;
pub mod health;
pub mod root;
pub mod suggestions;

pub use buildinfo::get_build_info;
pub use diagnostics::{diagnostics_routes, store_diagnostics};
pub use health::{health_check, health_routes};
pub use root::{hello, not_found, root_routes, welcome};
pub use suggestions::{
    analyze_brief, generate_ideas, suggest_fonts, suggest_palettes, suggest_resources,
    suggestion_routes,
};
