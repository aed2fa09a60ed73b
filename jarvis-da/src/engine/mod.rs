//! Suggestion engine
//!
//! Pure, synchronous functions from a typed request to an ordered result
//! set. No I/O and no shared state: the same input always produces the
//! same output.
//!
//! - [`template`]: single-slot line templates
//! - [`ideas`], [`palettes`], [`fonts`], [`resources`]: renderers
//! - [`brief`]: brief checklist
//! - [`assembler`]: response records with echoed request fields

pub mod assembler;
pub mod brief;
pub mod fonts;
pub mod ideas;
pub mod palettes;
pub mod resources;
pub mod template;

pub use assembler::{analyze_brief, generate_ideas, suggest_fonts, suggest_palettes, suggest_resources};
