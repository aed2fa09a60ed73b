//! # Jarvis Common Library
//!
//! Shared code for the Jarvis Design Agent including:
//! - Closed enumerations selecting catalog entries and templates
//! - Request/response value types
//! - Static lookup catalogs (palettes, font pairs, resources)
//! - Bootstrap configuration loading
//! - Text helpers (bullets, title-casing)

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod text;

pub use error::{Error, Result};
pub use models::{Category, Mood, ResourceKind, Vibe};
