//! Line templates with a single substitution slot
//!
//! A line is `(text, slot)` where the slot names which hint fills the `{}`
//! marker and the literal used when that hint is absent. Renderers declare
//! their lines as constant tables of [`LineTemplate`] and call [`render`].

/// Substitution marker inside template text
pub const MARKER: &str = "{}";

/// One output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTemplate<F> {
    pub text: &'static str,
    pub slot: Option<Slot<F>>,
}

/// Hint field feeding a template and its fallback literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<F> {
    pub field: F,
    pub default: &'static str,
}

/// Line with no substitution
pub const fn fixed<F>(text: &'static str) -> LineTemplate<F> {
    LineTemplate { text, slot: None }
}

/// Line whose marker is filled from `field`, else `default`
pub const fn slotted<F>(text: &'static str, field: F, default: &'static str) -> LineTemplate<F> {
    LineTemplate {
        text,
        slot: Some(Slot { field, default }),
    }
}

impl<F: Copy> LineTemplate<F> {
    /// Render with a hint lookup; `None` or empty hints use the slot default
    pub fn render<'a>(&self, hint: impl Fn(F) -> Option<&'a str>) -> String {
        match &self.slot {
            None => self.text.to_string(),
            Some(slot) => {
                let value = hint(slot.field)
                    .filter(|v| !v.is_empty())
                    .unwrap_or(slot.default);
                self.text.replacen(MARKER, value, 1)
            }
        }
    }
}

/// Render every line in order
pub fn render<'a, F: Copy>(
    lines: &[LineTemplate<F>],
    hint: impl Fn(F) -> Option<&'a str>,
) -> Vec<String> {
    lines.iter().map(|line| line.render(&hint)).collect()
}
