//! Name → style lookup.

use std::collections::HashMap;

use super::{FontStyle, NumberingStyle, ParagraphStyle};

/// A named style as stored in the registry.
#[derive(Debug, Clone)]
pub enum Style {
    Font(FontStyle),
    Paragraph(ParagraphStyle),
    Numbering(NumberingStyle),
}

/// Document-wide style registry.
///
/// Injected into descriptor construction and rendering as an explicit
/// dependency, never consulted as a global, so tests can work with small
/// fake registries.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Style>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style under a name, replacing any previous definition.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Look up a style by name.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
