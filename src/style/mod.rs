//! Resolved style data model.
//!
//! These types carry only the values the TOC renderer consumes: tab stops and
//! indents for entry paragraphs, basic character formatting for entry runs,
//! and multilevel numbering definitions. Style cascade and definition logic
//! live with the caller; everything here is already resolved.

pub mod registry;
pub(crate) mod writer;

pub use registry::{Style, StyleRegistry};

/// Tab stop alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAlignment {
    Left,
    Center,
    Right,
}

impl TabAlignment {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TabAlignment::Left => "left",
            TabAlignment::Center => "center",
            TabAlignment::Right => "right",
        }
    }
}

/// Leader character drawn in the space before a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLeader {
    #[default]
    None,
    Dot,
    Hyphen,
    Underscore,
}

impl TabLeader {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TabLeader::None => "none",
            TabLeader::Dot => "dot",
            TabLeader::Hyphen => "hyphen",
            TabLeader::Underscore => "underscore",
        }
    }
}

/// A single tab stop, positioned in twips from the left margin.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStop {
    pub alignment: TabAlignment,
    pub leader: TabLeader,
    pub position: u32,
}

/// Layout settings for generated TOC entries: how far each depth level is
/// indented and where the page-number tab stop sits.
#[derive(Debug, Clone, PartialEq)]
pub struct TocStyle {
    /// Indent added per depth level, in twips.
    pub indent: u32,
    /// Position of the page-number tab stop, in twips.
    pub tab_pos: u32,
    /// Leader drawn between the entry text and the page number.
    pub tab_leader: TabLeader,
}

impl Default for TocStyle {
    fn default() -> Self {
        Self {
            indent: 200,
            tab_pos: 9062,
            tab_leader: TabLeader::Dot,
        }
    }
}

impl TocStyle {
    /// The right-aligned page-number tab stop this style describes.
    pub(crate) fn tab_stop(&self) -> TabStop {
        TabStop {
            alignment: TabAlignment::Right,
            leader: self.tab_leader,
            position: self.tab_pos,
        }
    }
}

/// Resolved character formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontStyle {
    /// Font family name.
    pub name: Option<String>,
    /// Size in points.
    pub size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
    /// Hex RGB color, e.g. `"1F4E79"`.
    pub color: Option<String>,
    /// Paragraph formatting attached to this character style.
    pub paragraph: Option<ParagraphStyle>,
}

/// Resolved paragraph formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphStyle {
    pub tabs: Vec<TabStop>,
    /// Left indent in twips.
    pub indent: Option<u32>,
    /// Name of the numbering style driving this paragraph's list numbering.
    pub numbering_style: Option<String>,
}

/// A font style supplied either as a resolved value or as the name of a
/// registered style.
#[derive(Debug, Clone)]
pub enum FontStyleRef {
    Resolved(FontStyle),
    Named(String),
}

/// Numbering scheme kind. Only the multilevel kinds produce TOC prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingKind {
    SingleLevel,
    Multilevel,
    HybridMultilevel,
}

impl NumberingKind {
    pub fn is_multilevel(self) -> bool {
        matches!(self, NumberingKind::Multilevel | NumberingKind::HybridMultilevel)
    }
}

/// One level of a numbering style.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingLevel {
    /// Offset added to the running counter at this level for display.
    pub start: u32,
    /// Display template with 1-based positional placeholders, e.g. `"%1.%2"`.
    pub text: String,
}

/// A numbering style definition.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingStyle {
    pub kind: NumberingKind,
    /// Levels in depth order; index 0 describes depth 1.
    pub levels: Vec<NumberingLevel>,
}
