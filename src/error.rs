//! Error types for TOC construction and rendering.

use thiserror::Error;

/// Errors that can occur while building or rendering a table of contents.
///
/// `StyleNotFound` and `InvalidStyleKind` are configuration errors raised
/// eagerly at descriptor construction (and for registry lookups made during
/// rendering). `MissingNumberingLevel` and `Io` are rendering errors that
/// abort the render call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("style \"{0}\" not found")]
    StyleNotFound(String),

    #[error("style \"{0}\" must be a font or a paragraph style")]
    InvalidStyleKind(String),

    #[error("multilevel numbering style defines no level for depth {0}")]
    MissingNumberingLevel(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
