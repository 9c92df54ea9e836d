//! # tocml
//!
//! A small library for rendering a word-processing document's table of
//! contents into WordprocessingML (OOXML) markup.
//!
//! A [`Toc`] descriptor holds the depth visibility window, per-depth style
//! overrides, default entry styling, and the numbering toggle. A
//! [`TocRenderer`] walks the visible titles in document order, maintains
//! per-depth counters, resolves styles against a caller-supplied
//! [`StyleRegistry`], and emits a single `TOC` field: hyperlinked, numbered,
//! tab-paginated entries wrapped in begin/separate/end field characters.
//!
//! ## Quick start
//!
//! ```
//! use quick_xml::Writer;
//! use tocml::{StyleRegistry, TitleCollection, Toc, TocOptions, TocRenderer};
//!
//! let registry = StyleRegistry::new();
//!
//! let mut titles = TitleCollection::new();
//! titles.add(1, "Introduction").page_number = Some(1);
//! titles.add(2, "Background").page_number = Some(2);
//!
//! let toc = Toc::new(&registry, TocOptions::default())?;
//!
//! let mut xml = Writer::new(Vec::new());
//! TocRenderer::new(&mut xml, &registry).render(&toc, &titles)?;
//!
//! let markup = String::from_utf8(xml.into_inner())?;
//! assert!(markup.contains("TOC \\o 1-9 \\h \\z \\u"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod style;
pub mod title;
pub mod toc;

pub use error::{Error, Result};
pub use style::{
    FontStyle, FontStyleRef, NumberingKind, NumberingLevel, NumberingStyle, ParagraphStyle,
    Style, StyleRegistry, TabAlignment, TabLeader, TabStop, TocStyle,
};
pub use title::{Title, TitleCollection};
pub use toc::{Toc, TocOptions, TocRenderer};
