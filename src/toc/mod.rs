//! Table-of-contents descriptor.
//!
//! A [`Toc`] holds the configuration a TOC field is rendered from: the depth
//! visibility window, per-depth style overrides, default entry styling, entry
//! layout, and the numbering toggle. Per-depth style names are validated
//! eagerly at construction; a descriptor that exists is always renderable.

mod render;

pub use render::TocRenderer;

use crate::error::{Error, Result};
use crate::style::{FontStyleRef, Style, StyleRegistry, TocStyle};
use crate::title::{Title, TitleCollection};

/// Configuration for building a [`Toc`].
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Per-depth style-name overrides; index 0 applies to depth 1. `None`
    /// means no overrides.
    pub title_styles: Option<Vec<String>>,
    /// Default entry styling, as a resolved style or a style name.
    pub font_style: Option<FontStyleRef>,
    /// Entry layout; `None` uses the standard TOC tab and indent settings.
    pub toc_style: Option<TocStyle>,
    /// Prefix entry text with a multilevel numbering label.
    pub use_numbering: bool,
    /// Smallest visible title depth.
    pub min_depth: usize,
    /// Largest visible title depth; 0 means no upper bound.
    pub max_depth: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            title_styles: None,
            font_style: None,
            toc_style: None,
            use_numbering: false,
            min_depth: 1,
            max_depth: 9,
        }
    }
}

/// Table-of-contents descriptor.
///
/// Immutable after construction apart from the depth-window and numbering
/// setters; the renderer never mutates it.
#[derive(Debug, Clone)]
pub struct Toc {
    toc_style: TocStyle,
    font_style: Option<FontStyleRef>,
    title_styles: Option<Vec<String>>,
    min_depth: usize,
    max_depth: usize,
    use_numbering: bool,
}

impl Toc {
    /// Build a descriptor, eagerly validating every per-depth style name.
    ///
    /// Fails with [`Error::StyleNotFound`] if a name does not resolve in the
    /// registry, and with [`Error::InvalidStyleKind`] if it resolves to
    /// something that is neither a font nor a paragraph style. No
    /// partially-valid descriptor is ever observable.
    pub fn new(registry: &StyleRegistry, options: TocOptions) -> Result<Self> {
        if let Some(ref names) = options.title_styles {
            for name in names {
                match registry.resolve(name) {
                    None => return Err(Error::StyleNotFound(name.clone())),
                    Some(Style::Font(_)) | Some(Style::Paragraph(_)) => {}
                    Some(_) => return Err(Error::InvalidStyleKind(name.clone())),
                }
            }
        }

        Ok(Self {
            toc_style: options.toc_style.unwrap_or_default(),
            font_style: options.font_style,
            title_styles: options.title_styles,
            min_depth: options.min_depth,
            max_depth: options.max_depth,
            use_numbering: options.use_numbering,
        })
    }

    /// Titles inside the visibility window, in document order.
    ///
    /// A title is visible when `min_depth <= depth` and, unless `max_depth`
    /// is the 0 sentinel, `depth <= max_depth`. An inverted window simply
    /// yields nothing.
    pub fn visible_titles<'a>(&self, titles: &'a TitleCollection) -> Vec<&'a Title> {
        titles
            .items()
            .iter()
            .filter(|title| {
                title.depth >= self.min_depth
                    && (self.max_depth == 0 || title.depth <= self.max_depth)
            })
            .collect()
    }

    pub fn toc_style(&self) -> &TocStyle {
        &self.toc_style
    }

    pub fn font_style(&self) -> Option<&FontStyleRef> {
        self.font_style.as_ref()
    }

    pub fn title_styles(&self) -> Option<&[String]> {
        self.title_styles.as_deref()
    }

    /// Per-depth override name for a given title depth, if configured.
    pub(crate) fn title_style_for_depth(&self, depth: usize) -> Option<&str> {
        self.title_styles
            .as_ref()?
            .get(depth.checked_sub(1)?)
            .map(String::as_str)
    }

    pub fn min_depth(&self) -> usize {
        self.min_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn use_numbering(&self) -> bool {
        self.use_numbering
    }

    /// Adjust the lower depth bound. Not re-validated; an out-of-range window
    /// degrades to an empty or full filter result.
    pub fn set_min_depth(&mut self, value: usize) {
        self.min_depth = value;
    }

    /// Adjust the upper depth bound; 0 removes the bound.
    pub fn set_max_depth(&mut self, value: usize) {
        self.max_depth = value;
    }

    pub fn set_use_numbering(&mut self, value: bool) {
        self.use_numbering = value;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::style::{
        FontStyle, NumberingKind, NumberingStyle, ParagraphStyle,
    };

    fn registry_with_basics() -> StyleRegistry {
        let mut registry = StyleRegistry::new();
        registry.insert("Heading", Style::Font(FontStyle::default()));
        registry.insert("Body", Style::Paragraph(ParagraphStyle::default()));
        registry.insert(
            "Outline",
            Style::Numbering(NumberingStyle {
                kind: NumberingKind::Multilevel,
                levels: Vec::new(),
            }),
        );
        registry
    }

    fn collection(depths: &[usize]) -> TitleCollection {
        let mut titles = TitleCollection::new();
        for &depth in depths {
            titles.add(depth, format!("d{depth}"));
        }
        titles
    }

    #[test]
    fn test_construction_validates_title_styles() {
        let registry = registry_with_basics();

        let ok = Toc::new(
            &registry,
            TocOptions {
                title_styles: Some(vec!["Heading".to_string(), "Body".to_string()]),
                ..TocOptions::default()
            },
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_construction_fails_on_unknown_style() {
        let registry = registry_with_basics();

        let err = Toc::new(
            &registry,
            TocOptions {
                title_styles: Some(vec!["Nope".to_string()]),
                ..TocOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::StyleNotFound(name) if name == "Nope"));
    }

    #[test]
    fn test_construction_fails_on_wrong_style_kind() {
        let registry = registry_with_basics();

        let err = Toc::new(
            &registry,
            TocOptions {
                title_styles: Some(vec!["Outline".to_string()]),
                ..TocOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidStyleKind(name) if name == "Outline"));
    }

    #[test]
    fn test_absent_style_list_means_no_overrides() {
        let registry = StyleRegistry::new();
        let toc = Toc::new(&registry, TocOptions::default()).unwrap();
        assert!(toc.title_styles().is_none());
        assert!(toc.title_style_for_depth(1).is_none());
    }

    #[test]
    fn test_visible_titles_respects_window() {
        let registry = StyleRegistry::new();
        let toc = Toc::new(
            &registry,
            TocOptions {
                min_depth: 2,
                max_depth: 3,
                ..TocOptions::default()
            },
        )
        .unwrap();

        let titles = collection(&[1, 2, 3, 4, 2]);
        let depths: Vec<usize> = toc
            .visible_titles(&titles)
            .iter()
            .map(|t| t.depth)
            .collect();
        assert_eq!(depths, vec![2, 3, 2]);
    }

    #[test]
    fn test_max_depth_zero_means_unbounded() {
        let registry = StyleRegistry::new();
        let toc = Toc::new(
            &registry,
            TocOptions {
                min_depth: 3,
                max_depth: 0,
                ..TocOptions::default()
            },
        )
        .unwrap();

        let titles = collection(&[1, 3, 9, 2]);
        let depths: Vec<usize> = toc
            .visible_titles(&titles)
            .iter()
            .map(|t| t.depth)
            .collect();
        assert_eq!(depths, vec![3, 9]);
    }

    #[test]
    fn test_inverted_window_yields_nothing() {
        let registry = StyleRegistry::new();
        let mut toc = Toc::new(&registry, TocOptions::default()).unwrap();
        toc.set_min_depth(5);
        toc.set_max_depth(2);

        let titles = collection(&[1, 2, 3, 4, 5]);
        assert!(toc.visible_titles(&titles).is_empty());
    }

    #[test]
    fn test_setters_mutate_without_revalidation() {
        let registry = StyleRegistry::new();
        let mut toc = Toc::new(&registry, TocOptions::default()).unwrap();

        toc.set_min_depth(4);
        toc.set_max_depth(0);
        toc.set_use_numbering(true);

        assert_eq!(toc.min_depth(), 4);
        assert_eq!(toc.max_depth(), 0);
        assert!(toc.use_numbering());
    }

    proptest! {
        #[test]
        fn prop_window_filter_is_order_preserving_subsequence(
            depths in prop::collection::vec(1usize..10, 0..40),
            min in 0usize..11,
            max in 0usize..11,
        ) {
            let registry = StyleRegistry::new();
            let toc = Toc::new(&registry, TocOptions {
                min_depth: min,
                max_depth: max,
                ..TocOptions::default()
            }).unwrap();

            let titles = collection(&depths);
            let visible = toc.visible_titles(&titles);

            let expected: Vec<usize> = depths
                .iter()
                .copied()
                .filter(|&d| d >= min && (max == 0 || d <= max))
                .collect();
            let actual: Vec<usize> = visible.iter().map(|t| t.depth).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
