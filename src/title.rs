//! Document titles and the collection that owns them.

use crate::style::FontStyleRef;

/// A heading captured for TOC generation.
///
/// Titles are produced while authoring the document body; the TOC only
/// borrows them.
#[derive(Debug, Clone)]
pub struct Title {
    /// Nesting level, 1 = top level.
    pub depth: usize,
    pub text: String,
    /// Stable id used to build the `_Toc{id}` bookmark anchor.
    pub relation_id: u32,
    /// Page the title falls on, when known.
    pub page_number: Option<u32>,
    /// Style applied to the heading in the body text. Its paragraph component
    /// may reference a numbering style.
    pub style: Option<FontStyleRef>,
}

/// Ordered collection of every title in a document, in document order.
#[derive(Debug, Clone, Default)]
pub struct TitleCollection {
    items: Vec<Title>,
}

impl TitleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a title, assigning it the next relation id.
    ///
    /// Returns the stored title so callers can fill in the page number or
    /// style.
    pub fn add(&mut self, depth: usize, text: impl Into<String>) -> &mut Title {
        let relation_id = self.items.len() as u32 + 1;
        self.items.push(Title {
            depth,
            text: text.into(),
            relation_id,
            page_number: None,
            style: None,
        });
        self.items.last_mut().unwrap()
    }

    /// Add a fully constructed title. Relation-id uniqueness is the caller's
    /// responsibility on this path.
    pub fn push(&mut self, title: Title) {
        self.items.push(title);
    }

    pub fn items(&self) -> &[Title] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_relation_ids() {
        let mut titles = TitleCollection::new();
        titles.add(1, "One");
        titles.add(2, "Two");
        titles.add(1, "Three");

        let ids: Vec<u32> = titles.items().iter().map(|t| t.relation_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_returns_stored_title() {
        let mut titles = TitleCollection::new();
        titles.add(1, "Intro").page_number = Some(4);

        assert_eq!(titles.items()[0].page_number, Some(4));
        assert_eq!(titles.items()[0].text, "Intro");
    }
}
