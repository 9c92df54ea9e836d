//! TOC field rendering.
//!
//! Emits a complete WordprocessingML `TOC` field: one hyperlinked,
//! tab-paginated paragraph per visible title, wrapped in begin/separate/end
//! field characters so the consuming word processor evaluates the whole
//! sequence as a single field. Element and attribute names are a wire
//! contract and must not drift.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};
use crate::style::writer::{
    write_paragraph_properties, write_run_properties, write_run_style_ref,
};
use crate::style::{FontStyle, FontStyleRef, NumberingStyle, ParagraphStyle, Style, StyleRegistry};
use crate::title::{Title, TitleCollection};

use super::Toc;

/// Renders a [`Toc`] descriptor into WordprocessingML.
///
/// The renderer never mutates the descriptor or the titles; independent
/// renderers over separate sinks can run concurrently.
pub struct TocRenderer<'a, W: Write> {
    xml: &'a mut Writer<W>,
    registry: &'a StyleRegistry,
}

impl<'a, W: Write> TocRenderer<'a, W> {
    pub fn new(xml: &'a mut Writer<W>, registry: &'a StyleRegistry) -> Self {
        Self { xml, registry }
    }

    /// Render the full TOC field for every title visible through the
    /// descriptor's depth window.
    ///
    /// A render with zero visible titles still emits the closing field
    /// terminator so the document holds an empty but well-formed field.
    pub fn render(&mut self, toc: &Toc, titles: &TitleCollection) -> Result<()> {
        let visible = toc.visible_titles(titles);

        let mut indices: Vec<u32> = Vec::new();
        for (i, title) in visible.iter().enumerate() {
            // Truncating before the increment resets deeper counters when the
            // outline returns to a shallower level.
            if indices.len() < title.depth {
                indices.push(0);
            } else {
                indices.truncate(title.depth);
            }
            if let Some(last) = indices.last_mut() {
                *last += 1;
            }

            self.write_title(toc, title, i == 0, &indices)?;
        }

        self.xml.write_event(Event::Start(BytesStart::new("w:p")))?;
        self.write_field_char_run("end")?;
        self.xml.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }

    fn write_title(
        &mut self,
        toc: &Toc,
        title: &Title,
        first_entry: bool,
        indices: &[u32],
    ) -> Result<()> {
        let run_format = run_formatting(self.registry, toc, title.depth);
        let active_font = match run_format {
            Some(RunFormatting::Properties(font)) => Some(font),
            _ => None,
        };
        let paragraph = derived_paragraph_style(self.registry, toc, title.depth, active_font);
        // Resolved up front so a numbering failure aborts before this entry
        // emits anything.
        let text = entry_text(self.registry, toc, title, indices)?;
        let anchor = format!("_Toc{}", title.relation_id);

        self.xml.write_event(Event::Start(BytesStart::new("w:p")))?;

        if let Some(ref paragraph) = paragraph {
            write_paragraph_properties(self.xml, paragraph)?;
        }
        if first_entry {
            self.write_field_mark(toc)?;
        }

        let mut hyperlink = BytesStart::new("w:hyperlink");
        hyperlink.push_attribute(("w:anchor", anchor.as_str()));
        hyperlink.push_attribute(("w:history", "1"));
        self.xml.write_event(Event::Start(hyperlink))?;

        // Entry text run.
        self.xml.write_event(Event::Start(BytesStart::new("w:r")))?;
        match run_format {
            Some(RunFormatting::Properties(font)) => write_run_properties(self.xml, font)?,
            Some(RunFormatting::StyleRef(name)) => write_run_style_ref(self.xml, name)?,
            None => {}
        }
        self.write_text_element(&text)?;
        self.xml.write_event(Event::End(BytesEnd::new("w:r")))?;

        // Tab between the entry text and the page number.
        self.xml.write_event(Event::Start(BytesStart::new("w:r")))?;
        self.xml.write_event(Event::Empty(BytesStart::new("w:tab")))?;
        self.xml.write_event(Event::End(BytesEnd::new("w:r")))?;

        // Page-reference field for this entry.
        self.write_field_char_run("begin")?;
        self.write_instr_text(&format!("PAGEREF _Toc{} \\h", title.relation_id))?;

        if let Some(page) = title.page_number {
            self.write_field_char_run("separate")?;
            self.xml.write_event(Event::Start(BytesStart::new("w:r")))?;
            self.write_text_element(&page.to_string())?;
            self.xml.write_event(Event::End(BytesEnd::new("w:r")))?;
        }

        self.write_field_char_run("end")?;

        self.xml
            .write_event(Event::End(BytesEnd::new("w:hyperlink")))?;
        self.xml.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }

    /// Opening `TOC` field code, written exactly once per render, inside the
    /// first entry's paragraph.
    fn write_field_mark(&mut self, toc: &Toc) -> Result<()> {
        self.write_field_char_run("begin")?;
        self.write_instr_text(&format!(
            "TOC \\o {}-{} \\h \\z \\u",
            toc.min_depth(),
            toc.max_depth()
        ))?;
        self.write_field_char_run("separate")?;
        Ok(())
    }

    fn write_field_char_run(&mut self, kind: &str) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new("w:r")))?;
        let mut fld = BytesStart::new("w:fldChar");
        fld.push_attribute(("w:fldCharType", kind));
        self.xml.write_event(Event::Empty(fld))?;
        self.xml.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }

    fn write_instr_text(&mut self, instruction: &str) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new("w:r")))?;
        let mut el = BytesStart::new("w:instrText");
        el.push_attribute(("xml:space", "preserve"));
        self.xml.write_event(Event::Start(el))?;
        self.xml
            .write_event(Event::Text(BytesText::new(instruction)))?;
        self.xml
            .write_event(Event::End(BytesEnd::new("w:instrText")))?;
        self.xml.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }

    fn write_text_element(&mut self, text: &str) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new("w:t")))?;
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        self.xml.write_event(Event::End(BytesEnd::new("w:t")))?;
        Ok(())
    }
}

/// How the entry run is formatted: inline properties for a resolved font
/// style, or a named character-style reference left for the consumer.
#[derive(Clone, Copy)]
enum RunFormatting<'r> {
    Properties(&'r FontStyle),
    StyleRef(&'r str),
}

fn run_formatting<'r>(
    registry: &'r StyleRegistry,
    toc: &'r Toc,
    depth: usize,
) -> Option<RunFormatting<'r>> {
    // A per-depth override that resolves to a font style beats the default.
    if let Some(name) = toc.title_style_for_depth(depth) {
        if let Some(Style::Font(font)) = registry.resolve(name) {
            return Some(RunFormatting::Properties(font));
        }
    }

    match toc.font_style()? {
        FontStyleRef::Resolved(font) => Some(RunFormatting::Properties(font)),
        FontStyleRef::Named(name) => match registry.resolve(name) {
            Some(Style::Font(font)) => Some(RunFormatting::Properties(font)),
            _ => Some(RunFormatting::StyleRef(name)),
        },
    }
}

/// Paragraph formatting for an entry, owned so the merge never touches a
/// shared style. A non-font per-depth override contributes its formatting;
/// the active font style's attached paragraph formatting wins over it.
fn derived_paragraph_style(
    registry: &StyleRegistry,
    toc: &Toc,
    depth: usize,
    active_font: Option<&FontStyle>,
) -> Option<ParagraphStyle> {
    let mut paragraph: Option<ParagraphStyle> = None;

    if let Some(name) = toc.title_style_for_depth(depth) {
        if let Some(Style::Paragraph(style)) = registry.resolve(name) {
            paragraph = Some(style.clone());
        }
    }

    if let Some(attached) = active_font.and_then(|font| font.paragraph.as_ref()) {
        paragraph = Some(attached.clone());
    }

    let mut paragraph = paragraph?;

    // Merging fills gaps only: author-set tabs and indents stay untouched.
    if paragraph.tabs.is_empty() {
        paragraph.tabs = vec![toc.toc_style().tab_stop()];
    }
    let indent = depth.saturating_sub(1) as u32 * toc.toc_style().indent;
    if indent > 0 && paragraph.indent.is_none() {
        paragraph.indent = Some(indent);
    }

    Some(paragraph)
}

/// Entry text, with the multilevel numbering label prepended when the
/// descriptor asks for it and the title's style carries a multilevel
/// numbering reference.
fn entry_text(
    registry: &StyleRegistry,
    toc: &Toc,
    title: &Title,
    indices: &[u32],
) -> Result<String> {
    if !toc.use_numbering() {
        return Ok(title.text.clone());
    }
    let Some(numbering) = title_numbering_style(registry, title)? else {
        return Ok(title.text.clone());
    };
    if !numbering.kind.is_multilevel() {
        return Ok(title.text.clone());
    }

    // Display counters are offset by each level's start; the raw running
    // counters stay untouched for later titles.
    let mut adjusted = indices.to_vec();
    for (i, level) in numbering.levels.iter().enumerate() {
        if let Some(counter) = adjusted.get_mut(i) {
            *counter += level.start;
        }
    }

    let level = numbering
        .levels
        .get(title.depth.saturating_sub(1))
        .ok_or(Error::MissingNumberingLevel(title.depth))?;

    let mut label = level.text.clone();
    for (i, counter) in adjusted.iter().enumerate() {
        label = label.replace(&format!("%{}", i + 1), &counter.to_string());
    }
    Ok(format!("{} {}", label, title.text))
}

/// The numbering style referenced by a title's paragraph formatting, if any.
///
/// Style names that are missing from the registry fail the render; a
/// reference resolving to a non-numbering style carries no TOC prefix.
fn title_numbering_style<'r>(
    registry: &'r StyleRegistry,
    title: &'r Title,
) -> Result<Option<&'r NumberingStyle>> {
    let font = match title.style {
        Some(FontStyleRef::Resolved(ref font)) => Some(font),
        Some(FontStyleRef::Named(ref name)) => match registry.resolve(name) {
            Some(Style::Font(font)) => Some(font),
            Some(_) => None,
            None => return Err(Error::StyleNotFound(name.clone())),
        },
        None => None,
    };

    let Some(name) = font
        .and_then(|font| font.paragraph.as_ref())
        .and_then(|paragraph| paragraph.numbering_style.as_deref())
    else {
        return Ok(None);
    };

    match registry.resolve(name) {
        Some(Style::Numbering(numbering)) => Ok(Some(numbering)),
        Some(_) => Ok(None),
        None => Err(Error::StyleNotFound(name.to_string())),
    }
}
