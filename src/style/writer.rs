//! WordprocessingML serialization of resolved styles.
//!
//! Covers the subset of `w:pPr` / `w:rPr` the TOC writer emits: tab stops,
//! left indent, and basic character formatting.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::{FontStyle, ParagraphStyle, TabLeader};
use crate::error::Result;

/// Write a `w:pPr` block for a resolved paragraph style.
pub(crate) fn write_paragraph_properties<W: Write>(
    xml: &mut Writer<W>,
    style: &ParagraphStyle,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:pPr")))?;

    if !style.tabs.is_empty() {
        xml.write_event(Event::Start(BytesStart::new("w:tabs")))?;
        for tab in &style.tabs {
            let pos = tab.position.to_string();
            let mut el = BytesStart::new("w:tab");
            el.push_attribute(("w:val", tab.alignment.as_str()));
            if tab.leader != TabLeader::None {
                el.push_attribute(("w:leader", tab.leader.as_str()));
            }
            el.push_attribute(("w:pos", pos.as_str()));
            xml.write_event(Event::Empty(el))?;
        }
        xml.write_event(Event::End(BytesEnd::new("w:tabs")))?;
    }

    if let Some(indent) = style.indent {
        let left = indent.to_string();
        let mut el = BytesStart::new("w:ind");
        el.push_attribute(("w:left", left.as_str()));
        xml.write_event(Event::Empty(el))?;
    }

    xml.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    Ok(())
}

/// Write a `w:rPr` block for a resolved font style.
pub(crate) fn write_run_properties<W: Write>(
    xml: &mut Writer<W>,
    style: &FontStyle,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:rPr")))?;

    if let Some(ref name) = style.name {
        let mut el = BytesStart::new("w:rFonts");
        el.push_attribute(("w:ascii", name.as_str()));
        el.push_attribute(("w:hAnsi", name.as_str()));
        xml.write_event(Event::Empty(el))?;
    }
    if style.bold {
        xml.write_event(Event::Empty(BytesStart::new("w:b")))?;
    }
    if style.italic {
        xml.write_event(Event::Empty(BytesStart::new("w:i")))?;
    }
    if let Some(ref color) = style.color {
        let mut el = BytesStart::new("w:color");
        el.push_attribute(("w:val", color.as_str()));
        xml.write_event(Event::Empty(el))?;
    }
    if let Some(size) = style.size {
        // w:sz is measured in half-points.
        let val = ((size * 2.0).round() as u32).to_string();
        let mut el = BytesStart::new("w:sz");
        el.push_attribute(("w:val", val.as_str()));
        xml.write_event(Event::Empty(el))?;
    }

    xml.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    Ok(())
}

/// Write a `w:rPr` block referencing a named character style.
pub(crate) fn write_run_style_ref<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    let mut el = BytesStart::new("w:rStyle");
    el.push_attribute(("w:val", name));
    xml.write_event(Event::Empty(el))?;
    xml.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    Ok(())
}
