//! Minimal Office Open XML (`.docx`) writer.
//!
//! A docx file is a zip package of XML parts. Only the parts needed for a title, headings
//! and grid tables are produced:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! word/_rels/document.xml.rels
//! word/styles.xml
//! word/document.xml
//! ```

use super::document::{ReportDocument, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const STYLES_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Usable width of an A4 page with default margins, in twentieths of a point.
const TABLE_WIDTH: usize = 9000;

/// A table added to a [`DocxReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub heading: String,
    pub rows: Vec<Vec<String>>,
}

/// A report made of a title followed by headed tables.
#[derive(Debug, Clone, Default)]
pub struct DocxReport {
    heading: String,
    tables: Vec<ReportTable>,
}

impl DocxReport {
    /// Creates an empty report with the given title.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            tables: Vec::new(),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Tables in the order they were added.
    pub fn tables(&self) -> &[ReportTable] {
        &self.tables
    }

    /// Serializes `word/document.xml`.
    pub fn document_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        write_declaration(&mut writer)?;

        writer.write_event(Event::Start(
            BytesStart::new("w:document").with_attributes([("xmlns:w", WORDPROCESSING_NS)]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        write_paragraph(&mut writer, Some("Title"), &self.heading)?;
        for table in &self.tables {
            write_paragraph(&mut writer, Some("Heading1"), &table.heading)?;
            write_table(&mut writer, &table.rows)?;
            // Word merges adjacent tables unless a paragraph separates them.
            writer.write_event(Event::Empty(BytesStart::new("w:p")))?;
        }

        writer.write_event(Event::Empty(BytesStart::new("w:sectPr")))?;
        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        writer.write_event(Event::End(BytesEnd::new("w:document")))?;

        Ok(writer.into_inner())
    }
}

impl ReportDocument for DocxReport {
    fn add_table(&mut self, heading: &str, rows: &[Vec<String>]) {
        self.tables.push(ReportTable {
            heading: heading.to_string(),
            rows: rows.to_vec(),
        });
    }

    fn save(&self, path: &Path) -> Result<()> {
        let parts: [(&str, Vec<u8>); 5] = [
            ("[Content_Types].xml", content_types_xml()?),
            ("_rels/.rels", package_rels_xml()?),
            ("word/_rels/document.xml.rels", document_rels_xml()?),
            ("word/styles.xml", styles_xml()?),
            ("word/document.xml", self.document_xml()?),
        ];

        let mut zip = ZipWriter::new(File::create(path)?);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(&content)?;
        }
        zip.finish()?;

        debug!(path = %path.display(), tables = self.tables.len(), "Saved report");
        Ok(())
    }
}

fn write_declaration(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

/// `<w:p>` with an optional paragraph style and a single run of text.
fn write_paragraph(writer: &mut Writer<Vec<u8>>, style: Option<&str>, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    if let Some(style) = style {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        writer.write_event(Event::Empty(
            BytesStart::new("w:pStyle").with_attributes([("w:val", style)]),
        ))?;
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }
    write_run(writer, text)?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_run(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    writer.write_event(Event::Start(
        BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
    ))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

fn write_table(writer: &mut Writer<Vec<u8>>, rows: &[Vec<String>]) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let column_width = (TABLE_WIDTH / columns).to_string();

    writer.write_event(Event::Start(BytesStart::new("w:tbl")))?;

    writer.write_event(Event::Start(BytesStart::new("w:tblPr")))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:tblStyle").with_attributes([("w:val", "TableGrid")]),
    ))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:tblW").with_attributes([("w:w", "0"), ("w:type", "auto")]),
    ))?;
    writer.write_event(Event::End(BytesEnd::new("w:tblPr")))?;

    writer.write_event(Event::Start(BytesStart::new("w:tblGrid")))?;
    for _ in 0..columns {
        writer.write_event(Event::Empty(
            BytesStart::new("w:gridCol").with_attributes([("w:w", column_width.as_str())]),
        ))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:tblGrid")))?;

    for row in rows {
        writer.write_event(Event::Start(BytesStart::new("w:tr")))?;
        for cell in row {
            writer.write_event(Event::Start(BytesStart::new("w:tc")))?;
            writer.write_event(Event::Start(BytesStart::new("w:tcPr")))?;
            writer.write_event(Event::Empty(
                BytesStart::new("w:tcW")
                    .with_attributes([("w:w", column_width.as_str()), ("w:type", "dxa")]),
            ))?;
            writer.write_event(Event::End(BytesEnd::new("w:tcPr")))?;
            write_paragraph(writer, None, cell)?;
            writer.write_event(Event::End(BytesEnd::new("w:tc")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:tr")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:tbl")))?;
    Ok(())
}

fn content_types_xml() -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;

    writer.write_event(Event::Start(
        BytesStart::new("Types").with_attributes([("xmlns", CONTENT_TYPES_NS)]),
    ))?;
    writer.write_event(Event::Empty(BytesStart::new("Default").with_attributes([
        ("Extension", "rels"),
        (
            "ContentType",
            "application/vnd.openxmlformats-package.relationships+xml",
        ),
    ])))?;
    writer.write_event(Event::Empty(
        BytesStart::new("Default")
            .with_attributes([("Extension", "xml"), ("ContentType", "application/xml")]),
    ))?;
    writer.write_event(Event::Empty(BytesStart::new("Override").with_attributes([
        ("PartName", "/word/document.xml"),
        (
            "ContentType",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
    ])))?;
    writer.write_event(Event::Empty(BytesStart::new("Override").with_attributes([
        ("PartName", "/word/styles.xml"),
        (
            "ContentType",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
    ])))?;
    writer.write_event(Event::End(BytesEnd::new("Types")))?;

    Ok(writer.into_inner())
}

fn relationships_xml(id: &str, rel_type: &str, target: &str) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;

    writer.write_event(Event::Start(
        BytesStart::new("Relationships").with_attributes([("xmlns", RELATIONSHIPS_NS)]),
    ))?;
    writer.write_event(Event::Empty(BytesStart::new("Relationship").with_attributes([
        ("Id", id),
        ("Type", rel_type),
        ("Target", target),
    ])))?;
    writer.write_event(Event::End(BytesEnd::new("Relationships")))?;

    Ok(writer.into_inner())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    relationships_xml("rId1", OFFICE_DOCUMENT_REL, "word/document.xml")
}

fn document_rels_xml() -> Result<Vec<u8>> {
    relationships_xml("rId1", STYLES_REL, "styles.xml")
}

fn styles_xml() -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_declaration(&mut writer)?;

    writer.write_event(Event::Start(
        BytesStart::new("w:styles").with_attributes([("xmlns:w", WORDPROCESSING_NS)]),
    ))?;

    write_paragraph_style(&mut writer, "Normal", "Normal", None)?;
    write_paragraph_style(&mut writer, "Title", "Title", Some("56"))?;
    write_paragraph_style(&mut writer, "Heading1", "heading 1", Some("32"))?;

    writer.write_event(Event::Start(BytesStart::new("w:style").with_attributes([
        ("w:type", "table"),
        ("w:styleId", "TableGrid"),
    ])))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:name").with_attributes([("w:val", "Table Grid")]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("w:tblPr")))?;
    writer.write_event(Event::Start(BytesStart::new("w:tblBorders")))?;
    for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        writer.write_event(Event::Empty(BytesStart::new(side).with_attributes([
            ("w:val", "single"),
            ("w:sz", "4"),
            ("w:space", "0"),
            ("w:color", "auto"),
        ])))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:tblBorders")))?;
    writer.write_event(Event::End(BytesEnd::new("w:tblPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:style")))?;

    writer.write_event(Event::End(BytesEnd::new("w:styles")))?;
    Ok(writer.into_inner())
}

/// A paragraph style, bold when it has a font size (in half points).
fn write_paragraph_style(
    writer: &mut Writer<Vec<u8>>,
    style_id: &str,
    name: &str,
    font_size: Option<&str>,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:style").with_attributes([
        ("w:type", "paragraph"),
        ("w:styleId", style_id),
    ])))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:name").with_attributes([("w:val", name)]),
    ))?;
    if let Some(size) = font_size {
        writer.write_event(Event::Empty(
            BytesStart::new("w:basedOn").with_attributes([("w:val", "Normal")]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
        writer.write_event(Event::Empty(
            BytesStart::new("w:sz").with_attributes([("w:val", size)]),
        ))?;
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}
