//! XML feed writer.
//!
//! The element names, their order and the always-empty placeholders form the
//! contract with the feed consumer and must not change.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use log::info;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::escape::partial_escape;
use quick_xml::Writer;
use crate::config::ParserConfig;
use crate::error::ExportError;
use crate::models::VacancyRecord;

pub struct XmlExporter {
    output_dir: PathBuf,
    file_name: String,
    contact_email: String,
}

impl XmlExporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>, contact_email: impl Into<String>) -> Self {
        XmlExporter {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            contact_email: contact_email.into(),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        XmlExporter::new(
            config.output_dir.clone(),
            config.output_file_name.clone(),
            config.contact_email.clone(),
        )
    }

    /// Writes the feed, creating the output directory if needed.
    /// Returns the absolute path of the written file.
    pub fn export(&self, records: &[VacancyRecord]) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&self.file_name);

        let mut out = BufWriter::new(File::create(&path)?);
        write_vacancies(&mut out, records, &self.contact_email)?;
        out.flush()?;

        let path = fs::canonicalize(&path)?;
        info!("Exported {} vacancies to {:?}", records.len(), path);
        Ok(path)
    }
}

/// Serializes `records` as an indented UTF-8 document with declaration.
pub fn write_vacancies<W: Write>(out: W, records: &[VacancyRecord], contact_email: &str) -> io::Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    open(&mut writer, "vacancies")?;
    for record in records {
        write_position(&mut writer, record, contact_email)?;
    }
    close(&mut writer, "vacancies")?;

    writer.get_mut().write_all(b"\n")
}

fn write_position<W: Write>(writer: &mut Writer<W>, record: &VacancyRecord, contact_email: &str) -> io::Result<()> {
    open(writer, "position")?;
    text(writer, "link", &record.url)?;
    text(writer, "identifier", &record.id)?;
    text(writer, "title", &record.title)?;
    empty(writer, "start_date")?;
    empty(writer, "kind")?;

    open(writer, "description")?;
    for section in cdata_sections(&record.description) {
        writer.write_event(Event::CData(BytesCData::new(section)))?;
    }
    close(writer, "description")?;

    text(writer, "top_location", &record.top_location)?;

    open(writer, "locations")?;
    for location in record.location_list() {
        text(writer, "location", location)?;
    }
    close(writer, "locations")?;

    empty(writer, "images")?;

    open(writer, "company")?;
    text(writer, "name", &record.company_name)?;
    open(writer, "address")?;
    empty(writer, "street")?;
    empty(writer, "zip")?;
    empty(writer, "city")?;
    close(writer, "address")?;
    close(writer, "company")?;

    text(writer, "contact_email", contact_email)?;
    close(writer, "position")
}

fn open<W: Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))
}

fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn empty<W: Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::Empty(BytesStart::new(name)))
}

// An empty text event keeps `<name></name>` on one line.
// Quotes stay literal in element text; only `&`, `<` and `>` are escaped.
fn text<W: Write>(writer: &mut Writer<W>, name: &str, content: &str) -> io::Result<()> {
    open(writer, name)?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(content))))?;
    close(writer, name)
}

/// Splits around `]]>` so each piece fits in its own CDATA section.
fn cdata_sections(content: &str) -> Vec<String> {
    let parts: Vec<&str> = content.split("]]>").collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let mut section = String::with_capacity(part.len() + 3);
            if i > 0 {
                section.push('>');
            }
            section.push_str(part);
            if i < last {
                section.push_str("]]");
            }
            section
        })
        .collect()
}
