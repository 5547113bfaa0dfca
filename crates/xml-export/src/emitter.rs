use crate::error::XmlExportError;
use freightdoc_format::escape_markup_text;
use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Cursor;

/// Thin layer over `quick_xml::Writer` with two-space indentation.
///
/// Text passed to [`XmlEmitter::text`] is escaped here; everything else is written verbatim
/// and must already be markup-safe.
pub(crate) struct XmlEmitter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlEmitter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), XmlExportError> {
        self.writer
            .write_event(event)
            .map_err(|e| XmlExportError::Write(e.to_string()))
    }

    pub fn declaration(&mut self) -> Result<(), XmlExportError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub fn comment(&mut self, text: &str) -> Result<(), XmlExportError> {
        self.write(Event::Comment(BytesText::from_escaped(format!(" {} ", text))))
    }

    /// Opens `name` with attributes. Attribute values are user text and get escaped.
    pub fn start_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), XmlExportError> {
        self.write(Event::Start(tag(name, attributes)))
    }

    pub fn start(&mut self, name: &str) -> Result<(), XmlExportError> {
        self.start_with(name, &[])
    }

    pub fn end(&mut self, name: &str) -> Result<(), XmlExportError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn element(&mut self, name: &str, attributes: &[(&str, &str)], escaped: String) -> Result<(), XmlExportError> {
        if escaped.is_empty() {
            return self.write(Event::Empty(tag(name, attributes)));
        }
        self.write(Event::Start(tag(name, attributes)))?;
        self.write(Event::Text(BytesText::from_escaped(escaped)))?;
        self.end(name)
    }

    /// `<name>value</name>` for a free-text field, value kept as entered; `<name/>` when it
    /// is empty or whitespace only.
    pub fn text(&mut self, name: &str, value: &str) -> Result<(), XmlExportError> {
        self.element(name, &[], free_text(value))
    }

    pub fn text_with(&mut self, name: &str, attributes: &[(&str, &str)], value: &str) -> Result<(), XmlExportError> {
        self.element(name, attributes, free_text(value))
    }

    /// `<name>value</name>` for a computed value or constant, written without escaping.
    pub fn literal(&mut self, name: &str, value: &str) -> Result<(), XmlExportError> {
        self.element(name, &[], value.to_string())
    }

    pub fn literal_with(&mut self, name: &str, attributes: &[(&str, &str)], value: &str) -> Result<(), XmlExportError> {
        self.element(name, attributes, value.to_string())
    }

    /// `<name><text>value</text></name>`, the wrapper used by free-text CMR sections.
    pub fn text_block(&mut self, name: &str, value: &str) -> Result<(), XmlExportError> {
        self.start(name)?;
        self.text("text", value)?;
        self.end(name)
    }

    pub fn finish(self) -> Result<String, XmlExportError> {
        let mut xml = String::from_utf8(self.writer.into_inner().into_inner())?;
        xml.push('\n');
        Ok(xml)
    }
}

fn free_text(value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        escape_markup_text(value)
    }
}

fn tag<'a>(name: &'a str, attributes: &[(&str, &str)]) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for (key, value) in attributes {
        element.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Owned(escape_markup_text(value).into_bytes()),
        });
    }
    element
}
