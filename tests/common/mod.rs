pub mod fixtures;
pub mod pdf_assertions;

use freightdoc::{Artifact, DocumentRecord, ExportError, ExportKind, ExportPipeline, PipelineBuilder};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page, 1-based
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }
}

pub fn default_pipeline() -> ExportPipeline {
    init_logger();
    PipelineBuilder::new().build().expect("default configuration is valid")
}

pub fn export_with_fixed_stamp(
    record: &DocumentRecord,
    kind: ExportKind,
) -> Result<Artifact, ExportError> {
    let stamp = fixtures::fixed_stamp(record.kind().prefix());
    default_pipeline().export_with_stamp(record, kind, &stamp)
}

/// Render a record to PDF with a fixed stamp and load the result
pub fn generate_pdf(record: &DocumentRecord) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let artifact = export_with_fixed_stamp(record, ExportKind::Pdf)?;
    GeneratedPdf::from_bytes(artifact.bytes)
}

/// Render a record to XML with a fixed stamp
pub fn generate_xml(record: &DocumentRecord) -> Result<String, ExportError> {
    let artifact = export_with_fixed_stamp(record, ExportKind::Xml)?;
    Ok(artifact.as_text().into_owned())
}

/// Text of the first element with the given local name
pub fn xml_text<'a>(doc: &'a roxmltree::Document<'_>, name: &str) -> Option<&'a str> {
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
}
