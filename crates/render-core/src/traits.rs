use crate::error::RenderError;
use chrono::{DateTime, Utc};
use freightdoc_layout::{LaidOutDocument, LaidOutPage};
use freightdoc_types::Size;
use std::io::Write;

/// Document-level metadata written to the PDF Info dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    pub created_at: DateTime<Utc>,
}

/// A trait for document renderers, abstracting the PDF-writing steps.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(
        &mut self,
        writer: W,
        info: &DocumentInfo,
        page_size: Size,
    ) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError>;

    /// Writes the finished document and hands the writer back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

/// Drives a renderer over every page of a laid-out document.
pub fn render_document<W: Write>(
    mut renderer: Box<dyn DocumentRenderer<W>>,
    document: &LaidOutDocument,
    info: &DocumentInfo,
    writer: W,
) -> Result<W, RenderError> {
    renderer.begin_document(writer, info, document.page_size)?;
    for page in &document.pages {
        renderer.render_page(page)?;
    }
    renderer.finish()
}
