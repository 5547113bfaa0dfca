// src/error.rs
use crate::pipeline::ExportKind;
use freightdoc_layout::LayoutError;
use freightdoc_render_core::RenderError;
use freightdoc_types::DocumentKind;
use freightdoc_xml::XmlExportError;
use thiserror::Error;

/// The stage-level cause carried by [`ExportError::RenderFailure`].
#[derive(Error, Debug)]
pub enum StageError {
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("PDF: {0}")]
    Pdf(#[from] RenderError),
    #[error("XML: {0}")]
    Xml(#[from] XmlExportError),
}

/// A comprehensive error type for the export pipeline.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render {document} as {export}: {source}")]
    RenderFailure {
        document: DocumentKind,
        export: ExportKind,
        #[source]
        source: StageError,
    },

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LayoutError> for ExportError {
    fn from(e: LayoutError) -> Self {
        ExportError::Config(e.to_string())
    }
}
