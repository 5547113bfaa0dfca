// src/pipeline/orchestrator.rs
use super::artifact::Artifact;
use super::config::ExportKind;
use crate::error::{ExportError, StageError};
use freightdoc_format::artifact_filename;
use freightdoc_layout::LayoutEngine;
use freightdoc_render_core::{DocumentInfo, render_document};
use freightdoc_render_lopdf::LopdfRenderer;
use freightdoc_types::{DocumentRecord, ExportStamp};
use freightdoc_xml::XmlSerializer;
use log::{debug, info};
use std::io::Cursor;

/// Turns document records into PDF or XML artifacts.
///
/// Holds only immutable configuration; every call captures its own [`ExportStamp`], so a
/// single pipeline can be shared across threads.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    engine: LayoutEngine,
    xml: XmlSerializer,
    producer: String,
}

impl ExportPipeline {
    pub(super) fn new(engine: LayoutEngine, producer: String) -> Self {
        Self {
            engine,
            xml: XmlSerializer::new(),
            producer,
        }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Renders `record` with a freshly generated stamp.
    pub fn export(&self, record: &DocumentRecord, kind: ExportKind) -> Result<Artifact, ExportError> {
        let stamp = ExportStamp::generate(record.kind().prefix());
        self.export_with_stamp(record, kind, &stamp)
    }

    /// Renders `record` under a caller-supplied stamp. Output is fully determined by the
    /// record, the stamp and the pipeline configuration.
    pub fn export_with_stamp(
        &self,
        record: &DocumentRecord,
        kind: ExportKind,
        stamp: &ExportStamp,
    ) -> Result<Artifact, ExportError> {
        let document = record.kind();
        debug!("Exporting {} '{}' as {}", document, record.primary_identifier(), kind);

        let bytes = match kind {
            ExportKind::Pdf => self.render_pdf(record, stamp),
            ExportKind::Xml => self
                .xml
                .serialize(record, stamp)
                .map(String::into_bytes)
                .map_err(StageError::from),
        }
        .map_err(|source| ExportError::RenderFailure {
            document,
            export: kind,
            source,
        })?;

        let filename = artifact_filename(
            document.prefix(),
            record.primary_identifier(),
            stamp.issue_date(),
            kind.extension(),
        );
        info!("Exported {} ({} bytes)", filename, bytes.len());

        Ok(Artifact {
            filename,
            media_type: kind.media_type(),
            bytes,
            export: kind,
        })
    }

    fn render_pdf(&self, record: &DocumentRecord, stamp: &ExportStamp) -> Result<Vec<u8>, StageError> {
        let laid_out = self.engine.layout(record, stamp)?;
        let info = DocumentInfo {
            title: format!("{} {}", record.kind().title(), record.primary_identifier())
                .trim_end()
                .to_string(),
            producer: self.producer.clone(),
            created_at: stamp.issued_at,
        };
        let renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
        let writer = render_document(
            Box::new(renderer),
            &laid_out,
            &info,
            Cursor::new(Vec::new()),
        )?;
        Ok(writer.into_inner())
    }
}
