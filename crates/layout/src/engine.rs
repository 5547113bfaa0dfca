use crate::canvas::PageCanvas;
use crate::config::LayoutConfig;
use crate::output::LaidOutDocument;
use crate::sections::{bol, cmr};
use crate::LayoutError;
use freightdoc_types::{DocumentRecord, ExportStamp, Size};
use log::{debug, info};

/// Lays shipping documents out onto fixed-size pages.
///
/// The engine holds only validated configuration, so one instance can serve any number of
/// documents from any number of threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(
        &self,
        record: &DocumentRecord,
        stamp: &ExportStamp,
    ) -> Result<LaidOutDocument, LayoutError> {
        let mut canvas = PageCanvas::new(&self.config);
        let kind = record.kind();
        debug!("Laying out {} '{}'", kind, record.primary_identifier());

        let (totals, cargo_rows) = match record {
            DocumentRecord::BillOfLading(doc) => bol::lay_out(&mut canvas, doc, stamp),
            DocumentRecord::RoadConsignmentNote(doc) => cmr::lay_out(&mut canvas, doc, stamp),
        };

        let geometry = *canvas.geometry();
        let (pages, diagnostics) = canvas.finish(kind.legal_notice());
        info!(
            "Laid out {} on {} page(s) with {} cargo row(s), {} box(es) skipped",
            kind,
            pages.len(),
            cargo_rows.len(),
            diagnostics.skipped_boxes
        );

        Ok(LaidOutDocument {
            kind,
            page_size: Size::new(geometry.width, geometry.height),
            pages,
            totals,
            cargo_rows,
            diagnostics,
        })
    }
}
