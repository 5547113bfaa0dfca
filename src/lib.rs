//! Renders freight shipping documents into printable and interchange artifacts.
//!
//! A [`DocumentRecord`] (bill of lading or CMR consignment note) goes in; an [`Artifact`]
//! holding either a paginated PDF or a schema-shaped XML document comes out.
//!
//! ```ignore
//! use freightdoc::{DocumentKind, DocumentRecord, ExportKind, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let record = DocumentRecord::blank(DocumentKind::BillOfLading);
//! let artifact = pipeline.export(&record, ExportKind::Pdf)?;
//! artifact.write_to_dir("out")?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::{ExportError, StageError};
pub use pipeline::{Artifact, ExportConfig, ExportKind, ExportPipeline, PipelineBuilder};

pub use freightdoc_layout::{LaidOutDocument, LayoutConfig};
pub use freightdoc_types::{
    BillOfLading, CargoLine, ContainerType, ContainerUnit, DocumentKind, DocumentRecord,
    ExportStamp, PackageType, Party, RoadConsignmentNote,
};
