//! Export pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder, validates configuration up front
//! - [`ExportPipeline`]: dispatches a record to the PDF or XML renderer
//! - [`Artifact`]: the produced file with its name and media type

mod artifact;
mod builder;
pub mod config;
mod orchestrator;

pub use artifact::Artifact;
pub use builder::PipelineBuilder;
pub use config::{ExportConfig, ExportKind};
pub use orchestrator::ExportPipeline;
