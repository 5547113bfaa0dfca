// src/pipeline/builder.rs
use super::config::ExportConfig;
use super::orchestrator::ExportPipeline;
use crate::error::ExportError;
use freightdoc_layout::{LayoutConfig, LayoutEngine};
use std::fs;
use std::io;
use std::path::Path;

/// A builder for creating an `ExportPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: ExportConfig,
}

impl PipelineBuilder {
    /// Creates a builder with A4 page geometry and the default producer string.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the page geometry and row sizing.
    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    /// Loads an [`ExportConfig`] from a JSON file, replacing every setting made so far.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ExportError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            ExportError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.config = serde_json::from_str(&source)?;
        log::debug!("Loaded export configuration from {}", path_ref.display());
        Ok(self)
    }

    /// Sets the producer written into the PDF Info dictionary.
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.config.producer = producer.into();
        self
    }

    /// Consumes the builder and creates the `ExportPipeline`.
    /// Fails when the page geometry leaves no room for content.
    pub fn build(self) -> Result<ExportPipeline, ExportError> {
        if self.config.producer.trim().is_empty() {
            return Err(ExportError::Config("Producer must not be empty".to_string()));
        }
        let engine = LayoutEngine::new(self.config.layout)?;
        Ok(ExportPipeline::new(engine, self.config.producer))
    }
}
