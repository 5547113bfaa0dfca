//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting the PDF writing steps
//! - Error types for rendering operations
//! - Shared helpers for text encoding and coordinate conversion

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentInfo, DocumentRenderer, render_document};
