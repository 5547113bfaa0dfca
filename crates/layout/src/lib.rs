use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Why a box was refused by the canvas. Logged and counted, never returned to callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Rectangle has a non-finite coordinate: {0:?}")]
    NonFinite(Rect),
    #[error("Rectangle extent {width:.2}x{height:.2} is not strictly positive")]
    EmptyExtent { width: f32, height: f32 },
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

mod elements;
mod sections;
pub mod canvas;
pub mod config;
pub mod metrics;
pub mod output;
pub mod text;

pub use self::canvas::{Align, PageCanvas, mm};
pub use self::config::{LayoutConfig, PageGeometry};
pub use self::elements::{FontFace, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle};
pub use self::output::{CargoTotals, LaidOutDocument, LaidOutPage, LayoutDiagnostics, RowPlacement};

pub use freightdoc_types::geometry::{Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
