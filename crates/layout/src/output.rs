use crate::elements::PositionedElement;
use freightdoc_format::{NumericKind, sum_numeric_field};
use freightdoc_types::{CargoLine, DocumentKind, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub index: usize,
    pub elements: Vec<PositionedElement>,
    /// Region between the top and bottom margins that flowing content may use.
    pub content_area: Rect,
}

impl LaidOutPage {
    /// All text runs on the page in placement order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| e.text())
    }
}

/// Aggregates over every cargo line of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CargoTotals {
    pub packages: f64,
    pub weight: f64,
    pub volume: f64,
}

impl CargoTotals {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a CargoLine>,
    {
        let lines: Vec<&CargoLine> = lines.into_iter().collect();
        Self {
            packages: sum_numeric_field(
                lines.iter().copied(),
                |l| l.packages.as_str(),
                NumericKind::Integer,
            ),
            weight: sum_numeric_field(lines.iter().copied(), |l| l.weight.as_str(), NumericKind::Decimal),
            volume: sum_numeric_field(lines.iter().copied(), |l| l.volume.as_str(), NumericKind::Decimal),
        }
    }
}

/// Where one cargo line (data row plus description row) ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    /// Position of the line in document order, across containers.
    pub line_index: usize,
    pub page_index: usize,
    pub rect: Rect,
}

/// Problems absorbed during layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutDiagnostics {
    /// Boxes refused because of non-finite or empty geometry.
    pub skipped_boxes: usize,
    /// Text lines that did not fit into their fixed-height box.
    pub dropped_lines: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub kind: DocumentKind,
    pub page_size: Size,
    pub pages: Vec<LaidOutPage>,
    pub totals: CargoTotals,
    pub cargo_rows: Vec<RowPlacement>,
    pub diagnostics: LayoutDiagnostics,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
