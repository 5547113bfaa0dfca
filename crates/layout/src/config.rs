use crate::LayoutError;
use crate::canvas::mm;
use freightdoc_types::Color;
use serde::Deserialize;

/// Page geometry and form metrics used by the layout engine.
///
/// Lengths are millimetres, font sizes are points. Defaults reproduce the printed A4 forms.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Left, right and first-page top margin.
    pub margin_mm: f32,
    /// Where content resumes on continuation pages.
    pub continuation_top_mm: f32,
    /// Content never extends below `page_height - bottom_margin`. The footer lives here.
    pub bottom_margin_mm: f32,
    /// Height of a cargo table data row (and of the header row).
    pub data_row_height_mm: f32,
    /// Height of the description row under every cargo line.
    pub description_row_height_mm: f32,
    /// Description lines kept per cargo line; the rest is dropped.
    pub description_max_lines: usize,
    pub body_font_size: f32,
    pub title_font_size: f32,
    /// Fill of section header bands.
    pub band_fill: Color,
    /// Fill of the cargo totals row.
    pub totals_fill: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            continuation_top_mm: 20.0,
            bottom_margin_mm: 30.0,
            data_row_height_mm: 8.0,
            description_row_height_mm: 12.0,
            description_max_lines: 2,
            body_font_size: 8.0,
            title_font_size: 16.0,
            band_fill: Color::black(),
            totals_fill: Color::gray(200),
        }
    }
}

/// Resolved page geometry in points, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub continuation_top: f32,
    pub content_bottom: f32,
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_top(&self, page_index: usize) -> f32 {
        if page_index == 0 {
            self.margin
        } else {
            self.continuation_top
        }
    }
}

/// Vertical space the tallest unbreakable block needs: a repeated table header
/// (section band plus header row) followed by one cargo row pair.
pub(crate) fn tallest_block_mm(config: &LayoutConfig) -> f32 {
    crate::sections::BAND_HEIGHT_MM + 2.0 * config.data_row_height_mm + config.description_row_height_mm
}

impl LayoutConfig {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            width: mm(self.page_width_mm),
            height: mm(self.page_height_mm),
            margin: mm(self.margin_mm),
            continuation_top: mm(self.continuation_top_mm),
            content_bottom: mm(self.page_height_mm - self.bottom_margin_mm),
        }
    }

    /// Checks that a page can hold the form at all.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let lengths = [
            ("pageWidthMm", self.page_width_mm),
            ("pageHeightMm", self.page_height_mm),
            ("dataRowHeightMm", self.data_row_height_mm),
            ("descriptionRowHeightMm", self.description_row_height_mm),
            ("bodyFontSize", self.body_font_size),
            ("titleFontSize", self.title_font_size),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("marginMm", self.margin_mm),
            ("continuationTopMm", self.continuation_top_mm),
            ("bottomMarginMm", self.bottom_margin_mm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be zero or positive, got {}",
                    name, value
                )));
            }
        }

        let content_width = self.page_width_mm - 2.0 * self.margin_mm;
        if content_width <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "margins of {}mm leave no width on a {}mm page",
                self.margin_mm, self.page_width_mm
            )));
        }

        let needed = tallest_block_mm(self);
        let top = self.margin_mm.max(self.continuation_top_mm);
        let usable = self.page_height_mm - self.bottom_margin_mm - top;
        if usable < needed {
            return Err(LayoutError::InvalidConfig(format!(
                "usable page height of {:.1}mm cannot hold a {:.1}mm cargo table block",
                usable, needed
            )));
        }
        Ok(())
    }
}
