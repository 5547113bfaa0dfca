//! Cursor-driven page canvas.
//!
//! Content is placed top-down. `ensure_space` is the only place a page break happens, and
//! `place_box` is the only place box geometry is validated, so the form code never checks
//! either itself.

use crate::config::{LayoutConfig, PageGeometry};
use crate::elements::{FontFace, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle};
use crate::output::{LaidOutPage, LayoutDiagnostics};
use crate::text::clip_text;
use crate::GeometryError;
use freightdoc_types::{Color, Rect};
use log::{debug, warn};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * POINTS_PER_MM
}

/// Horizontal inset of text inside a box.
pub const TEXT_INSET_MM: f32 = 2.0;
/// Vertical inset of the first line inside a multi-line box.
const LINE_INSET_MM: f32 = 1.5;
const LINE_SPACING: f32 = 1.25;
const BORDER_WIDTH: f32 = 0.5;
const FOOTER_FONT_SIZE: f32 = 6.0;
const PAGE_LABEL_FONT_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Returns `Ok` when a rectangle can be drawn.
pub fn validate_rect(rect: &Rect) -> Result<(), GeometryError> {
    if ![rect.x, rect.y, rect.width, rect.height]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(GeometryError::NonFinite(*rect));
    }
    if !rect.is_drawable() {
        return Err(GeometryError::EmptyExtent {
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}

/// Black or white, whichever reads on `fill`.
pub(crate) fn text_color_on(fill: Color) -> Color {
    if fill.luminance() < 0.5 {
        Color::white()
    } else {
        Color::black()
    }
}

pub struct PageCanvas<'a> {
    config: &'a LayoutConfig,
    geometry: PageGeometry,
    cursor_y: f32,
    page_index: usize,
    elements: Vec<PositionedElement>,
    finished: Vec<Vec<PositionedElement>>,
    running_header: Option<String>,
    diagnostics: LayoutDiagnostics,
}

impl<'a> PageCanvas<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        let geometry = config.geometry();
        Self {
            config,
            geometry,
            cursor_y: geometry.content_top(0),
            page_index: 0,
            elements: Vec::new(),
            finished: Vec::new(),
            running_header: None,
            diagnostics: LayoutDiagnostics::default(),
        }
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn content_left(&self) -> f32 {
        self.geometry.margin
    }

    pub fn content_width(&self) -> f32 {
        self.geometry.content_width()
    }

    pub fn content_bottom(&self) -> f32 {
        self.geometry.content_bottom
    }

    /// Height of one line of body text.
    pub fn line_height(&self) -> f32 {
        self.config.body_font_size * LINE_SPACING
    }

    pub fn diagnostics(&self) -> &LayoutDiagnostics {
        &self.diagnostics
    }

    /// Text drawn at the top of every continuation page.
    pub fn set_running_header(&mut self, header: impl Into<String>) {
        self.running_header = Some(header.into());
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    fn at_page_top(&self) -> bool {
        self.cursor_y <= self.geometry.content_top(self.page_index) + 0.01
    }

    /// Starts a new page unless `required` points still fit above the bottom margin.
    ///
    /// Returns `true` when a break happened. A block taller than the whole usable height is
    /// placed at the top of the current fresh page instead of breaking again.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.cursor_y + required <= self.geometry.content_bottom + 0.01 {
            return false;
        }
        if self.at_page_top() {
            warn!(
                "Block of {:.1}pt exceeds the usable page height; placing it at the top of page {}",
                required,
                self.page_index + 1
            );
            return false;
        }
        self.break_page();
        true
    }

    fn break_page(&mut self) {
        debug!("Page {} full at y={:.1}, starting a new page", self.page_index + 1, self.cursor_y);
        self.finished.push(std::mem::take(&mut self.elements));
        self.page_index += 1;
        self.cursor_y = self.geometry.content_top(self.page_index);

        if let Some(header) = self.running_header.clone() {
            let size = self.config.body_font_size;
            let rect = Rect::new(
                self.geometry.margin,
                self.geometry.margin,
                self.geometry.content_width(),
                size,
            );
            self.place_text(rect, &header, TextStyle::bold(size), Align::Left);
        }
    }

    fn push(&mut self, rect: Rect, element: LayoutElement) {
        self.elements.push(PositionedElement {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        });
    }

    fn accept(&mut self, rect: &Rect) -> bool {
        match validate_rect(rect) {
            Ok(()) => true,
            Err(err) => {
                warn!("Skipping box on page {}: {}", self.page_index + 1, err);
                self.diagnostics.skipped_boxes += 1;
                false
            }
        }
    }

    /// Draws a bordered box with optional single-line content, vertically centred and
    /// clipped to the box width. Invalid rectangles are skipped. The cursor does not move.
    pub fn place_box(&mut self, rect: Rect, content: Option<&str>) -> bool {
        if !self.accept(&rect) {
            return false;
        }
        self.push(
            rect,
            LayoutElement::Rectangle(RectElement {
                stroke: Some(Color::black()),
                fill: None,
                line_width: BORDER_WIDTH,
            }),
        );
        if let Some(text) = content.filter(|t| !t.trim().is_empty()) {
            let style = TextStyle::regular(self.config.body_font_size);
            let inset = mm(TEXT_INSET_MM);
            let line = Rect::new(
                rect.x + inset,
                rect.y + (rect.height - style.size) / 2.0,
                rect.width - 2.0 * inset,
                style.size,
            );
            self.place_text(line, text, style, Align::Left);
        }
        true
    }

    /// Draws a bordered box of fixed height holding an optional bold heading and body
    /// lines. Lines that do not fit are dropped and counted.
    pub fn place_lines(&mut self, rect: Rect, heading: Option<&str>, lines: &[String]) -> bool {
        if !self.accept(&rect) {
            return false;
        }
        self.push(
            rect,
            LayoutElement::Rectangle(RectElement {
                stroke: Some(Color::black()),
                fill: None,
                line_width: BORDER_WIDTH,
            }),
        );

        let size = self.config.body_font_size;
        let line_height = self.line_height();
        let inset_x = mm(TEXT_INSET_MM);
        let inset_y = mm(LINE_INSET_MM);
        let capacity = ((rect.height - 2.0 * inset_y) / line_height).floor().max(0.0) as usize;

        let runs = heading
            .map(|h| (h, FontFace::Bold))
            .into_iter()
            .chain(lines.iter().map(|l| (l.as_str(), FontFace::Regular)));
        let mut placed = 0;
        let mut dropped = 0;
        for (text, font) in runs {
            if placed >= capacity {
                dropped += 1;
                continue;
            }
            let line = Rect::new(
                rect.x + inset_x,
                rect.y + inset_y + placed as f32 * line_height,
                rect.width - 2.0 * inset_x,
                size,
            );
            let style = TextStyle { font, size, color: Color::black() };
            self.place_text(line, text, style, Align::Left);
            placed += 1;
        }
        if dropped > 0 {
            debug!("Dropped {} line(s) that did not fit a {:.1}pt box", dropped, rect.height);
            self.diagnostics.dropped_lines += dropped;
        }
        true
    }

    /// Fills a band with `fill` and sets `title` in bold on it, inverted on dark fills.
    pub fn fill_band(&mut self, rect: Rect, title: &str, fill: Color) -> bool {
        if !self.accept(&rect) {
            return false;
        }
        self.push(
            rect,
            LayoutElement::Rectangle(RectElement {
                stroke: None,
                fill: Some(fill),
                line_width: 0.0,
            }),
        );
        let text_color = text_color_on(fill);
        let size = self.config.body_font_size;
        let inset = mm(TEXT_INSET_MM);
        let line = Rect::new(
            rect.x + inset,
            rect.y + (rect.height - size) / 2.0,
            rect.width - 2.0 * inset,
            size,
        );
        self.place_text(line, title, TextStyle::bold(size).with_color(text_color), Align::Left);
        true
    }

    /// Sets one line of text inside `rect`: `rect.y` is the top of the line box and the text
    /// is clipped to `rect.width`, then aligned horizontally.
    pub fn place_text(&mut self, rect: Rect, text: &str, style: TextStyle, align: Align) {
        if text.is_empty() {
            return;
        }
        if ![rect.x, rect.y, rect.width].iter().all(|v| v.is_finite()) || rect.width <= 0.0 {
            warn!("Skipping text '{}' with unusable position {:?}", text, rect);
            self.diagnostics.skipped_boxes += 1;
            return;
        }
        let content = clip_text(text, rect.width, style.font, style.size);
        let width = crate::metrics::text_width(&content, style.font, style.size);
        let x = match align {
            Align::Left => rect.x,
            Align::Center => rect.x + (rect.width - width) / 2.0,
            Align::Right => rect.right() - width,
        };
        self.push(
            Rect::new(x, rect.y, width, style.size),
            LayoutElement::Text(TextElement { content, style }),
        );
    }

    /// Closes the last page and stamps every page with the footer notice and its number.
    pub fn finish(mut self, footer_notice: &str) -> (Vec<LaidOutPage>, LayoutDiagnostics) {
        self.finished.push(std::mem::take(&mut self.elements));
        let total = self.finished.len();
        let geometry = self.geometry;
        let mut pages = Vec::with_capacity(total);

        for (index, elements) in std::mem::take(&mut self.finished).into_iter().enumerate() {
            self.elements = elements;
            let label_rect = Rect::new(
                geometry.margin,
                geometry.height - mm(12.0),
                geometry.content_width(),
                PAGE_LABEL_FONT_SIZE,
            );
            self.place_text(
                label_rect,
                &format!("Page {} of {}", index + 1, total),
                TextStyle::regular(PAGE_LABEL_FONT_SIZE),
                Align::Right,
            );
            let notice_rect = Rect::new(
                geometry.margin,
                geometry.height - mm(6.0),
                geometry.content_width(),
                FOOTER_FONT_SIZE,
            );
            self.place_text(notice_rect, footer_notice, TextStyle::regular(FOOTER_FONT_SIZE), Align::Left);

            let top = geometry.content_top(index);
            pages.push(LaidOutPage {
                index,
                elements: std::mem::take(&mut self.elements),
                content_area: Rect::new(
                    geometry.margin,
                    top,
                    geometry.content_width(),
                    geometry.content_bottom - top,
                ),
            });
        }
        (pages, self.diagnostics)
    }
}
