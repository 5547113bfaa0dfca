//! Form bands shared by both document kinds.

pub(crate) mod bol;
pub(crate) mod cmr;

use crate::canvas::{Align, PageCanvas, TEXT_INSET_MM, mm, text_color_on};
use crate::elements::{FontFace, TextStyle};
use crate::output::RowPlacement;
use crate::metrics::text_width;
use crate::text::wrap_text;
use freightdoc_types::{Party, Rect};

/// Height of a filled section header band.
pub(crate) const BAND_HEIGHT_MM: f32 = 6.0;
const SIGNATURE_GAP_MM: f32 = 5.0;
const SIGNATURE_PLACE_MM: f32 = 6.0;
const SIGNATURE_LABEL_MM: f32 = 5.0;
const SIGNATURE_BOX_MM: f32 = 20.0;
const CHECKLIST_GAP_MM: f32 = 2.0;

/// Heading plus body lines of one box.
pub(crate) struct BoxContent<'a> {
    pub heading: Option<&'a str>,
    pub lines: Vec<String>,
}

impl<'a> BoxContent<'a> {
    pub fn new(heading: Option<&'a str>, lines: Vec<String>) -> Self {
        Self { heading, lines }
    }
}

pub(crate) fn party_lines(party: &Party) -> Vec<String> {
    vec![
        format!("Name: {}", party.name.trim()),
        format!("Address: {}", party.address.trim()),
        format!("City/State/Zip: {}", party.locality()),
    ]
}

/// Section header band across the content width. Advances the cursor.
pub(crate) fn section_band(canvas: &mut PageCanvas, title: &str) {
    let height = mm(BAND_HEIGHT_MM);
    let rect = Rect::new(canvas.content_left(), canvas.cursor_y(), canvas.content_width(), height);
    let fill = canvas.config().band_fill;
    canvas.fill_band(rect, title, fill);
    canvas.advance(height);
}

/// An optional band followed by a row of equal-width fixed-height boxes, kept together on
/// one page. Advances the cursor past the row and `gap_after_mm`.
pub(crate) fn boxed_row(
    canvas: &mut PageCanvas,
    title: Option<&str>,
    height_mm: f32,
    columns: &[BoxContent],
    gap_after_mm: f32,
) {
    let band = if title.is_some() { mm(BAND_HEIGHT_MM) } else { 0.0 };
    let height = mm(height_mm);
    canvas.ensure_space(band + height);
    if let Some(title) = title {
        section_band(canvas, title);
    }

    let width = canvas.content_width() / columns.len().max(1) as f32;
    let top = canvas.cursor_y();
    for (i, column) in columns.iter().enumerate() {
        let x = canvas.content_left() + i as f32 * width;
        canvas.place_lines(Rect::new(x, top, width, height), column.heading, &column.lines);
    }
    canvas.advance(height + mm(gap_after_mm));
}

/// Column layout of a cargo table. Widths are nominal millimetres, scaled to the content
/// width.
pub(crate) struct CargoTableSpec {
    pub title: &'static str,
    pub continued_title: &'static str,
    pub columns: &'static [(&'static str, f32)],
    pub description_label: &'static str,
}

pub(crate) struct CargoRow<'r> {
    pub cells: Vec<String>,
    pub description: &'r str,
}

impl CargoTableSpec {
    fn column_widths(&self, content_width: f32) -> Vec<f32> {
        let nominal: f32 = self.columns.iter().map(|(_, w)| w).sum();
        self.columns
            .iter()
            .map(|(_, w)| w / nominal * content_width)
            .collect()
    }
}

fn table_header(canvas: &mut PageCanvas, spec: &CargoTableSpec, title: &str) {
    section_band(canvas, title);
    let row_height = mm(canvas.config().data_row_height_mm);
    let top = canvas.cursor_y();
    let mut x = canvas.content_left();
    for ((label, _), width) in spec.columns.iter().zip(spec.column_widths(canvas.content_width())) {
        let rect = Rect::new(x, top, width, row_height);
        canvas.place_box(rect, None);
        let size = canvas.config().body_font_size - 1.0;
        let inset = mm(1.0);
        let line = Rect::new(x + inset, top + (row_height - size) / 2.0, width - 2.0 * inset, size);
        canvas.place_text(line, label, TextStyle::bold(size), Align::Left);
        x += width;
    }
    canvas.advance(row_height);
}

/// Lays out the cargo table: header, then a data row and a description row per line.
///
/// Each pair is kept on one page and the header repeats at the top of every continuation
/// page the table flows onto.
pub(crate) fn cargo_table<'r>(
    canvas: &mut PageCanvas,
    spec: &CargoTableSpec,
    rows: impl IntoIterator<Item = CargoRow<'r>>,
) -> Vec<RowPlacement> {
    let config = canvas.config();
    let row_height = mm(config.data_row_height_mm);
    let description_height = mm(config.description_row_height_mm);
    let pair_height = row_height + description_height;
    let size = config.body_font_size;

    canvas.ensure_space(mm(BAND_HEIGHT_MM) + row_height + pair_height);
    table_header(canvas, spec, spec.title);

    let widths = spec.column_widths(canvas.content_width());
    let text_width = canvas.content_width() - 2.0 * mm(TEXT_INSET_MM);
    let mut placements = Vec::new();

    for (line_index, row) in rows.into_iter().enumerate() {
        if canvas.ensure_space(pair_height) {
            table_header(canvas, spec, spec.continued_title);
        }
        let top = canvas.cursor_y();
        let left = canvas.content_left();

        let mut x = left;
        for (cell, width) in row.cells.iter().zip(&widths) {
            canvas.place_box(Rect::new(x, top, *width, row_height), Some(cell.as_str()));
            x += width;
        }

        let mut lines = wrap_text(
            &format!("{} {}", spec.description_label, row.description.trim()),
            text_width,
            FontFace::Regular,
            size,
        );
        if lines.len() > config.description_max_lines {
            log::debug!(
                "Cargo line {} description truncated to {} line(s)",
                line_index + 1,
                config.description_max_lines
            );
            lines.truncate(config.description_max_lines);
        }
        canvas.place_lines(
            Rect::new(left, top + row_height, canvas.content_width(), description_height),
            None,
            &lines,
        );
        canvas.advance(pair_height);

        placements.push(RowPlacement {
            line_index,
            page_index: canvas.page_index(),
            rect: Rect::new(left, top, canvas.content_width(), pair_height),
        });
    }
    placements
}

/// Shaded totals row: the label on the left, values spread over the right half.
pub(crate) fn totals_row(canvas: &mut PageCanvas, label: &str, values: &[String], gap_after_mm: f32) {
    let height = mm(canvas.config().data_row_height_mm);
    canvas.ensure_space(height);
    let top = canvas.cursor_y();
    let rect = Rect::new(canvas.content_left(), top, canvas.content_width(), height);
    let fill = canvas.config().totals_fill;
    canvas.fill_band(rect, label, fill);

    let size = canvas.config().body_font_size;
    let half = canvas.content_width() / 2.0;
    let slot = half / values.len().max(1) as f32;
    let style = TextStyle::bold(size).with_color(text_color_on(fill));
    for (i, value) in values.iter().enumerate() {
        let x = canvas.content_left() + half + i as f32 * slot;
        let line = Rect::new(x, top + (height - size) / 2.0, slot - mm(TEXT_INSET_MM), size);
        canvas.place_text(line, value, style, Align::Right);
    }
    canvas.advance(height + mm(gap_after_mm));
}

/// A titled list of free-text entries, wrapped to the content width and flowed line by
/// line across pages. Nothing is drawn for an empty list.
pub(crate) fn entry_list(canvas: &mut PageCanvas, title: &str, entries: &[String], gap_after_mm: f32) {
    if entries.is_empty() {
        return;
    }
    let line_height = canvas.line_height();
    let size = canvas.config().body_font_size;
    canvas.ensure_space(mm(BAND_HEIGHT_MM) + line_height);
    section_band(canvas, title);
    canvas.advance(mm(1.0));

    let inset = mm(TEXT_INSET_MM);
    let width = canvas.content_width() - 2.0 * inset;
    for entry in entries {
        for line in wrap_text(entry, width, FontFace::Regular, size) {
            canvas.ensure_space(line_height);
            let rect = Rect::new(canvas.content_left() + inset, canvas.cursor_y(), width, size);
            canvas.place_text(rect, &line, TextStyle::regular(size), Align::Left);
            canvas.advance(line_height);
        }
    }
    canvas.advance(mm(gap_after_mm));
}

/// Place/date line followed by equal-width signature boxes, pushed down to the bottom of
/// the content area of the current page.
///
/// `checklists` sit to the right of the boxes, each as wide as its longest line and as tall
/// as a label plus a signature box. The signature boxes share the remaining width.
pub(crate) fn signature_band(
    canvas: &mut PageCanvas,
    place: &str,
    date: &str,
    boxes: &[(&str, &str)],
    checklists: &[BoxContent],
) {
    let place_height = mm(SIGNATURE_PLACE_MM);
    let label_height = mm(SIGNATURE_LABEL_MM);
    let box_height = mm(SIGNATURE_BOX_MM);
    let band_height = place_height + label_height + box_height;
    canvas.ensure_space(band_height);

    let top = canvas.cursor_y().max(canvas.content_bottom() - band_height);
    let left = canvas.content_left();
    let content_width = canvas.content_width();
    let size = canvas.config().body_font_size;

    let place_rect = Rect::new(left, top, content_width, size);
    canvas.place_text(place_rect, place, TextStyle::bold(size), Align::Left);
    canvas.place_text(place_rect, date, TextStyle::bold(size), Align::Right);

    let checklist_gap = mm(CHECKLIST_GAP_MM);
    let checklist_widths: Vec<f32> = checklists
        .iter()
        .map(|list| checklist_width(list, size))
        .collect();
    let reserved: f32 = checklist_widths.iter().map(|w| w + checklist_gap).sum();

    let count = boxes.len().max(1) as f32;
    let gap = mm(SIGNATURE_GAP_MM);
    let width = ((content_width - reserved - gap * (count - 1.0)) / count).max(0.0);
    for (i, (label, signature)) in boxes.iter().enumerate() {
        let x = left + i as f32 * (width + gap);
        let label_rect = Rect::new(x, top + place_height, width, size);
        canvas.place_text(label_rect, label, TextStyle::bold(size), Align::Left);
        canvas.place_box(
            Rect::new(x, top + place_height + label_height, width, box_height),
            Some(*signature),
        );
    }

    let mut x = left + content_width - reserved;
    for (list, list_width) in checklists.iter().zip(checklist_widths) {
        x += checklist_gap;
        canvas.place_lines(
            Rect::new(x, top + place_height, list_width, label_height + box_height),
            list.heading,
            &list.lines,
        );
        x += list_width;
    }
    let end = top + band_height;
    canvas.advance(end - canvas.cursor_y());
}

fn checklist_width(list: &BoxContent, size: f32) -> f32 {
    let heading = list
        .heading
        .map(|h| text_width(h, FontFace::Bold, size))
        .unwrap_or(0.0);
    let widest = list
        .lines
        .iter()
        .map(|line| text_width(line, FontFace::Regular, size))
        .fold(heading, f32::max);
    widest.ceil() + 2.0 * mm(TEXT_INSET_MM)
}
