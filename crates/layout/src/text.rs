//! Word wrapping and clipping against the Helvetica metrics.

use crate::elements::FontFace;
use crate::metrics::text_width;

/// Splits `text` into lines no wider than `max_width`.
///
/// Explicit newlines start a new line, words longer than a whole line are broken between
/// characters, and runs of whitespace collapse to one space. Blank input yields no lines.
pub fn wrap_text(text: &str, max_width: f32, font: FontFace, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width <= 0.0 {
        return lines;
    }
    let space = text_width(" ", font, size);

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, font, size);
            if !current.is_empty() && current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let mut pieces = break_word(word, max_width, font, size);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = text_width(&last, font, size);
                current = last;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn break_word(word: &str, max_width: f32, font: FontFace, size: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if piece.chars().count() > 1 && text_width(&piece, font, size) > max_width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Truncates `text` so that it fits into `max_width`. Newlines are flattened to spaces.
pub fn clip_text(text: &str, max_width: f32, font: FontFace, size: f32) -> String {
    let flat: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if text_width(&flat, font, size) <= max_width {
        return flat;
    }
    let mut clipped = String::new();
    let mut width = 0.0;
    for ch in flat.chars() {
        let advance = text_width(ch.encode_utf8(&mut [0; 4]), font, size);
        if width + advance > max_width {
            break;
        }
        width += advance;
        clipped.push(ch);
    }
    log::trace!("Clipped '{}' to '{}'", flat, clipped);
    clipped
}
