//! Advance widths of the standard Helvetica faces, in 1/1000 em, from the Adobe AFM files.

use crate::elements::FontFace;

const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Width used for characters outside the ASCII table (accented letters are close to it).
const FALLBACK_WIDTH: u16 = 556;

pub fn char_width(ch: char, font: FontFace) -> u16 {
    let table = match font {
        FontFace::Regular => &HELVETICA_ASCII,
        FontFace::Bold => &HELVETICA_BOLD_ASCII,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        '\u{b3}' | '\u{b2}' | '\u{b9}' => 333,
        '\u{b0}' => 400,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` set in `font` at `size` points.
pub fn text_width(text: &str, font: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, font))).sum();
    units as f32 * size / 1000.0
}
