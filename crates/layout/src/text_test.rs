use crate::FontFace;
use crate::metrics::text_width;
use crate::text::{clip_text, wrap_text};

#[test]
fn wraps_on_word_boundaries() {
    let width = text_width("Sawn spruce", FontFace::Regular, 10.0) + 1.0;
    let lines = wrap_text("Sawn spruce boards kiln dried", width, FontFace::Regular, 10.0);
    assert_eq!(lines[0], "Sawn spruce");
    assert!(lines.len() >= 2);
    for line in &lines {
        assert!(text_width(line, FontFace::Regular, 10.0) <= width);
    }
}

#[test]
fn breaks_words_longer_than_a_line() {
    let width = text_width("MMMM", FontFace::Bold, 8.0);
    let lines = wrap_text("MMMMMMMMMM", width, FontFace::Bold, 8.0);
    assert_eq!(lines, vec!["MMMM", "MMMM", "MM"]);
}

#[test]
fn honours_explicit_newlines_and_blank_input() {
    let lines = wrap_text("first\nsecond", 500.0, FontFace::Regular, 8.0);
    assert_eq!(lines, vec!["first", "second"]);
    assert!(wrap_text("   ", 500.0, FontFace::Regular, 8.0).is_empty());
    assert!(wrap_text("text", 0.0, FontFace::Regular, 8.0).is_empty());
}

#[test]
fn clip_keeps_short_text_and_truncates_long_text() {
    assert_eq!(clip_text("TEMU1234567", 200.0, FontFace::Regular, 8.0), "TEMU1234567");
    let clipped = clip_text("abcdefghijklmnopqrstuvwxyz", 30.0, FontFace::Regular, 8.0);
    assert!(clipped.len() < 26);
    assert!(text_width(&clipped, FontFace::Regular, 8.0) <= 30.0);
    assert_eq!(clip_text("two\nlines", 200.0, FontFace::Regular, 8.0), "two lines");
}
