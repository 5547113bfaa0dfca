/// Replaces the five markup-significant characters with their predefined entities.
///
/// The replacement is a single pass, so escaping already escaped text escapes it again
/// (`&amp;` becomes `&amp;amp;`). Callers escape each value exactly once.
pub fn escape_markup_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
