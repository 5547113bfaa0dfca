use chrono::NaiveDate;

/// Builds `<PREFIX>_<identifier>_<YYYY-MM-DD>.<extension>`.
///
/// A blank identifier becomes `draft`. Identifiers containing characters that are unsafe in
/// a file name are slugified; a slug that comes out empty also falls back to `draft`.
pub fn artifact_filename(prefix: &str, identifier: &str, date: NaiveDate, extension: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        prefix,
        filename_component(identifier),
        date.format("%Y-%m-%d"),
        extension
    )
}

fn filename_component(identifier: &str) -> String {
    let trimmed = identifier.trim();
    let is_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
    if trimmed.is_empty() {
        return "draft".to_string();
    }
    if trimmed.chars().all(is_safe) && !trimmed.starts_with('.') {
        return trimmed.to_string();
    }
    let slugged = slug::slugify(trimmed);
    if slugged.is_empty() {
        "draft".to_string()
    } else {
        slugged
    }
}
