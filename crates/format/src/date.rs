use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Normalises a user-entered date to `YYYY-MM-DD`.
///
/// Blank input and input that is not a recognisable date both yield an empty string.
/// Timestamps carrying an offset are converted to UTC before the date is taken.
pub fn format_date_only(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_date(trimmed) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            log::debug!("Unrecognised date value '{}', rendering as empty", trimmed);
            String::new()
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}
