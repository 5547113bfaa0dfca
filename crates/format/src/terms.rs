/// Payment term for the charge entries.
///
/// Prepaid wins when both flags are set, and an unset pair also reads as prepaid, matching
/// the printed form's "prepaid unless marked otherwise" rule.
pub fn pick_payment_term(prepaid: bool, collect: bool) -> &'static str {
    if prepaid {
        "PREPAID"
    } else if collect {
        "COLLECT"
    } else {
        "PREPAID"
    }
}

/// Printable checkbox. The standard PDF fonts carry no ballot box glyphs.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[X]" } else { "[ ]" }
}

/// The trimmed value, or `fallback` when it is blank.
pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}
