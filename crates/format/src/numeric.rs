/// How a numeric text field is interpreted when aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Whole numbers, e.g. package counts.
    Integer,
    /// Decimal numbers, e.g. weights and volumes.
    Decimal,
}

/// Parses the leading number of a form field, so `"12 boxes"` reads as 12 and
/// `"250.5 kg"` as 250.5. `Integer` stops at the decimal point (`"10.5"` is 10).
/// Text without a leading number and non-finite results are `None`.
pub fn parse_numeric(value: &str, kind: NumericKind) -> Option<f64> {
    let prefix = numeric_prefix(value.trim(), kind);
    if prefix.is_empty() {
        return None;
    }
    let parsed = match kind {
        NumericKind::Integer => prefix.parse::<i64>().ok().map(|n| n as f64),
        NumericKind::Decimal => prefix.parse::<f64>().ok(),
    };
    parsed.filter(|n| n.is_finite())
}

/// Longest prefix of `text` that forms a number of the given kind, or `""`.
fn numeric_prefix(text: &str, kind: NumericKind) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;
    let mut mantissa_digits = int_digits;

    if kind == NumericKind::Decimal {
        if bytes.get(end) == Some(&b'.') {
            let fraction = digits_from(end + 1);
            if fraction > 0 || int_digits > 0 {
                end += 1 + fraction;
                mantissa_digits += fraction;
            }
        }
        if mantissa_digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
            let exponent = digits_from(end + 1 + sign);
            if exponent > 0 {
                end += 1 + sign + exponent;
            }
        }
    }

    if mantissa_digits == 0 { "" } else { &text[..end] }
}

/// Sums a numeric text field over a collection, counting unparseable values as zero.
pub fn sum_numeric_field<'a, T, I, F>(items: I, selector: F, kind: NumericKind) -> f64
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    items
        .into_iter()
        .map(|item| parse_numeric(selector(item), kind).unwrap_or(0.0))
        .sum()
}

/// Renders an aggregate without locale grouping: `15`, `750.5`.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
