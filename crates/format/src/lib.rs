//! Pure text helpers shared by the PDF and XML renderers.
//!
//! Nothing in this crate fails: malformed input degrades to an empty string or to zero so a
//! half-filled form still renders.

mod date;
mod escape;
mod filename;
mod numeric;
mod terms;

pub use date::format_date_only;
pub use escape::escape_markup_text;
pub use filename::artifact_filename;
pub use numeric::{NumericKind, format_quantity, parse_numeric, sum_numeric_field};
pub use terms::{checkbox, or_default, pick_payment_term};
