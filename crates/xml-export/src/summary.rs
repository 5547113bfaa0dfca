use crate::emitter::XmlEmitter;
use crate::error::XmlExportError;
use freightdoc_format::{NumericKind, format_quantity, sum_numeric_field};
use freightdoc_types::CargoLine;

/// `<summary>` with package, weight and volume totals over `lines`.
pub(crate) fn write_summary(xml: &mut XmlEmitter, lines: &[&CargoLine]) -> Result<(), XmlExportError> {
    let packages = sum_numeric_field(lines.iter().copied(), |l| l.packages.as_str(), NumericKind::Integer);
    let weight = sum_numeric_field(lines.iter().copied(), |l| l.weight.as_str(), NumericKind::Decimal);
    let volume = sum_numeric_field(lines.iter().copied(), |l| l.volume.as_str(), NumericKind::Decimal);

    xml.start("summary")?;
    xml.literal("totalPackages", &format_quantity(packages))?;
    xml.literal_with("totalWeight", &[("unit", "kg")], &format_quantity(weight))?;
    xml.literal_with("totalVolume", &[("unit", "m3")], &format_quantity(volume))?;
    xml.end("summary")
}
