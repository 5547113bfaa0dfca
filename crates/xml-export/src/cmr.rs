//! CMR consignment document.

use crate::emitter::XmlEmitter;
use crate::error::XmlExportError;
use crate::summary::write_summary;
use crate::CMR_NAMESPACE;
use chrono::SecondsFormat;
use freightdoc_format::{format_date_only, or_default};
use freightdoc_types::{CargoLine, DocumentKind, ExportStamp, Party, RoadConsignmentNote};

const DEFAULT_COD_CURRENCY: &str = "EUR";

pub(crate) fn write_consignment_note(
    note: &RoadConsignmentNote,
    stamp: &ExportStamp,
) -> Result<String, XmlExportError> {
    let mut xml = XmlEmitter::new();

    xml.declaration()?;
    xml.start_with("cmrDocument", &[("xmlns", CMR_NAMESPACE), ("version", "1.0")])?;

    xml.start("documentHeader")?;
    xml.literal("documentType", "CMR")?;
    xml.literal("documentNumber", &stamp.export_id)?;
    xml.text("consignmentNumber", &note.consignment_number)?;
    xml.literal("issueDate", &format_date_only(&note.date_of_signing))?;
    xml.text("issuePlace", &note.place_of_signing)?;
    xml.literal(
        "generatedAt",
        &stamp.issued_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )?;
    xml.end("documentHeader")?;

    xml.comment("1. Sender")?;
    write_party(&mut xml, "sender", &note.sender)?;
    xml.comment("2. Consignee")?;
    write_party(&mut xml, "consignee", &note.consignee)?;

    xml.comment("3. Place and date of taking over the goods")?;
    xml.start("takeoverDetails")?;
    xml.text("place", &note.place_of_takeover)?;
    xml.literal("date", &format_date_only(&note.date_of_takeover))?;
    xml.end("takeoverDetails")?;

    xml.comment("4. Place designated for delivery")?;
    xml.start("deliveryDetails")?;
    xml.text("place", &note.place_of_delivery)?;
    xml.end("deliveryDetails")?;

    xml.comment("5-7. Carrier and successive carriers")?;
    xml.start("carrier")?;
    write_party_body(&mut xml, &note.carrier)?;
    xml.text("successiveCarriers", &note.successive_carriers)?;
    xml.end("carrier")?;

    xml.comment("8. Vehicle")?;
    xml.start("vehicle")?;
    xml.text("registration", &note.vehicle_registration)?;
    xml.text("trailerRegistration", &note.trailer_registration)?;
    xml.end("vehicle")?;

    xml.comment("9-12. Goods")?;
    write_goods(&mut xml, &note.cargo_lines)?;

    let cod_amount = note.cod_amount.trim();
    if !cod_amount.is_empty() {
        xml.comment("13. Cash on delivery")?;
        xml.start("cashOnDelivery")?;
        xml.text_with(
            "amount",
            &[("currency", or_default(&note.cod_currency, DEFAULT_COD_CURRENCY))],
            cod_amount,
        )?;
        xml.end("cashOnDelivery")?;
    }
    write_optional_block(&mut xml, "14. Carrier's reservations", "carriersReservations", &note.carriers_reservations)?;
    write_optional_block(&mut xml, "15. Agreed upon", "agreedUpon", &note.agreed_upon)?;

    xml.comment("16. To be paid by")?;
    xml.start("freightCharges")?;
    xml.start("paidBy")?;
    xml.literal("sender", bool_text(note.paid_by_sender))?;
    xml.literal("consignee", bool_text(note.paid_by_consignee))?;
    xml.end("paidBy")?;
    xml.text("carriageCharges", &note.carriage_charges)?;
    xml.text("supplements", &note.supplements)?;
    xml.end("freightCharges")?;

    write_optional_block(&mut xml, "17. Instructions for customs", "customsInstructions", &note.customs_instructions)?;
    write_optional_block(&mut xml, "Special agreements", "specialAgreements", &note.special_agreements)?;
    write_optional_block(&mut xml, "Documents attached", "documentsAttached", &note.documents_attached)?;

    xml.comment("Signatures")?;
    xml.start("signatures")?;
    for (tag, signature) in [
        ("sender", &note.sender_signature),
        ("carrier", &note.carrier_signature),
        ("consignee", &note.consignee_signature),
    ] {
        xml.start(tag)?;
        xml.text("signature", signature)?;
        xml.end(tag)?;
    }
    xml.end("signatures")?;

    xml.text_block("legalNotice", DocumentKind::RoadConsignmentNote.legal_notice())?;

    xml.end("cmrDocument")?;
    xml.finish()
}

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn write_party(xml: &mut XmlEmitter, tag: &str, party: &Party) -> Result<(), XmlExportError> {
    xml.start(tag)?;
    write_party_body(xml, party)?;
    xml.end(tag)
}

fn write_party_body(xml: &mut XmlEmitter, party: &Party) -> Result<(), XmlExportError> {
    xml.text("name", &party.name)?;
    xml.start("address")?;
    xml.text("street", &party.address)?;
    xml.text("city", &party.city)?;
    xml.text("country", &party.country)?;
    xml.end("address")
}

fn write_goods(xml: &mut XmlEmitter, lines: &[CargoLine]) -> Result<(), XmlExportError> {
    let refs: Vec<&CargoLine> = lines.iter().collect();
    xml.start("goods")?;
    write_summary(xml, &refs)?;
    if lines.is_empty() {
        xml.literal("cargoItems", "")?;
    } else {
        xml.start("cargoItems")?;
        for line in lines {
            xml.start("cargoItem")?;
            xml.text("quantity", &line.packages)?;
            xml.text("packageType", line.package_type.code())?;
            xml.text("description", &line.description)?;
            xml.text_with("weight", &[("unit", "kg")], &line.weight)?;
            xml.text_with("volume", &[("unit", "m3")], &line.volume)?;
            xml.text("marks", &line.marks)?;
            xml.end("cargoItem")?;
        }
        xml.end("cargoItems")?;
    }
    xml.end("goods")
}

/// `<tag><text>..</text></tag>` preceded by a comment, skipped when `value` is blank.
fn write_optional_block(xml: &mut XmlEmitter, label: &str, tag: &str, value: &str) -> Result<(), XmlExportError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    xml.comment(label)?;
    xml.text_block(tag, value)
}
