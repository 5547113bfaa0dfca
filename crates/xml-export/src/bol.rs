//! DCSA shipping instruction for a bill of lading.

use crate::emitter::XmlEmitter;
use crate::error::XmlExportError;
use crate::summary::write_summary;
use crate::BOL_NAMESPACE;
use chrono::SecondsFormat;
use freightdoc_format::{format_date_only, or_default, pick_payment_term};
use freightdoc_types::{BillOfLading, CargoLine, ContainerUnit, ExportStamp, Party};

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "https://dcsa.org/schemas/ebl/v3 shipping-instruction-v3.0.0.xsd";
const DEFAULT_ORIGINALS: &str = "3";
const DEFAULT_CURRENCY: &str = "USD";

pub(crate) fn write_shipping_instruction(
    bol: &BillOfLading,
    stamp: &ExportStamp,
) -> Result<String, XmlExportError> {
    let mut xml = XmlEmitter::new();
    let timestamp = stamp.issued_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let originals = or_default(&bol.number_of_originals, DEFAULT_ORIGINALS);

    xml.declaration()?;
    xml.start_with(
        "ShippingInstruction",
        &[
            ("xmlns", BOL_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ],
    )?;

    xml.text("shippingInstructionReference", &bol.bol_number)?;
    xml.literal("documentIdentifier", &stamp.export_id)?;
    xml.literal("documentStatus", "RECEIVED")?;
    xml.literal("shippingInstructionCreatedDateTime", &timestamp)?;
    xml.literal("shippingInstructionUpdatedDateTime", &timestamp)?;
    xml.literal("transportDocumentType", "BOL")?;
    xml.literal("isShippedOnBoardType", "true")?;
    let on_board = format_date_only(&bol.on_board_date);
    if !on_board.is_empty() {
        xml.literal("shippedOnBoardDate", &on_board)?;
    }
    xml.text("numberOfCopies", originals)?;
    xml.text("numberOfOriginals", originals)?;

    write_party(&mut xml, "shipper", &bol.shipper)?;
    write_party(&mut xml, "consignee", &bol.consignee)?;
    if !bol.notify_party.name.trim().is_empty() {
        write_party(&mut xml, "notifyParty", &bol.notify_party)?;
    }

    let stowed: Vec<(&ContainerUnit, &CargoLine)> = bol.stowed_lines().collect();
    if stowed.is_empty() {
        xml.literal("cargoItems", "")?;
    } else {
        xml.start("cargoItems")?;
        for (container, line) in &stowed {
            write_cargo_item(&mut xml, container, line)?;
        }
        xml.end("cargoItems")?;
    }

    let lines: Vec<&CargoLine> = stowed.iter().map(|(_, line)| *line).collect();
    write_summary(&mut xml, &lines)?;

    if bol.containers.is_empty() {
        xml.literal("utilizedTransportEquipments", "")?;
    } else {
        xml.start("utilizedTransportEquipments")?;
        for container in &bol.containers {
            write_equipment(&mut xml, container)?;
        }
        xml.end("utilizedTransportEquipments")?;
    }

    write_transport_plan(&mut xml, bol)?;
    write_charges(&mut xml, bol)?;

    xml.start("references")?;
    xml.start("reference")?;
    xml.literal("referenceType", "FF")?;
    xml.text("referenceValue", &bol.export_reference)?;
    xml.end("reference")?;
    xml.end("references")?;

    xml.end("ShippingInstruction")?;
    xml.finish()
}

fn write_party(xml: &mut XmlEmitter, tag: &str, party: &Party) -> Result<(), XmlExportError> {
    xml.start(tag)?;
    xml.text("partyName", &party.name)?;
    xml.start("address")?;
    xml.text("street", &party.address)?;
    xml.text("city", &party.city)?;
    xml.text("country", &party.country)?;
    xml.end("address")?;
    xml.end(tag)
}

fn write_cargo_item(xml: &mut XmlEmitter, container: &ContainerUnit, line: &CargoLine) -> Result<(), XmlExportError> {
    xml.start("cargoItem")?;
    xml.start("cargoLineItems")?;
    xml.start("cargoLineItem")?;
    xml.text("shippingMarks", &line.marks)?;
    xml.text("cargoDescription", &line.description)?;
    xml.literal("HSCode", "")?;
    xml.end("cargoLineItem")?;
    xml.end("cargoLineItems")?;
    xml.text("weight", &line.weight)?;
    xml.literal("weightUnit", "KGM")?;
    xml.text("volume", &line.volume)?;
    xml.literal("volumeUnit", "MTQ")?;
    xml.text("packageQuantity", &line.packages)?;
    xml.text("packageCode", line.package_type.code())?;
    xml.text("equipmentReference", &container.container_number)?;
    xml.end("cargoItem")
}

fn write_equipment(xml: &mut XmlEmitter, container: &ContainerUnit) -> Result<(), XmlExportError> {
    xml.start("utilizedTransportEquipment")?;
    xml.text("equipmentReference", &container.container_number)?;
    xml.text("ISOEquipmentCode", container.container_type.code())?;
    xml.start("seals")?;
    xml.start("seal")?;
    xml.text("sealNumber", &container.seal_number)?;
    xml.literal("sealSource", "SHI")?;
    xml.literal("sealType", "WIR")?;
    xml.end("seal")?;
    xml.end("seals")?;
    xml.end("utilizedTransportEquipment")
}

fn write_transport_plan(xml: &mut XmlEmitter, bol: &BillOfLading) -> Result<(), XmlExportError> {
    xml.start("transportPlan")?;
    xml.start("transportPlanStage")?;
    xml.literal("transportPlanStageSequenceNumber", "1")?;
    xml.literal("modeOfTransport", "VESSEL")?;
    xml.text("vesselName", &bol.vessel_name)?;
    xml.text("voyageNumber", &bol.voyage_number)?;
    for (tag, location) in [
        ("placeOfReceipt", &bol.place_of_receipt),
        ("portOfLoading", &bol.port_of_loading),
        ("portOfDischarge", &bol.port_of_discharge),
        ("placeOfDelivery", &bol.place_of_delivery),
    ] {
        xml.start(tag)?;
        xml.text("locationName", location)?;
        xml.end(tag)?;
    }
    xml.end("transportPlanStage")?;
    xml.end("transportPlan")
}

fn write_charges(xml: &mut XmlEmitter, bol: &BillOfLading) -> Result<(), XmlExportError> {
    let charges: Vec<(&str, &str)> = [("FREIGHT", &bol.freight_charges), ("OTHER", &bol.other_charges)]
        .into_iter()
        .map(|(name, amount)| (name, amount.trim()))
        .filter(|(_, amount)| !amount.is_empty())
        .collect();

    if charges.is_empty() {
        return xml.literal("charges", "");
    }

    let currency = or_default(&bol.charges_currency, DEFAULT_CURRENCY);
    let term = pick_payment_term(bol.prepaid, bol.collect);
    xml.start("charges")?;
    for (name, amount) in charges {
        xml.start("charge")?;
        xml.literal("chargeName", name)?;
        xml.text("chargeAmount", amount)?;
        xml.text("chargeCurrency", currency)?;
        xml.literal("paymentTerm", term)?;
        xml.end("charge")?;
    }
    xml.end("charges")
}
