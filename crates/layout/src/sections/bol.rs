use super::{
    BoxContent, CargoRow, CargoTableSpec, boxed_row, cargo_table, entry_list, party_lines,
    signature_band, totals_row,
};
use crate::canvas::{Align, PageCanvas, mm};
use crate::elements::TextStyle;
use crate::output::{CargoTotals, RowPlacement};
use freightdoc_format::{checkbox, format_date_only, format_quantity, or_default, pick_payment_term};
use freightdoc_types::{BillOfLading, ExportStamp, Rect};

const LIABILITY_NOTE: &str = "NOTE: Liability Limitation for loss or damage in this shipment may be applicable. See 49 U.S.C. \u{2022} 14706(c)(1)(A) and (B).";

const CARGO_TABLE: CargoTableSpec = CargoTableSpec {
    title: "CARGO INFORMATION",
    continued_title: "CARGO INFORMATION (CONTINUED)",
    columns: &[
        ("CONTAINER", 35.0),
        ("QTY", 20.0),
        ("TYPE", 25.0),
        ("MARKS", 40.0),
        ("WEIGHT (KG)", 35.0),
        ("VOLUME (M3)", 35.0),
    ],
    description_label: "Description:",
};

pub(crate) fn lay_out(
    canvas: &mut PageCanvas,
    bol: &BillOfLading,
    stamp: &ExportStamp,
) -> (CargoTotals, Vec<RowPlacement>) {
    let number = or_default(&bol.bol_number, "DRAFT");
    canvas.set_running_header(format!("BILL OF LADING {} (continued)", number));

    title_band(canvas, number, stamp);
    parties(canvas, bol);
    routing(canvas, bol);

    let rows = bol.stowed_lines().map(|(container, line)| CargoRow {
        cells: vec![
            container.container_number.trim().to_string(),
            line.packages.trim().to_string(),
            line.package_type.code().to_string(),
            line.marks.trim().to_string(),
            line.weight.trim().to_string(),
            line.volume.trim().to_string(),
        ],
        description: line.description.as_str(),
    });
    let placements = cargo_table(canvas, &CARGO_TABLE, rows);

    let totals = CargoTotals::from_lines(bol.cargo_lines());
    totals_row(
        canvas,
        "GRAND TOTAL",
        &[
            format!("{} packages", format_quantity(totals.packages)),
            format!("{} kg", format_quantity(totals.weight)),
            format!("{} m3", format_quantity(totals.volume)),
        ],
        5.0,
    );

    entry_list(canvas, "CHARGES", &charge_entries(bol), 3.0);
    entry_list(canvas, "NOTICE", &[LIABILITY_NOTE.to_string()], 3.0);
    if !bol.terms_and_conditions.trim().is_empty() {
        entry_list(
            canvas,
            "TERMS AND CONDITIONS",
            &[bol.terms_and_conditions.clone()],
            3.0,
        );
    }

    signature_band(
        canvas,
        &format!("Place of issue: {}", bol.place_of_issue.trim()),
        &format!("Date of issue: {}", format_date_only(&bol.date_of_issue)),
        &[
            ("SHIPPER SIGNATURE / DATE", ""),
            ("CARRIER SIGNATURE / PICKUP DATE", ""),
        ],
        &[
            BoxContent::new(Some("Trailer Loaded:"), unchecked(&["By Shipper", "By Driver"])),
            BoxContent::new(
                Some("Freight Counted:"),
                unchecked(&[
                    "By Shipper",
                    "By Driver/pallets said to contain",
                    "By Driver/Pieces",
                ]),
            ),
        ],
    );

    (totals, placements)
}

fn title_band(canvas: &mut PageCanvas, number: &str, stamp: &ExportStamp) {
    let config = canvas.config();
    let left = canvas.content_left();
    let width = canvas.content_width();

    let header = Rect::new(left, canvas.cursor_y(), width, 10.0);
    canvas.place_text(header, &format!("Date: {}", stamp.issue_date()), TextStyle::regular(10.0), Align::Left);
    canvas.place_text(header, &format!("B/L No. {}", number), TextStyle::regular(10.0), Align::Right);
    canvas.advance(mm(10.0));

    let title = Rect::new(left, canvas.cursor_y(), width, config.title_font_size);
    canvas.place_text(title, "BILL OF LADING", TextStyle::bold(config.title_font_size), Align::Center);
    canvas.advance(mm(15.0));
}

fn parties(canvas: &mut PageCanvas, bol: &BillOfLading) {
    boxed_row(
        canvas,
        Some("SHIP FROM"),
        25.0,
        &[
            BoxContent::new(None, party_lines(&bol.shipper)),
            BoxContent::new(
                Some("Bill of Lading Number:"),
                vec![
                    bol.bol_number.trim().to_string(),
                    format!("Export reference: {}", bol.export_reference.trim()),
                ],
            ),
        ],
        2.0,
    );

    let first = bol.containers.first();
    boxed_row(
        canvas,
        Some("SHIP TO"),
        25.0,
        &[
            BoxContent::new(None, party_lines(&bol.consignee)),
            BoxContent::new(
                Some("CARRIER"),
                vec![
                    format!("Carrier name: {}", bol.forwarding_agent.trim()),
                    format!(
                        "Container number: {}",
                        first.map(|c| c.container_number.trim()).unwrap_or_default()
                    ),
                    format!(
                        "Seal number(s): {}",
                        first.map(|c| c.seal_number.trim()).unwrap_or_default()
                    ),
                    "SCAC:".to_string(),
                    "Pro number:".to_string(),
                ],
            ),
        ],
        2.0,
    );

    if !bol.notify_party.name.trim().is_empty() {
        boxed_row(
            canvas,
            Some("THIRD PARTY FREIGHT CHARGES BILL TO:"),
            20.0,
            &[
                BoxContent::new(None, party_lines(&bol.notify_party)),
                BoxContent::new(
                    Some("Freight Charge Terms:"),
                    vec![
                        "(freight charges are prepaid unless marked otherwise)".to_string(),
                        format!(
                            "Prepaid {}   Collect {}   3rd Party {}",
                            checkbox(bol.prepaid),
                            checkbox(bol.collect),
                            checkbox(false)
                        ),
                    ],
                ),
            ],
            2.0,
        );
    }
}

fn routing(canvas: &mut PageCanvas, bol: &BillOfLading) {
    boxed_row(
        canvas,
        None,
        22.0,
        &[
            BoxContent::new(
                Some("SPECIAL INSTRUCTIONS:"),
                vec![
                    format!("Vessel: {}", bol.vessel_name.trim()),
                    format!("Voyage: {}", bol.voyage_number.trim()),
                    format!("Port of Loading: {}", bol.port_of_loading.trim()),
                    format!("Port of Discharge: {}", bol.port_of_discharge.trim()),
                ],
            ),
            BoxContent::new(
                Some("ROUTING:"),
                vec![
                    format!("Place of Receipt: {}", bol.place_of_receipt.trim()),
                    format!("Place of Delivery: {}", bol.place_of_delivery.trim()),
                    format!("Shipped on board: {}", format_date_only(&bol.on_board_date)),
                ],
            ),
        ],
        5.0,
    );
}

fn charge_entries(bol: &BillOfLading) -> Vec<String> {
    let currency = or_default(&bol.charges_currency, "USD");
    let mut entries = Vec::new();
    if !bol.freight_charges.trim().is_empty() {
        entries.push(format!("Freight charges: {} {}", bol.freight_charges.trim(), currency));
    }
    if !bol.other_charges.trim().is_empty() {
        entries.push(format!("Other charges: {} {}", bol.other_charges.trim(), currency));
    }
    if !bol.freight_payable_at.trim().is_empty() {
        entries.push(format!("Freight payable at: {}", bol.freight_payable_at.trim()));
    }
    if !bol.number_of_originals.trim().is_empty() {
        entries.push(format!("Number of original B/Ls: {}", bol.number_of_originals.trim()));
    }
    entries.push(format!("COD Amount: $ {}", or_default(&bol.other_charges, "0.00")));
    entries.push(format!(
        "Fee terms: {}   Prepaid {}   Collect {}",
        pick_payment_term(bol.prepaid, bol.collect),
        checkbox(bol.prepaid),
        checkbox(bol.collect)
    ));
    entries
}

/// Blank tick-box lines; the form leaves them for the driver to mark by hand.
fn unchecked(labels: &[&str]) -> Vec<String> {
    labels
        .iter()
        .map(|label| format!("{} {}", checkbox(false), label))
        .collect()
}
