use super::{
    BoxContent, CargoRow, CargoTableSpec, boxed_row, cargo_table, entry_list, signature_band,
    totals_row,
};
use crate::canvas::{Align, PageCanvas, mm};
use crate::elements::TextStyle;
use crate::output::{CargoTotals, RowPlacement};
use freightdoc_format::{checkbox, format_date_only, format_quantity, or_default};
use freightdoc_types::{ExportStamp, Party, Rect, RoadConsignmentNote};

const CARGO_TABLE: CargoTableSpec = CargoTableSpec {
    title: "9-12. MARCHANDISES",
    continued_title: "9-12. MARCHANDISES (SUITE)",
    columns: &[
        ("Nombre et nature des colis", 45.0),
        ("Marques et num\u{e9}ros", 55.0),
        ("Poids brut (kg)", 45.0),
        ("Volume (m\u{b3})", 45.0),
    ],
    description_label: "D\u{e9}signation:",
};

pub(crate) fn lay_out(
    canvas: &mut PageCanvas,
    cmr: &RoadConsignmentNote,
    stamp: &ExportStamp,
) -> (CargoTotals, Vec<RowPlacement>) {
    let number = or_default(&cmr.consignment_number, "DRAFT");
    canvas.set_running_header(format!("CMR {} (suite)", number));

    title_band(canvas, number, stamp);
    parties(canvas, cmr);

    let rows = cmr.cargo_lines.iter().map(|line| CargoRow {
        cells: vec![
            format!("{} {}", line.packages.trim(), line.package_type.code())
                .trim()
                .to_string(),
            line.marks.trim().to_string(),
            line.weight.trim().to_string(),
            line.volume.trim().to_string(),
        ],
        description: line.description.as_str(),
    });
    let placements = cargo_table(canvas, &CARGO_TABLE, rows);

    let totals = CargoTotals::from_lines(&cmr.cargo_lines);
    totals_row(
        canvas,
        "TOTAL",
        &[
            format!("{} colis", format_quantity(totals.packages)),
            format!("{} kg", format_quantity(totals.weight)),
            format!("{} m\u{b3}", format_quantity(totals.volume)),
        ],
        5.0,
    );

    entry_list(canvas, "13-17. INSTRUCTIONS ET FRAIS", &instruction_entries(cmr), 3.0);

    signature_band(
        canvas,
        &format!("\u{c9}tabli \u{e0}: {}", cmr.place_of_signing.trim()),
        &format!("Le: {}", format_date_only(&cmr.date_of_signing)),
        &[
            ("Signature de l'exp\u{e9}diteur", cmr.sender_signature.trim()),
            ("Signature du transporteur", cmr.carrier_signature.trim()),
            ("Signature du destinataire", cmr.consignee_signature.trim()),
        ],
        &[],
    );

    (totals, placements)
}

fn title_band(canvas: &mut PageCanvas, number: &str, stamp: &ExportStamp) {
    let config = canvas.config();
    let left = canvas.content_left();
    let width = canvas.content_width();
    let size = config.title_font_size - 3.0;

    for line in [
        "CMR - CONVENTION RELATIVE AU CONTRAT DE TRANSPORT",
        "INTERNATIONAL DE MARCHANDISES PAR ROUTE",
    ] {
        let rect = Rect::new(left, canvas.cursor_y(), width, size);
        canvas.place_text(rect, line, TextStyle::bold(size), Align::Center);
        canvas.advance(mm(6.0));
    }

    let info = Rect::new(left, canvas.cursor_y(), width, 10.0);
    canvas.place_text(info, &format!("Lettre de voiture N\u{b0} {}", number), TextStyle::regular(10.0), Align::Left);
    canvas.place_text(info, &format!("Date: {}", stamp.issue_date()), TextStyle::regular(10.0), Align::Right);
    canvas.advance(mm(9.0));
}

fn address_lines(party: &Party) -> Vec<String> {
    vec![
        party.name.trim().to_string(),
        party.address.trim().to_string(),
        party.locality(),
    ]
}

fn parties(canvas: &mut PageCanvas, cmr: &RoadConsignmentNote) {
    boxed_row(
        canvas,
        None,
        20.0,
        &[
            BoxContent::new(Some("1. Exp\u{e9}diteur (nom, adresse, pays)"), address_lines(&cmr.sender)),
            BoxContent::new(Some("2. Destinataire (nom, adresse, pays)"), address_lines(&cmr.consignee)),
        ],
        3.0,
    );
    boxed_row(
        canvas,
        None,
        15.0,
        &[
            BoxContent::new(
                Some("3. Lieu et date de prise en charge de la marchandise"),
                vec![
                    format!("Lieu: {}", cmr.place_of_takeover.trim()),
                    format!("Date: {}", format_date_only(&cmr.date_of_takeover)),
                ],
            ),
            BoxContent::new(
                Some("4. Lieu pr\u{e9}vu pour la livraison"),
                vec![cmr.place_of_delivery.trim().to_string()],
            ),
        ],
        3.0,
    );
    boxed_row(
        canvas,
        None,
        24.0,
        &[BoxContent::new(
            Some("5. Transporteur (nom, adresse, pays)"),
            vec![
                format!("Nom: {}", cmr.carrier.name.trim()),
                format!("Adresse: {}", cmr.carrier.address.trim()),
                format!("Pays: {}", cmr.carrier.locality()),
                format!("6. Transporteurs successifs: {}", cmr.successive_carriers.trim()),
            ],
        )],
        3.0,
    );
    boxed_row(
        canvas,
        None,
        15.0,
        &[BoxContent::new(
            Some("8. Immatriculation du v\u{e9}hicule"),
            vec![
                format!("V\u{e9}hicule: {}", cmr.vehicle_registration.trim()),
                format!("Remorque: {}", cmr.trailer_registration.trim()),
            ],
        )],
        5.0,
    );
}

fn push_entry(entries: &mut Vec<String>, label: &str, value: &str) {
    if !value.trim().is_empty() {
        entries.push(format!("{}: {}", label, value.trim()));
    }
}

fn instruction_entries(cmr: &RoadConsignmentNote) -> Vec<String> {
    let mut entries = Vec::new();
    if !cmr.cod_amount.trim().is_empty() {
        let amount = format!("{} {}", cmr.cod_amount.trim(), or_default(&cmr.cod_currency, "EUR"));
        push_entry(&mut entries, "13. Remboursement", &amount);
    }
    push_entry(
        &mut entries,
        "14. R\u{e9}serves et observations du transporteur",
        &cmr.carriers_reservations,
    );
    push_entry(&mut entries, "15. Conventions", &cmr.agreed_upon);
    entries.push(format!(
        "16. A payer par: Exp\u{e9}diteur {}   Destinataire {}",
        checkbox(cmr.paid_by_sender),
        checkbox(cmr.paid_by_consignee)
    ));
    push_entry(&mut entries, "Prix de transport", &cmr.carriage_charges);
    push_entry(&mut entries, "Suppl\u{e9}ments", &cmr.supplements);
    push_entry(&mut entries, "17. Instructions douani\u{e8}res", &cmr.customs_instructions);
    push_entry(&mut entries, "Conventions particuli\u{e8}res", &cmr.special_agreements);
    push_entry(&mut entries, "Documents annex\u{e9}s", &cmr.documents_attached);
    entries
}
