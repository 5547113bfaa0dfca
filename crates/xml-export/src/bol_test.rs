use crate::test_utils::*;
use crate::{BOL_NAMESPACE, XmlSerializer};
use freightdoc_types::{ContainerUnit, DocumentRecord, Party};
use roxmltree::Document;

fn serialize_bol(bol: freightdoc_types::BillOfLading) -> String {
    init_logger();
    XmlSerializer::new()
        .serialize(&DocumentRecord::BillOfLading(bol), &fixed_stamp("BOL"))
        .unwrap()
}

#[test]
fn test_summary_totals_for_sample_shipment() {
    let xml = serialize_bol(sample_bol());
    assert!(xml.contains("<totalPackages>15</totalPackages>"));
    assert!(xml.contains(r#"<totalWeight unit="kg">750.5</totalWeight>"#));
    assert!(xml.contains(r#"<totalVolume unit="m3">3</totalVolume>"#));

    let doc = Document::parse(&xml).unwrap();
    assert_eq!(text_of(&doc, "equipmentReference"), Some("TEMU1234567"));
    assert_eq!(text_of(&doc, "ISOEquipmentCode"), Some("40DC"));
    assert_eq!(text_of(&doc, "sealNumber"), Some("SL000001"));
}

#[test]
fn test_root_namespace_and_header() {
    let xml = serialize_bol(sample_bol());
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let doc = Document::parse(&xml).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "ShippingInstruction");
    assert_eq!(root.tag_name().namespace(), Some(BOL_NAMESPACE));
    assert_eq!(text_of(&doc, "documentIdentifier"), Some("BOL-1710495000000-00c0ffee"));
    assert_eq!(
        text_of(&doc, "shippingInstructionCreatedDateTime"),
        Some("2024-03-15T09:30:00.000Z")
    );
    assert_eq!(text_of(&doc, "numberOfOriginals"), Some("3"));

    let names = child_names(root);
    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert!(position("shippingInstructionReference") < position("shipper"));
    assert!(position("shipper") < position("consignee"));
    assert!(position("cargoItems") < position("summary"));
    assert!(position("summary") < position("utilizedTransportEquipments"));
    assert!(position("transportPlan") < position("charges"));
    assert_eq!(names.last(), Some(&"references"));
}

#[test]
fn test_free_text_survives_parser_round_trip() {
    let mut bol = sample_bol();
    bol.shipper.name = r#"Smith & Sons <Intl> "Quoted" 'Ltd'"#.to_string();
    bol.containers[0].cargo_lines[0].description = "Tom & Jerry's <fragile> goods".to_string();

    let xml = serialize_bol(bol);
    assert!(xml.contains("Smith &amp; Sons &lt;Intl&gt;"));
    assert!(!xml.contains("&amp;amp;"));

    let doc = Document::parse(&xml).unwrap();
    assert_eq!(
        text_of(&doc, "partyName"),
        Some(r#"Smith & Sons <Intl> "Quoted" 'Ltd'"#)
    );
    assert_eq!(
        text_of(&doc, "cargoDescription"),
        Some("Tom & Jerry's <fragile> goods")
    );
}

#[test]
fn test_free_text_keeps_surrounding_whitespace() {
    let mut bol = sample_bol();
    bol.shipper.name = "  Nordic Timber AS ".to_string();
    bol.containers[0].cargo_lines[0].marks = "   ".to_string();

    let xml = serialize_bol(bol);
    let doc = Document::parse(&xml).unwrap();
    assert_eq!(text_of(&doc, "partyName"), Some("  Nordic Timber AS "));
    assert!(xml.contains("<shippingMarks/>"), "{}", xml);
}

#[test]
fn test_notify_party_omitted_when_name_blank() {
    let mut bol = sample_bol();
    bol.notify_party = Party {
        address: "Somewhere 1".to_string(),
        ..Default::default()
    };
    let xml = serialize_bol(bol);
    assert!(!xml.contains("notifyParty"));

    let mut bol = sample_bol();
    bol.notify_party.name = "Agent BV".to_string();
    let doc_text = serialize_bol(bol);
    let doc = Document::parse(&doc_text).unwrap();
    let notify = find(&doc, "notifyParty").unwrap();
    assert_eq!(child_names(notify), vec!["partyName", "address"]);
}

#[test]
fn test_charges_only_for_filled_amounts() {
    let xml = serialize_bol(sample_bol());
    assert!(!xml.contains("<charge>"));
    assert!(xml.contains("<charges/>"));

    let mut bol = sample_bol();
    bol.freight_charges = "1200.00".to_string();
    bol.collect = true;
    let xml = serialize_bol(bol);
    let doc = Document::parse(&xml).unwrap();
    let charges = elements(&doc, "charge");
    assert_eq!(charges.len(), 1);
    assert_eq!(text_of(&doc, "chargeName"), Some("FREIGHT"));
    assert_eq!(text_of(&doc, "chargeAmount"), Some("1200.00"));
    assert_eq!(text_of(&doc, "chargeCurrency"), Some("USD"));
    assert_eq!(text_of(&doc, "paymentTerm"), Some("COLLECT"));
}

#[test]
fn test_payment_term_defaults_to_prepaid() {
    let mut bol = sample_bol();
    bol.freight_charges = "100".to_string();
    bol.other_charges = "25".to_string();
    let xml = serialize_bol(bol);
    let doc = Document::parse(&xml).unwrap();
    let terms: Vec<_> = elements(&doc, "paymentTerm")
        .iter()
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect();
    assert_eq!(terms, vec!["PREPAID", "PREPAID"]);
}

#[test]
fn test_shipped_on_board_date_only_when_parseable() {
    let xml = serialize_bol(sample_bol());
    assert!(!xml.contains("shippedOnBoardDate"));

    let mut bol = sample_bol();
    bol.on_board_date = "2024-03-12T18:45".to_string();
    let xml = serialize_bol(bol);
    assert!(xml.contains("<shippedOnBoardDate>2024-03-12</shippedOnBoardDate>"));
}

#[test]
fn test_cargo_items_follow_container_order() {
    let mut bol = sample_bol();
    bol.containers.push(ContainerUnit {
        id: "2".into(),
        container_number: "MSKU7654321".to_string(),
        cargo_lines: vec![cargo_line("1", "3", "90", "Birch plywood")],
        ..Default::default()
    });
    let xml = serialize_bol(bol);
    let doc = Document::parse(&xml).unwrap();

    let descriptions: Vec<_> = elements(&doc, "cargoDescription")
        .iter()
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(
        descriptions,
        vec!["Sawn spruce boards", "Planed pine mouldings", "Birch plywood"]
    );
    assert_eq!(elements(&doc, "utilizedTransportEquipment").len(), 2);
    assert_eq!(text_of(&doc, "totalPackages"), Some("18"));
}

#[test]
fn test_empty_and_malformed_cargo_totals_zero() {
    let mut bol = sample_bol();
    bol.containers.clear();
    let xml = serialize_bol(bol);
    assert!(xml.contains("<totalPackages>0</totalPackages>"));
    assert!(xml.contains("<cargoItems/>"));
    Document::parse(&xml).unwrap();

    let mut bol = sample_bol();
    for line in &mut bol.containers[0].cargo_lines {
        line.packages = "ten".to_string();
        line.weight = String::new();
        line.volume = "n/a".to_string();
    }
    let xml = serialize_bol(bol);
    let doc = Document::parse(&xml).unwrap();
    assert_eq!(text_of(&doc, "totalPackages"), Some("0"));
    assert_eq!(text_of(&doc, "totalWeight"), Some("0"));
    assert_eq!(text_of(&doc, "totalVolume"), Some("0"));
}

#[test]
fn test_same_stamp_gives_identical_output() {
    assert_eq!(serialize_bol(sample_bol()), serialize_bol(sample_bol()));
}
