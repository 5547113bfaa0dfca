mod common;

use common::fixtures::*;
use common::{TestResult, default_pipeline, generate_pdf, generate_xml, xml_text};
use freightdoc::{ContainerUnit, DocumentRecord, RoadConsignmentNote};
use freightdoc_format::format_quantity;

#[test]
fn test_sample_shipment_totals_in_both_formats() -> TestResult {
    let record = bol_record();

    let xml = generate_xml(&record)?;
    assert!(xml.contains("<totalPackages>15</totalPackages>"));
    assert!(xml.contains(r#"<totalWeight unit="kg">750.5</totalWeight>"#));

    let pdf = generate_pdf(&record)?;
    assert_pdf_contains_text!(pdf, "15 packages");
    assert_pdf_contains_text!(pdf, "750.5 kg");
    assert_pdf_contains_text!(pdf, "TEMU1234567");
    assert_pdf_contains_text!(pdf, "SL000001");
    Ok(())
}

#[test]
fn test_layout_totals_match_xml_summary() -> TestResult {
    let pipeline = default_pipeline();
    let mut bol = sample_bol();
    bol.containers.push(ContainerUnit {
        id: "2".into(),
        container_number: "MSKU7654321".to_string(),
        cargo_lines: vec![
            cargo_line("1", "7", "0.125", "Veneer sheets"),
            cargo_line("2", "x", "12,5", "Mislabelled crate"),
        ],
        ..Default::default()
    });
    bol.containers[1].cargo_lines[0].volume = "2.75".to_string();

    for record in [DocumentRecord::BillOfLading(bol), cmr_record()] {
        let stamp = fixed_stamp(record.kind().prefix());
        let laid_out = pipeline.engine().layout(&record, &stamp)?;
        let xml = generate_xml(&record)?;
        let doc = roxmltree::Document::parse(&xml)?;

        assert_eq!(xml_text(&doc, "totalPackages"), Some(format_quantity(laid_out.totals.packages).as_str()));
        assert_eq!(xml_text(&doc, "totalWeight"), Some(format_quantity(laid_out.totals.weight).as_str()));
        assert_eq!(xml_text(&doc, "totalVolume"), Some(format_quantity(laid_out.totals.volume).as_str()));
    }
    Ok(())
}

#[test]
fn test_markup_characters_round_trip() -> TestResult {
    let tricky = r#"Fish & Chips <"Best"> 'Ltd'"#;
    let mut bol = sample_bol();
    bol.shipper.name = tricky.to_string();
    bol.containers[0].cargo_lines[1].marks = "A&B <1>".to_string();

    let xml = generate_xml(&DocumentRecord::BillOfLading(bol))?;
    assert!(!xml.contains("&amp;amp;"));
    let doc = roxmltree::Document::parse(&xml)?;
    assert_eq!(xml_text(&doc, "partyName"), Some(tricky));
    let marks: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("shippingMarks"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(marks, vec!["N/M", "A&B <1>"]);

    let mut note = sample_cmr();
    note.special_agreements = tricky.to_string();
    let xml = generate_xml(&DocumentRecord::RoadConsignmentNote(note))?;
    let doc = roxmltree::Document::parse(&xml)?;
    let agreements = doc
        .descendants()
        .find(|n| n.has_tag_name("specialAgreements"))
        .and_then(|n| n.first_element_child())
        .and_then(|n| n.text());
    assert_eq!(agreements, Some(tricky));
    Ok(())
}

#[test]
fn test_empty_collections_render_zero_totals() -> TestResult {
    let mut bol = sample_bol();
    bol.containers.clear();
    let record = DocumentRecord::BillOfLading(bol);

    let pdf = generate_pdf(&record)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "0 packages");

    let xml = generate_xml(&record)?;
    assert!(xml.contains("<totalPackages>0</totalPackages>"));
    assert!(xml.contains(r#"<totalWeight unit="kg">0</totalWeight>"#));

    let note = RoadConsignmentNote {
        cargo_lines: Vec::new(),
        ..sample_cmr()
    };
    let xml = generate_xml(&DocumentRecord::RoadConsignmentNote(note))?;
    assert!(xml.contains("<totalPackages>0</totalPackages>"));
    Ok(())
}

#[test]
fn test_blank_numbers_count_as_zero() -> TestResult {
    let mut bol = sample_bol();
    bol.containers[0].cargo_lines[0].packages = String::new();
    bol.containers[0].cargo_lines[1].weight = "about 200".to_string();
    let record = DocumentRecord::BillOfLading(bol);

    let xml = generate_xml(&record)?;
    assert!(xml.contains("<totalPackages>5</totalPackages>"));
    assert!(xml.contains(r#"<totalWeight unit="kg">500</totalWeight>"#));

    let pdf = generate_pdf(&record)?;
    assert_pdf_contains_text!(pdf, "5 packages");
    assert_pdf_contains_text!(pdf, "500 kg");
    Ok(())
}

#[test]
fn test_notify_party_omitted_in_both_formats() -> TestResult {
    let record = bol_record();
    let xml = generate_xml(&record)?;
    assert!(!xml.contains("<notifyParty>"));
    let pdf = generate_pdf(&record)?;
    assert_pdf_not_contains_text!(pdf, "THIRD PARTY FREIGHT CHARGES BILL TO:");

    let mut bol = sample_bol();
    bol.notify_party.name = "Harbour Agents BV".to_string();
    let record = DocumentRecord::BillOfLading(bol);
    let xml = generate_xml(&record)?;
    assert!(xml.contains("<notifyParty>"));
    let pdf = generate_pdf(&record)?;
    assert_pdf_contains_text!(pdf, "Harbour Agents BV");
    Ok(())
}
