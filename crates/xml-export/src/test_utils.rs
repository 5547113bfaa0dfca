use chrono::{TimeZone, Utc};
use freightdoc_types::{
    BillOfLading, CargoLine, ContainerType, ContainerUnit, ExportStamp, PackageType, Party,
    RoadConsignmentNote,
};
use roxmltree::{Document, Node};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixed_stamp(prefix: &str) -> ExportStamp {
    let issued_at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
    ExportStamp::new(format!("{}-1710495000000-00c0ffee", prefix), issued_at)
}

pub fn cargo_line(id: &str, packages: &str, weight: &str, description: &str) -> CargoLine {
    CargoLine {
        id: id.into(),
        description: description.to_string(),
        marks: "N/M".to_string(),
        packages: packages.to_string(),
        package_type: PackageType::Pallets,
        weight: weight.to_string(),
        volume: "1.5".to_string(),
    }
}

pub fn sample_bol() -> BillOfLading {
    BillOfLading {
        bol_number: "BOL-2024-001".to_string(),
        export_reference: "EXP-99".to_string(),
        shipper: Party {
            name: "Nordic Timber AS".to_string(),
            address: "Havnegata 1".to_string(),
            city: "Oslo".to_string(),
            country: "Norway".to_string(),
        },
        consignee: Party {
            name: "Rotterdam Imports BV".to_string(),
            city: "Rotterdam".to_string(),
            country: "Netherlands".to_string(),
            ..Default::default()
        },
        vessel_name: "MSC Aurora".to_string(),
        port_of_loading: "Oslo".to_string(),
        port_of_discharge: "Rotterdam".to_string(),
        containers: vec![ContainerUnit {
            id: "1".into(),
            container_number: "TEMU1234567".to_string(),
            container_type: ContainerType::Dry40,
            seal_number: "SL000001".to_string(),
            cargo_lines: vec![
                cargo_line("1", "10", "500", "Sawn spruce boards"),
                cargo_line("2", "5", "250.5", "Planed pine mouldings"),
            ],
        }],
        ..BillOfLading::blank()
    }
}

pub fn sample_cmr() -> RoadConsignmentNote {
    RoadConsignmentNote {
        consignment_number: "CMR-778".to_string(),
        sender: Party {
            name: "Lyon Textiles SA".to_string(),
            address: "12 rue de la Soie".to_string(),
            city: "Lyon".to_string(),
            country: "France".to_string(),
        },
        consignee: Party {
            name: "Berlin Mode GmbH".to_string(),
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
            ..Default::default()
        },
        carrier: Party {
            name: "TransEuropa Logistics".to_string(),
            ..Default::default()
        },
        place_of_takeover: "Lyon".to_string(),
        date_of_takeover: "2024-03-14".to_string(),
        place_of_delivery: "Berlin".to_string(),
        place_of_signing: "Lyon".to_string(),
        date_of_signing: "14/03/2024".to_string(),
        sender_signature: "J. Martin".to_string(),
        cargo_lines: vec![
            cargo_line("1", "20", "400", "Cotton fabric rolls"),
            cargo_line("2", "4", "80.25", "Silk scarves"),
        ],
        ..RoadConsignmentNote::blank()
    }
}

/// First element with the given local name, in document order.
pub fn find<'a, 'input>(doc: &'a Document<'input>, name: &str) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

pub fn elements<'a, 'input>(doc: &'a Document<'input>, name: &str) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .collect()
}

pub fn text_of<'a>(doc: &'a Document<'_>, name: &str) -> Option<&'a str> {
    find(doc, name).and_then(|n| n.text())
}

/// Local names of the element children of `node`.
pub fn child_names<'a>(node: Node<'a, '_>) -> Vec<&'a str> {
    node.children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect()
}
