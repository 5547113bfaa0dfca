use crate::{LayoutConfig, LayoutEngine};
use chrono::{TimeZone, Utc};
use freightdoc_types::{
    BillOfLading, CargoLine, ContainerType, ContainerUnit, ExportStamp, PackageType, Party,
    RoadConsignmentNote,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_test_engine() -> LayoutEngine {
    init_logger();
    LayoutEngine::new(LayoutConfig::default()).unwrap()
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
        volume: String::new(),
    }
}

/// One 40' dry container with two lines: 10 + 5 packages, 500 + 250.5 kg.
pub fn sample_bol() -> BillOfLading {
    BillOfLading {
        bol_number: "BOL-2024-001".to_string(),
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
        forwarding_agent: "Blue Line Shipping".to_string(),
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

pub fn bol_with_lines(count: usize) -> BillOfLading {
    let lines = (1..=count)
        .map(|i| cargo_line(&i.to_string(), "1", "10", &format!("Cargo line number {}", i)))
        .collect();
    let mut bol = sample_bol();
    bol.containers[0].cargo_lines = lines;
    bol
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
        sender_signature: "J. Martin".to_string(),
        cargo_lines: vec![
            cargo_line("1", "20", "400", "Cotton fabric rolls"),
            cargo_line("2", "4", "80.25", "Silk scarves"),
        ],
        ..RoadConsignmentNote::blank()
    }
}
