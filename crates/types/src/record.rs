//! The canonical in-memory representation of a shipping document.
//!
//! Every scalar is an explicit field; an empty string is the "unset" sentinel. The form
//! layer builds records with copy-on-write updates and hands them to the renderers by
//! shared reference, so nothing in the rendering core mutates a record.

use crate::codes::{ContainerType, PackageType};
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    BillOfLading,
    RoadConsignmentNote,
}

impl DocumentKind {
    /// Prefix used for artifact filenames and export identifiers.
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::BillOfLading => "BOL",
            DocumentKind::RoadConsignmentNote => "CMR",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::BillOfLading => "Bill of Lading",
            DocumentKind::RoadConsignmentNote => "CMR Consignment Note",
        }
    }

    /// Statement printed at the foot of every page and carried in the structured export.
    pub fn legal_notice(&self) -> &'static str {
        match self {
            DocumentKind::BillOfLading => {
                "This Bill of Lading is subject to the terms and conditions on the reverse side hereof and to applicable federal regulations."
            }
            DocumentKind::RoadConsignmentNote => {
                "Cette lettre de voiture est soumise \u{e0} la Convention relative au contrat de transport international de marchandises par route (CMR)."
            }
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Name and postal address of a party named on the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

impl Party {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.address.trim().is_empty()
            && self.city.trim().is_empty()
            && self.country.trim().is_empty()
    }

    /// "City, Country" with blank components left out.
    pub fn locality(&self) -> String {
        [self.city.trim(), self.country.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One line item of goods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CargoLine {
    pub id: ItemId,
    pub description: String,
    pub marks: String,
    /// Package count as typed into the form; may be blank or malformed.
    #[serde(alias = "quantity")]
    pub packages: String,
    pub package_type: PackageType,
    /// Gross weight in kilograms, as text.
    pub weight: String,
    /// Volume in cubic metres, as text.
    #[serde(alias = "measurement")]
    pub volume: String,
}

impl CargoLine {
    pub fn blank(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// A shipping container and the cargo lines stowed in it. Bill of lading only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerUnit {
    pub id: ItemId,
    pub container_number: String,
    pub container_type: ContainerType,
    pub seal_number: String,
    pub cargo_lines: Vec<CargoLine>,
}

impl ContainerUnit {
    /// A container holding a single empty cargo line, as the form starts out.
    pub fn blank(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            cargo_lines: vec![CargoLine::blank("1")],
            ..Default::default()
        }
    }
}

/// Ocean bill of lading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillOfLading {
    pub bol_number: String,
    pub export_reference: String,
    /// Carrier / forwarding agent name shown in the carrier box.
    pub forwarding_agent: String,

    pub shipper: Party,
    pub consignee: Party,
    pub notify_party: Party,

    pub vessel_name: String,
    pub voyage_number: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub place_of_receipt: String,
    pub place_of_delivery: String,

    pub freight_payable_at: String,
    pub number_of_originals: String,
    pub on_board_date: String,
    pub freight_charges: String,
    pub other_charges: String,
    pub charges_currency: String,
    pub prepaid: bool,
    pub collect: bool,

    pub terms_and_conditions: String,
    pub place_of_issue: String,
    pub date_of_issue: String,

    pub containers: Vec<ContainerUnit>,
}

impl BillOfLading {
    pub fn blank() -> Self {
        Self {
            containers: vec![ContainerUnit::blank("1")],
            ..Default::default()
        }
    }

    /// Cargo lines of every container, flattened in document order.
    pub fn cargo_lines(&self) -> impl Iterator<Item = &CargoLine> {
        self.containers.iter().flat_map(|c| c.cargo_lines.iter())
    }

    /// Cargo lines paired with the container that holds them.
    pub fn stowed_lines(&self) -> impl Iterator<Item = (&ContainerUnit, &CargoLine)> {
        self.containers
            .iter()
            .flat_map(|c| c.cargo_lines.iter().map(move |line| (c, line)))
    }
}

/// International road consignment note (CMR).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadConsignmentNote {
    pub consignment_number: String,

    pub sender: Party,
    pub consignee: Party,
    pub carrier: Party,
    pub successive_carriers: String,

    pub place_of_takeover: String,
    pub date_of_takeover: String,
    pub place_of_delivery: String,

    pub vehicle_registration: String,
    pub trailer_registration: String,

    pub special_agreements: String,
    pub documents_attached: String,
    pub cod_amount: String,
    pub cod_currency: String,
    pub carriers_reservations: String,
    pub agreed_upon: String,
    pub paid_by_sender: bool,
    pub paid_by_consignee: bool,
    pub carriage_charges: String,
    pub supplements: String,
    pub customs_instructions: String,

    pub place_of_signing: String,
    pub date_of_signing: String,
    pub sender_signature: String,
    pub carrier_signature: String,
    pub consignee_signature: String,

    pub cargo_lines: Vec<CargoLine>,
}

impl RoadConsignmentNote {
    pub fn blank() -> Self {
        Self {
            cargo_lines: vec![CargoLine::blank("1")],
            ..Default::default()
        }
    }
}

/// A shipping document of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentRecord {
    BillOfLading(BillOfLading),
    RoadConsignmentNote(RoadConsignmentNote),
}

impl DocumentRecord {
    /// An empty record of the given kind with one placeholder collection entry.
    pub fn blank(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::BillOfLading => DocumentRecord::BillOfLading(BillOfLading::blank()),
            DocumentKind::RoadConsignmentNote => {
                DocumentRecord::RoadConsignmentNote(RoadConsignmentNote::blank())
            }
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRecord::BillOfLading(_) => DocumentKind::BillOfLading,
            DocumentRecord::RoadConsignmentNote(_) => DocumentKind::RoadConsignmentNote,
        }
    }

    /// The document number the user typed, possibly blank.
    pub fn primary_identifier(&self) -> &str {
        match self {
            DocumentRecord::BillOfLading(bol) => bol.bol_number.trim(),
            DocumentRecord::RoadConsignmentNote(cmr) => cmr.consignment_number.trim(),
        }
    }

    /// Every cargo line of the document in document order.
    pub fn cargo_lines(&self) -> Box<dyn Iterator<Item = &CargoLine> + '_> {
        match self {
            DocumentRecord::BillOfLading(bol) => Box::new(bol.cargo_lines()),
            DocumentRecord::RoadConsignmentNote(cmr) => Box::new(cmr.cargo_lines.iter()),
        }
    }
}

impl From<BillOfLading> for DocumentRecord {
    fn from(value: BillOfLading) -> Self {
        DocumentRecord::BillOfLading(value)
    }
}

impl From<RoadConsignmentNote> for DocumentRecord {
    fn from(value: RoadConsignmentNote) -> Self {
        DocumentRecord::RoadConsignmentNote(value)
    }
}
