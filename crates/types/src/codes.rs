//! Enumerated codes used on cargo lines and containers.
//!
//! Both enums round-trip through their string code. Codes the form layer sends that are
//! not in the known set are kept verbatim in `Other` so the record is never rejected.

use crate::record::DocumentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-style equipment size/type code of a shipping container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContainerType {
    #[default]
    Unspecified,
    Dry20,
    Dry40,
    HighCube40,
    Reefer20,
    Reefer40,
    OpenTop20,
    OpenTop40,
    Other(String),
}

impl ContainerType {
    pub const KNOWN: [ContainerType; 7] = [
        ContainerType::Dry20,
        ContainerType::Dry40,
        ContainerType::HighCube40,
        ContainerType::Reefer20,
        ContainerType::Reefer40,
        ContainerType::OpenTop20,
        ContainerType::OpenTop40,
    ];

    pub fn code(&self) -> &str {
        match self {
            ContainerType::Unspecified => "",
            ContainerType::Dry20 => "20DC",
            ContainerType::Dry40 => "40DC",
            ContainerType::HighCube40 => "40HC",
            ContainerType::Reefer20 => "20RF",
            ContainerType::Reefer40 => "40RF",
            ContainerType::OpenTop20 => "20OT",
            ContainerType::OpenTop40 => "40OT",
            ContainerType::Other(code) => code,
        }
    }

    /// Human readable label, as offered by the form's selector.
    pub fn label(&self) -> &str {
        match self {
            ContainerType::Unspecified => "",
            ContainerType::Dry20 => "20' Dry Container",
            ContainerType::Dry40 => "40' Dry Container",
            ContainerType::HighCube40 => "40' High Cube",
            ContainerType::Reefer20 => "20' Reefer",
            ContainerType::Reefer40 => "40' Reefer",
            ContainerType::OpenTop20 => "20' Open Top",
            ContainerType::OpenTop40 => "40' Open Top",
            ContainerType::Other(code) => code,
        }
    }
}

impl From<String> for ContainerType {
    fn from(code: String) -> Self {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return ContainerType::Unspecified;
        }
        ContainerType::KNOWN
            .into_iter()
            .find(|known| known.code().eq_ignore_ascii_case(trimmed))
            .unwrap_or(ContainerType::Other(code))
    }
}

impl From<&str> for ContainerType {
    fn from(code: &str) -> Self {
        ContainerType::from(code.to_string())
    }
}

impl From<ContainerType> for String {
    fn from(value: ContainerType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of packaging of a cargo line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackageType {
    #[default]
    Unspecified,
    Boxes,
    Pallets,
    Containers,
    Bags,
    Drums,
    Cases,
    Pieces,
    Cartons,
    Crates,
    Rolls,
    Other(String),
}

impl PackageType {
    pub const KNOWN: [PackageType; 10] = [
        PackageType::Boxes,
        PackageType::Pallets,
        PackageType::Containers,
        PackageType::Bags,
        PackageType::Drums,
        PackageType::Cases,
        PackageType::Pieces,
        PackageType::Cartons,
        PackageType::Crates,
        PackageType::Rolls,
    ];

    pub fn code(&self) -> &str {
        match self {
            PackageType::Unspecified => "",
            PackageType::Boxes => "boxes",
            PackageType::Pallets => "pallets",
            PackageType::Containers => "containers",
            PackageType::Bags => "bags",
            PackageType::Drums => "drums",
            PackageType::Cases => "cases",
            PackageType::Pieces => "pieces",
            PackageType::Cartons => "cartons",
            PackageType::Crates => "crates",
            PackageType::Rolls => "rolls",
            PackageType::Other(code) => code,
        }
    }

    /// Whether the form of the given document kind offers this code in its selector.
    ///
    /// The bill of lading lists general ocean packaging; the consignment note drops
    /// `containers` (road cargo is not grouped into containers) and adds cartons, crates
    /// and rolls.
    pub fn is_offered_for(&self, kind: DocumentKind) -> bool {
        match (self, kind) {
            (PackageType::Unspecified | PackageType::Other(_), _) => false,
            (PackageType::Containers, DocumentKind::RoadConsignmentNote) => false,
            (
                PackageType::Cartons | PackageType::Crates | PackageType::Rolls,
                DocumentKind::BillOfLading,
            ) => false,
            _ => true,
        }
    }
}

impl From<String> for PackageType {
    fn from(code: String) -> Self {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return PackageType::Unspecified;
        }
        PackageType::KNOWN
            .into_iter()
            .find(|known| known.code().eq_ignore_ascii_case(trimmed))
            .unwrap_or(PackageType::Other(code))
    }
}

impl From<&str> for PackageType {
    fn from(code: &str) -> Self {
        PackageType::from(code.to_string())
    }
}

impl From<PackageType> for String {
    fn from(value: PackageType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
