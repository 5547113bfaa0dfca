//! Structured XML export.
//!
//! Bills of lading are written as a DCSA shipping instruction, consignment notes as a CMR
//! consignment document. Every free-text value is escaped exactly once by
//! [`freightdoc_format::escape_markup_text`]; computed values are written as they are.

mod bol;
mod cmr;
mod emitter;
mod error;
mod summary;

pub use error::XmlExportError;

use freightdoc_types::{DocumentRecord, ExportStamp};

pub const BOL_NAMESPACE: &str = "https://dcsa.org/schemas/ebl/v3";
pub const CMR_NAMESPACE: &str = "urn:cmr:transport:1.0";

/// Serializes a document record into its schema-shaped XML form.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl XmlSerializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(
        &self,
        record: &DocumentRecord,
        stamp: &ExportStamp,
    ) -> Result<String, XmlExportError> {
        let xml = match record {
            DocumentRecord::BillOfLading(doc) => bol::write_shipping_instruction(doc, stamp)?,
            DocumentRecord::RoadConsignmentNote(doc) => cmr::write_consignment_note(doc, stamp)?,
        };
        log::debug!(
            "Serialized {} '{}' to {} bytes of XML",
            record.kind(),
            record.primary_identifier(),
            xml.len()
        );
        Ok(xml)
    }
}

#[cfg(test)]
mod bol_test;
#[cfg(test)]
mod test_utils;
