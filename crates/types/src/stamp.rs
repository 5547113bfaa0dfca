use chrono::{DateTime, NaiveDate, Utc};

/// Per-export identity: a unique id and the issue timestamp.
///
/// A fresh stamp is captured for every export call; it is the only time-dependent input
/// of the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStamp {
    pub export_id: String,
    pub issued_at: DateTime<Utc>,
}

impl ExportStamp {
    /// `<PREFIX>-<unix millis>-<8 random hex digits>`, issued now.
    pub fn generate(prefix: &str) -> Self {
        let issued_at = Utc::now();
        let export_id = format!(
            "{}-{}-{:08x}",
            prefix,
            issued_at.timestamp_millis(),
            rand::random::<u32>()
        );
        Self { export_id, issued_at }
    }

    pub fn new(export_id: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            export_id: export_id.into(),
            issued_at,
        }
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issued_at.date_naive()
    }
}
