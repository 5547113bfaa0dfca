use freightdoc_layout::LayoutConfig;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_PRODUCER: &str = "freightdoc";

/// Which artifact to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Paginated print layout.
    Pdf,
    /// Schema-shaped structured markup.
    Xml,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "pdf",
            ExportKind::Xml => "xml",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "application/pdf",
            ExportKind::Xml => "application/xml",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportKind::Pdf => "PDF",
            ExportKind::Xml => "XML",
        })
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportKind::Pdf),
            "xml" => Ok(ExportKind::Xml),
            other => Err(format!("unknown export format '{}', expected 'pdf' or 'xml'", other)),
        }
    }
}

/// Pipeline settings, loadable from a JSON file.
///
/// ```json
/// { "producer": "Acme Forwarding", "layout": { "marginMm": 12 } }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    pub layout: LayoutConfig,
    /// Written to the PDF Info dictionary.
    pub producer: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }
}
