use super::config::ExportKind;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// A finished export: file name, media type and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
    pub export: ExportKind,
}

impl Artifact {
    /// The content as text. Lossy for PDF output.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Writes the artifact into `dir` under its own file name, creating `dir` if needed.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        log::info!("Wrote {}", path.display());
        Ok(path)
    }
}
