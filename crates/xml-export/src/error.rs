use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlExportError {
    #[error("Failed to write XML: {0}")]
    Write(String),
    #[error("Generated XML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
