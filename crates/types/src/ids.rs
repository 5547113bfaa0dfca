//! Opaque identifiers for collection members.
//!
//! Container and cargo-line ids only correlate entries coming back from the form layer;
//! they carry no meaning and are never rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a container or cargo line, unique within its parent collection.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::from("1")
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
