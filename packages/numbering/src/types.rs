//! Core data types for catalog checking.
//!
//! A catalog is a flat, ordered list of [`Record`]s. Each record belongs to a
//! document and carries the raw heading label, e.g. `"4.1.2 Scope"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numbering::NumberingKey;

/// Opaque identifier of the document that owns a catalog entry.
///
/// Input files may use either string or integer ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawDocumentId", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocumentId {
    Number(u64),
    Text(String),
}

impl From<RawDocumentId> for DocumentId {
    fn from(raw: RawDocumentId) -> Self {
        match raw {
            RawDocumentId::Number(n) => n.into(),
            RawDocumentId::Text(s) => Self(s),
        }
    }
}

/// A single catalog row as delivered by a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Owning document.
    pub document_id: DocumentId,

    /// Title of the owning document (optional, only used for ordering).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,

    /// Raw heading label, starting with the dotted number.
    #[serde(alias = "catalog_name")]
    pub label: String,
}

impl Record {
    /// Create a record without a document name.
    #[must_use]
    pub fn new(document_id: impl Into<DocumentId>, label: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            document_name: None,
            label: label.into(),
        }
    }

    /// Set the owning document's title.
    #[must_use]
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }
}

/// A record whose label carried a well-formed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    /// Owning document.
    pub document_id: DocumentId,

    /// The original, untrimmed label.
    pub label: String,

    /// The parsed number.
    pub key: NumberingKey,
}

impl ParsedEntry {
    /// Canonical dotted number, e.g. `"4.1.2"`.
    #[must_use]
    pub fn number(&self) -> String {
        self.key.to_string()
    }
}
