//! Catalog checker that ties parsing and validation together.
//!
//! Records are parsed, grouped by owning document and validated one document
//! at a time. Documents are independent: errors in one never affect another.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::extract_part_number;
use crate::error::Result;
use crate::numbering::{parse, validate, ParseFailure, StructuralError};
use crate::source::CatalogSource;
use crate::types::{DocumentId, ParsedEntry, Record};

/// Check results for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Document identifier.
    pub document_id: DocumentId,

    /// Document title, when the catalog provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,

    /// Part number from a "第N部分" title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<u32>,

    /// Number of records that parsed into a numbering key.
    pub entries: usize,

    /// Records whose label could not be parsed.
    pub parse_failures: Vec<ParseFailure>,

    /// Hierarchy violations among the parsed entries.
    pub structural_errors: Vec<StructuralError>,
}

impl DocumentReport {
    /// Total number of errors of both kinds.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.parse_failures.len() + self.structural_errors.len()
    }

    /// Whether the document has no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Check results for a whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of input records.
    pub records: usize,

    /// Per-document results, ordered by part number.
    pub documents: Vec<DocumentReport>,
}

impl CheckReport {
    /// Number of records that parsed into a numbering key.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.documents.iter().map(|d| d.entries).sum()
    }

    /// Number of parse failures across all documents.
    #[must_use]
    pub fn parse_failure_count(&self) -> usize {
        self.documents.iter().map(|d| d.parse_failures.len()).sum()
    }

    /// Number of structural errors across all documents.
    #[must_use]
    pub fn structural_error_count(&self) -> usize {
        self.documents
            .iter()
            .map(|d| d.structural_errors.len())
            .sum()
    }

    /// Total number of errors of both kinds.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.parse_failure_count() + self.structural_error_count()
    }

    /// Whether the whole catalog is free of errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Iterate over all structural errors in document order.
    pub fn structural_errors(&self) -> impl Iterator<Item = &StructuralError> {
        self.documents.iter().flat_map(|d| d.structural_errors.iter())
    }
}

/// Records of one document collected during grouping.
#[derive(Default)]
struct DocumentGroup {
    name: Option<String>,
    entries: Vec<ParsedEntry>,
    failures: Vec<ParseFailure>,
}

/// Check all records of a catalog.
///
/// # Examples
/// ```
/// use catalog_numbering::{check_records, Record};
///
/// let records = vec![
///     Record::new("a", "1 Scope"),
///     Record::new("a", "1.1 General"),
///     Record::new("b", "Foreword"),
/// ];
/// let report = check_records(&records);
/// assert_eq!(report.documents.len(), 2);
/// assert_eq!(report.parse_failure_count(), 1);
/// assert_eq!(report.structural_error_count(), 0);
/// ```
#[must_use]
pub fn check_records(records: &[Record]) -> CheckReport {
    let mut order: Vec<DocumentId> = Vec::new();
    let mut groups: HashMap<DocumentId, DocumentGroup> = HashMap::new();

    for record in records {
        let group = groups.entry(record.document_id.clone()).or_insert_with(|| {
            order.push(record.document_id.clone());
            DocumentGroup::default()
        });

        if group.name.is_none() {
            group.name.clone_from(&record.document_name);
        }

        match parse(record) {
            Ok(entry) => group.entries.push(entry),
            Err(failure) => {
                tracing::warn!(
                    document = %failure.document_id,
                    code = failure.code(),
                    "{failure}"
                );
                group.failures.push(failure);
            }
        }
    }

    let mut documents: Vec<DocumentReport> = order
        .into_iter()
        .filter_map(|id| {
            let group = groups.remove(&id)?;
            Some(check_document(id, group))
        })
        .collect();

    // Stable sort: documents without a part number go last, ties keep
    // catalog order.
    documents.sort_by_key(|d| (d.part_number.is_none(), d.part_number));

    let report = CheckReport {
        records: records.len(),
        documents,
    };

    tracing::info!(
        records = report.records,
        entries = report.entry_count(),
        documents = report.documents.len(),
        parse_failures = report.parse_failure_count(),
        structural_errors = report.structural_error_count(),
        "catalog check finished"
    );

    report
}

/// Load records from a source and check them.
///
/// Fails only if the source fails; numbering problems end up in the report.
pub fn check_source<S: CatalogSource + ?Sized>(source: &S) -> Result<CheckReport> {
    let records = source.records()?;
    tracing::info!(records = records.len(), "loaded catalog records");
    Ok(check_records(&records))
}

fn check_document(document_id: DocumentId, group: DocumentGroup) -> DocumentReport {
    let structural_errors = validate(&group.entries);

    tracing::debug!(
        document = %document_id,
        entries = group.entries.len(),
        errors = structural_errors.len(),
        "validated document"
    );
    for error in &structural_errors {
        tracing::warn!(document = %document_id, code = error.code(), "{error}");
    }

    DocumentReport {
        part_number: group.name.as_deref().and_then(extract_part_number),
        document_name: group.name,
        entries: group.entries.len(),
        parse_failures: group.failures,
        structural_errors,
        document_id,
    }
}
