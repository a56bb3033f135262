//! Structural validation of one document's numbering keys.
//!
//! The catalog is a flat list, so the hierarchy is never built as a tree.
//! Instead every key is truncated to its parent prefix and the last segments
//! of each sibling group are collected under that prefix:
//!
//! ```text
//! 1, 1.1, 1.1.1, 1.1.3, 1.2      ->   1   => [1, 2]
//!                                     1.1 => [1, 3]
//! ```
//!
//! Two invariants are then checked: every parent prefix exists as a key, and
//! every sibling group is a duplicate-free run `1..=n`.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use super::key::NumberingKey;
use crate::types::{DocumentId, ParsedEntry};

/// A violation of the numbering hierarchy within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralError {
    /// A key's parent prefix is not itself an entry of the document.
    #[error("parent {parent} of {key} does not exist")]
    MissingParent {
        document_id: DocumentId,
        key: NumberingKey,
        parent: NumberingKey,
    },

    /// A parent prefix was collected without any children.
    #[error("no children under {parent}")]
    EmptyChildren {
        document_id: DocumentId,
        parent: NumberingKey,
    },

    /// Two or more siblings share the same number.
    #[error("duplicate children under {parent}: {}", join(.duplicates))]
    DuplicateChildren {
        document_id: DocumentId,
        parent: NumberingKey,
        duplicates: Vec<u32>,
    },

    /// A sibling is numbered 0.
    #[error("invalid children under {parent} (must be greater than 0): {}", join(.invalid))]
    InvalidChildValue {
        document_id: DocumentId,
        parent: NumberingKey,
        invalid: Vec<u32>,
    },

    /// The siblings do not form the run `1..=max`.
    #[error("children under {parent} are not contiguous, missing: {}", join(.missing))]
    NonContiguousChildren {
        document_id: DocumentId,
        parent: NumberingKey,
        missing: Vec<u32>,
    },
}

impl StructuralError {
    /// Stable error code for reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParent { .. } => "VALID001",
            Self::EmptyChildren { .. } => "VALID002",
            Self::DuplicateChildren { .. } => "VALID003",
            Self::InvalidChildValue { .. } => "VALID004",
            Self::NonContiguousChildren { .. } => "VALID005",
        }
    }

    /// Document the error was found in.
    #[must_use]
    pub fn document_id(&self) -> &DocumentId {
        match self {
            Self::MissingParent { document_id, .. }
            | Self::EmptyChildren { document_id, .. }
            | Self::DuplicateChildren { document_id, .. }
            | Self::InvalidChildValue { document_id, .. }
            | Self::NonContiguousChildren { document_id, .. } => document_id,
        }
    }

    /// The offending key: the orphaned key for `MissingParent`, otherwise
    /// the parent whose children are at fault.
    #[must_use]
    pub fn key(&self) -> &NumberingKey {
        match self {
            Self::MissingParent { key, .. } => key,
            Self::EmptyChildren { parent, .. }
            | Self::DuplicateChildren { parent, .. }
            | Self::InvalidChildValue { parent, .. }
            | Self::NonContiguousChildren { parent, .. } => parent,
        }
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate the entries of a single document.
///
/// All `MissingParent` errors come first, in entry order, followed by the
/// children errors grouped per parent in key order. The input is not
/// modified and the same input always yields the same output.
///
/// # Examples
/// ```
/// use catalog_numbering::{parse, validate, Record};
///
/// let entries: Vec<_> = ["1 Scope", "1.1 General", "1.1.1 A", "1.1.3 C"]
///     .into_iter()
///     .map(|label| parse(&Record::new("doc", label)).unwrap())
///     .collect();
///
/// let errors = validate(&entries);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "children under 1.1 are not contiguous, missing: 2");
/// ```
#[must_use]
pub fn validate(entries: &[ParsedEntry]) -> Vec<StructuralError> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };

    let keys: HashSet<&NumberingKey> = entries.iter().map(|e| &e.key).collect();

    let mut children: BTreeMap<NumberingKey, Vec<u32>> = BTreeMap::new();
    for entry in entries {
        if let Some(parent) = entry.key.parent() {
            children.entry(parent).or_default().push(entry.key.last());
        }
    }

    let mut errors = check_parents(entries, &keys);

    for (parent, values) in &children {
        // Sibling groups directly under a single-segment section (4.1, 4.2,
        // ...) are exempt; only deeper groups must be complete. Top-level
        // sections never appear here since they have no parent prefix.
        if parent.len() == 1 {
            continue;
        }
        errors.extend(check_children(&first.document_id, parent, values));
    }

    errors
}

/// Every multi-segment key needs its parent prefix present as a key.
fn check_parents(
    entries: &[ParsedEntry],
    keys: &HashSet<&NumberingKey>,
) -> Vec<StructuralError> {
    entries
        .iter()
        .filter_map(|entry| {
            let parent = entry.key.parent()?;
            if keys.contains(&parent) {
                return None;
            }
            Some(StructuralError::MissingParent {
                document_id: entry.document_id.clone(),
                key: entry.key.clone(),
                parent,
            })
        })
        .collect()
}

/// Duplicate, zero and gap checks for one sibling group.
fn check_children(
    document_id: &DocumentId,
    parent: &NumberingKey,
    values: &[u32],
) -> Vec<StructuralError> {
    let mut errors = Vec::new();

    if values.is_empty() {
        errors.push(StructuralError::EmptyChildren {
            document_id: document_id.clone(),
            parent: parent.clone(),
        });
        return errors;
    }

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_default() += 1;
    }

    let duplicates: Vec<u32> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(value, _)| *value)
        .collect();
    if !duplicates.is_empty() {
        errors.push(StructuralError::DuplicateChildren {
            document_id: document_id.clone(),
            parent: parent.clone(),
            duplicates,
        });
    }

    // BTreeMap keys are the distinct values in ascending order.
    let distinct: Vec<u32> = counts.into_keys().collect();

    let invalid: Vec<u32> = distinct.iter().copied().filter(|v| *v == 0).collect();
    if !invalid.is_empty() {
        // A gap check over invalid numbers would only add noise.
        errors.push(StructuralError::InvalidChildValue {
            document_id: document_id.clone(),
            parent: parent.clone(),
            invalid,
        });
        return errors;
    }

    let max = distinct.last().copied().unwrap_or_default();
    let present: HashSet<u32> = distinct.iter().copied().collect();
    let missing: Vec<u32> = (1..=max).filter(|v| !present.contains(v)).collect();
    if !missing.is_empty() {
        errors.push(StructuralError::NonContiguousChildren {
            document_id: document_id.clone(),
            parent: parent.clone(),
            missing,
        });
    }

    errors
}
