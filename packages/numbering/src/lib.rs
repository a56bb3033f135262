//! Catalog numbering checker - Validate dotted section numbering of documents.
//!
//! Document catalogs list headings such as `"4.1.2 Scope"` as a flat list.
//! This crate parses the leading number of each heading and checks, per
//! document, that the numbers form a well-formed hierarchy: every parent
//! exists and every sibling group is a gap-free, duplicate-free run from 1.
//!
//! # Example
//!
//! ```
//! use catalog_numbering::{check_records, Record};
//!
//! let records = vec![
//!     Record::new("doc", "1 Scope"),
//!     Record::new("doc", "1.1 General"),
//!     Record::new("doc", "1.1.1 Terms"),
//!     Record::new("doc", "1.1.3 Symbols"),
//! ];
//!
//! let report = check_records(&records);
//! assert_eq!(report.structural_error_count(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`numbering`]: Numbering keys, the label parser and the structural validator
//! - [`types`]: Catalog records and parsed entries
//! - [`source`]: Catalog sources (in-memory, JSON/YAML files)
//! - [`checker`]: Groups records by document and runs parser and validator
//! - [`report`]: Text and JSON report rendering
//! - [`config`]: Constants and input-format detection
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod numbering;
pub mod report;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use checker::{check_records, check_source, CheckReport, DocumentReport};
pub use error::{CatalogError, Result};
pub use numbering::{
    parse, parse_all, validate, NumberingKey, ParseErrorKind, ParseFailure, StructuralError,
};
pub use source::{CatalogSource, FileCatalogSource};
pub use types::{DocumentId, ParsedEntry, Record};
