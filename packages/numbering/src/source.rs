//! Catalog sources: where records come from.
//!
//! A source must hand over the complete catalog or fail; the checker never
//! runs on a partially loaded document set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::InputFormat;
use crate::error::{CatalogError, Result};
use crate::types::Record;

/// Trait for anything that can deliver catalog records in catalog order.
pub trait CatalogSource {
    /// Load all records.
    fn records(&self) -> Result<Vec<Record>>;
}

impl CatalogSource for [Record] {
    fn records(&self) -> Result<Vec<Record>> {
        Ok(self.to_vec())
    }
}

impl CatalogSource for Vec<Record> {
    fn records(&self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}

/// Records stored as a JSON or YAML array in a file.
///
/// ```json
/// [
///   {"document_id": 1, "document_name": "第1部分：通用要求", "label": "1 范围"},
///   {"document_id": 1, "label": "1.1 目的"}
/// ]
/// ```
///
/// `catalog_name` is accepted as an alias for `label`.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    format: InputFormat,
}

impl FileCatalogSource {
    /// Create a source, detecting the format from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = InputFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Create a source with an explicit format.
    #[must_use]
    pub fn with_format(path: impl Into<PathBuf>, format: InputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Path of the input file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn records(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Err(CatalogError::InputNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let records: Vec<Record> = match self.format {
            InputFormat::Json => serde_json::from_str(&content)?,
            InputFormat::Yaml => serde_yaml_ng::from_str(&content)?,
        };

        tracing::debug!(path = %self.path.display(), "loaded catalog file");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::types::DocumentId;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_in_memory_source() {
        let records = vec![Record::new("d1", "1 Scope")];
        assert_eq!(records.records().unwrap(), records);
        assert_eq!(records[..].records().unwrap().len(), 1);
    }

    #[test]
    fn test_json_file_source() {
        let file = write_temp(
            ".json",
            r#"[
                {"document_id": 1, "document_name": "第1部分", "catalog_name": "1 范围"},
                {"document_id": "1", "label": "1.1 目的"}
            ]"#,
        );

        let records = FileCatalogSource::new(file.path()).unwrap().records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].document_id, DocumentId::new("1"));
        assert_eq!(records[0].label, "1 范围");
        assert_eq!(records[1].document_id, records[0].document_id);
        assert!(records[1].document_name.is_none());
    }

    #[test]
    fn test_yaml_file_source() {
        let file = write_temp(
            ".yaml",
            "- document_id: a\n  label: 1 Scope\n- document_id: a\n  label: 1.1 Purpose\n",
        );

        let records = FileCatalogSource::new(file.path()).unwrap().records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].label, "1.1 Purpose");
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let file = write_temp(".txt", r#"[{"document_id": 1, "label": "1 A"}]"#);
        assert!(FileCatalogSource::new(file.path()).is_err());

        let source = FileCatalogSource::with_format(file.path(), InputFormat::Json);
        assert_eq!(source.records().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let source = FileCatalogSource::new("does/not/exist.json").unwrap();
        assert!(matches!(
            source.records(),
            Err(CatalogError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_temp(".json", "{not json");
        let source = FileCatalogSource::new(file.path()).unwrap();
        assert!(matches!(source.records(), Err(CatalogError::Json(_))));
    }
}
