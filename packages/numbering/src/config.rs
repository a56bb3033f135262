//! Configuration constants and input-format detection.

use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CatalogError, Result};

/// Extensions accepted for catalog input files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Part marker in document titles, e.g. "第3部分：试验方法".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第(\d+)部分").expect("valid regex"));

/// Serialization format of a catalog input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use catalog_numbering::config::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path(Path::new("toc.json")).unwrap(), InputFormat::Json);
    /// assert_eq!(InputFormat::from_path(Path::new("toc.YML")).unwrap(), InputFormat::Yaml);
    /// assert!(InputFormat::from_path(Path::new("toc.csv")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for InputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Extract the part number from a document title.
///
/// Returns `None` when the title has no "第N部分" marker.
///
/// # Examples
/// ```
/// use catalog_numbering::config::extract_part_number;
///
/// assert_eq!(extract_part_number("GB/T 1.1 第2部分：编写规则"), Some(2));
/// assert_eq!(extract_part_number("General requirements"), None);
/// ```
#[must_use]
pub fn extract_part_number(document_name: &str) -> Option<u32> {
    PART_NUMBER_PATTERN
        .captures(document_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
