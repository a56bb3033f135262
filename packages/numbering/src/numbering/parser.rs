//! Numbering parser: turns a raw heading label into a [`NumberingKey`].
//!
//! Labels come straight out of document catalogs and are typed by hand, so
//! the parser accepts both ASCII and full-width punctuation:
//!
//! ```text
//! "4.1.2 Scope"   -> 4.1.2
//! "4．1 标题"      -> 4.1
//! "4. 1 Title"    -> 4.1
//! "4.x.2 Title"   -> MalformedSegment
//! "Foreword"      -> NoNumberingFound
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::key::NumberingKey;
use crate::types::{DocumentId, ParsedEntry, Record};

/// Leading dotted number at the start of a trimmed label.
///
/// The first alternative admits segments glued to a separator that are not
/// digits (`4.x.2`) so they surface as malformed instead of truncating the
/// key to `4`. It only applies when more digits follow, which keeps labels
/// like `1.Introduction` parsing as `1`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9０-９]+(?:(?:[.．][^\s.．]+)+[.．]\s*[0-9０-９]+|(?:\s*[.．])+\s*[0-9０-９]+)*",
    )
    .expect("valid regex")
});

/// Full-width full stop used as a separator in CJK catalogs.
const FULLWIDTH_STOP: char = '．';

/// Ideographic (full-width) space.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Why a label could not be turned into a numbering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// The label does not start with a number.
    #[error("no numbering found")]
    NoNumberingFound,

    /// A dotted segment is not a base-10 integer.
    #[error("numbering contains a non-numeric segment")]
    MalformedSegment,

    /// Nothing was left after splitting the numbering on separators.
    #[error("numbering is empty")]
    EmptyNumbering,
}

impl ParseErrorKind {
    /// Stable error code for reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoNumberingFound => "PARSE001",
            Self::MalformedSegment => "PARSE002",
            Self::EmptyNumbering => "PARSE003",
        }
    }
}

/// A record whose label did not yield a numbering key.
///
/// Failed records are reported individually and never reach validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{kind}: '{label}'")]
pub struct ParseFailure {
    /// What went wrong.
    pub kind: ParseErrorKind,

    /// The original label.
    pub label: String,

    /// Owning document.
    pub document_id: DocumentId,

    /// Raw segments as split from the label, when splitting got that far.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<String>,
}

impl ParseFailure {
    /// Stable error code for reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// Parse a single catalog record.
///
/// # Examples
/// ```
/// use catalog_numbering::{parse, ParseErrorKind, Record};
///
/// let entry = parse(&Record::new("doc", "4．1 总则")).unwrap();
/// assert_eq!(entry.key.segments(), &[4, 1]);
///
/// let failure = parse(&Record::new("doc", "4.x.2 Title")).unwrap_err();
/// assert_eq!(failure.kind, ParseErrorKind::MalformedSegment);
/// ```
pub fn parse(record: &Record) -> Result<ParsedEntry, ParseFailure> {
    let key = parse_label(&record.label).map_err(|(kind, segments)| ParseFailure {
        kind,
        label: record.label.clone(),
        document_id: record.document_id.clone(),
        segments,
    })?;

    Ok(ParsedEntry {
        document_id: record.document_id.clone(),
        label: record.label.clone(),
        key,
    })
}

/// Parse every record, splitting successes from failures.
///
/// Both lists keep input order.
pub fn parse_all<'a, I>(records: I) -> (Vec<ParsedEntry>, Vec<ParseFailure>)
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for record in records {
        match parse(record) {
            Ok(entry) => entries.push(entry),
            Err(failure) => failures.push(failure),
        }
    }

    (entries, failures)
}

fn parse_label(label: &str) -> Result<NumberingKey, (ParseErrorKind, Vec<String>)> {
    let trimmed = label.trim();
    let matched = NUMBERING_PATTERN
        .find(trimmed)
        .ok_or((ParseErrorKind::NoNumberingFound, Vec::new()))?
        .as_str();

    let normalized: String = matched
        .chars()
        .filter(|c| *c != IDEOGRAPHIC_SPACE)
        .map(|c| if c == FULLWIDTH_STOP { '.' } else { c })
        .collect();

    // Whitespace around a separator is dropped; stray separators leave empty
    // pieces behind, which are skipped.
    let parts: Vec<&str> = normalized
        .split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let segments: Option<Vec<u32>> = parts.iter().map(|p| parse_segment(p)).collect();
    let Some(segments) = segments else {
        return Err((
            ParseErrorKind::MalformedSegment,
            parts.iter().map(|p| (*p).to_string()).collect(),
        ));
    };

    NumberingKey::new(segments).ok_or((ParseErrorKind::EmptyNumbering, Vec::new()))
}

/// Parse one segment as a base-10 integer, accepting full-width digits.
fn parse_segment(segment: &str) -> Option<u32> {
    let digits: String = segment
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect();

    // `u32::from_str` tolerates a leading '+', which is not a digit.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}
