//! Dotted hierarchical numbering keys.

use std::fmt;

use serde::{Serialize, Serializer};

/// A parsed dotted section number, e.g. `4.1.2` → `[4, 1, 2]`.
///
/// Keys are immutable once built and never empty. Equality and ordering are
/// lexicographic over the segments, so `1.2 < 1.10 < 2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumberingKey(Vec<u32>);

#[allow(clippy::len_without_is_empty)] // keys are never empty
impl NumberingKey {
    /// Build a key from its segments.
    ///
    /// Returns `None` for an empty segment list.
    ///
    /// # Examples
    /// ```
    /// use catalog_numbering::NumberingKey;
    ///
    /// let key = NumberingKey::new(vec![4, 1, 2]).unwrap();
    /// assert_eq!(key.to_string(), "4.1.2");
    /// assert!(NumberingKey::new(Vec::new()).is_none());
    /// ```
    #[must_use]
    pub fn new(segments: Vec<u32>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Heading level of the entry: `1` for `4`, `3` for `4.1.2`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The last segment, i.e. the position among its siblings.
    #[must_use]
    pub fn last(&self) -> u32 {
        // Non-empty by construction.
        self.0.last().copied().unwrap_or_default()
    }

    /// The key with its last segment dropped, or `None` for a top-level key.
    #[must_use]
    pub fn parent(&self) -> Option<NumberingKey> {
        if self.0.len() > 1 {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }
}

impl fmt::Display for NumberingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for NumberingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(segments: &[u32]) -> NumberingKey {
        NumberingKey::new(segments.to_vec()).unwrap()
    }

    #[test]
    fn test_display_dotted() {
        assert_eq!(key(&[4]).to_string(), "4");
        assert_eq!(key(&[4, 1, 2]).to_string(), "4.1.2");
    }

    #[test]
    fn test_parent() {
        assert_eq!(key(&[4, 1, 2]).parent(), Some(key(&[4, 1])));
        assert_eq!(key(&[4, 1]).parent(), Some(key(&[4])));
        assert_eq!(key(&[4]).parent(), None);
    }

    #[test]
    fn test_depth_and_last() {
        let k = key(&[3, 2, 7]);
        assert_eq!(k.depth(), 3);
        assert_eq!(k.len(), 3);
        assert_eq!(k.last(), 7);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut keys = vec![key(&[2]), key(&[1, 10]), key(&[1, 2]), key(&[1])];
        keys.sort();
        assert_eq!(keys, vec![key(&[1]), key(&[1, 2]), key(&[1, 10]), key(&[2])]);
    }

    #[test]
    fn test_serializes_as_dotted_string() {
        assert_eq!(serde_json::to_string(&key(&[1, 2])).unwrap(), "\"1.2\"");
    }
}
