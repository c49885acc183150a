//! Materialized organisation-tree paths.
//!
//! A [`HierarchyPath`] records a node's position in the organisation tree as
//! an ordered list of numeric segments, written in the slash-delimited form
//! `/1/3/2/` (the root is `/`). Ancestor/descendant tests are
//! segment-prefix comparisons, never raw text containment, so `/1/` is not
//! mistaken for an ancestor of `/10/`.

use std::str::FromStr;

/// Errors that can occur when parsing a hierarchy path.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyPathError {
    /// The text did not start and end with `/`.
    #[error("hierarchy path must be delimited by '/': {0:?}")]
    NotDelimited(String),
    /// A segment between delimiters was empty or not an unsigned integer.
    #[error("hierarchy path segment is not an unsigned integer: {0:?}")]
    InvalidSegment(String),
}

/// A node's materialized position in the organisation tree.
///
/// Sibling order carries no meaning; only ancestry does. Paths are assigned
/// when a node is created and never mutated in place (tree edits produce new
/// nodes), so values of this type are safe to share across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HierarchyPath(Vec<u64>);

impl HierarchyPath {
    /// The root of the tree, written `/`.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path directly from its segments.
    pub fn from_segments(segments: impl Into<Vec<u64>>) -> Self {
        Self(segments.into())
    }

    /// The path's segments, outermost ancestor first.
    pub fn segments(&self) -> &[u64] {
        &self.0
    }

    /// Number of segments; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True for the tree root `/`.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` sits strictly below `ancestor` in the tree.
    ///
    /// A path is never a descendant of itself; use equality for that case.
    pub fn is_descendant_of(&self, ancestor: &HierarchyPath) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }
}

impl FromStr for HierarchyPath {
    type Err = HierarchyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "/" {
            return Ok(Self::root());
        }

        let inner = s
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
            .ok_or_else(|| HierarchyPathError::NotDelimited(s.to_owned()))?;

        if inner.is_empty() {
            // "//" and similar degenerate forms.
            return Err(HierarchyPathError::InvalidSegment(String::new()));
        }

        let segments = inner
            .split('/')
            .map(|seg| {
                seg.parse::<u64>()
                    .map_err(|_| HierarchyPathError::InvalidSegment(seg.to_owned()))
            })
            .collect::<Result<Vec<u64>, _>>()?;

        Ok(Self(segments))
    }
}

impl std::fmt::Display for HierarchyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        write!(f, "/")
    }
}

impl serde::Serialize for HierarchyPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HierarchyPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
