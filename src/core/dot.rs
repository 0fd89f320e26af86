//! core::dot
//!
//! OIDs in numeric dot notation, e.g. `1.3.6.1.4.1.56521.999.5`.
//!
//! # Types
//!
//! - [`DotPath`] - Ordered arc numbers, root first
//! - [`DotLike`] - Operand accepted by [`DotPath::ancestor_of`]
//! - [`Ancestry`] - Iterator over every prefix of a path
//!
//! # Example
//!
//! ```
//! use objectid::core::dot::DotPath;
//!
//! let dot = DotPath::parse("1.3.6.1.4.1.56521.999.5").unwrap();
//! assert_eq!(dot.len(), 9);
//! assert_eq!(dot.index(1).unwrap().to_string(), "3");
//! assert_eq!(dot.index(-1).unwrap().to_string(), "5");
//!
//! let child = dot.new_subordinate("10001").unwrap();
//! assert_eq!(child.to_string(), "1.3.6.1.4.1.56521.999.5.10001");
//! assert!(dot.ancestor_of(&child));
//! assert!(!child.ancestor_of(&dot));
//! ```

use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::OidError;
use super::number::{ArcNumber, NumberLike};

/// An OID as a sequence of arc numbers.
///
/// The default value is the zero value: no arcs, not valid. Any parsed
/// path has at least one arc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DotPath {
    arcs: Vec<ArcNumber>,
}

impl DotPath {
    /// Parse dot notation.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` for empty input, an empty arc
    /// (leading, trailing or doubled dots) or any arc that is not a valid
    /// arc number.
    pub fn parse(s: &str) -> Result<Self, OidError> {
        if s.is_empty() {
            return Err(OidError::InvalidNotation(
                "dot notation cannot be empty".into(),
            ));
        }

        let arcs = s
            .split('.')
            .enumerate()
            .map(|(i, token)| {
                if token.is_empty() {
                    return Err(OidError::InvalidNotation(format!(
                        "'{s}' has an empty arc at position {i}"
                    )));
                }
                ArcNumber::parse(token)
                    .map_err(|e| e.into_notation(&format!("arc {i} of '{s}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { arcs })
    }

    /// Build a path from existing arc numbers.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if `arcs` is empty or contains a
    /// zero-value number.
    pub fn from_arcs(arcs: Vec<ArcNumber>) -> Result<Self, OidError> {
        if arcs.is_empty() {
            return Err(OidError::InvalidNotation(
                "dot notation needs at least one arc".into(),
            ));
        }
        if let Some(i) = arcs.iter().position(|a| !a.valid()) {
            return Err(OidError::InvalidNotation(format!(
                "arc {i} is not a constructed number"
            )));
        }
        Ok(Self { arcs })
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// True if there are no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// True only for the zero value.
    pub fn is_zero(&self) -> bool {
        self.arcs.is_empty()
    }

    /// True when at least one arc is present.
    pub fn valid(&self) -> bool {
        !self.arcs.is_empty()
    }

    /// The arcs, root first.
    pub fn arcs(&self) -> &[ArcNumber] {
        &self.arcs
    }

    /// Iterate over the arcs, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, ArcNumber> {
        self.arcs.iter()
    }

    /// Get an arc by logical index.
    ///
    /// Negative indices count from the end (`-1` is the last arc). Indices
    /// past either end are clamped to the nearest arc rather than rejected,
    /// so `index(100)` on a nine-arc path returns the last arc. Check
    /// [`len`](Self::len) first when strict bounds matter.
    ///
    /// Returns `None` only for the zero value.
    pub fn index(&self, i: isize) -> Option<ArcNumber> {
        let last = self.arcs.len().checked_sub(1)?;
        let pos = if i < 0 {
            last.saturating_sub(i.unsigned_abs() - 1)
        } else {
            i.unsigned_abs().min(last)
        };
        self.arcs.get(pos).copied()
    }

    /// The first arc.
    pub fn root(&self) -> Option<ArcNumber> {
        self.arcs.first().copied()
    }

    /// The last arc.
    pub fn leaf(&self) -> Option<ArcNumber> {
        self.arcs.last().copied()
    }

    /// The path without its last arc; the zero value if there is no such prefix.
    pub fn parent(&self) -> DotPath {
        match self.arcs.len() {
            0 | 1 => DotPath::default(),
            n => Self {
                arcs: self.arcs[..n - 1].to_vec(),
            },
        }
    }

    /// Every prefix of this path, from the root arc up to the path itself.
    ///
    /// The returned iterator can be cloned to walk the prefixes again.
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry {
            arcs: &self.arcs,
            front: 1,
            back: self.arcs.len(),
        }
    }

    /// True if this path is a prefix of (or equal to) `other`.
    ///
    /// `other` may be another path or dot notation text. Unparseable text and
    /// zero values yield `false`.
    pub fn ancestor_of<'a>(&self, other: impl Into<DotLike<'a>>) -> bool {
        if !self.valid() {
            return false;
        }
        match other.into() {
            DotLike::Path(path) => path.arcs.starts_with(&self.arcs),
            DotLike::Owned(path) => path.arcs.starts_with(&self.arcs),
            DotLike::Text(s) => DotPath::parse(s)
                .map(|path| path.arcs.starts_with(&self.arcs))
                .unwrap_or(false),
        }
    }

    /// A new path with one more arc appended.
    ///
    /// `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if `self` is the zero value, or
    /// `OidError::InvalidNumber` if the new arc is not a valid arc number.
    pub fn new_subordinate<'a>(&self, arc: impl Into<NumberLike<'a>>) -> Result<DotPath, OidError> {
        if !self.valid() {
            return Err(OidError::InvalidNotation(
                "cannot create a subordinate of an empty path".into(),
            ));
        }
        let arc = ArcNumber::new(arc)?;
        let mut arcs = Vec::with_capacity(self.arcs.len() + 1);
        arcs.extend_from_slice(&self.arcs);
        arcs.push(arc);
        Ok(Self { arcs })
    }
}

impl FromStr for DotPath {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The empty string is the serialized zero value and converts back to it.
impl TryFrom<String> for DotPath {
    type Error = OidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&s)
    }
}

impl From<DotPath> for String {
    fn from(path: DotPath) -> Self {
        path.to_string()
    }
}

impl<'a> IntoIterator for &'a DotPath {
    type Item = &'a ArcNumber;
    type IntoIter = std::slice::Iter<'a, ArcNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.iter()
    }
}

impl std::fmt::Display for DotPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.arcs.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for arc in iter {
                write!(f, ".{arc}")?;
            }
        }
        Ok(())
    }
}

/// An operand accepted by [`DotPath::ancestor_of`].
#[derive(Debug, Clone)]
pub enum DotLike<'a> {
    /// Dot notation text, parsed on use.
    Text(&'a str),
    /// A borrowed path.
    Path(&'a DotPath),
    /// An owned path.
    Owned(DotPath),
}

impl<'a> From<&'a str> for DotLike<'a> {
    fn from(s: &'a str) -> Self {
        DotLike::Text(s)
    }
}

impl<'a> From<&'a String> for DotLike<'a> {
    fn from(s: &'a String) -> Self {
        DotLike::Text(s.as_str())
    }
}

impl<'a> From<&'a DotPath> for DotLike<'a> {
    fn from(path: &'a DotPath) -> Self {
        DotLike::Path(path)
    }
}

impl From<DotPath> for DotLike<'_> {
    fn from(path: DotPath) -> Self {
        DotLike::Owned(path)
    }
}

/// Prefixes of a [`DotPath`], shortest first.
///
/// Created by [`DotPath::ancestry`].
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    arcs: &'a [ArcNumber],
    front: usize,
    back: usize,
}

impl Iterator for Ancestry<'_> {
    type Item = DotPath;

    fn next(&mut self) -> Option<DotPath> {
        if self.front > self.back {
            return None;
        }
        let prefix = DotPath {
            arcs: self.arcs[..self.front].to_vec(),
        };
        self.front += 1;
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back + 1).saturating_sub(self.front);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Ancestry<'_> {
    fn next_back(&mut self) -> Option<DotPath> {
        if self.front > self.back {
            return None;
        }
        let prefix = DotPath {
            arcs: self.arcs[..self.back].to_vec(),
        };
        self.back -= 1;
        Some(prefix)
    }
}

impl ExactSizeIterator for Ancestry<'_> {}

impl FusedIterator for Ancestry<'_> {}
