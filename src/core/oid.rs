//! core::oid
//!
//! OIDs in ASN.1 name-and-number notation, e.g.
//! `{iso(1) identified-organization(3) dod(6) internet(1) private(4) enterprise(1) 56521 example(999)}`.
//!
//! # Construction
//!
//! An [`ObjectIdentifier`] is built from one of the [`OidInput`] forms:
//! bracketed notation text, a list of arc tokens, a list of [`NamedArc`]
//! values, or [`OidInput::Absent`] for the zero value. It can also be
//! lifted from a [`DotPath`], in which case no arc carries a name.
//!
//! # Example
//!
//! ```
//! use objectid::core::oid::ObjectIdentifier;
//!
//! let id = ObjectIdentifier::parse(
//!     "{joint-iso-itu-t(2) uuid(25) ans(987895962269883002155146617097157934)}",
//! )
//! .unwrap();
//! assert_eq!(id.root().to_string(), "joint-iso-itu-t(2)");
//! assert_eq!(id.parent().to_string(), "uuid(25)");
//! assert_eq!(id.leaf().to_string(), "ans(987895962269883002155146617097157934)");
//! assert_eq!(id.dot().to_string(), "2.25.987895962269883002155146617097157934");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dot::DotPath;
use super::errors::OidError;
use super::named::NamedArc;
use super::number::ArcNumber;
use super::text::condense_whitespace;

/// An OID as a sequence of name-and-number arcs.
///
/// The default value is the zero value: no arcs, not valid. Equality is
/// arc by arc using [`NamedArc`] equality, so names matter; use
/// [`number_eq`](Self::number_eq) to compare numbers only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectIdentifier {
    arcs: Vec<NamedArc>,
}

/// The input forms accepted by [`ObjectIdentifier::new`].
#[derive(Debug, Clone)]
pub enum OidInput<'a> {
    /// No input; yields the zero value.
    Absent,
    /// Bracketed notation such as `{iso(1) 3 dod(6)}`.
    Notation(&'a str),
    /// One name-and-number token per arc.
    Tokens(Vec<&'a str>),
    /// Already constructed arcs.
    Arcs(Vec<NamedArc>),
}

impl<'a> From<&'a str> for OidInput<'a> {
    fn from(s: &'a str) -> Self {
        OidInput::Notation(s)
    }
}

impl<'a> From<&'a String> for OidInput<'a> {
    fn from(s: &'a String) -> Self {
        OidInput::Notation(s.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for OidInput<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        OidInput::Tokens(tokens)
    }
}

impl<'a> From<&[&'a str]> for OidInput<'a> {
    fn from(tokens: &[&'a str]) -> Self {
        OidInput::Tokens(tokens.to_vec())
    }
}

impl From<Vec<NamedArc>> for OidInput<'_> {
    fn from(arcs: Vec<NamedArc>) -> Self {
        OidInput::Arcs(arcs)
    }
}

impl<'a, T: Into<OidInput<'a>>> From<Option<T>> for OidInput<'a> {
    fn from(input: Option<T>) -> Self {
        input.map_or(OidInput::Absent, Into::into)
    }
}

impl ObjectIdentifier {
    /// Build an identifier from any supported input form.
    ///
    /// [`OidInput::Absent`] produces the zero value without error.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse), [`from_tokens`](Self::from_tokens) and
    /// [`from_arcs`](Self::from_arcs).
    pub fn new<'a>(input: impl Into<OidInput<'a>>) -> Result<Self, OidError> {
        match input.into() {
            OidInput::Absent => Ok(Self::default()),
            OidInput::Notation(s) => Self::parse(s),
            OidInput::Tokens(tokens) => Self::from_tokens(tokens),
            OidInput::Arcs(arcs) => Self::from_arcs(arcs),
        }
    }

    /// Parse bracketed notation.
    ///
    /// Whitespace around and inside the braces is condensed before the arcs
    /// are split apart.
    ///
    /// # Errors
    ///
    /// - `OidError::EmptyInput` if `s` is empty or only whitespace
    /// - `OidError::InvalidNotation` for missing or unbalanced braces, an
    ///   empty arc list, or any arc token that fails to parse
    pub fn parse(s: &str) -> Result<Self, OidError> {
        let condensed = condense_whitespace(s);
        if condensed.is_empty() {
            return Err(OidError::EmptyInput);
        }

        let inner = condensed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| {
                OidError::InvalidNotation(format!("'{condensed}' must be enclosed in '{{' and '}}'"))
            })?;

        if inner.contains(['{', '}']) {
            return Err(OidError::InvalidNotation(format!(
                "'{condensed}' has unbalanced braces"
            )));
        }

        Self::from_tokens(inner.split_whitespace())
    }

    /// Build an identifier from one token per arc.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if there are no tokens or any
    /// token is not a valid name-and-number arc.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, OidError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let arcs = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let token = token.as_ref();
                NamedArc::parse(token).map_err(|e| e.into_notation(&format!("arc {i} '{token}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if arcs.is_empty() {
            return Err(OidError::InvalidNotation(
                "an object identifier needs at least one arc".into(),
            ));
        }

        Ok(Self { arcs })
    }

    /// Build an identifier from constructed arcs.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if `arcs` is empty or holds a
    /// zero-value arc.
    pub fn from_arcs(arcs: Vec<NamedArc>) -> Result<Self, OidError> {
        if arcs.is_empty() {
            return Err(OidError::InvalidNotation(
                "an object identifier needs at least one arc".into(),
            ));
        }
        if let Some(i) = arcs.iter().position(|a| !a.valid()) {
            return Err(OidError::InvalidNotation(format!(
                "arc {i} is not a constructed arc"
            )));
        }
        Ok(Self { arcs })
    }

    /// Lift a dot notation path. The resulting arcs carry no names.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if `dot` is the zero value.
    pub fn from_dot(dot: &DotPath) -> Result<Self, OidError> {
        Self::from_arcs(dot.iter().copied().map(NamedArc::from).collect())
    }

    /// The UUID-based identifier `{joint-iso-itu-t(2) uuid(25) <uuid>}` (ITU-T X.667).
    ///
    /// ```
    /// use objectid::core::oid::ObjectIdentifier;
    /// use uuid::Uuid;
    ///
    /// let id = ObjectIdentifier::from_uuid(Uuid::nil());
    /// assert_eq!(id.to_string(), "{joint-iso-itu-t(2) uuid(25) 0}");
    /// ```
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            arcs: vec![
                NamedArc::known("joint-iso-itu-t", 2),
                NamedArc::known("uuid", 25),
                NamedArc::from(ArcNumber::from_uuid(id)),
            ],
        }
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

    /// True for any constructed identifier.
    pub fn valid(&self) -> bool {
        !self.arcs.is_empty()
    }

    /// The arcs, root first.
    pub fn arcs(&self) -> &[NamedArc] {
        &self.arcs
    }

    /// The first arc, or the zero-value arc if there is none.
    pub fn root(&self) -> NamedArc {
        self.arcs.first().cloned().unwrap_or_default()
    }

    /// The last arc, or the zero-value arc if there is none.
    pub fn leaf(&self) -> NamedArc {
        self.arcs.last().cloned().unwrap_or_default()
    }

    /// The second-to-last arc, or the zero-value arc for identifiers with
    /// fewer than two arcs.
    pub fn parent(&self) -> NamedArc {
        match self.arcs.len() {
            0 | 1 => NamedArc::default(),
            n => self.arcs[n - 2].clone(),
        }
    }

    /// Project to dot notation, dropping names.
    ///
    /// Identifiers with fewer than two arcs project to the zero-value path;
    /// a single arc is not treated as a meaningful dot notation OID.
    pub fn dot(&self) -> DotPath {
        if self.arcs.len() < 2 {
            return DotPath::default();
        }
        DotPath::from_arcs(self.arcs.iter().map(NamedArc::number).collect()).unwrap_or_default()
    }

    /// The dot notation string; empty when [`Self::dot`] is the zero value.
    pub fn dot_string(&self) -> String {
        self.dot().to_string()
    }

    /// The canonical bracketed notation; empty for the zero value.
    pub fn asn(&self) -> String {
        self.to_string()
    }

    /// True if both identifiers have the same arc numbers, ignoring names.
    pub fn number_eq(&self, other: &ObjectIdentifier) -> bool {
        self.arcs.len() == other.arcs.len()
            && self
                .arcs
                .iter()
                .zip(&other.arcs)
                .all(|(a, b)| a.number() == b.number())
    }

    /// True if this identifier's arc numbers are a prefix of (or equal to)
    /// `other`'s. Names are ignored. Zero values yield `false`.
    pub fn ancestor_of(&self, other: &ObjectIdentifier) -> bool {
        self.valid()
            && self.arcs.len() <= other.arcs.len()
            && self
                .arcs
                .iter()
                .zip(&other.arcs)
                .all(|(a, b)| a.number() == b.number())
    }

    /// A new identifier with one more arc appended.
    ///
    /// `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNotation` if `self` is the zero value, or
    /// the token's own parse error if it is not a valid arc.
    pub fn new_subordinate(&self, token: &str) -> Result<ObjectIdentifier, OidError> {
        if !self.valid() {
            return Err(OidError::InvalidNotation(
                "cannot create a subordinate of an empty identifier".into(),
            ));
        }
        let mut arcs = Vec::with_capacity(self.arcs.len() + 1);
        arcs.extend_from_slice(&self.arcs);
        arcs.push(NamedArc::parse(token)?);
        Ok(Self { arcs })
    }
}

impl FromStr for ObjectIdentifier {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The empty string is the serialized zero value and converts back to it.
impl TryFrom<String> for ObjectIdentifier {
    type Error = OidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&s)
    }
}

impl TryFrom<&DotPath> for ObjectIdentifier {
    type Error = OidError;

    fn try_from(dot: &DotPath) -> Result<Self, Self::Error> {
        Self::from_dot(dot)
    }
}

impl From<ObjectIdentifier> for String {
    fn from(id: ObjectIdentifier) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.arcs.is_empty() {
            return Ok(());
        }
        write!(f, "{{")?;
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{arc}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    const IANA: &str = "{iso(1) identified-organization(3) dod(6) internet(1) private(4) enterprise(1) 56521 example(999)}";
    const UUID_OID: &str = "{joint-iso-itu-t(2) uuid(25) ans(987895962269883002155146617097157934)}";

    mod construction {
        use super::*;

        #[test]
        fn from_notation() {
            let id = ObjectIdentifier::parse(IANA).unwrap();
            assert_eq!(id.len(), 8);
            assert!(id.valid());
            assert!(!id.is_zero());
            assert_eq!(id.asn(), IANA);
        }

        #[test]
        fn from_tokens() {
            let tokens = [
                "iso(1)",
                "identified-organization(3)",
                "dod(6)",
                "internet(1)",
                "private(4)",
                "enterprise(1)",
                "56521",
                "example(999)",
            ];
            let id = ObjectIdentifier::new(&tokens[..]).unwrap();
            assert_eq!(id, ObjectIdentifier::parse(IANA).unwrap());
        }

        #[test]
        fn from_arcs() {
            let arcs = vec![
                NamedArc::new(Some("iso"), 1).unwrap(),
                NamedArc::new(Some("identified-organization"), 3).unwrap(),
            ];
            let id = ObjectIdentifier::new(arcs).unwrap();
            assert_eq!(id.to_string(), "{iso(1) identified-organization(3)}");
        }

        #[test]
        fn absent_is_zero_value() {
            let id = ObjectIdentifier::new(OidInput::Absent).unwrap();
            assert!(id.is_zero());
            assert!(!id.valid());

            let none: Option<&str> = None;
            assert!(ObjectIdentifier::new(none).unwrap().is_zero());
        }

        #[test]
        fn from_dot() {
            let dot = DotPath::parse("1.3.6.1").unwrap();
            let id = ObjectIdentifier::from_dot(&dot).unwrap();
            assert_eq!(id.to_string(), "{1 3 6 1}");
            assert_eq!(id.dot(), dot);
            assert!(ObjectIdentifier::from_dot(&DotPath::default()).is_err());
        }

        #[test]
        fn whitespace_is_condensed() {
            let id = ObjectIdentifier::parse("  {  iso(1)\t\n identified-organization(3)   dod(6) }  ")
                .unwrap();
            assert_eq!(id.to_string(), "{iso(1) identified-organization(3) dod(6)}");
        }

        #[test]
        fn from_uuid() {
            let id = ObjectIdentifier::from_uuid(Uuid::from_u128(
                987895962269883002155146617097157934,
            ));
            assert_eq!(id.to_string(), "{joint-iso-itu-t(2) uuid(25) 987895962269883002155146617097157934}");
            assert_eq!(id.root().identifier(), "joint-iso-itu-t");
        }
    }

    mod failures {
        use super::*;

        fn kind_of(input: &str) -> ErrorKind {
            ObjectIdentifier::parse(input).unwrap_err().kind()
        }

        #[test]
        fn empty_input() {
            assert_eq!(kind_of(""), ErrorKind::EmptyInput);
            assert_eq!(kind_of("   "), ErrorKind::EmptyInput);
        }

        #[test]
        fn missing_braces() {
            assert_eq!(kind_of("iso(3) identified-organization(3)"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{iso(1) dod(6)"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("iso(1) dod(6)}"), ErrorKind::InvalidNotation);
        }

        #[test]
        fn mismatched_braces() {
            assert_eq!(kind_of("{iso(1) {dod(6)}"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{iso(1)} dod(6)}"), ErrorKind::InvalidNotation);
        }

        #[test]
        fn empty_arc_list() {
            assert_eq!(kind_of("{}"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{   }"), ErrorKind::InvalidNotation);
            assert!(ObjectIdentifier::from_arcs(Vec::new()).is_err());
            assert!(ObjectIdentifier::new(Vec::<&str>::new()).is_err());
        }

        #[test]
        fn bad_tokens() {
            assert_eq!(kind_of("{itu-t recommendation(-3)}"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{joint-iso-itu-t thing}"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{Iso(1)}"), ErrorKind::InvalidNotation);
            assert_eq!(kind_of("{bad--name(1)}"), ErrorKind::InvalidNotation);
        }

        #[test]
        fn zero_value_arcs_rejected() {
            assert!(ObjectIdentifier::from_arcs(vec![NamedArc::default()]).is_err());
        }

        #[test]
        fn error_names_the_token() {
            let err = ObjectIdentifier::parse("{iso(1) x(-1)}").unwrap_err();
            assert!(err.to_string().contains("x(-1)"));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn root_parent_leaf() {
            let id = ObjectIdentifier::parse(UUID_OID).unwrap();
            assert_eq!(id.root().to_string(), "joint-iso-itu-t(2)");
            assert_eq!(id.parent().to_string(), "uuid(25)");
            assert_eq!(
                id.leaf().to_string(),
                "ans(987895962269883002155146617097157934)"
            );
        }

        #[test]
        fn single_arc() {
            let id = ObjectIdentifier::parse("{iso(1)}").unwrap();
            assert_eq!(id.root(), id.leaf());
            assert!(id.parent().is_zero());
        }

        #[test]
        fn zero_value() {
            let id = ObjectIdentifier::default();
            assert!(id.root().is_zero());
            assert!(id.leaf().is_zero());
            assert!(id.parent().is_zero());
            assert_eq!(id.asn(), "");
        }
    }

    mod projection {
        use super::*;

        #[test]
        fn dot_drops_names() {
            let id = ObjectIdentifier::parse(IANA).unwrap();
            assert_eq!(id.dot().to_string(), "1.3.6.1.4.1.56521.999");
        }

        #[test]
        fn single_arc_projects_to_zero_value() {
            let id = ObjectIdentifier::parse("{iso(1)}").unwrap();
            let dot = id.dot();
            assert!(dot.is_zero());
            assert!(!dot.valid());
            assert_eq!(dot.to_string(), "");
            assert_eq!(id.dot_string(), "");
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn names_matter() {
            let a = ObjectIdentifier::parse("{iso(1) 3}").unwrap();
            let b = ObjectIdentifier::parse("{iso(1) identified-organization(3)}").unwrap();
            assert_ne!(a, b);
            assert!(a.number_eq(&b));
        }

        #[test]
        fn lengths_matter() {
            let a = ObjectIdentifier::parse("{iso(1) 3}").unwrap();
            let b = ObjectIdentifier::parse("{iso(1) 3 6}").unwrap();
            assert_ne!(a, b);
            assert!(!a.number_eq(&b));
            assert!(a.ancestor_of(&b));
            assert!(!b.ancestor_of(&a));
        }
    }

    #[test]
    fn subordinate() {
        let id = ObjectIdentifier::parse(IANA).unwrap();
        let child = id.new_subordinate("widget(7)").unwrap();
        assert_eq!(child.len(), 9);
        assert_eq!(child.leaf().to_string(), "widget(7)");
        assert_eq!(id.len(), 8);
        assert!(id.ancestor_of(&child));
        assert!(id.new_subordinate("Widget(7)").is_err());
        assert!(ObjectIdentifier::default().new_subordinate("1").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let id = ObjectIdentifier::parse(UUID_OID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ObjectIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn zero_value_serde_roundtrip() {
        let json = serde_json::to_string(&ObjectIdentifier::default()).unwrap();
        assert_eq!(json, "\"\"");
        let parsed: ObjectIdentifier = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_zero());
        assert!(serde_json::from_str::<ObjectIdentifier>("\" \"").is_err());
    }
}
