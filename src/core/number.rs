//! core::number
//!
//! The numeric value of a single OID arc.
//!
//! # Types
//!
//! - [`ArcNumber`] - Unsigned 128-bit arc value with a parsed flag
//! - [`NumberLike`] - Operand accepted by construction and comparisons
//!
//! # Range
//!
//! Arc values are stored as `u128`, which covers UUID-based arcs
//! (`{joint-iso-itu-t(2) uuid(25) ...}`). Anything wider is rejected at
//! parse time; values are never truncated or wrapped.
//!
//! # Example
//!
//! ```
//! use objectid::core::number::ArcNumber;
//!
//! let n = ArcNumber::parse("987895962269883002155146617097157934").unwrap();
//! assert!(n.gt("56521"));
//! assert!(n.ge(n));
//! assert!(!n.lt(-1)); // negative operands always compare false
//!
//! // Wider than 128 bits
//! assert!(ArcNumber::parse("340282366920938463463374607431768211456").is_err());
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OidError;
use super::text::is_digit;

/// An unsigned arc value of up to 128 bits.
///
/// The default value is the zero value: it reports [`is_zero`](Self::is_zero)
/// but not [`valid`](Self::valid). A parsed literal `0` is both zero and valid.
///
/// Equality, ordering and hashing compare magnitude only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArcNumber {
    value: u128,
    parsed: bool,
}

impl ArcNumber {
    /// Build an arc number from any supported operand.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNumber` for empty text, non-digit characters,
    /// negative values and values wider than 128 bits.
    pub fn new<'a>(value: impl Into<NumberLike<'a>>) -> Result<Self, OidError> {
        value.into().resolve()
    }

    /// Parse a base-10 string.
    ///
    /// Leading zeros are accepted; the canonical rendering drops them.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNumber` if `s` is not a non-negative decimal
    /// integer that fits in 128 bits.
    pub fn parse(s: &str) -> Result<Self, OidError> {
        if s.is_empty() {
            return Err(OidError::InvalidNumber("number cannot be empty".into()));
        }
        if s.starts_with('-') {
            return Err(OidError::InvalidNumber(format!(
                "'{s}' is negative; arc numbers cannot be negative"
            )));
        }

        if let Some(c) = s.chars().find(|&c| !is_digit(c)) {
            return Err(OidError::InvalidNumber(format!(
                "'{s}' contains non-digit character '{c}'"
            )));
        }

        s.bytes()
            .try_fold(0u128, |acc, b| {
                acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
            })
            .map(Self::from_u128)
            .ok_or_else(|| OidError::InvalidNumber(format!("'{s}' overflows 128 bits")))
    }

    const fn from_u128(value: u128) -> Self {
        Self {
            value,
            parsed: true,
        }
    }

    /// The arc for a UUID under `{joint-iso-itu-t(2) uuid(25)}` (ITU-T X.667).
    ///
    /// ```
    /// use objectid::core::number::ArcNumber;
    /// use uuid::Uuid;
    ///
    /// let id = Uuid::parse_str("f81d4fae-7dec-11d0-a765-00a0c91e6bf6").unwrap();
    /// assert_eq!(
    ///     ArcNumber::from_uuid(id).to_string(),
    ///     "329800735698586629295641978511506172918"
    /// );
    /// ```
    pub fn from_uuid(id: Uuid) -> Self {
        Self::from_u128(id.as_u128())
    }

    /// The numeric value. Zero for the zero value.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// True for a parsed zero and for the zero value.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// True once the number has been constructed through a parse.
    pub fn valid(&self) -> bool {
        self.parsed
    }

    /// Minimum number of bits needed to represent the value; 0 for zero.
    pub fn bit_len(&self) -> u32 {
        u128::BITS - self.value.leading_zeros()
    }

    /// Compare against an operand, or `None` if the operand is unusable.
    fn compare<'a>(&self, other: impl Into<NumberLike<'a>>) -> Option<Ordering> {
        other
            .into()
            .resolve()
            .ok()
            .map(|other| self.value.cmp(&other.value))
    }

    /// Equal in magnitude to `other`. False if `other` is negative or unparseable.
    pub fn equal<'a>(&self, other: impl Into<NumberLike<'a>>) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Greater than `other`. False if `other` is negative or unparseable.
    pub fn gt<'a>(&self, other: impl Into<NumberLike<'a>>) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    /// Greater than or equal to `other`. False if `other` is negative or unparseable.
    pub fn ge<'a>(&self, other: impl Into<NumberLike<'a>>) -> bool {
        matches!(
            self.compare(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Less than `other`. False if `other` is negative or unparseable.
    pub fn lt<'a>(&self, other: impl Into<NumberLike<'a>>) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Less than or equal to `other`. False if `other` is negative or unparseable.
    pub fn le<'a>(&self, other: impl Into<NumberLike<'a>>) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }
}

impl PartialEq for ArcNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ArcNumber {}

impl Hash for ArcNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for ArcNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArcNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl FromStr for ArcNumber {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArcNumber {
    type Error = OidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ArcNumber> for String {
    fn from(n: ArcNumber) -> Self {
        n.to_string()
    }
}

macro_rules! arc_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for ArcNumber {
            fn from(v: $t) -> Self {
                Self::from_u128(v as u128)
            }
        }
    )*};
}

arc_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! arc_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for ArcNumber {
            type Error = OidError;

            fn try_from(v: $t) -> Result<Self, Self::Error> {
                NumberLike::Signed(v as i128).resolve()
            }
        }
    )*};
}

arc_try_from_signed!(i8, i16, i32, i64, i128, isize);

impl std::fmt::Display for ArcNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An operand that can be turned into an [`ArcNumber`].
///
/// Construction and the comparison methods accept anything convertible
/// into this type: string slices, native integers, or other arc numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLike<'a> {
    /// Decimal text.
    Text(&'a str),
    /// A native signed integer; negative values never resolve.
    Signed(i128),
    /// A native unsigned integer.
    Unsigned(u128),
    /// An existing arc number.
    Number(ArcNumber),
}

impl NumberLike<'_> {
    /// Normalize the operand into an arc number.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidNumber` for negative values, bad text and
    /// zero-value numbers.
    pub fn resolve(self) -> Result<ArcNumber, OidError> {
        match self {
            NumberLike::Text(s) => ArcNumber::parse(s),
            NumberLike::Signed(v) if v < 0 => Err(OidError::InvalidNumber(format!(
                "{v} is negative; arc numbers cannot be negative"
            ))),
            NumberLike::Signed(v) => Ok(ArcNumber::from_u128(v.unsigned_abs())),
            NumberLike::Unsigned(v) => Ok(ArcNumber::from_u128(v)),
            NumberLike::Number(n) if !n.valid() => Err(OidError::InvalidNumber(
                "number was never constructed".into(),
            )),
            NumberLike::Number(n) => Ok(n),
        }
    }
}

impl<'a> From<&'a str> for NumberLike<'a> {
    fn from(s: &'a str) -> Self {
        NumberLike::Text(s)
    }
}

impl<'a> From<&'a String> for NumberLike<'a> {
    fn from(s: &'a String) -> Self {
        NumberLike::Text(s.as_str())
    }
}

impl From<ArcNumber> for NumberLike<'_> {
    fn from(n: ArcNumber) -> Self {
        NumberLike::Number(n)
    }
}

impl From<&ArcNumber> for NumberLike<'_> {
    fn from(n: &ArcNumber) -> Self {
        NumberLike::Number(*n)
    }
}

macro_rules! number_like_from {
    ($variant:ident, $wide:ty: $($t:ty),*) => {$(
        impl From<$t> for NumberLike<'_> {
            fn from(v: $t) -> Self {
                NumberLike::$variant(v as $wide)
            }
        }
    )*};
}

number_like_from!(Unsigned, u128: u8, u16, u32, u64, u128, usize);
number_like_from!(Signed, i128: i8, i16, i32, i64, i128, isize);
