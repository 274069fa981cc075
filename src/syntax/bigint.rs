//! This module implements the `JsBigInt` structure, the cooked value carried by a
//! `BigIntLiteral` token.
//!
//! More information:
//!  - [ECMAScript reference][spec]
//!  - [MDN documentation][mdn]
//!
//! [spec]: https://tc39.es/ecma262/#sec-bigint-objects
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/BigInt

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// An arbitrary-precision integer, as produced by a numeric literal carrying the `n` suffix.
///
/// The scanner only ever constructs these from a validated digit run (leading `0x`/`0o`/`0b`
/// prefix already stripped, digit separators already removed); it performs no arithmetic on
/// the value, it only carries it through to the parser.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct JsBigInt(num_bigint::BigInt);

impl JsBigInt {
    /// Parses `digits` (with digit separators already stripped) in the given radix.
    ///
    /// Returns `None` only if `digits` is empty or contains a character invalid in `radix` —
    /// both cases the scanner should have already excluded by construction.
    pub fn from_str_radix(digits: &str, radix: u32) -> Option<Self> {
        num_bigint::BigInt::parse_bytes(digits.as_bytes(), radix).map(Self)
    }

    pub fn into_inner(self) -> num_bigint::BigInt {
        self.0
    }
}

impl From<num_bigint::BigInt> for JsBigInt {
    fn from(inner: num_bigint::BigInt) -> Self {
        Self(inner)
    }
}

impl FromStr for JsBigInt {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        num_bigint::BigInt::from_str(s).map(Self)
    }
}

impl fmt::Display for JsBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}n", self.0)
    }
}
