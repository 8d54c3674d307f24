//! Number definition, validated construction, and basic accessors.

use crate::arith;
use crate::defs::Error;
use crate::defs::Radix;
use crate::defs::Sign;

/// The sign marker accepted in front of the integer digits.
const NEGATIVE_MARK: char = '-';

/// An arbitrary length number held as digit strings in one of the supported radixes.
///
/// A number consists of a radix tag, a sign, an integer digit string, and an
/// optional fractional digit string. Both strings are validated against the
/// radix alphabet once, at construction, and are never re-checked afterwards.
/// Conversions return a newly owned sibling value; the rounding operations
/// mutate the receiver in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    rdx: Radix,
    s: Sign,
    digits: String,
    fraction: Option<String>,
}

impl Number {
    /// Creates a number in radix `rdx` from an integer digit string and an
    /// optional fractional digit string. A single leading `-` in `integral`
    /// marks the number as negative and is stripped from the digits.
    /// The sign is kept as given; a zero value may stay negative.
    ///
    /// ## Errors
    ///
    ///  - InvalidNumberFormat: `integral` or `fractional` contains a character
    ///    outside the radix alphabet.
    pub fn new(rdx: Radix, integral: &str, fractional: Option<&str>) -> Result<Self, Error> {
        let mut s = Sign::Pos;
        let mut digits = integral;

        if let Some(stripped) = integral.strip_prefix(NEGATIVE_MARK) {
            s = Sign::Neg;
            digits = stripped;
        }

        if !validate(rdx, digits) || !fractional.map_or(true, |f| validate(rdx, f)) {
            return Err(Error::InvalidNumberFormat);
        }

        Ok(Self::from_raw_unchecked(
            rdx,
            s,
            digits.to_owned(),
            fractional.map(str::to_owned),
        ))
    }

    // Digit strings must already be validated for `rdx` and hold no sign marker.
    pub(crate) fn from_raw_unchecked(
        rdx: Radix,
        s: Sign,
        digits: String,
        fraction: Option<String>,
    ) -> Self {
        Number {
            rdx,
            s,
            digits,
            fraction: fraction.filter(|f| !f.is_empty()),
        }
    }

    /// Returns the radix of the number.
    pub fn radix(&self) -> Radix {
        self.rdx
    }

    /// Returns the sign of the number.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the number is negative.
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns the integer digits without the sign marker and without the fractional part.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the fractional digits, or an empty string when the number has no fractional part.
    pub fn fraction(&self) -> &str {
        self.fraction.as_deref().unwrap_or("")
    }

    /// Returns the number of fractional digits.
    pub fn fraction_len(&self) -> usize {
        self.fraction().len()
    }

    // The fractional digits, `None` when the number has no fractional part.
    pub(crate) fn fraction_opt(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Adds `operand` to the integer digits of the number through the decimal
    /// arithmetic backend, retaining `precision` fractional digits.
    /// The fractional part of the receiver does not participate in the
    /// addition; combining an operand carrying fractional digits with a
    /// nonzero `precision` leaves the result in the integer digit string.
    ///
    /// ## Panics
    ///
    /// Panics if the number is not decimal.
    pub fn add(&mut self, operand: &str, precision: usize) {
        assert_eq!(self.rdx, Radix::Dec, "add is defined for decimal numbers only");

        self.digits = arith::add(&self.digits, operand, precision);
    }

    pub(crate) fn set_digits(&mut self, digits: String) {
        self.digits = digits;
    }

    pub(crate) fn set_fraction(&mut self, fraction: Option<String>) {
        self.fraction = fraction.filter(|f| !f.is_empty());
    }

    pub(crate) fn set_sign(&mut self, s: Sign) {
        self.s = s;
    }
}

fn validate(rdx: Radix, digits: &str) -> bool {
    digits.chars().all(|c| rdx.is_digit(c))
}
