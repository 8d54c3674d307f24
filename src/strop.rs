//! Number parsing and formatting.

use crate::defs::Error;
use crate::defs::Radix;
use crate::num::Number;
use core::fmt::Display;
use core::str::FromStr;

/// The radix point separating integer and fractional digits.
const RADIX_POINT: char = '.';

impl Number {
    /// Parses the number from the string `s` using radix `rdx`. The string is
    /// split at the radix point: digits in front of it become the integer
    /// part, digits after it the fractional part. A string without a radix
    /// point has no fractional part.
    ///
    /// ## Errors
    ///
    ///  - InvalidNumberFormat: a part of `s` contains a character outside the
    ///    radix alphabet, or `s` contains more than one radix point.
    pub fn parse(s: &str, rdx: Radix) -> Result<Self, Error> {
        match s.split_once(RADIX_POINT) {
            Some((integral, fractional)) => Number::new(rdx, integral, Some(fractional)),
            None => Number::new(rdx, s, None),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        f.write_str(self.digits())?;

        if !self.fraction().is_empty() {
            write!(f, "{}{}", RADIX_POINT, self.fraction())?;
        }

        Ok(())
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Parses a decimal number, the default format of the string surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::parse(s, Radix::Dec)
    }
}
