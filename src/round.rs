//! In-place rounding: floor, ceil, round-half-up, and absolute value.
//!
//! The operations mutate the digit representation of the receiver directly
//! instead of going through a numeric primitive. Rounding below zero digits
//! of precision is a no-op, and the rounding direction of negative values is
//! mirrored so that floor and ceil keep their meaning on the number line.

use crate::arith;
use crate::defs::Radix;
use crate::defs::Sign;
use crate::defs::DEFAULT_PRECISION;
use crate::num::Number;
use core::cmp::Ordering;

impl Number {
    /// Clears the sign of the number. Idempotent.
    pub fn abs(&mut self) {
        self.set_sign(Sign::Pos);
    }

    /// Truncates the fractional part to `precision` digits, discarding the
    /// remainder outright. A negative `precision` is a no-op. On a negative
    /// number the operation is carried out as a ceiling of the magnitude, so
    /// the result lies below the original value.
    pub fn floor(&mut self, precision: i32) {
        self.floor_inner(precision, true);
    }

    /// Rounds the fractional part up at `precision` digits. A negative
    /// `precision`, or a `precision` covering the whole significant fraction,
    /// is a no-op. On a negative number the operation is carried out as a
    /// floor of the magnitude, so the result lies above the original value.
    pub fn ceil(&mut self, precision: i32) {
        self.ceil_inner(precision, true);
    }

    /// Rounds half up at `precision` digits: the digits discarded beyond
    /// `precision` are weighed as a fraction and compared against one half;
    /// a tie or more rounds away from zero, less rounds toward zero. The
    /// decision depends only on the magnitude of the discarded tail, not on
    /// the sign.
    pub fn round(&mut self, precision: i32) {
        if precision >= self.fraction_len() as i32 {
            return;
        }

        let tail: String = self
            .fraction()
            .chars()
            .skip(precision.max(0) as usize)
            .collect();

        let helper = self.fraction_helper("0", Some(&tail));
        let decimal = helper.to_decimal();

        if arith::cmp(&decimal.to_string(), "0.5", 1) != Ordering::Less {
            self.ceil_inner(precision, false);
        } else {
            self.floor_inner(precision, false);
        }
    }

    fn floor_inner(&mut self, precision: i32, switch_to_ceil_on_negative: bool) {
        if switch_to_ceil_on_negative && self.is_negative() {
            self.ceil_inner(precision, false);
            return;
        }

        if precision < 0 {
            return;
        }

        let truncated: String = self.fraction().chars().take(precision as usize).collect();
        self.set_fraction(Some(truncated));
    }

    fn ceil_inner(&mut self, precision: i32, switch_to_floor_on_negative: bool) {
        if switch_to_floor_on_negative && self.is_negative() {
            self.floor_inner(precision, false);
            return;
        }

        let trimmed = self.fraction().trim_end_matches('0').to_owned();

        if precision < 0 || precision as usize >= trimmed.len() {
            // the value is already exact at this precision
            return;
        }

        let keep = precision as usize;

        // Increment the retained prefix through a decimal round-trip. Carry is
        // detected by comparing the digit count of the result with the prefix
        // width: a count that differs means the increment did not fit.
        let helper = self.fraction_helper(&trimmed[..keep], None);
        let mut decimal = helper.to_decimal();
        decimal.add("1", 0);

        let restored = self.restore_from_decimal(&decimal);

        if restored.digits().len() == keep {
            self.set_fraction(Some(restored.digits().to_owned()));
            return;
        }

        // the carry leaves the fraction entirely and promotes into the integer digits
        self.set_fraction(None);

        let mut decimal = self.to_decimal();
        decimal.add("1", 0);

        let restored = self.restore_from_decimal(&decimal);
        self.set_digits(restored.digits().to_owned());
    }

    // Converts a decimal intermediate back to the radix of `self`.
    fn restore_from_decimal(&self, decimal: &Number) -> Number {
        match self.radix() {
            Radix::Dec => decimal.clone(),
            Radix::Hex => decimal.to_hexadecimal(Some(DEFAULT_PRECISION)),
            Radix::Bin => decimal.to_binary(Some(DEFAULT_PRECISION)),
        }
    }

    // Builds a new number of the same radix as `self` from digit strings that
    // are substrings of already validated digits.
    fn fraction_helper(&self, digits: &str, fraction: Option<&str>) -> Number {
        Number::from_raw_unchecked(
            self.radix(),
            Sign::Pos,
            digits.to_owned(),
            fraction.map(str::to_owned),
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn num(rdx: Radix, s: &str) -> Number {
        Number::parse(s, rdx).unwrap()
    }

    #[test]
    fn test_floor() {
        for (rdx, src, expected) in [
            (Radix::Dec, "10.41", "10.4"),
            (Radix::Bin, "-1011.101", "-1100"),
            (Radix::Hex, "af10", "af10"),
            (Radix::Dec, "9654.9456", "9654.9"),
            (Radix::Bin, "1110.100001", "1110.1"),
            (Radix::Hex, "-ff.fa1", "-100"),
        ] {
            let mut n = num(rdx, src);
            n.floor(1);
            assert_eq!(n.to_string(), expected, "{rdx} {src}");
        }
    }

    #[test]
    fn test_ceil() {
        for (rdx, src, expected) in [
            (Radix::Dec, "10.41", "10.5"),
            (Radix::Bin, "-1011.101", "-1011.1"),
            (Radix::Hex, "af10", "af10"),
            (Radix::Dec, "9654.9456", "9655"),
            (Radix::Bin, "1110.100001", "1111"),
            (Radix::Hex, "-ff.fa1", "-ff.f"),
        ] {
            let mut n = num(rdx, src);
            n.ceil(1);
            assert_eq!(n.to_string(), expected, "{rdx} {src}");
        }
    }

    #[test]
    fn test_round() {
        for (rdx, src, expected) in [
            (Radix::Dec, "10.41", "10.41"),
            (Radix::Bin, "-1011.101", "-1011.10"),
            (Radix::Hex, "af10", "af10"),
            (Radix::Dec, "9654.9456", "9654.95"),
            (Radix::Bin, "1110.100001", "1110.10"),
            (Radix::Hex, "-ff.fa1", "-ff.fa"),
        ] {
            let mut n = num(rdx, src);
            n.round(2);
            assert_eq!(n.to_string(), expected, "{rdx} {src}");
        }
    }

    #[test]
    fn test_abs() {
        for (rdx, src, expected) in [
            (Radix::Dec, "10.41", "10.41"),
            (Radix::Bin, "-1011.101", "1011.101"),
            (Radix::Hex, "-ff.fa1", "ff.fa1"),
        ] {
            let mut n = num(rdx, src);
            n.abs();
            assert_eq!(n.to_string(), expected, "{rdx} {src}");

            // idempotent
            n.abs();
            assert!(!n.is_negative());
            assert_eq!(n.to_string(), expected);
        }
    }

    #[test]
    fn test_round_tie() {
        // a discarded tail worth exactly one half rounds up
        let mut n = num(Radix::Dec, "1.25");
        n.round(1);
        assert_eq!(n.to_string(), "1.3");

        // hexadecimal 0.08 is 0.5 of a digit position
        let mut n = num(Radix::Hex, "0.18");
        n.round(1);
        assert_eq!(n.to_string(), "0.2");

        // independent of the overall sign
        let mut n = num(Radix::Dec, "-1.25");
        n.round(1);
        assert_eq!(n.to_string(), "-1.3");

        // just below one half rounds down
        let mut n = num(Radix::Dec, "1.249");
        n.round(1);
        assert_eq!(n.to_string(), "1.2");
    }

    #[test]
    fn test_ceil_carry() {
        // carry within the fraction
        let mut n = num(Radix::Dec, "1.091");
        n.ceil(2);
        assert_eq!(n.to_string(), "1.10");

        // carry out of the fraction into the integer digits
        let mut n = num(Radix::Dec, "1.91");
        n.ceil(1);
        assert_eq!(n.to_string(), "2");

        let mut n = num(Radix::Hex, "ff.f1");
        n.ceil(1);
        assert_eq!(n.to_string(), "100");

        let mut n = num(Radix::Bin, "1.11");
        n.ceil(1);
        assert_eq!(n.to_string(), "10");
    }

    #[test]
    fn test_negative_precision() {
        let mut n = num(Radix::Dec, "10.41");
        n.floor(-1);
        assert_eq!(n.to_string(), "10.41");

        let mut n = num(Radix::Dec, "10.41");
        n.ceil(-1);
        assert_eq!(n.to_string(), "10.41");

        let mut n = num(Radix::Dec, "10.41");
        n.round(-1);
        assert_eq!(n.to_string(), "10.41");
    }

    #[test]
    fn test_exact_at_precision() {
        // trailing fractional zeros are insignificant for ceil
        let mut n = num(Radix::Dec, "10.4100");
        n.ceil(2);
        assert_eq!(n.to_string(), "10.4100");

        // but floor truncates the kept prefix verbatim
        let mut n = num(Radix::Dec, "10.4100");
        n.floor(3);
        assert_eq!(n.to_string(), "10.410");

        // round at or beyond the fraction length is a no-op
        let mut n = num(Radix::Dec, "10.41");
        n.round(2);
        assert_eq!(n.to_string(), "10.41");
    }

    #[test]
    fn test_floor_to_zero_digits() {
        let mut n = num(Radix::Dec, "10.99");
        n.floor(0);
        assert_eq!(n.to_string(), "10");

        let mut n = num(Radix::Dec, "10.99");
        n.ceil(0);
        assert_eq!(n.to_string(), "11");
    }
}
