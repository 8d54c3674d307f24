//! Conversion between radixes.

use crate::arith;
use crate::defs::Radix;
use crate::defs::BIN_BLOCK_SIZE;
use crate::defs::HEX_BLOCK_SIZE;
use crate::num::Number;
use core::cmp::Ordering;
use core::fmt::Write;

const DIGIT_CHARS: [char; 16] =
    ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f'];

impl Number {
    /// Converts the number to decimal and returns the result as a new number.
    /// Converting a decimal number returns an independently owned copy.
    ///
    /// The integer part converts exactly. A hexadecimal or binary fractional
    /// part also converts exactly: every digit at position `i` after the radix
    /// point terminates within `4 * i` decimal places.
    pub fn to_decimal(&self) -> Number {
        match self.radix() {
            Radix::Dec => self.clone(),
            Radix::Hex => self.hex_to_dec(),
            Radix::Bin => self.bin_to_hex().hex_to_dec(),
        }
    }

    /// Converts the number to hexadecimal and returns the result as a new number.
    /// Converting a hexadecimal number returns an independently owned copy.
    ///
    /// `precision` bounds the number of fractional digits produced when
    /// converting from decimal; it is not used on the exact binary path.
    /// `None` selects a precision of the current fraction length plus 10.
    /// The fraction is truncated at the precision, not rounded.
    pub fn to_hexadecimal(&self, precision: Option<usize>) -> Number {
        match self.radix() {
            Radix::Hex => self.clone(),
            Radix::Dec => self.dec_to_hex(precision),
            Radix::Bin => self.bin_to_hex(),
        }
    }

    /// Converts the number to binary and returns the result as a new number.
    /// Converting a binary number returns an independently owned copy.
    ///
    /// A decimal number is converted to hexadecimal first; `precision` has
    /// the same meaning as in [`Number::to_hexadecimal`] and bounds the
    /// hexadecimal fraction of that intermediate value.
    pub fn to_binary(&self, precision: Option<usize>) -> Number {
        match self.radix() {
            Radix::Bin => self.clone(),
            Radix::Hex => self.hex_to_bin(),
            Radix::Dec => self.dec_to_hex(precision).hex_to_bin(),
        }
    }

    // Repeated division by 16 for the integer part, repeated multiplication
    // by 16 for the fractional part.
    fn dec_to_hex(&self, precision: Option<usize>) -> Number {
        let mut quotient = self.digits().to_owned();
        let mut collected = Vec::new();

        loop {
            let remainder = arith::rem(&quotient, "16");
            // call to unwrap() is unreachable: a remainder of division by 16 is a short decimal integer
            collected.push(DIGIT_CHARS[remainder.parse::<usize>().unwrap()]);
            quotient = arith::div(&quotient, "16", 0);

            if arith::cmp(&quotient, "0", 0) != Ordering::Greater {
                break;
            }
        }

        let digits: String = collected.iter().rev().collect();

        let precision = precision.unwrap_or(self.fraction_len() + 10);
        let fraction = self
            .fraction_opt()
            .map(|f| dec_fraction_to_hex(f, precision));

        Number::from_raw_unchecked(Radix::Hex, self.sign(), digits, fraction)
    }

    // Positional weighted sum over the external arithmetic; exact for both parts.
    fn hex_to_dec(&self) -> Number {
        let len = self.digits().len();
        let mut number = String::from("0");

        for (i, c) in self.digits().chars().enumerate() {
            let weight = arith::pow("16", (len - 1 - i) as i32, 0);
            let term = arith::mul(&digit_value(c), &weight, 0);
            number = arith::add(&number, &term, 0);
        }

        let fraction = self.fraction_opt().map(hex_fraction_to_dec);

        Number::from_raw_unchecked(Radix::Dec, self.sign(), number, fraction)
    }

    // Each hexadecimal digit expands to exactly 4 bits. Leading zeros are
    // stripped from the integer part only; in the fraction leading zeros are
    // significant and trailing zeros are not.
    fn hex_to_bin(&self) -> Number {
        let expanded = expand_nibbles(self.digits());
        let digits = strip_leading_zeros(&expanded);

        let fraction = self
            .fraction_opt()
            .map(|f| expand_nibbles(f).trim_end_matches('0').to_owned());

        Number::from_raw_unchecked(Radix::Bin, self.sign(), digits, fraction)
    }

    // Block-based conversion: bits are grouped from the least significant end
    // into blocks of BIN_BLOCK_SIZE, and every block becomes a zero-padded
    // hexadecimal block of HEX_BLOCK_SIZE digits. Blocking bounds the size of
    // each integer conversion instead of converting one arbitrarily long bit
    // string in a single step. The fraction is grouped from the most
    // significant end and keeps the block padding.
    fn bin_to_hex(&self) -> Number {
        let blocks: String = self
            .digits()
            .as_bytes()
            .rchunks(BIN_BLOCK_SIZE)
            .rev()
            .map(block_to_hex)
            .collect();
        let digits = strip_leading_zeros(&blocks);

        let fraction = self
            .fraction_opt()
            .map(|f| f.as_bytes().chunks(BIN_BLOCK_SIZE).map(block_to_hex).collect());

        Number::from_raw_unchecked(Radix::Hex, self.sign(), digits, fraction)
    }
}

// The fraction is treated as `0.<digits>`, at a scale wide enough to keep
// every multiplication by 16 exact. Emits digits until the remainder becomes
// exactly zero or `precision` digits have been produced; at least one digit
// is always emitted.
fn dec_fraction_to_hex(fraction: &str, precision: usize) -> String {
    let mut number = format!("0.{fraction}");
    let scale = number.len();
    let mut hex = String::new();

    loop {
        let product = arith::mul(&number, "16", scale);
        // a rendered product always has an integer part in front of the point
        let integral = product.split('.').next().unwrap();

        // call to unwrap() is unreachable: the product of a number below 1 and 16 stays below 16
        hex.push(DIGIT_CHARS[integral.parse::<usize>().unwrap()]);
        number = arith::sub(&product, integral, scale);

        if hex.len() >= precision || arith::cmp(&number, "0", scale) != Ordering::Greater {
            break;
        }
    }

    hex
}

// Accumulates digit_i * 16^(-i) term by term. The power of 16 at 1-based
// position `i` terminates in exactly 4*i decimal places, so every term is
// exact at the scale of its rendered multiplier.
fn hex_fraction_to_dec(fraction: &str) -> String {
    let mut result = String::from("0");

    for (i, c) in fraction.chars().enumerate() {
        let position = (i + 1) as i32;
        let multiplier = arith::pow("16", -position, (i + 1) * 4);
        let scale = multiplier.len();

        let term = arith::mul(&digit_value(c), &multiplier, scale);
        result = arith::add(&result, &term, scale);
    }

    // drop trailing zeros and the "0." prefix of the accumulator
    let trimmed = result.trim_end_matches('0');
    trimmed.strip_prefix("0.").unwrap_or_default().to_owned()
}

fn digit_value(c: char) -> String {
    // call to unwrap() is unreachable: digits are validated at construction
    c.to_digit(16).unwrap().to_string()
}

fn expand_nibbles(digits: &str) -> String {
    let mut bits = String::with_capacity(digits.len() * 4);

    for c in digits.chars() {
        // call to unwrap() is unreachable: digits are validated at construction
        let d = c.to_digit(16).unwrap();
        let _ = write!(bits, "{d:04b}");
    }

    bits
}

fn block_to_hex(block: &[u8]) -> String {
    // call to unwrap() is unreachable: digit strings are ASCII
    let bits = core::str::from_utf8(block).unwrap();

    // call to unwrap() is unreachable: the block holds validated binary digits and is bounded by BIN_BLOCK_SIZE
    let value = u64::from_str_radix(bits, 2).unwrap();

    format!("{value:0width$x}", width = HEX_BLOCK_SIZE)
}

fn strip_leading_zeros(digits: &str) -> String {
    let stripped = digits.trim_start_matches('0');

    if stripped.is_empty() {
        String::from("0")
    } else {
        stripped.to_owned()
    }
}
