//! Bigradix implements arbitrary length numbers represented as digit strings
//! in decimal, hexadecimal, or binary form, conversion between the three
//! radixes with a controlled fractional precision, and digit-level rounding:
//! floor, ceil, round-half-up, and absolute value.
//!
//! The integer part always converts exactly; fractional parts convert exactly
//! between hexadecimal and binary, and up to a chosen number of digits when
//! decimal is involved. Rounding operates on the digit strings in place.
//!
//! ```
//! use bigradix::{Number, Radix};
//!
//! let n = Number::parse("af10", Radix::Hex).unwrap();
//! assert_eq!(n.to_decimal().to_string(), "44816");
//! assert_eq!(n.to_binary(None).to_string(), "1010111100010000");
//!
//! let mut n = Number::parse("10.41", Radix::Dec).unwrap();
//! n.ceil(1);
//! assert_eq!(n.to_string(), "10.5");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod arith;
mod conv;
mod defs;
mod num;
mod round;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Radix;
pub use crate::defs::Sign;
pub use crate::num::Number;

pub use crate::defs::BIN_BLOCK_SIZE;
pub use crate::defs::DEFAULT_PRECISION;
pub use crate::defs::HEX_BLOCK_SIZE;
