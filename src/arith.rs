//! Arbitrary precision decimal arithmetic on digit strings with an explicit output scale.
//!
//! Thin adapter over the `bigdecimal` crate. Every operation takes decimal
//! digit strings, truncates the result toward zero at `scale` fractional
//! digits, and renders it zero-padded to exactly `scale` digits. An empty
//! input string is treated as zero.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, One, RoundingMode, Zero};
use core::cmp::Ordering;
use core::str::FromStr;
use lazy_static::lazy_static;

lazy_static! {

    /// 0
    static ref ZERO: BigDecimal = BigDecimal::zero();

    /// 1
    static ref ONE: BigDecimal = BigDecimal::one();

    /// 16
    static ref SIXTEEN: BigDecimal = BigDecimal::from(16);

    /// 1/2, the tie threshold used by rounding.
    static ref HALF: BigDecimal = BigDecimal::new(BigInt::from(5), 1);
}

// Constant operands appear on almost every call made by the conversion loops.
fn parse(s: &str) -> BigDecimal {
    match s {
        "" | "0" => ZERO.clone(),
        "1" => ONE.clone(),
        "16" => SIXTEEN.clone(),
        "0.5" => HALF.clone(),
        _ => BigDecimal::from_str(s).unwrap(), // call to unwrap() is unreachable: operands are validated digit strings
    }
}

fn render(d: BigDecimal, scale: usize) -> String {
    d.with_scale_round(scale as i64, RoundingMode::Down)
        .to_plain_string()
}

fn pow10(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Adds `a` and `b` at the given scale.
pub(crate) fn add(a: &str, b: &str, scale: usize) -> String {
    render(parse(a) + parse(b), scale)
}

/// Subtracts `b` from `a` at the given scale.
pub(crate) fn sub(a: &str, b: &str, scale: usize) -> String {
    render(parse(a) - parse(b), scale)
}

/// Multiplies `a` by `b` at the given scale.
pub(crate) fn mul(a: &str, b: &str, scale: usize) -> String {
    render(parse(a) * parse(b), scale)
}

/// Divides `a` by `b`, truncating toward zero at the given scale.
///
/// The quotient is computed by exact scaled integer division, so the result
/// does not depend on any default division precision.
pub(crate) fn div(a: &str, b: &str, scale: usize) -> String {
    let (an, ae) = parse(a).into_bigint_and_exponent();
    let (bn, be) = parse(b).into_bigint_and_exponent();

    // a / b * 10^scale == an * 10^(scale + be - ae) / bn
    let shift = scale as i64 + be - ae;
    let q = if shift >= 0 {
        an * pow10(shift as u64) / bn
    } else {
        an / (bn * pow10(shift.unsigned_abs()))
    };

    BigDecimal::new(q, scale as i64).to_plain_string()
}

/// Remainder of the truncated integer division of `a` by `b`.
/// Fractional digits of the operands do not participate.
pub(crate) fn rem(a: &str, b: &str) -> String {
    let (an, _) = parse(a)
        .with_scale_round(0, RoundingMode::Down)
        .into_bigint_and_exponent();
    let (bn, _) = parse(b)
        .with_scale_round(0, RoundingMode::Down)
        .into_bigint_and_exponent();

    (an % bn).to_string()
}

/// Raises `base` to the integer power `exp` at the given scale.
/// A negative exponent inverts the positive power at the requested scale.
pub(crate) fn pow(base: &str, exp: i32, scale: usize) -> String {
    let (bn, be) = parse(base).into_bigint_and_exponent();
    let p = BigDecimal::new(bn.pow(exp.unsigned_abs()), be * i64::from(exp.unsigned_abs()));

    if exp >= 0 {
        render(p, scale)
    } else {
        div("1", &p.to_plain_string(), scale)
    }
}

/// Compares `a` and `b` after truncating both to the given scale.
pub(crate) fn cmp(a: &str, b: &str, scale: usize) -> Ordering {
    let x = parse(a).with_scale_round(scale as i64, RoundingMode::Down);
    let y = parse(b).with_scale_round(scale as i64, RoundingMode::Down);

    x.cmp(&y)
}
