//! Arbitrary-precision kernels behind [`Decimal`](crate::Decimal)
//!
//! Every function here works on raw `BigDecimal` values at an explicit
//! precision. Rounding to the process context happens one layer up.
//! Rounding itself, square roots and integer queries come from `bigdecimal`.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};

use crate::Rounding;

/// Iteration cap for Newton/Halley refinement
const MAX_ITERATIONS: usize = 64;

#[inline]
fn pow10(n: u64) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

#[inline]
fn half() -> BigDecimal {
    BigDecimal::new(BigInt::from(5u32), 1)
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::Down => RoundingMode::Down,
        }
    }
}

/// `bigdecimal` context for `precision` significant digits
pub(crate) fn context(precision: u64, rounding: Rounding) -> Context {
    Context::new(
        NonZeroU64::new(precision).unwrap_or(NonZeroU64::MIN),
        rounding.into(),
    )
}

/// Reduce `value` to at most `precision` significant digits.
///
/// Shorter values are returned as they are, never padded.
pub(crate) fn round(value: &BigDecimal, precision: u64, rounding: Rounding) -> BigDecimal {
    match NonZeroU64::new(precision) {
        Some(digits) if value.digits() > precision => {
            value.with_precision_round(digits, rounding.into())
        }
        _ => value.clone(),
    }
}

/// Approximate `log10|x|` of a non-zero value
pub(crate) fn log10_magnitude(x: &BigDecimal) -> f64 {
    let (int, scale) = x.as_bigint_and_scale();
    let digits = x.digits() as i64;
    let leading = BigDecimal::new(int.into_owned(), digits - 1)
        .abs()
        .to_f64()
        .unwrap_or(1.0);
    (digits - 1 - scale) as f64 + leading.log10()
}

/// Correctly rounded quotient. `b` must be non-zero.
pub(crate) fn div(
    a: &BigDecimal,
    b: &BigDecimal,
    precision: u64,
    rounding: Rounding,
) -> BigDecimal {
    debug_assert!(!b.is_zero());
    if a.is_zero() {
        return BigDecimal::zero();
    }

    let (an, ascale) = a.as_bigint_and_exponent();
    let (bn, bscale) = b.as_bigint_and_exponent();
    let negative = (an.sign() == Sign::Minus) != (bn.sign() == Sign::Minus);

    let shift = (precision as i64 + 3 + b.digits() as i64 - a.digits() as i64).max(0) as u64;
    let numerator = an * pow10(shift);
    let mut quotient = &numerator / &bn;
    let remainder = &numerator % &bn;
    let mut scale = ascale - bscale + shift as i64;

    if remainder.is_zero() {
        // Exact: settle on the ideal exponent, as 1/4 -> 0.25
        let ideal = ascale - bscale;
        let ten = BigInt::from(10u32);
        while scale > ideal && (&quotient % &ten).is_zero() {
            quotient /= &ten;
            scale -= 1;
        }
        return round(&BigDecimal::new(quotient, scale), precision, rounding);
    }

    // Sticky digit so an inexact quotient never looks like an exact tie
    quotient *= 10u32;
    if negative {
        quotient -= 1u32;
    } else {
        quotient += 1u32;
    }
    scale += 1;

    round(&BigDecimal::new(quotient, scale), precision, rounding)
}

/// `base^exponent` by square-and-multiply
pub(crate) fn powi(base: &BigDecimal, exponent: u64, precision: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut n = exponent;
    while n > 0 {
        if n & 1 == 1 {
            result = round(&(&result * &square), precision, Rounding::HalfEven);
        }
        n >>= 1;
        if n > 0 {
            square = round(&(&square * &square), precision, Rounding::HalfEven);
        }
    }
    result
}

/// Natural exponential
pub(crate) fn exp(x: &BigDecimal, precision: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::one();
    }

    // Halve until |r| <= 1/2, then square the series result back up
    let half = half();
    let mut reduced = x.clone();
    let mut halvings = 0u64;
    while reduced.abs() > half {
        reduced = &reduced * &half;
        halvings += 1;
    }

    let work = precision + halvings / 3 + 2;
    let reduced = round(&reduced, work, Rounding::HalfEven);
    let eps = BigDecimal::new(BigInt::one(), work as i64 + 2);

    let mut sum = BigDecimal::one();
    let mut term = BigDecimal::one();
    let mut n = 1u32;
    loop {
        term = div(&(&term * &reduced), &BigDecimal::from(n), work, Rounding::HalfEven);
        if term.abs() < eps {
            break;
        }
        sum = round(&(&sum + &term), work, Rounding::HalfEven);
        n += 1;
    }

    for _ in 0..halvings {
        sum = round(&(&sum * &sum), work, Rounding::HalfEven);
    }
    sum
}

/// Natural logarithm of a positive value
pub(crate) fn ln(x: &BigDecimal, precision: u64) -> BigDecimal {
    // x = m * 10^magnitude with 1 <= m < 10
    let (int, scale) = x.as_bigint_and_exponent();
    let digits = x.digits() as i64;
    let magnitude = digits - 1 - scale;
    let mantissa = BigDecimal::new(int, digits - 1);

    let work = precision + magnitude.unsigned_abs().to_string().len() as u64;
    let ln_mantissa = ln_halley(&mantissa, work);
    if magnitude == 0 {
        return ln_mantissa;
    }

    let ln10 = ln_halley(&BigDecimal::from(10u32), work);
    let shifted = &ln10 * &BigDecimal::from(magnitude);
    round(&(&ln_mantissa + &shifted), work, Rounding::HalfEven)
}

/// Halley iteration `y += 2(m - e^y)/(m + e^y)`, cubic from an f64 seed
fn ln_halley(m: &BigDecimal, precision: u64) -> BigDecimal {
    let seed = m.to_f64().map(f64::ln).filter(|v| v.is_finite()).unwrap_or(0.0);
    let mut y = BigDecimal::try_from(seed)
        .map(|v| round(&v, precision, Rounding::HalfEven))
        .unwrap_or_else(|_| BigDecimal::zero());
    let eps = BigDecimal::new(BigInt::one(), precision as i64);
    let two = BigDecimal::from(2u32);

    for _ in 0..MAX_ITERATIONS {
        let e = exp(&y, precision);
        let gap = m - &e;
        if gap.is_zero() {
            break;
        }
        let numerator = &two * &gap;
        let denominator = m + &e;
        let delta = div(&numerator, &denominator, precision, Rounding::HalfEven);
        y = round(&(&y + &delta), precision, Rounding::HalfEven);
        if delta.abs() <= eps {
            break;
        }
    }
    y
}
