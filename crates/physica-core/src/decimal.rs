//! Decimal - the single numeric type of Physica
//!
//! A `Decimal` is an immutable arbitrary-precision value. Every value built
//! from an unbounded source and every arithmetic result is rounded to the
//! active [`PrecisionContext`], so formulas composed from these operations
//! agree digit-for-digit no matter how they are grouped into functions.

use std::fmt;
use std::iter::Sum;
use std::num::NonZeroU64;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::arith;
use crate::{PhysicsError, PhysicsResult, PrecisionContext, Rounding};

/// Largest decimal exponent a result may reach
const MAGNITUDE_LIMIT: i64 = 999_999;

/// Arguments beyond this overflow `exp` (results past 10^999999)
const EXP_ARGUMENT_LIMIT: i64 = 2_302_586;

/// Arbitrary-precision decimal rounded to the process precision
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// `mantissa × 10^exponent`, exact. `i64::MIN` is read as `i64::MIN + 1`.
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        Self::rounded(BigDecimal::new(mantissa.into(), exponent.saturating_neg()))
    }

    pub fn zero() -> Self {
        Decimal(BigDecimal::zero())
    }

    pub fn one() -> Self {
        Decimal(BigDecimal::one())
    }

    /// Round a raw value to the active context
    pub fn rounded(value: BigDecimal) -> Self {
        let ctx = PrecisionContext::current();
        Decimal(arith::round(&value, ctx.precision(), ctx.rounding()))
    }

    /// Exact binary expansion of `value`, then rounded
    pub fn from_f64(value: f64) -> PhysicsResult<Self> {
        BigDecimal::try_from(value)
            .map(Self::rounded)
            .map_err(|_| PhysicsError::domain(format!("{value} has no decimal value")))
    }

    /// Nearest binary double
    pub fn to_f64(&self) -> PhysicsResult<f64> {
        self.0
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PhysicsError::domain(format!("{self} does not fit a binary double")))
    }

    /// Integer value, if integral and within `i64`
    pub fn to_i64(&self) -> Option<i64> {
        // more than 19 integer digits never fit
        let integer_digits = self.0.digits() as i64 - self.0.fractional_digit_count();
        if integer_digits > 19 || !self.is_integer() {
            return None;
        }
        self.0.to_i64()
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn abs(&self) -> Decimal {
        Decimal(self.0.abs())
    }

    /// `self * self`
    pub fn squared(&self) -> Decimal {
        self * self
    }

    /// Quotient, or [`PhysicsError::DivisionByZero`] for a zero divisor
    pub fn checked_div(&self, rhs: &Decimal) -> PhysicsResult<Decimal> {
        if rhs.is_zero() {
            return Err(PhysicsError::DivisionByZero);
        }
        let ctx = PrecisionContext::current();
        Ok(Decimal(arith::div(
            &self.0,
            &rhs.0,
            ctx.precision(),
            ctx.rounding(),
        )))
    }

    /// `numerator / denominator`, rounded; infallible for a non-zero divisor
    pub fn ratio(numerator: i64, denominator: NonZeroU64) -> Decimal {
        let ctx = PrecisionContext::current();
        Decimal(arith::div(
            &BigDecimal::from(numerator),
            &BigDecimal::from(denominator.get()),
            ctx.precision(),
            ctx.rounding(),
        ))
    }

    /// `1 / self`
    pub fn recip(&self) -> PhysicsResult<Decimal> {
        Decimal::one().checked_div(self)
    }

    /// Integer power
    pub fn powi(&self, exponent: i64) -> PhysicsResult<Decimal> {
        if self.is_zero() {
            return match exponent.cmp(&0) {
                std::cmp::Ordering::Greater => Ok(Decimal::zero()),
                std::cmp::Ordering::Equal => Err(PhysicsError::domain("0^0 is undefined")),
                std::cmp::Ordering::Less => Err(PhysicsError::DivisionByZero),
            };
        }

        let estimate = exponent as f64 * arith::log10_magnitude(&self.0);
        if estimate > MAGNITUDE_LIMIT as f64 {
            return Err(PhysicsError::domain(format!("{self}^{exponent} overflows")));
        }
        if estimate < -(MAGNITUDE_LIMIT as f64) {
            return Ok(Decimal::zero());
        }

        let ctx = PrecisionContext::current();
        let magnitude = arith::powi(&self.0, exponent.unsigned_abs(), ctx.working_precision());
        if exponent < 0 {
            Ok(Decimal(arith::div(
                &BigDecimal::one(),
                &magnitude,
                ctx.precision(),
                ctx.rounding(),
            )))
        } else {
            Ok(Decimal::rounded(magnitude))
        }
    }

    /// Decimal power. Integral exponents go through [`Decimal::powi`];
    /// anything else is `exp(y ln x)` and needs a positive base.
    pub fn pow(&self, exponent: &Decimal) -> PhysicsResult<Decimal> {
        if let Some(n) = exponent.to_i64() {
            return self.powi(n);
        }
        if self.is_negative() {
            return Err(PhysicsError::domain(format!(
                "negative base {self} with fractional exponent {exponent}"
            )));
        }
        if self.is_zero() {
            return if exponent.is_positive() {
                Ok(Decimal::zero())
            } else {
                Err(PhysicsError::DivisionByZero)
            };
        }

        let ctx = PrecisionContext::current();
        let work = ctx.working_precision();
        let log = arith::ln(&self.0, work);
        let scaled = arith::round(&(&log * &exponent.0), work, ctx.rounding());
        Self::exp_raw(&scaled, work)
    }

    /// Square root; negative operands are outside the domain
    pub fn sqrt(&self) -> PhysicsResult<Decimal> {
        if self.is_negative() {
            return Err(PhysicsError::domain(format!(
                "square root of negative value {self}"
            )));
        }
        if self.is_zero() {
            return Ok(Decimal::zero());
        }
        let ctx = PrecisionContext::current();
        let work = arith::context(ctx.working_precision(), Rounding::HalfEven);
        let root = self
            .0
            .sqrt_with_context(&work)
            .ok_or_else(|| PhysicsError::domain(format!("square root of {self}")))?;
        Ok(Decimal::rounded(root).normalized())
    }

    /// Natural exponential
    pub fn exp(&self) -> PhysicsResult<Decimal> {
        Self::exp_raw(&self.0, PrecisionContext::current().working_precision())
    }

    fn exp_raw(x: &BigDecimal, work: u64) -> PhysicsResult<Decimal> {
        if *x > BigDecimal::from(EXP_ARGUMENT_LIMIT) {
            return Err(PhysicsError::domain(format!("exp({x}) overflows")));
        }
        if *x < BigDecimal::from(-EXP_ARGUMENT_LIMIT) {
            return Ok(Decimal::zero());
        }
        Ok(Decimal::rounded(arith::exp(x, work)))
    }

    /// Natural logarithm; the operand must be positive
    pub fn ln(&self) -> PhysicsResult<Decimal> {
        if !self.is_positive() {
            return Err(PhysicsError::domain(format!(
                "logarithm of non-positive value {self}"
            )));
        }
        let ctx = PrecisionContext::current();
        Ok(Decimal::rounded(arith::ln(&self.0, ctx.working_precision())))
    }

    /// Value with trailing fractional zeros removed
    pub fn normalized(&self) -> Decimal {
        Decimal(self.0.normalized())
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::zero()
    }
}

impl FromStr for Decimal {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Decimal::rounded)
            .map_err(|err| PhysicsError::Parse(format!("`{s}`: {err}")))
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Decimal::rounded(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Decimal::rounded(BigDecimal::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64);

impl From<usize> for Decimal {
    fn from(value: usize) -> Self {
        Decimal::rounded(BigDecimal::from(value as u64))
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl<'a, 'b> $trait<&'b Decimal> for &'a Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &'b Decimal) -> Decimal {
                Decimal::rounded((&self.0).$method(&rhs.0))
            }
        }

        impl<'b> $trait<&'b Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &'b Decimal) -> Decimal {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<Decimal> for &'a Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                self.$method(&rhs)
            }
        }

        impl $trait<Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-&self.0)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}
