//! Physica Bench - Shared input generation for the criterion suites
//!
//! Inputs are drawn from a seeded `StdRng` so every run measures the same
//! operands.

use physica_core::Decimal;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every suite
pub const BENCH_SEED: u64 = 0x5048_5953_4943_4131;

/// Seeded generator of decimal operands
pub struct DecimalSource {
    rng: StdRng,
}

impl DecimalSource {
    pub fn new() -> Self {
        Self::with_seed(BENCH_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        DecimalSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Value with `digits` significant digits and a decimal exponent in
    /// `exponents`, sign included
    pub fn signed(&mut self, digits: u32, exponents: std::ops::Range<i64>) -> Decimal {
        let mantissa = self.mantissa(digits);
        let exponent = self.rng.gen_range(exponents);
        let sign = if self.rng.gen_bool(0.5) { 1 } else { -1 };
        Decimal::new(sign * mantissa, exponent)
    }

    /// Strictly positive value, for divisors and physical magnitudes
    pub fn positive(&mut self, digits: u32, exponents: std::ops::Range<i64>) -> Decimal {
        let mantissa = self.mantissa(digits);
        let exponent = self.rng.gen_range(exponents);
        Decimal::new(mantissa, exponent)
    }

    /// Fraction of the speed of light strictly below one
    pub fn subluminal_fraction(&mut self) -> Decimal {
        Decimal::new(self.rng.gen_range(1..999_999i64), -6)
    }

    /// `len` values spanning ±10^6
    pub fn vector(&mut self, len: usize) -> Vec<Decimal> {
        (0..len).map(|_| self.signed(15, -6..6)).collect()
    }

    /// `rows × cols` matrix of values spanning ±10^6
    pub fn matrix(&mut self, rows: usize, cols: usize) -> Vec<Vec<Decimal>> {
        (0..rows).map(|_| self.vector(cols)).collect()
    }

    fn mantissa(&mut self, digits: u32) -> i64 {
        let digits = digits.clamp(1, 18);
        let low = 10i64.pow(digits - 1);
        self.rng.gen_range(low..low * 10)
    }
}

impl Default for DecimalSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Increasing abscissae `0, h, 2h, …` with `y = x²`
pub fn parabola_samples(n: usize) -> (Vec<Decimal>, Vec<Decimal>) {
    let h = Decimal::new(1, -3);
    let x: Vec<Decimal> = (0..n).map(|i| Decimal::from(i) * &h).collect();
    let y = x.iter().map(Decimal::squared).collect();
    (x, y)
}
