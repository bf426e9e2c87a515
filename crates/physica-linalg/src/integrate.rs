//! Numerical integration of sampled data

use physica_core::{Decimal, PhysicsError, PhysicsResult};

/// Trapezoidal rule, Σ (x_i − x_{i−1})·(y_i + y_{i−1})/2.
///
/// Needs matching lengths, at least two samples and non-decreasing `x`.
pub fn trapezoidal_integrate(x: &[Decimal], y: &[Decimal]) -> PhysicsResult<Decimal> {
    if x.len() != y.len() {
        return Err(PhysicsError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(PhysicsError::InsufficientSamples {
            required: 2,
            actual: x.len(),
        });
    }
    if let Some(i) = (1..x.len()).find(|&i| x[i] < x[i - 1]) {
        return Err(PhysicsError::NonMonotonicSamples { index: i });
    }

    let half = Decimal::new(5, -1);
    Ok(x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (&xs[1] - &xs[0]) * (&ys[1] + &ys[0]) * &half)
        .sum())
}
