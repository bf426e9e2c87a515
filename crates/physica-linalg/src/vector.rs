//! Vector operations over decimal slices

use physica_core::{Decimal, PhysicsError, PhysicsResult};

fn same_length(a: &[Decimal], b: &[Decimal]) -> PhysicsResult<()> {
    if a.len() != b.len() {
        return Err(PhysicsError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Component-wise sum
pub fn vector_add(a: &[Decimal], b: &[Decimal]) -> PhysicsResult<Vec<Decimal>> {
    same_length(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Σ aᵢ·bᵢ
pub fn dot_product(a: &[Decimal], b: &[Decimal]) -> PhysicsResult<Decimal> {
    same_length(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// a × b, defined for 3-vectors only
pub fn cross_product(a: &[Decimal], b: &[Decimal]) -> PhysicsResult<[Decimal; 3]> {
    let (a, b) = match (a, b) {
        ([_, _, _], [_, _, _]) => (a, b),
        ([_, _, _], _) => {
            return Err(PhysicsError::DimensionMismatch {
                expected: 3,
                actual: b.len(),
            })
        }
        _ => {
            return Err(PhysicsError::DimensionMismatch {
                expected: 3,
                actual: a.len(),
            })
        }
    };

    Ok([
        &a[1] * &b[2] - &a[2] * &b[1],
        &a[2] * &b[0] - &a[0] * &b[2],
        &a[0] * &b[1] - &a[1] * &b[0],
    ])
}
