//! Dense matrix product over row-major nested vectors

use physica_core::{Decimal, PhysicsError, PhysicsResult};

/// Row-major matrix
pub type Matrix = Vec<Vec<Decimal>>;

/// Common row width, or the first ragged row's length
fn width(rows: &[Vec<Decimal>], expected: usize) -> PhysicsResult<usize> {
    match rows.iter().find(|row| row.len() != expected) {
        Some(row) => Err(PhysicsError::DimensionMismatch {
            expected,
            actual: row.len(),
        }),
        None => Ok(expected),
    }
}

/// C = A·B for A (m×n) and B (n×p), giving m×p
pub fn matrix_multiply(a: &[Vec<Decimal>], b: &[Vec<Decimal>]) -> PhysicsResult<Matrix> {
    if a.is_empty() {
        return Ok(Vec::new());
    }

    let n = width(a, b.len())?;
    let p = width(b, b.first().map_or(0, Vec::len))?;

    Ok(a
        .iter()
        .map(|row| {
            (0..p)
                .map(|j| (0..n).map(|k| &row[k] * &b[k][j]).sum::<Decimal>())
                .collect()
        })
        .collect())
}
