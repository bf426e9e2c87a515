//! Error types for Physica

use thiserror::Error;

use crate::Decimal;

/// Core Physica errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    // Arithmetic errors
    #[error("division by zero: denominator must be non-zero")]
    DivisionByZero,

    #[error("value outside mathematical domain: {0}")]
    InvalidDomain(String),

    // Physical domain errors
    #[error("velocity must be less than the speed of light (got {velocity} m/s)")]
    SuperluminalVelocity { velocity: Decimal },

    #[error("total internal reflection: no refracted ray (sin θ₂ = {sine})")]
    TotalInternalReflection { sine: Decimal },

    // Shape errors
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("sample abscissae must be non-decreasing (violated at index {index})")]
    NonMonotonicSamples { index: usize },

    // Lookup and parsing errors
    #[error("unknown physical constant: {0}")]
    UnknownConstant(String),

    #[error("invalid decimal literal: {0}")]
    Parse(String),

    // Configuration errors
    #[error("precision must be at least one significant digit (got {0})")]
    InvalidPrecision(u64),

    #[error("precision context already fixed at {active} digits; cannot switch to {requested}")]
    PrecisionLocked { active: u64, requested: u64 },
}

/// Class of a [`PhysicsError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DivisionByZero,
    InvalidDomain,
    SuperluminalVelocity,
    TotalInternalReflection,
    DimensionMismatch,
    InsufficientSamples,
    NonMonotonicSamples,
    UnknownConstant,
    Parse,
    Configuration,
}

impl PhysicsError {
    /// Shorthand for an [`PhysicsError::InvalidDomain`] with a message
    pub fn domain(message: impl Into<String>) -> Self {
        PhysicsError::InvalidDomain(message.into())
    }

    /// Get the error class
    pub fn kind(&self) -> ErrorKind {
        match self {
            PhysicsError::DivisionByZero => ErrorKind::DivisionByZero,
            PhysicsError::InvalidDomain(_) => ErrorKind::InvalidDomain,
            PhysicsError::SuperluminalVelocity { .. } => ErrorKind::SuperluminalVelocity,
            PhysicsError::TotalInternalReflection { .. } => ErrorKind::TotalInternalReflection,
            PhysicsError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            PhysicsError::InsufficientSamples { .. } => ErrorKind::InsufficientSamples,
            PhysicsError::NonMonotonicSamples { .. } => ErrorKind::NonMonotonicSamples,
            PhysicsError::UnknownConstant(_) => ErrorKind::UnknownConstant,
            PhysicsError::Parse(_) => ErrorKind::Parse,
            PhysicsError::InvalidPrecision(_) | PhysicsError::PrecisionLocked { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}

/// Result type for Physica operations
pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_constraint() {
        let err = PhysicsError::SuperluminalVelocity {
            velocity: Decimal::from(299792458),
        };
        assert_eq!(
            err.to_string(),
            "velocity must be less than the speed of light (got 299792458 m/s)"
        );

        let err = PhysicsError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(PhysicsError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(PhysicsError::domain("x").kind(), ErrorKind::InvalidDomain);
        assert_eq!(
            PhysicsError::PrecisionLocked {
                active: 50,
                requested: 20
            }
            .kind(),
            ErrorKind::Configuration
        );
    }
}
