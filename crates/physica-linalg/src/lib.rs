//! Physica Linalg - Small decimal vector and matrix toolkit
//!
//! This crate provides:
//! - Vector addition, dot and cross products
//! - Dense matrix multiplication over nested rows
//! - Trapezoidal integration of sampled data
//!
//! Shape violations are reported as `DimensionMismatch`, never truncated.

pub mod integrate;
pub mod matrix;
pub mod vector;

pub use integrate::*;
pub use matrix::*;
pub use vector::*;
