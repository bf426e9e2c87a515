#![allow(mixed_script_confusables)]
//! Physica Core - Decimal numeric core and physical constants
//!
//! This crate defines the numeric convention every Physica formula follows:
//! - `Decimal`: one arbitrary-precision type, rounded to a fixed precision
//! - `PrecisionContext`: process-wide precision (50 digits) and rounding, fixed once
//! - `PhysicsError`: classified failures at domain boundaries
//! - `constants`: CODATA-class constants table
//! - `bridge`: the bounded f64 downgrade for trigonometry and log10

mod arith;
pub mod bridge;
pub mod constants;
pub mod context;
pub mod decimal;
pub mod error;

pub use constants::{constants, lookup, Constant, ConstantSource, PhysicalConstants};
pub use context::*;
pub use decimal::*;
pub use error::*;
