#![allow(mixed_script_confusables)]
//! Physica Chaos - Deterministic nonlinear systems iterated in decimal
//!
//! This crate implements two classic chaotic systems:
//! - Lorenz system (explicit Euler integration)
//! - Logistic map
//!
//! Runs return a [`Trajectory`] holding exactly the requested number of
//! steps. Both systems are total: they have no failure modes of their own.

pub mod logistic;
pub mod lorenz;
pub mod trajectory;

pub use logistic::*;
pub use lorenz::*;
pub use trajectory::*;
