//! Physica Formulas - Closed-form physics evaluated in decimal
//!
//! Each module is a flat set of independent functions over [`Decimal`]:
//! - Mechanics, fields and electromagnetism
//! - Thermodynamics, sound and waves
//! - Optics and special relativity
//! - Quantum, nuclear and astrophysics
//! - SI prefix scaling
//!
//! Inputs are SI base units unless a function says otherwise. Every division
//! and domain check surfaces as a [`PhysicsError`] instead of a panic.
//!
//! Several modules define functions with the same name (for example
//! `electric_field` in both `fields` and `electromagnetism`), so nothing is
//! glob re-exported; call through the module path.

pub mod astrophysics;
pub mod electromagnetism;
pub mod fields;
pub mod mechanics;
pub mod nuclear;
pub mod optics;
pub mod quantum;
pub mod relativity;
pub mod sound;
pub mod thermodynamics;
pub mod units;
pub mod waves;

pub use physica_core::{constants, Decimal, PhysicsError, PhysicsResult};
