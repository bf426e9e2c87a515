//! Electromagnetism - point charges, capacitors, circuits and magnetic force
//!
//! Charges in coulombs, distances in meters. Potential energy carries the
//! sign of q1·q2: opposite charges give a negative energy.

use physica_core::{constants, Decimal, PhysicsResult};

fn k() -> &'static Decimal {
    &constants().coulomb_constant.value
}

/// Coulomb's law, F = k·q1·q2 / r² (N)
pub fn electric_force(q1: &Decimal, q2: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (k() * q1 * q2).checked_div(&distance.squared())
}

/// E = k·Q / r² (N/C)
pub fn electric_field(source_charge: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (k() * source_charge).checked_div(&distance.squared())
}

/// U = k·q1·q2 / r (J)
pub fn electric_potential_energy(
    q1: &Decimal,
    q2: &Decimal,
    distance: &Decimal,
) -> PhysicsResult<Decimal> {
    (k() * q1 * q2).checked_div(distance)
}

/// V = k·Q / r (V)
pub fn electric_potential(source_charge: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (k() * source_charge).checked_div(distance)
}

/// Parallel-plate capacitance, C = ε₀·A / d (F)
pub fn capacitance(area: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (&constants().vacuum_permittivity.value * area).checked_div(distance)
}

/// Ohm's law, V = I·R
pub fn voltage(current: &Decimal, resistance: &Decimal) -> Decimal {
    current * resistance
}

/// Ohm's law, R = V / I
pub fn resistance(voltage: &Decimal, current: &Decimal) -> PhysicsResult<Decimal> {
    voltage.checked_div(current)
}

/// Ohm's law, I = V / R
pub fn current(voltage: &Decimal, resistance: &Decimal) -> PhysicsResult<Decimal> {
    voltage.checked_div(resistance)
}

/// P = V·I (W)
pub fn electric_power(voltage: &Decimal, current: &Decimal) -> Decimal {
    voltage * current
}

/// P = I²·R (W)
pub fn power_from_current(current: &Decimal, resistance: &Decimal) -> Decimal {
    current.squared() * resistance
}

/// P = V² / R (W)
pub fn power_from_voltage(voltage: &Decimal, resistance: &Decimal) -> PhysicsResult<Decimal> {
    voltage.squared().checked_div(resistance)
}

/// F = q·v·B, velocity perpendicular to the field (N)
pub fn magnetic_force(charge: &Decimal, velocity: &Decimal, magnetic_field: &Decimal) -> Decimal {
    charge * velocity * magnetic_field
}
