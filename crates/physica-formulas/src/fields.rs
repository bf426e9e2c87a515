//! Field equations - gravitational, electric and magnetic fields

use physica_core::{constants, Decimal, PhysicsResult};

/// g = G·M / r² (N/kg)
pub fn gravitational_field(mass: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (&constants().gravitational_constant.value * mass).checked_div(&distance.squared())
}

/// E = k·Q / r² (N/C)
pub fn electric_field(charge: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    (&constants().coulomb_constant.value * charge).checked_div(&distance.squared())
}

/// Field around an infinite straight wire, B = μ₀·I / (2π·r) (T)
pub fn magnetic_field(current: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    let table = constants();
    let circumference = Decimal::from(2) * &table.pi.value * distance;
    (&table.vacuum_permeability.value * current).checked_div(&circumference)
}

/// U = −G·m1·m2 / r (J), negative for every pair of positive masses
pub fn gravitational_potential_energy(
    m1: &Decimal,
    m2: &Decimal,
    distance: &Decimal,
) -> PhysicsResult<Decimal> {
    let g = &constants().gravitational_constant.value;
    (-(g * (m1 * m2))).checked_div(distance)
}

/// U = k·q1·q2 / r (J)
pub fn electric_potential_energy(
    q1: &Decimal,
    q2: &Decimal,
    distance: &Decimal,
) -> PhysicsResult<Decimal> {
    (&constants().coulomb_constant.value * q1 * q2).checked_div(distance)
}
