//! Astrophysics - orbits, escape, black holes and cosmic expansion

use physica_core::{constants, Decimal, PhysicsResult};

pub use crate::mechanics::gravitational_force;

fn g() -> &'static Decimal {
    &constants().gravitational_constant.value
}

/// Circular orbit speed, v = √(G·M / r) (m/s)
pub fn orbital_velocity(
    central_mass: &Decimal,
    orbital_radius: &Decimal,
) -> PhysicsResult<Decimal> {
    (g() * central_mass).checked_div(orbital_radius)?.sqrt()
}

/// v_esc = √(2·G·M / r) (m/s)
pub fn escape_velocity(mass: &Decimal, radius: &Decimal) -> PhysicsResult<Decimal> {
    (Decimal::from(2) * g() * mass).checked_div(radius)?.sqrt()
}

/// Kepler's third law, T = √(4π²·r³ / (G·M)) (s)
pub fn orbital_period(central_mass: &Decimal, radius: &Decimal) -> PhysicsResult<Decimal> {
    let numerator = Decimal::from(4) * constants().pi.value.squared() * radius.powi(3)?;
    numerator.checked_div(&(g() * central_mass))?.sqrt()
}

/// Event horizon radius, r_s = 2·G·M / c² (m)
pub fn schwarzschild_radius(mass: &Decimal) -> PhysicsResult<Decimal> {
    let c = &constants().speed_of_light.value;
    (Decimal::from(2) * g() * mass).checked_div(&c.squared())
}

/// Hubble's law, v = H₀·d, distance in megaparsecs, result in m/s
pub fn recessional_velocity(distance_mpc: &Decimal) -> Decimal {
    &constants().hubble_constant.value * distance_mpc
}
