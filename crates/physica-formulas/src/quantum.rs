//! Quantum physics - photon energy, matter waves and uncertainty

use physica_core::{constants, Decimal, PhysicsResult};

/// Planck relation, E = h·f (J)
pub fn energy_from_frequency(frequency: &Decimal) -> Decimal {
    &constants().planck_constant.value * frequency
}

/// E = h·c / λ (J)
pub fn energy_from_wavelength(wavelength: &Decimal) -> PhysicsResult<Decimal> {
    let table = constants();
    (&table.planck_constant.value * &table.speed_of_light.value).checked_div(wavelength)
}

/// λ = h / (m·v) (m)
pub fn de_broglie_wavelength(mass: &Decimal, velocity: &Decimal) -> PhysicsResult<Decimal> {
    constants().planck_constant.value.checked_div(&(mass * velocity))
}

fn half_h_bar_over(uncertainty: &Decimal) -> PhysicsResult<Decimal> {
    let h_bar = &constants().reduced_planck_constant.value;
    h_bar.checked_div(&(Decimal::from(2) * uncertainty))
}

/// Δx = ħ / (2·Δp), the position spread at the uncertainty bound (m)
///
/// ħ comes from the full-precision π of the constants table; expect a
/// departure from the binary-double π result at the 17th digit.
pub fn uncertainty_position(momentum_uncertainty: &Decimal) -> PhysicsResult<Decimal> {
    half_h_bar_over(momentum_uncertainty)
}

/// Δp = ħ / (2·Δx), the momentum spread at the uncertainty bound (kg·m/s)
pub fn uncertainty_momentum(position_uncertainty: &Decimal) -> PhysicsResult<Decimal> {
    half_h_bar_over(position_uncertainty)
}

/// Bohr level of hydrogen, E_n = −13.6 eV / n², in joules
pub fn hydrogen_energy_level(n: u32) -> PhysicsResult<Decimal> {
    let ground = -(Decimal::new(136, -1) * &constants().elementary_charge.value);
    ground.checked_div(&Decimal::from(n).squared())
}

/// p = h / λ (kg·m/s)
pub fn photon_momentum(wavelength: &Decimal) -> PhysicsResult<Decimal> {
    constants().planck_constant.value.checked_div(wavelength)
}
