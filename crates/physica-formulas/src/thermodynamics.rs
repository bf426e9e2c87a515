//! Thermodynamics - temperature scales, heat, gases and engines

use physica_core::{Decimal, PhysicsResult};

/// Engineering value of R used when a caller gives none (J/(mol·K)).
/// The table's CODATA value is `constants().gas_constant`.
pub fn default_gas_constant() -> Decimal {
    Decimal::new(8314, -3)
}

fn kelvin_offset() -> Decimal {
    Decimal::new(27315, -2)
}

pub fn celsius_to_kelvin(temp_c: &Decimal) -> Decimal {
    temp_c + kelvin_offset()
}

pub fn kelvin_to_celsius(temp_k: &Decimal) -> Decimal {
    temp_k - kelvin_offset()
}

/// (°F − 32)·5/9
pub fn fahrenheit_to_celsius(temp_f: &Decimal) -> PhysicsResult<Decimal> {
    ((temp_f - Decimal::from(32)) * Decimal::from(5)).checked_div(&Decimal::from(9))
}

/// °C·9/5 + 32
pub fn celsius_to_fahrenheit(temp_c: &Decimal) -> PhysicsResult<Decimal> {
    Ok((temp_c * Decimal::from(9)).checked_div(&Decimal::from(5))? + Decimal::from(32))
}

/// Q = m·c·ΔT (J)
pub fn heat_transfer(mass: &Decimal, specific_heat: &Decimal, delta_temp: &Decimal) -> Decimal {
    mass * specific_heat * delta_temp
}

/// Ideal gas law solved for pressure, P = n·R·T / V (Pa).
/// `gas_constant` defaults to [`default_gas_constant`].
pub fn ideal_gas_pressure(
    n_moles: &Decimal,
    temperature: &Decimal,
    volume: &Decimal,
    gas_constant: Option<&Decimal>,
) -> PhysicsResult<Decimal> {
    let r = gas_constant.cloned().unwrap_or_else(default_gas_constant);
    (n_moles * r * temperature).checked_div(volume)
}

/// First law, ΔU = Q − W (J)
pub fn change_internal_energy(heat_added: &Decimal, work_done: &Decimal) -> Decimal {
    heat_added - work_done
}

/// Reversible entropy change, ΔS = Q / T (J/K)
pub fn entropy_change(heat: &Decimal, temperature: &Decimal) -> PhysicsResult<Decimal> {
    heat.checked_div(temperature)
}

/// Carnot limit, η = 1 − Tc/Th
pub fn carnot_efficiency(temp_hot: &Decimal, temp_cold: &Decimal) -> PhysicsResult<Decimal> {
    Ok(Decimal::one() - temp_cold.checked_div(temp_hot)?)
}
