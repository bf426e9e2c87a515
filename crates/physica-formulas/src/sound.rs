//! Sound - propagation speed, Doppler shift and loudness

use std::fmt;

use physica_core::{bridge, constants, Decimal, PhysicsError, PhysicsResult};

/// Propagation medium with a tabulated speed of sound at room temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Medium {
    #[default]
    Air,
    Water,
    Steel,
}

impl Medium {
    pub fn name(&self) -> &'static str {
        match self {
            Medium::Air => "air",
            Medium::Water => "water",
            Medium::Steel => "steel",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Speed of sound in `medium` (m/s)
pub fn speed_of_sound(medium: Medium) -> Decimal {
    match medium {
        Medium::Air => Decimal::from(343),
        Medium::Water => Decimal::from(1482),
        Medium::Steel => Decimal::from(5960),
    }
}

/// v = f·λ (m/s)
pub fn wave_speed(frequency: &Decimal, wavelength: &Decimal) -> Decimal {
    frequency * wavelength
}

/// λ = v / f (m)
pub fn wavelength(speed: &Decimal, frequency: &Decimal) -> PhysicsResult<Decimal> {
    speed.checked_div(frequency)
}

/// f = v / λ (Hz)
pub fn frequency(speed: &Decimal, wavelength: &Decimal) -> PhysicsResult<Decimal> {
    speed.checked_div(wavelength)
}

/// T = 1 / f (s)
pub fn period(frequency: &Decimal) -> PhysicsResult<Decimal> {
    frequency.recip()
}

/// Observed frequency f' = f·(v + v_observer) / (v − v_source).
///
/// Positive speeds mean motion toward the other party. `wave_speed`
/// defaults to the speed of sound in air.
pub fn doppler_effect(
    source_frequency: &Decimal,
    source_velocity: &Decimal,
    observer_velocity: &Decimal,
    wave_speed: Option<&Decimal>,
) -> PhysicsResult<Decimal> {
    let v = wave_speed
        .cloned()
        .unwrap_or_else(|| speed_of_sound(Medium::Air));
    (source_frequency * (&v + observer_velocity)).checked_div(&(&v - source_velocity))
}

/// Point source spreading over a sphere, I = P / (4π·r²) (W/m²)
pub fn intensity(power: &Decimal, distance: &Decimal) -> PhysicsResult<Decimal> {
    let sphere = Decimal::from(4) * &constants().pi.value * distance.squared();
    power.checked_div(&sphere)
}

/// Threshold of hearing, 1e-12 W/m²
pub fn hearing_threshold() -> Decimal {
    Decimal::new(1, -12)
}

/// β = 10·log10(I / I₀) (dB). `reference` defaults to [`hearing_threshold`].
pub fn sound_level_db(intensity: &Decimal, reference: Option<&Decimal>) -> PhysicsResult<Decimal> {
    let i0 = reference.cloned().unwrap_or_else(hearing_threshold);
    let ratio = intensity.checked_div(&i0)?;
    if !ratio.is_positive() {
        return Err(PhysicsError::domain(format!(
            "sound level needs a positive intensity ratio (got {ratio})"
        )));
    }
    Ok(Decimal::from(10) * bridge::log10(&ratio)?)
}
