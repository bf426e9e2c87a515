//! Waves - harmonic motion, standing waves and interference

use std::fmt;

use physica_core::{bridge, constants, Decimal, PhysicsError, PhysicsResult};

fn two_pi() -> Decimal {
    Decimal::from(2) * &constants().pi.value
}

/// Displacement y(t) = A·sin(2π·f·t + φ). `phase` defaults to zero.
///
/// The argument is assembled in decimal; only the sine goes through `f64`.
pub fn wave_function(
    amplitude: &Decimal,
    frequency: &Decimal,
    time: &Decimal,
    phase: Option<&Decimal>,
) -> PhysicsResult<Decimal> {
    let mut argument = two_pi() * frequency * time;
    if let Some(phase) = phase {
        argument = argument + phase;
    }
    Ok(amplitude * bridge::sin(&argument)?)
}

/// ω = 2π·f (rad/s)
pub fn angular_frequency(frequency: &Decimal) -> Decimal {
    two_pi() * frequency
}

/// Frequency of the n-th harmonic, f_n = n·f₁
pub fn harmonic_frequency(fundamental: &Decimal, harmonic_number: u32) -> Decimal {
    fundamental * Decimal::from(harmonic_number)
}

/// Standing-wave wavelength for the n-th harmonic.
///
/// Both ends fixed: λ = 2L / n. One end fixed: λ = 4L / (2n − 1).
/// Harmonics are numbered from 1.
pub fn standing_wave_length(
    length: &Decimal,
    harmonic_number: u32,
    fixed_ends: bool,
) -> PhysicsResult<Decimal> {
    if harmonic_number == 0 {
        return Err(PhysicsError::domain("harmonic number must be at least 1"));
    }
    let n = i64::from(harmonic_number);
    if fixed_ends {
        (Decimal::from(2) * length).checked_div(&Decimal::from(n))
    } else {
        (Decimal::from(4) * length).checked_div(&Decimal::from(2 * n - 1))
    }
}

/// Linear superposition of two displacements
pub fn superposition(y1: &Decimal, y2: &Decimal) -> Decimal {
    y1 + y2
}

/// f_beat = |f1 − f2|
pub fn beat_frequency(f1: &Decimal, f2: &Decimal) -> Decimal {
    (f1 - f2).abs()
}

/// Phase change of a wave reflected at a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionPhase {
    /// Fixed end: half-cycle shift
    Inverted,
    /// Free end: no shift
    Preserved,
}

impl ReflectionPhase {
    /// Shift in radians
    pub fn shift(&self) -> Decimal {
        match self {
            ReflectionPhase::Inverted => constants().pi.value.clone(),
            ReflectionPhase::Preserved => Decimal::zero(),
        }
    }
}

impl fmt::Display for ReflectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionPhase::Inverted => f.write_str("π (180°)"),
            ReflectionPhase::Preserved => f.write_str("0 (no phase shift)"),
        }
    }
}

pub fn reflection_phase_change(fixed_end: bool) -> ReflectionPhase {
    if fixed_end {
        ReflectionPhase::Inverted
    } else {
        ReflectionPhase::Preserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_wave_function() {
        let crest = wave_function(&dec("2"), &dec("1"), &dec("0.25"), None).unwrap();
        assert_eq!(crest, Decimal::from(2));

        let rest = wave_function(&dec("2"), &dec("10"), &Decimal::zero(), None).unwrap();
        assert!(rest.is_zero());

        // Half-cycle phase offset flips the crest
        let pi = &constants().pi.value;
        let trough = wave_function(&dec("2"), &dec("1"), &dec("0.25"), Some(pi)).unwrap();
        assert!((trough + Decimal::from(2)).abs() < dec("1e-12"));
    }

    #[test]
    fn test_angular_frequency() {
        assert_eq!(angular_frequency(&Decimal::one()), two_pi());
        assert_eq!(harmonic_frequency(&dec("100"), 2), Decimal::from(200));
    }

    #[test]
    fn test_standing_waves() {
        assert_eq!(
            standing_wave_length(&dec("1"), 2, true).unwrap(),
            Decimal::one()
        );
        // 4·1 / (2·2 − 1)
        assert_eq!(
            standing_wave_length(&dec("3"), 2, false).unwrap(),
            Decimal::from(4)
        );
        assert!(standing_wave_length(&dec("1"), 0, true).is_err());
        assert!(standing_wave_length(&dec("1"), 0, false).is_err());
    }

    #[test]
    fn test_interference() {
        assert_eq!(superposition(&dec("0.5"), &dec("-0.5")), Decimal::zero());
        assert_eq!(beat_frequency(&dec("440"), &dec("445")), Decimal::from(5));
        assert_eq!(beat_frequency(&dec("445"), &dec("440")), Decimal::from(5));
    }

    #[test]
    fn test_reflection_phase() {
        let fixed = reflection_phase_change(true);
        assert_eq!(fixed, ReflectionPhase::Inverted);
        assert_eq!(fixed.to_string(), "π (180°)");
        assert_eq!(fixed.shift(), constants().pi.value);

        let free = reflection_phase_change(false);
        assert_eq!(free.to_string(), "0 (no phase shift)");
        assert!(free.shift().is_zero());
    }
}
