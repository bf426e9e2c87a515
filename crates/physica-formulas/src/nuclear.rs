//! Nuclear physics - mass defect, decay and reaction energy

use physica_core::{constants, Decimal, PhysicsResult};

fn c_squared() -> Decimal {
    constants().speed_of_light.value.squared()
}

fn ln2() -> PhysicsResult<Decimal> {
    Decimal::from(2).ln()
}

/// Δm = (Z·m_p + N·m_n) − m_nucleus (kg)
pub fn mass_defect(
    protons: &Decimal,
    neutrons: &Decimal,
    nucleus_mass: &Decimal,
    proton_mass: &Decimal,
    neutron_mass: &Decimal,
) -> Decimal {
    (protons * proton_mass + neutrons * neutron_mass) - nucleus_mass
}

/// E = Δm·c² (J)
pub fn binding_energy(mass_defect: &Decimal) -> Decimal {
    mass_defect * c_squared()
}

/// Undecayed nuclei after `time`, N(t) = N₀·e^(−λt)
pub fn radioactive_decay(
    initial: &Decimal,
    decay_constant: &Decimal,
    time: &Decimal,
) -> PhysicsResult<Decimal> {
    let exponent = -(decay_constant * time);
    Ok(initial * exponent.exp()?)
}

/// T½ = ln 2 / λ
///
/// ln 2 is evaluated at the context precision, so results intentionally
/// differ from the 16-digit `0.6931471805599453` past the 16th digit.
pub fn half_life(decay_constant: &Decimal) -> PhysicsResult<Decimal> {
    ln2()?.checked_div(decay_constant)
}

/// λ = ln 2 / T½
pub fn decay_constant_from_half_life(half_life: &Decimal) -> PhysicsResult<Decimal> {
    ln2()?.checked_div(half_life)
}

/// Energy released by fusion, E = (m_initial − m_final)·c² (J)
pub fn fusion_energy(initial_mass: &Decimal, final_mass: &Decimal) -> Decimal {
    binding_energy(&(initial_mass - final_mass))
}

/// Energy released by fission into `fragments`, E = (m_initial − Σm)·c² (J)
pub fn fission_energy(initial_mass: &Decimal, fragments: &[Decimal]) -> Decimal {
    let final_mass: Decimal = fragments.iter().sum();
    binding_energy(&(initial_mass - final_mass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use physica_core::PhysicsError;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_helium_binding_energy() {
        let dm = mass_defect(
            &dec("2"),
            &dec("2"),
            &dec("6.646478e-27"),
            &dec("1.6726219e-27"),
            &dec("1.6749275e-27"),
        );
        assert_eq!(dm, dec("4.86208e-29"));
        assert_eq!(binding_energy(&dm), dec("4.3698195794327063110912e-12"));
    }

    #[test]
    fn test_reaction_energy() {
        let fragments = [dec("1.5e-25"), dec("2.3e-25")];
        let e = fission_energy(&dec("3.902e-25"), &fragments);
        assert_eq!(e, dec("9.167302823115539928e-10"));
        assert_eq!(fusion_energy(&dec("3.902e-25"), &dec("3.8e-25")), e);

        // No fragments: the whole mass converts
        assert_eq!(
            fission_energy(&Decimal::one(), &[]),
            crate::relativity::mass_energy_equivalence(&Decimal::one())
        );
    }

    #[test]
    fn test_half_life_round_trip() {
        let lambda = decay_constant_from_half_life(&dec("5730")).unwrap();
        let back = half_life(&lambda).unwrap();
        assert!((back - dec("5730")).abs() < dec("1e-40"));
        assert_eq!(half_life(&Decimal::zero()), Err(PhysicsError::DivisionByZero));
    }

    #[test]
    fn test_half_life_carries_full_ln2() {
        assert_eq!(
            half_life(&Decimal::one()).unwrap(),
            dec("0.69314718055994530941723212145817656807550013436026")
        );
        assert_ne!(half_life(&Decimal::one()).unwrap(), dec("0.6931471805599453"));
    }

    #[test]
    fn test_decay_halves_after_one_half_life() {
        let n0 = dec("1e6");
        let lambda = decay_constant_from_half_life(&dec("5730")).unwrap();
        let remaining = radioactive_decay(&n0, &lambda, &dec("5730")).unwrap();
        assert!((remaining - dec("500000")).abs() < dec("1e-35"));

        assert_eq!(
            radioactive_decay(&n0, &Decimal::zero(), &dec("5730")).unwrap(),
            n0
        );
    }
}
