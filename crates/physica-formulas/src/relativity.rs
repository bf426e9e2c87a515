//! Special relativity - Lorentz factor and its consequences
//!
//! Every velocity-dependent formula goes through [`lorentz_factor`], so each
//! one rejects |v| >= c with `SuperluminalVelocity`.

use physica_core::{constants, Decimal, PhysicsError, PhysicsResult};
use tracing::trace;

fn c() -> &'static Decimal {
    &constants().speed_of_light.value
}

/// γ = 1 / √(1 − v²/c²)
pub fn lorentz_factor(velocity: &Decimal) -> PhysicsResult<Decimal> {
    let beta_squared = velocity.squared().checked_div(&c().squared())?;
    let inside = Decimal::one() - beta_squared;
    if !inside.is_positive() {
        trace!(%velocity, "velocity at or above c");
        return Err(PhysicsError::SuperluminalVelocity {
            velocity: velocity.clone(),
        });
    }
    inside.sqrt()?.recip()
}

/// t = γ·t₀
pub fn time_dilation(proper_time: &Decimal, velocity: &Decimal) -> PhysicsResult<Decimal> {
    Ok(lorentz_factor(velocity)? * proper_time)
}

/// L = L₀ / γ
pub fn length_contraction(proper_length: &Decimal, velocity: &Decimal) -> PhysicsResult<Decimal> {
    proper_length.checked_div(&lorentz_factor(velocity)?)
}

/// m = γ·m₀
pub fn relativistic_mass(rest_mass: &Decimal, velocity: &Decimal) -> PhysicsResult<Decimal> {
    Ok(lorentz_factor(velocity)? * rest_mass)
}

/// E = m·c²
pub fn mass_energy_equivalence(mass: &Decimal) -> Decimal {
    mass * c().squared()
}

/// p = γ·m₀·v
pub fn relativistic_momentum(rest_mass: &Decimal, velocity: &Decimal) -> PhysicsResult<Decimal> {
    Ok(lorentz_factor(velocity)? * rest_mass * velocity)
}

/// KE = (γ − 1)·m₀·c²
pub fn relativistic_kinetic_energy(
    rest_mass: &Decimal,
    velocity: &Decimal,
) -> PhysicsResult<Decimal> {
    let gamma = lorentz_factor(velocity)?;
    Ok((gamma - Decimal::one()) * mass_energy_equivalence(rest_mass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fraction_of_c(f: &str) -> Decimal {
        dec(f) * c()
    }

    #[test]
    fn test_lorentz_factor_at_rest() {
        assert_eq!(lorentz_factor(&Decimal::zero()).unwrap(), Decimal::one());
    }

    #[test]
    fn test_lorentz_factor_rejects_c_and_above() {
        for v in [c().clone(), fraction_of_c("1.01"), -c()] {
            match lorentz_factor(&v) {
                Err(PhysicsError::SuperluminalVelocity { velocity }) => assert_eq!(velocity, v),
                other => panic!("expected superluminal error for {v}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_three_fifths_c() {
        let v = fraction_of_c("0.6");
        assert_eq!(lorentz_factor(&v).unwrap(), dec("1.25"));
        assert_eq!(time_dilation(&dec("10"), &v).unwrap(), dec("12.5"));
        assert_eq!(length_contraction(&dec("100"), &v).unwrap(), dec("80"));
        assert_eq!(relativistic_mass(&dec("2"), &v).unwrap(), dec("2.5"));
        assert_eq!(relativistic_momentum(&dec("1"), &v).unwrap(), dec("224844343.5"));
        assert_eq!(
            relativistic_kinetic_energy(&dec("1"), &v).unwrap(),
            dec("22468879468420441")
        );
    }

    #[test]
    fn test_mass_energy_of_one_kilogram() {
        assert_eq!(mass_energy_equivalence(&Decimal::one()), c().squared());
        assert_eq!(
            mass_energy_equivalence(&Decimal::one()),
            dec("89875517873681764")
        );
    }

    #[test]
    fn test_superluminal_propagates() {
        let v = fraction_of_c("1.5");
        assert!(time_dilation(&dec("1"), &v).is_err());
        assert!(length_contraction(&dec("1"), &v).is_err());
        assert!(relativistic_kinetic_energy(&dec("1"), &v).is_err());
    }

    #[test]
    fn test_kinetic_energy_approaches_newtonian() {
        let m = dec("2");
        let v = dec("1000");
        let relativistic = relativistic_kinetic_energy(&m, &v).unwrap();
        let newtonian = mechanics::kinetic_energy(&m, &v);
        let relative_error = (relativistic - &newtonian)
            .checked_div(&newtonian)
            .unwrap()
            .abs();
        assert!(relative_error < dec("1e-10"));
    }

    proptest! {
        #[test]
        fn prop_subluminal_gamma_at_least_one(permille in 0i64..1000) {
            let v = Decimal::new(permille, -3) * c();
            let gamma = lorentz_factor(&v).unwrap();
            prop_assert!(gamma >= Decimal::one());
        }
    }
}
