//! Classical mechanics - Newtonian motion, energy and gravitation

use physica_core::{constants, Decimal, PhysicsResult};

/// Newton's second law, F = m·a (N)
pub fn force(mass: &Decimal, acceleration: &Decimal) -> Decimal {
    mass * acceleration
}

/// a = (v_final − v_initial) / t (m/s²)
pub fn acceleration(
    v_final: &Decimal,
    v_initial: &Decimal,
    time: &Decimal,
) -> PhysicsResult<Decimal> {
    (v_final - v_initial).checked_div(time)
}

/// v = v_initial + a·t (m/s)
pub fn velocity(v_initial: &Decimal, acceleration: &Decimal, time: &Decimal) -> Decimal {
    v_initial + acceleration * time
}

/// s = v_initial·t + ½·a·t² (m)
pub fn displacement(v_initial: &Decimal, acceleration: &Decimal, time: &Decimal) -> Decimal {
    let half = Decimal::new(5, -1);
    v_initial * time + half * acceleration * time.squared()
}

/// KE = ½·m·v² (J)
pub fn kinetic_energy(mass: &Decimal, velocity: &Decimal) -> Decimal {
    Decimal::new(5, -1) * mass * velocity.squared()
}

/// PE = m·g·h (J). `gravity` defaults to standard gravity, 9.80665 m/s².
pub fn potential_energy(mass: &Decimal, height: &Decimal, gravity: Option<&Decimal>) -> Decimal {
    let g = gravity.unwrap_or(&constants().standard_gravity.value);
    mass * g * height
}

/// p = m·v (kg·m/s)
pub fn momentum(mass: &Decimal, velocity: &Decimal) -> Decimal {
    mass * velocity
}

/// F = G·m1·m2 / r² (N)
///
/// The masses are multiplied first so the result is exactly symmetric.
pub fn gravitational_force(
    m1: &Decimal,
    m2: &Decimal,
    distance: &Decimal,
) -> PhysicsResult<Decimal> {
    let g = &constants().gravitational_constant.value;
    (g * (m1 * m2)).checked_div(&distance.squared())
}

/// W = F·d (J)
pub fn work(force: &Decimal, displacement: &Decimal) -> Decimal {
    force * displacement
}

/// P = W / t (W)
pub fn power(work: &Decimal, time: &Decimal) -> PhysicsResult<Decimal> {
    work.checked_div(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use physica_core::PhysicsError;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_newtonian_basics() {
        assert_eq!(force(&dec("2.0"), &dec("3.0")), Decimal::from(6));
        assert_eq!(kinetic_energy(&dec("2.0"), &dec("5.0")), Decimal::from(25));
        assert_eq!(momentum(&dec("3"), &dec("-4")), Decimal::from(-12));
        assert_eq!(work(&dec("10"), &dec("2.5")), Decimal::from(25));
    }

    #[test]
    fn test_kinematics() {
        assert_eq!(
            acceleration(&dec("30"), &dec("10"), &dec("4")).unwrap(),
            Decimal::from(5)
        );
        assert_eq!(velocity(&dec("10"), &dec("5"), &dec("4")), Decimal::from(30));
        // 10·4 + ½·5·16
        assert_eq!(displacement(&dec("10"), &dec("5"), &dec("4")), Decimal::from(80));
    }

    #[test]
    fn test_potential_energy_default_gravity() {
        let pe = potential_energy(&dec("2.0"), &dec("10"), None);
        assert_eq!(pe, dec("196.133"));

        let moon = dec("1.62");
        assert_eq!(potential_energy(&dec("2"), &dec("10"), Some(&moon)), dec("32.4"));
    }

    #[test]
    fn test_gravitational_force_earth_moon() {
        let f = gravitational_force(&dec("5.97e24"), &dec("7.35e22"), &dec("3.84e8")).unwrap();
        assert_eq!(f, dec("1.9861175323486328125E+20"));
    }

    #[test]
    fn test_zero_time_and_distance() {
        assert_eq!(
            acceleration(&dec("1"), &dec("0"), &Decimal::zero()),
            Err(PhysicsError::DivisionByZero)
        );
        assert_eq!(power(&dec("100"), &Decimal::zero()), Err(PhysicsError::DivisionByZero));
        assert_eq!(
            gravitational_force(&dec("1"), &dec("1"), &Decimal::zero()),
            Err(PhysicsError::DivisionByZero)
        );
    }

    proptest! {
        #[test]
        fn prop_gravitational_force_symmetric(
            a in 1i64..i64::MAX, ea in -40i64..40,
            b in 1i64..i64::MAX, eb in -40i64..40,
            r in 1i64..1_000_000_000, er in -10i64..10,
        ) {
            let m1 = Decimal::new(a, ea);
            let m2 = Decimal::new(b, eb);
            let d = Decimal::new(r, er);
            prop_assert_eq!(
                gravitational_force(&m1, &m2, &d).unwrap(),
                gravitational_force(&m2, &m1, &d).unwrap()
            );
        }
    }
}
