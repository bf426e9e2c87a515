//! Binary floating-point bridge
//!
//! Trigonometry, `log10` and angle conversion have no decimal implementation
//! here. These helpers downgrade the operand to `f64`, compute, and convert
//! the result back exactly. The precision loss is confined to these calls.

use crate::{Decimal, PhysicsError, PhysicsResult};

/// Evaluate `f` on the binary double nearest `x`
pub fn via_f64(x: &Decimal, f: impl FnOnce(f64) -> f64) -> PhysicsResult<Decimal> {
    let value = f(x.to_f64()?);
    if !value.is_finite() {
        return Err(PhysicsError::domain(format!(
            "no finite result for {x} in binary floating point"
        )));
    }
    Decimal::from_f64(value)
}

/// Sine of an angle in radians
pub fn sin(radians: &Decimal) -> PhysicsResult<Decimal> {
    via_f64(radians, f64::sin)
}

/// Cosine of an angle in radians
pub fn cos(radians: &Decimal) -> PhysicsResult<Decimal> {
    via_f64(radians, f64::cos)
}

/// Arcsine in radians; the operand must lie in [-1, 1]
pub fn asin(x: &Decimal) -> PhysicsResult<Decimal> {
    if x.abs() > Decimal::one() {
        return Err(PhysicsError::domain(format!("asin({x}) is outside [-1, 1]")));
    }
    via_f64(x, f64::asin)
}

/// Base-10 logarithm of a positive value
pub fn log10(x: &Decimal) -> PhysicsResult<Decimal> {
    if !x.is_positive() {
        return Err(PhysicsError::domain(format!(
            "logarithm of non-positive value {x}"
        )));
    }
    via_f64(x, f64::log10)
}

pub fn to_radians(degrees: &Decimal) -> PhysicsResult<Decimal> {
    via_f64(degrees, f64::to_radians)
}

pub fn to_degrees(radians: &Decimal) -> PhysicsResult<Decimal> {
    via_f64(radians, f64::to_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_values_come_from_f64() {
        let half_pi = to_radians(&Decimal::from(90)).unwrap();
        assert_eq!(half_pi, Decimal::from_f64(std::f64::consts::FRAC_PI_2).unwrap());
        assert_eq!(sin(&half_pi).unwrap(), Decimal::one());
        assert_eq!(cos(&Decimal::zero()).unwrap(), Decimal::one());
    }

    #[test]
    fn test_sine_keeps_binary_error() {
        // sin(30°) in f64 is 0.49999999999999994, not 0.5
        let s = sin(&to_radians(&Decimal::from(30)).unwrap()).unwrap();
        assert_ne!(s, dec("0.5"));
        assert!((&s - &dec("0.5")).abs() < dec("1e-15"));
    }

    #[test]
    fn test_domain_checks() {
        assert!(asin(&dec("1.0000001")).is_err());
        assert_eq!(asin(&Decimal::zero()).unwrap(), Decimal::zero());
        assert!(log10(&Decimal::zero()).is_err());
        assert!(log10(&dec("-3")).is_err());
        assert_eq!(log10(&dec("1000")).unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_non_finite_result_rejected() {
        // 1e307 rad is finite in f64, its degree value is not
        assert!(matches!(
            to_degrees(&dec("1e307")),
            Err(PhysicsError::InvalidDomain(_))
        ));
        assert!(matches!(
            via_f64(&Decimal::one(), |x| x / 0.0),
            Err(PhysicsError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_degree_round_trip() {
        let degrees = to_degrees(&to_radians(&Decimal::from(45)).unwrap()).unwrap();
        assert!((&degrees - &Decimal::from(45)).abs() < dec("1e-12"));
    }
}
