//! Logistic map, x_{n+1} = r·x_n·(1 − x_n)

use physica_core::Decimal;
use tracing::debug;

use crate::Trajectory;

pub fn logistic_step(r: &Decimal, x: &Decimal) -> Decimal {
    r * x * (Decimal::one() - x)
}

/// `steps` iterates of the map from `x0`; `x0` itself is not included
pub fn logistic_map(r: &Decimal, x0: &Decimal, steps: usize) -> Trajectory<Decimal> {
    debug!(steps, %r, %x0, "logistic run started");

    let mut trajectory = Trajectory::with_capacity(steps);
    let mut x = x0.clone();
    for _ in 0..steps {
        x = logistic_step(r, &x);
        trajectory.push(x.clone());
    }

    debug!(steps, last = ?trajectory.last().map(ToString::to_string), "logistic run finished");
    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_iterates() {
        let run = logistic_map(&dec("3.7"), &dec("0.5"), 3);
        assert_eq!(run.len(), 3);
        assert_eq!(run[0], dec("0.925"));
        assert_eq!(run[1], dec("0.2566875"));
        assert_eq!(run[2], dec("0.705956401171875"));
    }

    #[test]
    fn test_fixed_point() {
        // r = 2 has a stable fixed point at 1 − 1/r = 0.5
        let run = logistic_map(&dec("2"), &dec("0.5"), 10);
        assert!(run.iter().all(|x| *x == dec("0.5")));
    }

    #[test]
    fn test_zero_steps() {
        assert!(logistic_map(&dec("3.7"), &dec("0.5"), 0).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_map_has_requested_length(steps in 0usize..60) {
            let run = logistic_map(&dec("3.9"), &dec("0.1"), steps);
            prop_assert_eq!(run.len(), steps);
        }

        #[test]
        fn prop_unit_interval_is_invariant(r_milli in 0i64..=4000, x_milli in 0i64..=1000) {
            let r = Decimal::new(r_milli, -3);
            let x0 = Decimal::new(x_milli, -3);
            for x in logistic_map(&r, &x0, 20) {
                prop_assert!(!x.is_negative());
                prop_assert!(x <= Decimal::one());
            }
        }
    }
}
