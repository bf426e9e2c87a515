//! Precision context - process-wide decimal configuration
//!
//! Every arithmetic result in Physica is rounded to the significant-digit
//! precision of the active [`PrecisionContext`]. The context is fixed once:
//! - explicitly, by [`PrecisionContext::install`] before any arithmetic runs
//! - implicitly, to [`PrecisionContext::default`] on the first arithmetic read
//!
//! After that it is immutable for the lifetime of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::{PhysicsError, PhysicsResult};

/// Environment variable holding the number of significant digits
pub const PRECISION_ENV: &str = "PHYSICA_PRECISION";
/// Environment variable holding the rounding mode
pub const ROUNDING_ENV: &str = "PHYSICA_ROUNDING";

static ACTIVE: OnceLock<PrecisionContext> = OnceLock::new();

/// How a result is cut back to the context precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round to nearest, ties to even
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Truncate toward zero
    Down,
}

impl Rounding {
    pub fn name(&self) -> &'static str {
        match self {
            Rounding::HalfEven => "half-even",
            Rounding::HalfUp => "half-up",
            Rounding::Down => "down",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rounding {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "half_even" | "halfeven" => Ok(Rounding::HalfEven),
            "half-up" | "half_up" | "halfup" => Ok(Rounding::HalfUp),
            "down" | "truncate" => Ok(Rounding::Down),
            other => Err(PhysicsError::Parse(format!("unknown rounding mode `{other}`"))),
        }
    }
}

/// Decimal precision configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionContext {
    /// Significant decimal digits kept in every result
    precision: u64,
    /// Rounding applied when digits are dropped
    rounding: Rounding,
}

impl Default for PrecisionContext {
    fn default() -> Self {
        PrecisionContext {
            precision: Self::DEFAULT_PRECISION,
            rounding: Rounding::HalfEven,
        }
    }
}

impl PrecisionContext {
    pub const DEFAULT_PRECISION: u64 = 50;

    /// Extra digits carried by iterative operations before the final rounding
    pub const GUARD_DIGITS: u64 = 10;

    pub fn new(precision: u64) -> PhysicsResult<Self> {
        if precision == 0 {
            return Err(PhysicsError::InvalidPrecision(precision));
        }
        Ok(PrecisionContext {
            precision,
            rounding: Rounding::HalfEven,
        })
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        PrecisionContext { rounding, ..self }
    }

    /// Load from `PHYSICA_PRECISION` / `PHYSICA_ROUNDING`, falling back to defaults
    pub fn from_env() -> PhysicsResult<Self> {
        Self::from_vars(
            std::env::var(PRECISION_ENV).ok().as_deref(),
            std::env::var(ROUNDING_ENV).ok().as_deref(),
        )
    }

    fn from_vars(precision: Option<&str>, rounding: Option<&str>) -> PhysicsResult<Self> {
        let mut ctx = match precision {
            Some(raw) => {
                let digits = raw.trim().parse::<u64>().map_err(|_| {
                    PhysicsError::Parse(format!("{PRECISION_ENV}={raw} is not a digit count"))
                })?;
                Self::new(digits)?
            }
            None => Self::default(),
        };
        if let Some(raw) = rounding {
            ctx = ctx.with_rounding(raw.parse()?);
        }
        Ok(ctx)
    }

    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Precision used for intermediate work
    #[inline]
    pub fn working_precision(&self) -> u64 {
        self.precision + Self::GUARD_DIGITS
    }

    /// Fix this context for the rest of the process.
    ///
    /// Installing the already-active context again is a no-op.
    pub fn install(self) -> PhysicsResult<&'static PrecisionContext> {
        let active = ACTIVE.get_or_init(|| {
            tracing::debug!(
                precision = self.precision,
                rounding = %self.rounding,
                "precision context installed"
            );
            self
        });
        if *active != self {
            tracing::warn!(
                active = active.precision,
                requested = self.precision,
                "rejecting precision context re-installation"
            );
            return Err(PhysicsError::PrecisionLocked {
                active: active.precision,
                requested: self.precision,
            });
        }
        Ok(active)
    }

    /// The active context, fixing the default if none was installed
    #[inline]
    pub fn current() -> &'static PrecisionContext {
        ACTIVE.get_or_init(PrecisionContext::default)
    }
}

impl fmt::Display for PrecisionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits, {}", self.precision, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifty_digits_half_even() {
        let ctx = PrecisionContext::default();
        assert_eq!(ctx.precision(), 50);
        assert_eq!(ctx.rounding(), Rounding::HalfEven);
        assert_eq!(ctx.working_precision(), 60);
    }

    #[test]
    fn test_zero_precision_rejected() {
        assert_eq!(
            PrecisionContext::new(0),
            Err(PhysicsError::InvalidPrecision(0))
        );
    }

    #[test]
    fn test_from_vars() {
        let ctx = PrecisionContext::from_vars(Some("80"), Some("half-up")).unwrap();
        assert_eq!(ctx.precision(), 80);
        assert_eq!(ctx.rounding(), Rounding::HalfUp);

        let ctx = PrecisionContext::from_vars(None, None).unwrap();
        assert_eq!(ctx, PrecisionContext::default());

        assert!(PrecisionContext::from_vars(Some("lots"), None).is_err());
        assert!(PrecisionContext::from_vars(Some("0"), None).is_err());
        assert!(PrecisionContext::from_vars(None, Some("sideways")).is_err());
    }

    #[test]
    fn test_install_locks_context() {
        // Tests share one process, so only the default can be installed safely
        let active = PrecisionContext::default().install().unwrap();
        assert_eq!(*active, PrecisionContext::default());
        assert_eq!(PrecisionContext::current(), active);

        let other = PrecisionContext::new(20).unwrap();
        assert_eq!(
            other.install(),
            Err(PhysicsError::PrecisionLocked {
                active: 50,
                requested: 20
            })
        );
    }
}
