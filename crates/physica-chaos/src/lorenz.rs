//! Lorenz system
//!
//! dx/dt = σ(y − x)
//! dy/dt = x(ρ − z) − y
//! dz/dt = xy − βz
//!
//! Integrated with explicit Euler steps of fixed size `dt`.

use std::fmt;
use std::num::NonZeroU64;

use physica_core::Decimal;
use tracing::debug;

use crate::Trajectory;

const THREE: NonZeroU64 = match NonZeroU64::new(3) {
    Some(n) => n,
    None => panic!("3 is non-zero"),
};

/// Lorenz system parameters
#[derive(Clone, Debug, PartialEq)]
pub struct LorenzParams {
    /// Prandtl number
    pub σ: Decimal,
    /// Rayleigh number
    pub ρ: Decimal,
    /// Geometric factor
    pub β: Decimal,
}

impl Default for LorenzParams {
    fn default() -> Self {
        // Lorenz (1963): σ = 10, ρ = 28, β = 8/3
        LorenzParams {
            σ: Decimal::from(10),
            ρ: Decimal::from(28),
            β: Decimal::ratio(8, THREE),
        }
    }
}

impl LorenzParams {
    pub fn new(σ: Decimal, ρ: Decimal, β: Decimal) -> Self {
        LorenzParams { σ, ρ, β }
    }
}

/// Point in (x, y, z) phase space
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LorenzState {
    pub x: Decimal,
    pub y: Decimal,
    pub z: Decimal,
}

impl LorenzState {
    pub fn new(x: Decimal, y: Decimal, z: Decimal) -> Self {
        LorenzState { x, y, z }
    }
}

impl fmt::Display for LorenzState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One explicit Euler step
pub fn lorenz_step(state: &LorenzState, params: &LorenzParams, dt: &Decimal) -> LorenzState {
    let LorenzState { x, y, z } = state;

    let dx = &params.σ * (y - x);
    let dy = x * (&params.ρ - z) - y;
    let dz = x * y - &params.β * z;

    LorenzState {
        x: x + dx * dt,
        y: y + dy * dt,
        z: z + dz * dt,
    }
}

/// `steps` successive Euler steps from `initial`; the initial state itself
/// is not included
pub fn lorenz_trajectory(
    initial: &LorenzState,
    params: &LorenzParams,
    dt: &Decimal,
    steps: usize,
) -> Trajectory<LorenzState> {
    debug!(steps, %dt, start = %initial, "lorenz run started");

    let mut trajectory = Trajectory::with_capacity(steps);
    let mut state = initial.clone();
    for _ in 0..steps {
        state = lorenz_step(&state, params, dt);
        trajectory.push(state.clone());
    }

    debug!(steps, end = ?trajectory.last().map(ToString::to_string), "lorenz run finished");
    trajectory
}
