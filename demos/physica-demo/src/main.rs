//! Physica Demo
//!
//! Walks through the formula catalog, the iterated systems and the vector
//! helpers, then shows how domain violations surface as errors.
//!
//! Set `PHYSICA_PRECISION` / `PHYSICA_ROUNDING` to change the decimal
//! context and `RUST_LOG=debug` to see the library's events.

use std::process::ExitCode;

use physica_chaos::{logistic_map, lorenz_trajectory, LorenzParams, LorenzState};
use physica_core::{constants, Decimal, PhysicsError, PhysicsResult, PrecisionContext};
use physica_formulas::{
    astrophysics, mechanics, nuclear, optics, quantum, relativity, sound, thermodynamics, units,
    waves,
};
use physica_linalg::{cross_product, dot_product, matrix_multiply, trapezoidal_integrate};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn dec(s: &str) -> PhysicsResult<Decimal> {
    s.parse()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = ?err.kind(), "demo aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> PhysicsResult<()> {
    let ctx = PrecisionContext::from_env()?.install()?;
    info!(%ctx, "precision context installed");

    println!("=== Physica Demo ===\n");

    // 1. Constants
    println!("1. Constants");
    let table = constants();
    for constant in [&table.speed_of_light, &table.reduced_planck_constant, &table.light_year] {
        println!("   {constant}");
    }

    // 2. Mechanics and astrophysics
    println!("\n2. Gravitation");
    let earth = &table.earth_mass.value;
    let moon = dec("7.35e22")?;
    let distance = dec("3.84e8")?;
    println!(
        "   Earth-Moon force: {} N",
        mechanics::gravitational_force(earth, &moon, &distance)?
    );
    println!(
        "   Escape velocity from Earth: {} m/s",
        astrophysics::escape_velocity(earth, &table.earth_radius.value)?
    );
    println!(
        "   Schwarzschild radius of the Sun: {} m",
        astrophysics::schwarzschild_radius(&dec("1.989e30")?)?
    );
    println!(
        "   Recession at 100 Mpc: {} m/s",
        astrophysics::recessional_velocity(&dec("100")?)
    );

    // 3. Thermodynamics and sound
    println!("\n3. Heat and sound");
    println!(
        "   Body temperature: {} °F",
        thermodynamics::celsius_to_fahrenheit(&dec("37")?)?
    );
    println!(
        "   Carnot limit 500 K -> 300 K: {}",
        thermodynamics::carnot_efficiency(&dec("500")?, &dec("300")?)?
    );
    println!(
        "   440 Hz source approaching at 30 m/s: {} Hz",
        sound::doppler_effect(&dec("440")?, &dec("30")?, &Decimal::zero(), None)?
    );
    println!(
        "   Sound level of 1e-6 W/m²: {} dB",
        sound::sound_level_db(&dec("1e-6")?, None)?
    );

    // 4. Waves and optics
    println!("\n4. Waves and light");
    println!(
        "   Standing wave, L = 1 m, n = 2: {} m",
        waves::standing_wave_length(&dec("1")?, 2, true)?
    );
    println!(
        "   Reflection at a fixed end: {}",
        waves::reflection_phase_change(true)
    );
    println!(
        "   Air to glass at 30°: {}°",
        optics::snells_law(&dec("1.0")?, &dec("30")?, &dec("1.5")?)?
    );
    println!(
        "   Critical angle, glass to air: {}°",
        optics::critical_angle(&dec("1.5")?, &dec("1.0")?)?
    );

    // 5. Modern physics
    println!("\n5. Relativity, quantum and nuclear");
    let v = dec("0.6")? * &table.speed_of_light.value;
    println!("   γ at 0.6c: {}", relativity::lorentz_factor(&v)?);
    println!(
        "   E = mc² for 1 kg: {} J",
        relativity::mass_energy_equivalence(&Decimal::one())
    );
    println!(
        "   Photon energy at 500 nm: {} J",
        quantum::energy_from_wavelength(&dec("500e-9")?)?
    );
    println!(
        "   Hydrogen n = 2: {} J",
        quantum::hydrogen_energy_level(2)?
    );
    let lambda = nuclear::decay_constant_from_half_life(&dec("5730")?)?;
    println!(
        "   C-14 left after 10000 years of 1e6: {}",
        nuclear::radioactive_decay(&dec("1e6")?, &lambda, &dec("10000")?)?
    );

    // 6. Units
    println!("\n6. Units");
    println!(
        "   1.5 km = {} m",
        units::convert(&dec("1.5")?, units::SiPrefix::Kilo, units::SiPrefix::Base)
    );

    // 7. Chaos
    println!("\n7. Iterated systems");
    let initial = LorenzState::new(Decimal::one(), Decimal::one(), Decimal::one());
    let run = lorenz_trajectory(&initial, &LorenzParams::default(), &dec("0.01")?, 100);
    for (step, state) in run.iter().take(3).enumerate() {
        println!("   Lorenz step {}: {state}", step + 1);
    }
    if let Some(last) = run.last() {
        println!("   Lorenz step {}: {last}", run.len());
    }
    let logistic = logistic_map(&dec("3.7")?, &dec("0.5")?, 5);
    for (step, x) in logistic.iter().enumerate() {
        println!("   Logistic step {}: {x}", step + 1);
    }

    // 8. Linear algebra
    println!("\n8. Vectors and integration");
    let a: Vec<Decimal> = [1, 2, 3].into_iter().map(Decimal::from).collect();
    let b: Vec<Decimal> = [4, 5, 6].into_iter().map(Decimal::from).collect();
    println!("   a · b = {}", dot_product(&a, &b)?);
    let [cx, cy, cz] = cross_product(&a, &b)?;
    println!("   a × b = ({cx}, {cy}, {cz})");
    let product = matrix_multiply(&[a.clone(), b.clone()], &vec![vec![Decimal::one()]; 3])?;
    println!("   Row sums via matrix product: {}, {}", product[0][0], product[1][0]);
    let x: Vec<Decimal> = [0, 1, 2].into_iter().map(Decimal::from).collect();
    let y: Vec<Decimal> = [0, 1, 4].into_iter().map(Decimal::from).collect();
    println!("   ∫ over samples of x²: {}", trapezoidal_integrate(&x, &y)?);

    // 9. Domain violations
    println!("\n9. Rejected inputs");
    report(
        "glass to air at 60°",
        optics::snells_law(&dec("1.5")?, &dec("60")?, &dec("1.0")?),
    );
    report(
        "γ at the speed of light",
        relativity::lorentz_factor(&table.speed_of_light.value),
    );
    report(
        "acceleration over zero time",
        mechanics::acceleration(&dec("10")?, &Decimal::zero(), &Decimal::zero()),
    );
    report("cross product of 2-vectors", cross_product(&a[..2], &b[..2]).map(|c| c[0].clone()));
    report("unknown constant", physica_core::lookup("warp_factor").cloned());

    println!("\n=== Demo complete ===");
    Ok(())
}

fn report(label: &str, outcome: PhysicsResult<Decimal>) {
    match outcome {
        Ok(value) => println!("   {label}: unexpectedly accepted ({value})"),
        Err(err) => println!("   {label}: {}", describe(&err)),
    }
}

/// Plain-language explanation for each failure class
fn describe(err: &PhysicsError) -> String {
    match err {
        PhysicsError::TotalInternalReflection { .. } => {
            format!("the light is totally reflected ({err})")
        }
        PhysicsError::SuperluminalVelocity { .. } => {
            format!("nothing with mass reaches c ({err})")
        }
        PhysicsError::DivisionByZero => format!("a denominator vanished ({err})"),
        PhysicsError::DimensionMismatch { .. } => format!("operand shapes disagree ({err})"),
        _ => err.to_string(),
    }
}
