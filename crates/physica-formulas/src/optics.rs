//! Optics - refraction, thin lenses and mirrors
//!
//! Angles are taken and returned in degrees. Trigonometry goes through the
//! `f64` bridge; every other step stays in decimal.

use physica_core::{bridge, constants, Decimal, PhysicsError, PhysicsResult};
use tracing::trace;

/// Snell's law, n1·sin θ1 = n2·sin θ2, solved for θ2 (degrees).
///
/// Fails with `TotalInternalReflection` when |sin θ2| > 1.
pub fn snells_law(n1: &Decimal, theta1_deg: &Decimal, n2: &Decimal) -> PhysicsResult<Decimal> {
    let sin_theta1 = bridge::sin(&bridge::to_radians(theta1_deg)?)?;
    let sine = n1.checked_div(n2)? * sin_theta1;
    if sine.abs() > Decimal::one() {
        trace!(%n1, %n2, %theta1_deg, %sine, "refraction rejected");
        return Err(PhysicsError::TotalInternalReflection { sine });
    }
    bridge::to_degrees(&bridge::asin(&sine)?)
}

/// Incidence angle above which light going from n1 into n2 is totally
/// reflected, θc = asin(n2 / n1) (degrees). Needs n2 <= n1.
pub fn critical_angle(n1: &Decimal, n2: &Decimal) -> PhysicsResult<Decimal> {
    let ratio = n2.checked_div(n1)?;
    if ratio > Decimal::one() || ratio.is_negative() {
        trace!(%n1, %n2, "no critical angle");
        return Err(PhysicsError::domain(format!(
            "critical angle needs 0 <= n2 <= n1 (got n1 = {n1}, n2 = {n2})"
        )));
    }
    bridge::to_degrees(&bridge::asin(&ratio)?)
}

/// Thin lens / mirror equation solved for the image distance,
/// d_i = 1 / (1/f − 1/d_o)
pub fn image_distance(focal_length: &Decimal, object_distance: &Decimal) -> PhysicsResult<Decimal> {
    (focal_length.recip()? - object_distance.recip()?).recip()
}

/// m = −d_i/d_o for mirrors, +d_i/d_o for lenses
pub fn magnification(
    image_distance: &Decimal,
    object_distance: &Decimal,
    is_mirror: bool,
) -> PhysicsResult<Decimal> {
    let m = image_distance.checked_div(object_distance)?;
    Ok(if is_mirror { -m } else { m })
}

/// v = c / n (m/s)
pub fn speed_in_medium(refractive_index: &Decimal) -> PhysicsResult<Decimal> {
    constants().speed_of_light.value.checked_div(refractive_index)
}

/// Spherical mirror, f = R / 2
pub fn focal_length_from_radius(radius_of_curvature: &Decimal) -> PhysicsResult<Decimal> {
    radius_of_curvature.checked_div(&Decimal::from(2))
}
