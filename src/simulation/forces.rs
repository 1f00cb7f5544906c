//! Force accumulation for the particle-life rule
//!
//! One asymmetric, radius-limited force law: within the open distance band
//! `(min_separation, radius)` a neighbor in group `g` contributes
//! `coeff(source, g) / d` along the displacement from neighbor to particle.
//! Outside the band a pair contributes nothing (hard cutoff, no smoothing).

use crate::simulation::states::{Group, NVec2, Particle};

/// Total force on particle `a` of the acting group, summed over every
/// particle of every group (the acting group included, giving
/// self-interaction).
///
/// `row` is the acting group's coefficient row in group order and `radius`
/// its outgoing interaction radius; both come pre-validated from
/// [`InteractionModel::acting_row`], so this loop is infallible.
///
/// The `b == a` self pair yields `d = 0`, which fails the
/// `d > min_separation` test; no identity check is needed.
///
/// [`InteractionModel::acting_row`]: crate::simulation::interaction::InteractionModel::acting_row
pub fn accumulate_force(
    a: &Particle,
    groups: &[Group],
    row: &[f64],
    radius: f64,
    min_separation: f64,
) -> NVec2 {
    let mut f = NVec2::zeros();

    for (coeff, group) in row.iter().zip(groups.iter()) {
        for b in &group.particles {
            // r points from the neighbor b toward a, so a positive
            // coefficient pushes a away from b and a negative one pulls
            // a toward b
            let r = a.x - b.x;
            let d = r.norm();

            // Hard cutoff: contribute only inside the open band
            // (min_separation, radius). Too close (dead zone) or too far
            // adds nothing.
            if d > min_separation && d < radius {
                // F = coeff / d, applied along the displacement components:
                // f += (dx, dy) * F
                f += r * (coeff / d);
            }
        }
    }

    f
}
