//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - velocity damping factor applied every tick,
//! - minimum separation (dead zone) below which force is suppressed,
//! - reflective world bounds,
//! - random seed for reproducible spawns

use crate::simulation::states::NVec2;

/// Reflective world rectangle. Reflection is lazy: a velocity component is
/// negated only when the position is already outside the bound and still
/// moving outward; position is never clamped.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn reflect(&self, x: &NVec2, v: &mut NVec2) {
        if x.x < self.x_min && v.x < 0.0 {
            v.x = -v.x;
        }
        if x.x > self.x_max && v.x > 0.0 {
            v.x = -v.x;
        }
        if x.y < self.y_min && v.y < 0.0 {
            v.y = -v.y;
        }
        if x.y > self.y_max && v.y > 0.0 {
            v.y = -v.y;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub damping: f64, // velocity decay per tick, v' = (v + f) * (1 - damping)
    pub min_separation: f64, // dead zone, prevents singular force as d -> 0
    pub bounds: Bounds, // reflective world rectangle
    pub seed: u64, // deterministic seed to make spawns reproducable
}
