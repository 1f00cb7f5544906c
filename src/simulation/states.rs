//! Core state types for the particle-life simulation.
//!
//! Defines the particle/group data model:
//! - `Particle` using `NVec2` (position + velocity)
//! - `Group` (one color population sharing an interaction radius)
//! - `World` (all groups at the current tick `t`)
//!
//! Positions and velocities are only ever written by the integrator;
//! everything else reads them through the render view.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

/// RGBA display tag shared by every particle of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255, 255]);
    pub const BLUE: Color = Color([0, 0, 255, 255]);
    pub const RED: Color = Color([255, 0, 0, 255]);
    pub const GREEN: Color = Color([0, 255, 0, 255]);
}

/// A fixed population of particles sharing one color identity.
/// Membership is immutable after creation; groups are never resized
/// during a run.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: String,
    pub color: Color,
    pub particles: Vec<Particle>,
}

#[derive(Debug, Clone)]
pub struct World {
    pub groups: Vec<Group>, // collection of particle groups
    pub t: u64, // completed ticks
}

impl World {
    pub fn particle_count(&self) -> usize {
        self.groups.iter().map(|g| g.particles.len()).sum()
    }

    /// Read-only `(position, color)` pairs for an external draw routine,
    /// valid as of the last completed tick
    pub fn render_view(&self) -> impl Iterator<Item = (NVec2, Color)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.particles.iter().map(move |p| (p.x, g.color)))
    }
}
