//! Pairwise interaction configuration for `G` groups.
//!
//! `InteractionModel` holds a dense G×G coefficient matrix and a length-G
//! radius vector. Pure configuration data with validated lookup; it never
//! touches particle state. The caller owns it and may retune any entry
//! between ticks; one tick always reads a consistent snapshot because the
//! stepping functions take it by shared reference.

use crate::simulation::error::ModelError;

/// Signed coefficients per ordered `(source, target)` group pair plus one
/// interaction radius per source group.
///
/// The coefficient scales the force that `target`'s members exert on
/// `source`'s members; self pairs are valid (cohesion/repulsion within a
/// group). All entries default to 0 (no interaction). Radii default to 0
/// and must be set to a positive value before a group may step.
#[derive(Debug, Clone)]
pub struct InteractionModel {
    groups: usize,
    coefficients: Vec<f64>, // row-major G x G
    radii: Vec<f64>,
}

impl InteractionModel {
    pub fn new(groups: usize) -> Self {
        Self {
            groups,
            coefficients: vec![0.0; groups * groups],
            radii: vec![0.0; groups],
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups
    }

    fn check(&self, index: usize) -> Result<(), ModelError> {
        if index >= self.groups {
            return Err(ModelError::InvalidIndex {
                index,
                groups: self.groups,
            });
        }
        Ok(())
    }

    /// Coefficient applied to `source`'s members for neighbors in `target`
    pub fn coefficient(&self, source: usize, target: usize) -> Result<f64, ModelError> {
        self.check(source)?;
        self.check(target)?;
        Ok(self.coefficients[source * self.groups + target])
    }

    /// Overwrite one coefficient; sign and magnitude are unconstrained.
    /// Takes effect at the next tick.
    pub fn set_coefficient(
        &mut self,
        source: usize,
        target: usize,
        value: f64,
    ) -> Result<(), ModelError> {
        self.check(source)?;
        self.check(target)?;
        self.coefficients[source * self.groups + target] = value;
        Ok(())
    }

    pub fn radius(&self, source: usize) -> Result<f64, ModelError> {
        self.check(source)?;
        Ok(self.radii[source])
    }

    /// Set the outgoing interaction radius of `source`. A radius that is not
    /// strictly positive makes the distance band degenerate and is rejected.
    pub fn set_radius(&mut self, source: usize, value: f64) -> Result<(), ModelError> {
        self.check(source)?;
        if !(value > 0.0 && value.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "radius",
                value,
            });
        }
        self.radii[source] = value;
        Ok(())
    }

    /// Full coefficient row of one source group, in group order
    pub fn row(&self, source: usize) -> Result<&[f64], ModelError> {
        self.check(source)?;
        let start = source * self.groups;
        Ok(&self.coefficients[start..start + self.groups])
    }

    /// Radius and coefficient row for an acting group, validated up front so
    /// the inner O(n^2) loop can run infallibly. Fails with
    /// `InvalidParameter` if the radius was never set to a positive value.
    pub fn acting_row(&self, source: usize) -> Result<(f64, &[f64]), ModelError> {
        let radius = self.radius(source)?;
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }
        Ok((radius, self.row(source)?))
    }
}
