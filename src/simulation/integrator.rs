//! Tick stepping for the particle-life system
//!
//! Provides the per-group sequential step (reference behavior) and a
//! frozen-snapshot alternative, both driven by `InteractionModel` and
//! `Parameters`. One tick is one implicit unit of time; there is no
//! explicit step-size variable.

use log::trace;

use super::engine::Engine;
use super::error::ModelError;
use super::forces::accumulate_force;
use super::interaction::InteractionModel;
use super::params::Parameters;
use super::states::World;
use crate::configuration::config::UpdateConfig;

/// Advance one group by one tick with sequential (in-place) semantics.
///
/// For each particle of `source` in order: accumulate force over every
/// group's current positions, apply the damped velocity update
/// `v' = (v + f) * (1 - damping)`, reflect at the world bounds, and write
/// the new position immediately. Later particles of the same group (and
/// later groups in the same tick) therefore see already-moved positions;
/// this ordering dependence is the reference emergent-behavior regime,
/// not an oversight.
///
/// Validation happens before any particle is mutated, so a failed step
/// leaves the group untouched.
pub fn step_group(
    world: &mut World,
    source: usize,
    model: &InteractionModel,
    params: &Parameters,
) -> Result<(), ModelError> {
    if source >= world.groups.len() || model.group_count() != world.groups.len() {
        return Err(ModelError::InvalidIndex {
            index: source,
            groups: world.groups.len(),
        });
    }
    let (radius, row) = model.acting_row(source)?;

    let n = world.groups[source].particles.len();
    if n == 0 { // empty group, legal no-op
        return Ok(());
    }

    for i in 0..n {
        // Copy out the particle so the force loop can read all groups,
        // including the one being stepped
        let a = world.groups[source].particles[i];
        let f = accumulate_force(&a, &world.groups, row, radius, params.min_separation);

        let p = &mut world.groups[source].particles[i];
        p.v = (a.v + f) * (1.0 - params.damping);
        params.bounds.reflect(&a.x, &mut p.v);
        p.x = a.x + p.v;
    }

    Ok(())
}

/// Advance every group by one tick, groups in declaration order, each
/// seeing the in-place updates of the ones before it.
pub fn tick_sequential(
    world: &mut World,
    model: &InteractionModel,
    params: &Parameters,
) -> Result<(), ModelError> {
    for source in 0..world.groups.len() {
        step_group(world, source, model, params)?;
    }
    world.t += 1;
    trace!("tick {} complete (sequential)", world.t);
    Ok(())
}

/// Advance every group by one tick from a frozen position snapshot.
///
/// All force evaluations read the positions as they were when the tick
/// started; velocities are committed per particle and a separate drift
/// pass then integrates every position. Physically more consistent than
/// the sequential mode but produces different emergent patterns.
pub fn tick_snapshot(
    world: &mut World,
    model: &InteractionModel,
    params: &Parameters,
) -> Result<(), ModelError> {
    if model.group_count() != world.groups.len() {
        return Err(ModelError::InvalidIndex {
            index: model.group_count(),
            groups: world.groups.len(),
        });
    }
    // Validate every acting group before mutating anything so the whole
    // tick is atomic
    for source in 0..world.groups.len() {
        model.acting_row(source)?;
    }

    let frozen = world.groups.clone();

    for source in 0..world.groups.len() {
        let (radius, row) = model.acting_row(source)?;
        for i in 0..world.groups[source].particles.len() {
            let a = frozen[source].particles[i];
            let f = accumulate_force(&a, &frozen, row, radius, params.min_separation);

            let p = &mut world.groups[source].particles[i];
            p.v = (a.v + f) * (1.0 - params.damping);
            params.bounds.reflect(&a.x, &mut p.v);
        }
    }

    advance_positions(world);
    world.t += 1;
    trace!("tick {} complete (snapshot)", world.t);
    Ok(())
}

/// Drift pass: integrate positions from velocities without recomputing
/// forces. Only meaningful as the commit phase of [`tick_snapshot`].
pub fn advance_positions(world: &mut World) {
    for group in world.groups.iter_mut() {
        for p in group.particles.iter_mut() {
            p.x += p.v;
        }
    }
}

/// Advance the world by one tick, dispatching on the configured update mode
pub fn tick(
    world: &mut World,
    model: &InteractionModel,
    params: &Parameters,
    engine: &Engine,
) -> Result<(), ModelError> {
    match engine.update {
        UpdateConfig::Sequential => tick_sequential(world, model, params),
        UpdateConfig::Snapshot => tick_snapshot(world, model, params),
    }
}
