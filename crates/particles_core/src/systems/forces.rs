use particles_data::{Entity, Rule, Vec2};
use rayon::prelude::*;

/// Below this many source/target pairs the accumulation runs on the calling thread.
const PARALLEL_PAIR_THRESHOLD: usize = 4096;

/// Force exerted on an entity at `at` by an entity at `from` under `rule`.
///
/// Zero outside the effect radius, and zero for coincident positions.
#[must_use]
pub fn pair_force(at: Vec2, from: Vec2, rule: &Rule) -> Vec2 {
    let delta = at - from;
    let dist = delta.length();
    if dist > 0.0 && dist < rule.effect_radius {
        delta * (-rule.force_coefficient / dist)
    } else {
        Vec2::ZERO
    }
}

/// Accumulated force on every source entity, indexed like `sources`.
///
/// Reads committed positions only, so the result does not depend on how far
/// the current tick has progressed. When the rule is a self-interaction an
/// entity never contributes force to itself.
#[must_use]
pub fn accumulate(sources: &[Entity], targets: &[Entity], rule: &Rule) -> Vec<Vec2> {
    let self_interaction = rule.is_self_interaction();
    let force_on = |(i, source): (usize, &Entity)| {
        targets
            .iter()
            .enumerate()
            .filter(|(j, _)| !(self_interaction && i == *j))
            .fold(Vec2::ZERO, |acc, (_, target)| {
                acc + pair_force(source.position, target.position, rule)
            })
    };

    if sources.len().saturating_mul(targets.len()) < PARALLEL_PAIR_THRESHOLD {
        sources.iter().enumerate().map(force_on).collect()
    } else {
        sources.par_iter().enumerate().map(force_on).collect()
    }
}

/// Damps, accelerates and moves one entity: `v = v * damping + force`,
/// `pending += v`.
pub fn integrate(entity: &mut Entity, force: Vec2, damping: f64) {
    entity.velocity *= damping;
    entity.velocity += force;
    entity.pending_position += entity.velocity;
}
