//! Collision response
//!
//! Turns detector hits into gameplay: damage, bounces, refills, towing,
//! scoring and splits. Passes never add to or remove from the collection
//! they walk. Removals and new obstacles are recorded in [`Intents`] and
//! committed in one compaction step at the end, so obstacles born this
//! tick are not hit again until the next one.

use super::body::{Body, BodyKind};
use super::collision::{craft_touches, first_containing, point_inside, tow_beam_hits};
use super::spawn;
use super::state::GameState;
use crate::audio::Cue;

/// Deferred mutations gathered during a resolve pass
#[derive(Debug, Default)]
pub struct Intents {
    /// Projectile indices to drop
    pub spent_projectiles: Vec<usize>,
    /// Obstacle indices to drop
    pub destroyed_obstacles: Vec<usize>,
    /// Debris indices to drop
    pub removed_debris: Vec<usize>,
    /// Split children to append after compaction
    pub spawned_obstacles: Vec<Body>,
}

impl Intents {
    /// Apply every recorded removal and insertion
    pub fn commit(mut self, state: &mut GameState) {
        remove_indices(&mut state.projectiles, &mut self.spent_projectiles);
        remove_indices(&mut state.obstacles, &mut self.destroyed_obstacles);
        remove_indices(&mut state.debris, &mut self.removed_debris);
        state.obstacles.append(&mut self.spawned_obstacles);
    }
}

/// Drop the listed indices in one pass, keeping the order of the rest
fn remove_indices(list: &mut Vec<Body>, indices: &mut Vec<usize>) {
    if indices.is_empty() {
        return;
    }
    indices.sort_unstable();
    indices.dedup();

    let mut i = 0;
    list.retain(|_| {
        let keep = indices.binary_search(&i).is_err();
        i += 1;
        keep
    });
}

/// Resolve every interaction for this tick, then commit
pub fn resolve(state: &mut GameState) {
    let mut intents = Intents::default();

    let towing_pickup = craft_vs_pickups(state);
    let towing_obstacle = craft_vs_obstacles(state);
    state.craft.tow_weight = if towing_pickup || towing_obstacle {
        state.tuning.tow_weight
    } else {
        0.0
    };

    projectiles_vs_obstacles(state, &mut intents);
    projectiles_vs_boundaries(state, &mut intents);
    obstacles_vs_boundaries(state, &intents);
    craft_vs_boundaries(state);
    pickups_vs_boundaries(state);
    debris_vs_boundaries(state, &mut intents);

    intents.commit(state);
}

/// Refill on contact, tow on beam contact. Returns true if anything is towed.
fn craft_vs_pickups(state: &mut GameState) -> bool {
    let mut towing = false;
    for i in 0..state.pickups.len() {
        if craft_touches(&state.craft, &state.pickups[i]) && state.craft.restore() {
            state.emit(Cue::ResourceRestored);
        }
        if tow_beam_hits(&state.craft, &state.pickups[i], state.tuning.tow_beam_length) {
            state.pickups[i].vel = state.craft.body.vel;
            towing = true;
        }
    }
    towing
}

/// One hp per touching obstacle per tick; tow on beam contact.
/// Returns true if anything is towed.
fn craft_vs_obstacles(state: &mut GameState) -> bool {
    let mut towing = false;
    for i in 0..state.obstacles.len() {
        if craft_touches(&state.craft, &state.obstacles[i]) {
            state.emit(Cue::DamageTaken);
            if state.craft.take_damage(1) {
                state.destroy_craft();
            }
        }
        if tow_beam_hits(&state.craft, &state.obstacles[i], state.tuning.tow_beam_length) {
            state.obstacles[i].vel = state.craft.body.vel;
            towing = true;
        }
    }
    towing
}

/// Shots against the obstacles present at the start of the tick, in
/// collection order. Each shot hits at most one obstacle and each obstacle
/// is destroyed at most once.
fn projectiles_vs_obstacles(state: &mut GameState, intents: &mut Intents) {
    let mut spent = vec![false; state.projectiles.len()];

    for i in 0..state.obstacles.len() {
        let rock = &state.obstacles[i];
        let Some(tier) = rock.tier() else {
            log::trace!("obstacle {} has no size tier, skipped", rock.id);
            continue;
        };

        let hit = state
            .projectiles
            .iter()
            .enumerate()
            .find(|(j, shot)| !spent[*j] && rock.has_point(shot.pos()))
            .map(|(j, _)| j);

        if let Some(j) = hit {
            spent[j] = true;
            let pos = rock.pos();
            state.score += tier.score();
            intents.destroyed_obstacles.push(i);
            intents.spent_projectiles.push(j);

            let children = spawn::split_obstacle(state, tier, pos);
            intents.spawned_obstacles.extend(children);
        }
    }
}

fn projectiles_vs_boundaries(state: &GameState, intents: &mut Intents) {
    for (j, shot) in state.projectiles.iter().enumerate() {
        if let Some(wall) = first_containing(shot.pos(), &state.boundaries) {
            log::trace!("Projectile {} stopped by boundary {}", shot.id, state.boundaries[wall].id);
            intents.spent_projectiles.push(j);
        }
    }
}

/// Plain velocity negation, not a reflection about the contact normal
fn obstacles_vs_boundaries(state: &mut GameState, intents: &Intents) {
    let nudge = state.tuning.contact_nudge;
    for wall in 0..state.boundaries.len() {
        for (i, rock) in state.obstacles.iter_mut().enumerate() {
            if intents.destroyed_obstacles.contains(&i) {
                continue;
            }
            if point_inside(rock, &state.boundaries[wall]) {
                rock.rebound(1.0, nudge);
            }
        }
    }
}

/// Hard contacts hurt in proportion to |vx|+|vy|; every contact rebounds
fn craft_vs_boundaries(state: &mut GameState) {
    for wall in 0..state.boundaries.len() {
        if !craft_touches(&state.craft, &state.boundaries[wall]) {
            continue;
        }

        let tuning = &state.tuning;
        let vel = state.craft.body.vel;
        let speed = vel.x.abs() + vel.y.abs();
        if speed > tuning.crash_speed_threshold {
            let damage = (speed * tuning.crash_damage_factor).round() as u32;
            state.emit(Cue::BoundaryCrash);
            if state.craft.take_damage(damage) {
                state.destroy_craft();
            }
        }

        let tuning = &state.tuning;
        let craft = &mut state.craft;
        craft.body.vel *= -tuning.craft_restitution;
        let push = craft.body.vel * tuning.contact_nudge;
        craft.translate(push);
    }
}

fn pickups_vs_boundaries(state: &mut GameState) {
    let restitution = state.tuning.pickup_restitution;
    let nudge = state.tuning.contact_nudge;
    for wall in &state.boundaries {
        for container in state.pickups.iter_mut() {
            if point_inside(container, wall) {
                container.rebound(restitution, nudge);
            }
        }
    }
}

/// First contact marks the part crashed and bounces it; the second removes it
fn debris_vs_boundaries(state: &mut GameState, intents: &mut Intents) {
    let restitution = state.tuning.debris_restitution;
    let nudge = state.tuning.contact_nudge;
    for wall in &state.boundaries {
        for (i, part) in state.debris.iter_mut().enumerate() {
            if intents.removed_debris.contains(&i) || !point_inside(part, wall) {
                continue;
            }
            match part.kind {
                BodyKind::Debris { crashed: true, .. } => intents.removed_debris.push(i),
                BodyKind::Debris { crashed: false, spin } => {
                    part.kind = BodyKind::Debris { crashed: true, spin };
                    part.rebound(restitution, nudge);
                }
                _ => log::trace!("body {} in debris list is not debris, skipped", part.id),
            }
        }
    }
}
