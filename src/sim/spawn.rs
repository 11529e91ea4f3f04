//! Level generation, obstacle splitting and wreckage
//!
//! All randomness is drawn from the session RNG so a seed reproduces the
//! same levels and split trees.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::body::{Body, BodyKind, SizeTier};
use super::polygon::Polygon;
use super::state::GameState;
use crate::heading_vector;

/// Obstacles in level `level`: round(10·atan(L/25)) + 3.
/// Grows with the level and never exceeds 3 + round(5π) = 19.
pub fn obstacle_count(level: u32) -> usize {
    (10.0 * (level as f64 / 25.0).atan()).round() as usize + 3
}

/// Populate a fresh level: clear every collection, reset the craft, then
/// place obstacles, one map outline and one pickup.
pub fn generate_level(state: &mut GameState) {
    let count = obstacle_count(state.level);

    state.obstacles.clear();
    state.projectiles.clear();
    state.debris.clear();
    state.pickups.clear();
    state.boundaries.clear();

    state.reset_craft();

    let arena = Vec2::new(state.tuning.arena_width, state.tuning.arena_height);
    for _ in 0..count {
        // Spawn along the top edge or the left edge, away from the craft
        let pos = if state.rng.random_bool(0.5) {
            Vec2::new(state.rng.random::<f32>() * arena.x, 0.0)
        } else {
            Vec2::new(0.0, state.rng.random::<f32>() * arena.y)
        };
        let rock = make_obstacle(state, SizeTier::Base, pos);
        state.obstacles.push(rock);
    }

    let center = state.tuning.arena_center();
    let layout = state.rng.random_range(0..state.shapes.maps.len());
    let map = Polygon::new(&state.shapes.maps[layout], center).scaled(state.tuning.map_scale);
    let id = state.next_entity_id();
    state.boundaries.push(Body::new(id, BodyKind::Boundary, map, Vec2::ZERO));

    let container = Polygon::new(&state.shapes.pickup, center + state.tuning.pickup_offset)
        .scaled(state.tuning.pickup_scale);
    let id = state.next_entity_id();
    state.pickups.push(Body::new(id, BodyKind::Pickup, container, Vec2::ZERO));

    log::info!(
        "Level {}: {} obstacles, map layout {}",
        state.level,
        count,
        layout
    );
}

/// Obstacle with a random shape, drift and spin
fn make_obstacle(state: &mut GameState, tier: SizeTier, pos: Vec2) -> Body {
    let tuning = &state.tuning;
    let shape = state.rng.random_range(0..state.shapes.obstacles.len());
    let direction = state.rng.random::<f32>() * TAU;
    let speed = state
        .rng
        .random_range(tuning.asteroid_min_speed..tuning.asteroid_max_speed);
    let spin = (state.rng.random::<f32>() * 2.0 - 1.0) * tuning.asteroid_max_spin;

    let outline = Polygon::new(&state.shapes.obstacles[shape], pos)
        .scaled(tier.scale(tuning.asteroid_size));
    let vel = heading_vector(direction) * speed;
    let id = state.next_entity_id();
    Body::new(id, BodyKind::Obstacle { tier, spin }, outline, vel)
}

/// Children of a destroyed obstacle: two at the next tier at the parent's
/// position, or none if the parent was already the smallest tier.
pub fn split_obstacle(state: &mut GameState, tier: SizeTier, pos: Vec2) -> Vec<Body> {
    let Some(child) = tier.split() else {
        return Vec::new();
    };
    log::debug!("Obstacle {:?} split into two {:?} at ({:.1}, {:.1})", tier, child, pos.x, pos.y);
    (0..2).map(|_| make_obstacle(state, child, pos)).collect()
}

/// Wreckage burst at the craft's position, inheriting its velocity with a
/// small random scatter
pub fn debris_burst(state: &mut GameState) -> Vec<Body> {
    let origin = state.craft.pos();
    let base_vel = state.craft.body.vel;
    let count = state.tuning.debris_count;

    let mut parts = Vec::with_capacity(count);
    for _ in 0..count {
        let tuning = &state.tuning;
        let shape = state.rng.random_range(0..state.shapes.debris.len());
        let spread = tuning.debris_spread;
        let scatter = Vec2::new(
            (state.rng.random::<f32>() * 2.0 - 1.0) * spread,
            (state.rng.random::<f32>() * 2.0 - 1.0) * spread,
        );
        let spin = (state.rng.random::<f32>() * 2.0 - 1.0) * tuning.asteroid_max_spin * 4.0;

        let outline = Polygon::new(&state.shapes.debris[shape], origin).scaled(tuning.debris_scale);
        let id = state.next_entity_id();
        parts.push(Body::new(
            id,
            BodyKind::Debris {
                crashed: false,
                spin,
            },
            outline,
            base_vel + scatter,
        ));
    }
    parts
}
