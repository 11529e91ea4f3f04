//! Per-tick kinematics
//!
//! Bodies move by their velocity once per tick (no dt: the simulation runs
//! at a fixed rate and all constants are per-tick). The craft additionally
//! gets drag, gravity and tow weight, and is the only body driven by input.

use glam::Vec2;
use rand::Rng;

use super::body::{Body, BodyKind, Craft};
use crate::heading_vector;
use crate::tuning::Tuning;

/// Which trigger fired a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireMode {
    /// Straight ahead, full fire interval
    Primary,
    /// Random spread, half the fire interval
    Secondary,
}

/// Advance a non-craft body by one tick
pub fn integrate_body(body: &mut Body) {
    if body.kind == BodyKind::Boundary {
        return;
    }

    let step = body.vel;
    body.shape.translate(step);

    match body.kind {
        BodyKind::Obstacle { spin, .. } | BodyKind::Debris { spin, .. } => {
            if spin != 0.0 {
                body.shape.rotate(spin);
            }
        }
        BodyKind::Projectile {
            ref mut traveled, ..
        } => *traveled += step.length(),
        _ => {}
    }
}

/// Flag a projectile once it has flown its range or left the arena
/// (the arena rectangle grown by `range` on every side)
pub fn expire_projectile(body: &mut Body, range: f32, arena: Vec2) {
    let pos = body.pos();
    if let BodyKind::Projectile {
        traveled,
        ref mut expired,
    } = body.kind
    {
        let outside = pos.x < -range
            || pos.y < -range
            || pos.x > arena.x + range
            || pos.y > arena.y + range;
        if traveled >= range || outside {
            *expired = true;
        }
    }
}

/// Advance the craft by one tick
pub fn integrate_craft(craft: &mut Craft, tuning: &Tuning) {
    craft.fire_cooldown = craft.fire_cooldown.saturating_add(1);

    let step = craft.body.vel;
    craft.translate(step);

    craft.body.vel *= tuning.drag;
    if craft.visible {
        craft.body.vel.y += tuning.gravity + craft.tow_weight;
    }
}

/// Forward thrust along the heading. Ignored (not clamped) at or above the
/// speed cap, so the craft can coast faster after a bounce.
///
/// Returns true if velocity changed.
pub fn apply_thrust(craft: &mut Craft, tuning: &Tuning) -> bool {
    if !craft.visible {
        return false;
    }
    craft.thrusting = true;

    if craft.body.vel.length_squared() < tuning.speed_cap * tuning.speed_cap {
        craft.body.vel += heading_vector(craft.heading()) * tuning.acceleration;
        true
    } else {
        false
    }
}

/// Random spread for secondary fire: (u - 0.4) with a random sign
pub fn draw_angle_shift(rng: &mut impl Rng) -> f32 {
    let shift = rng.random::<f32>() - 0.4;
    if rng.random_bool(0.5) { shift } else { -shift }
}

/// Fire from the nose if the cooldown has elapsed and ammo remains.
/// The projectile comes back with id 0; the caller assigns the real one.
pub fn fire(
    craft: &mut Craft,
    mode: FireMode,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Body> {
    if !craft.visible || craft.fire_cooldown < tuning.fire_interval || craft.ammo == 0 {
        return None;
    }
    craft.ammo -= 1;

    let angle = match mode {
        FireMode::Primary => {
            craft.fire_cooldown = 0;
            craft.heading()
        }
        FireMode::Secondary => {
            let angle = craft.heading() + craft.angle_shift;
            craft.angle_shift = draw_angle_shift(rng);
            craft.fire_cooldown = tuning.fire_interval / 2;
            angle
        }
    };

    Some(Body::projectile(0, craft.nose(), angle, tuning.projectile_speed))
}
