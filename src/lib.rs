//! Gravroids - a gravity-bound asteroid arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, polygon collisions, spawning, session)
//! - `renderer`: Frame snapshot handed to whatever draws the game
//! - `platform`: Input provider abstraction
//! - `audio`: Fire-and-forget sound cues emitted by the simulation
//! - `shapes`: Vertex tables for every body shape
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod shapes;
pub mod sim;
pub mod tuning;

pub use error::{Error, ShapeError, TuningError};
pub use shapes::ShapeTable;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena (canvas) dimensions; the arena center is where the craft spawns
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Base obstacle scale. Children are S/2, grandchildren S/4.
    pub const ASTEROID_SIZE: f32 = 8.0;
    /// Obstacle speed range (units per tick)
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 5.0;
    /// Maximum obstacle spin (radians per tick, either direction)
    pub const ASTEROID_MAX_SPIN: f32 = 0.02;

    /// Craft defaults
    pub const CRAFT_SCALE: f32 = 2.0;
    pub const CRAFT_MAX_HP: u32 = 50;
    pub const CRAFT_MAX_AMMO: u32 = 200;
    /// Constant pull in +y, applied every tick while visible
    pub const CRAFT_GRAVITY: f32 = 0.015;
    /// Extra pull while the tow beam holds something
    pub const TOW_WEIGHT: f32 = 0.030;
    pub const TOW_BEAM_LENGTH: f32 = 80.0;
    pub const CRAFT_ACCELERATION: f32 = 0.095;
    /// Thrust is ignored at or above this speed
    pub const CRAFT_SPEED_CAP: f32 = 20.0;
    /// Velocity multiplier applied every tick
    pub const CRAFT_DRAG: f32 = 0.99;
    /// Ticks between primary shots
    pub const FIRE_INTERVAL: u32 = 20;
    /// Radians per tick while a rotate action is held
    pub const TURN_RATE: f32 = 0.06;
    pub const STARTING_LIVES: u32 = 3;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_RANGE: f32 = 600.0;

    /// Wreckage burst on craft destruction
    pub const DEBRIS_COUNT: usize = 6;
    pub const DEBRIS_SCALE: f32 = 3.0;
    pub const DEBRIS_SPREAD: f32 = 1.5;

    /// Pickup container defaults
    pub const PICKUP_SCALE: f32 = 6.0;
    pub const PICKUP_OFFSET_X: f32 = 180.0;
    pub const PICKUP_OFFSET_Y: f32 = 120.0;

    /// Map outline scale
    pub const MAP_SCALE: f32 = 20.0;

    /// Restitution factors on boundary contact
    pub const CRAFT_RESTITUTION: f32 = 0.75;
    pub const PICKUP_RESTITUTION: f32 = 0.5;
    pub const DEBRIS_RESTITUTION: f32 = 0.5;
    /// Contacts push bodies out by this many ticks of their new velocity
    pub const CONTACT_NUDGE: f32 = 2.0;

    /// Boundary contact below this |vx|+|vy| does no damage
    pub const CRASH_SPEED_THRESHOLD: f32 = 1.0;
    pub const CRASH_DAMAGE_FACTOR: f32 = 2.0;
}

/// Wrap an angle into [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Unit vector pointing along `theta`
#[inline]
pub fn heading_vector(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Rotate `v` by `theta` radians about the origin
#[inline]
pub fn rotate_vec(v: Vec2, theta: f32) -> Vec2 {
    Vec2::from_angle(theta).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle_wraps_into_half_open_range() {
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + FRAC_PI_2).abs() < 1e-5);
        for k in -40..40 {
            let a = normalize_angle(k as f32 * 0.7);
            assert!((-PI..PI).contains(&a), "{a}");
        }
    }

    #[test]
    fn test_rotate_vec_quarter_turn() {
        let v = rotate_vec(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }
}
