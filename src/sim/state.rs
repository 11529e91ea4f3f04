//! Game state and core simulation types
//!
//! The session owns every body: the craft, the four dynamic collections and
//! the current level's boundary. Nothing outside this struct aliases them.

use std::f32::consts::FRAC_PI_2;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Craft;
use super::body::Body;
use super::physics::draw_angle_shift;
use super::spawn;
use crate::audio::Cue;
use crate::error::Error;
use crate::shapes::ShapeTable;
use crate::tuning::Tuning;

/// Heading the craft spawns with (nose up; +y points down)
pub const SPAWN_HEADING: f32 = -FRAC_PI_2;

/// Craft lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Craft visible and flying
    Playing,
    /// Craft wrecked, waiting for a respawn press
    Destroyed,
    /// No lives left
    GameOver,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Every random draw in the session comes from here
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub shapes: ShapeTable,
    /// Level counter (0-based, bumps when the obstacles run out)
    pub level: u32,
    /// Remaining lives
    pub lives: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Continue pressed after game over; the host should leave the session
    pub finished: bool,
    pub craft: Craft,
    pub obstacles: Vec<Body>,
    pub projectiles: Vec<Body>,
    pub debris: Vec<Body>,
    pub pickups: Vec<Body>,
    /// Map outline(s) for the current level
    pub boundaries: Vec<Body>,
    /// Cues emitted since the last drain
    cues: Vec<Cue>,
    /// Next entity ID (0 is the craft)
    next_id: u32,
}

impl GameState {
    /// New session with default tuning and the built-in shapes
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default(), ShapeTable::builtin())
    }

    /// New session from caller-supplied tuning and shapes; generates level 0.
    ///
    /// Both are validated first: level generation draws from every shape
    /// variant list and from the obstacle speed range.
    pub fn with_config(seed: u64, tuning: Tuning, shapes: ShapeTable) -> Result<Self, Error> {
        tuning.validate()?;
        shapes.validate()?;
        Ok(Self::build(seed, tuning, shapes))
    }

    fn build(seed: u64, tuning: Tuning, shapes: ShapeTable) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut craft = Craft::new(&shapes, &tuning, tuning.arena_center());
        craft.angle_shift = draw_angle_shift(&mut rng);

        let mut state = Self {
            seed,
            rng,
            lives: tuning.starting_lives,
            tuning,
            shapes,
            level: 0,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            finished: false,
            craft,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            debris: Vec::new(),
            pickups: Vec::new(),
            boundaries: Vec::new(),
            cues: Vec::new(),
            next_id: 1,
        };

        spawn::generate_level(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Record a cue for the host
    pub fn emit(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Cues emitted since the last drain
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Take all pending cues
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Put the craft back at the arena center, nose up, stopped, topped up.
    /// Shared by level generation and respawn.
    pub fn reset_craft(&mut self) {
        let center = self.tuning.arena_center();
        let craft = &mut self.craft;
        craft.place(center);
        craft.body.vel = glam::Vec2::ZERO;
        craft.set_heading(SPAWN_HEADING);
        craft.restore();
        craft.tow_weight = 0.0;
        craft.thrusting = false;
    }

    /// Wreck the craft: debris burst, hide it, wait for respawn.
    /// No-op if the craft is already down.
    pub fn destroy_craft(&mut self) {
        if !self.craft.visible {
            log::trace!("destroy_craft: craft already destroyed, skipped");
            return;
        }

        let burst = spawn::debris_burst(self);
        self.debris.extend(burst);

        let craft = &mut self.craft;
        craft.hp = 0;
        craft.visible = false;
        craft.thrusting = false;
        craft.tow_weight = 0.0;
        let beam_was_on = std::mem::replace(&mut craft.tow_active, false);

        self.phase = GamePhase::Destroyed;
        self.emit(Cue::Explosion);
        if beam_was_on {
            self.emit(Cue::TowBeamInactive);
        }
        log::debug!(
            "Craft destroyed at ({:.1}, {:.1}), {} lives left",
            self.craft.pos().x,
            self.craft.pos().y,
            self.lives
        );
    }

    /// Handle a respawn press.
    ///
    /// - Destroyed: spend a life; revive, or end the game on the last one
    /// - GameOver: mark the session finished
    /// - Playing: nothing to respawn
    pub fn respawn(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                log::trace!("respawn: craft is alive, skipped");
            }
            GamePhase::GameOver => {
                self.finished = true;
            }
            GamePhase::Destroyed => {
                self.reset_craft();
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.phase = GamePhase::GameOver;
                    self.emit(Cue::LifeLost);
                    log::info!("Game over: score {}, level {}", self.score, self.level);
                } else {
                    self.craft.visible = true;
                    self.phase = GamePhase::Playing;
                    log::debug!("Craft respawned, {} lives left", self.lives);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ShapeError, TuningError};
    use glam::Vec2;

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 0);
        assert_eq!(state.obstacles.len(), 3);
        assert_eq!(state.boundaries.len(), 1);
        assert_eq!(state.pickups.len(), 1);
        assert!(state.craft.visible);
        assert_eq!(state.craft.pos(), state.tuning.arena_center());
        assert!((state.craft.heading() - SPAWN_HEADING).abs() < 1e-6);
    }

    #[test]
    fn test_with_config_rejects_unusable_tables() {
        let mut shapes = ShapeTable::builtin();
        shapes.maps.clear();
        let err = GameState::with_config(1, Tuning::default(), shapes).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::EmptyVariants("map"))));

        let mut shapes = ShapeTable::builtin();
        shapes.obstacles.clear();
        let err = GameState::with_config(1, Tuning::default(), shapes).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::EmptyVariants("obstacle"))));

        let tuning = Tuning {
            asteroid_min_speed: 5.0,
            asteroid_max_speed: 5.0,
            ..Tuning::default()
        };
        let err = GameState::with_config(1, tuning, ShapeTable::builtin()).unwrap_err();
        assert!(matches!(err, Error::Tuning(TuningError::EmptySpeedRange { .. })));
    }

    #[test]
    fn test_with_config_accepts_valid_overrides() {
        let tuning = Tuning {
            starting_lives: 5,
            ..Tuning::default()
        };
        let state = GameState::with_config(3, tuning, ShapeTable::builtin()).unwrap();
        assert_eq!(state.lives, 5);
        assert_eq!(state.obstacles.len(), 3);
    }

    #[test]
    fn test_destroy_spawns_debris_once() {
        let mut state = GameState::new(1);
        state.destroy_craft();
        assert_eq!(state.debris.len(), 6);
        assert!(!state.craft.visible);
        assert_eq!(state.phase, GamePhase::Destroyed);
        assert_eq!(state.lives, 3);

        // Second call is a no-op
        state.destroy_craft();
        assert_eq!(state.debris.len(), 6);
        assert_eq!(state.drain_cues(), vec![Cue::Explosion]);
    }

    #[test]
    fn test_respawn_resets_craft() {
        let mut state = GameState::new(2);
        state.craft.body.vel = Vec2::new(3.0, 4.0);
        state.craft.place(Vec2::new(10.0, 10.0));
        state.craft.rotate(1.0);
        state.craft.ammo = 5;
        state.destroy_craft();

        state.respawn();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 2);
        assert!(state.craft.visible);
        assert_eq!(state.craft.pos(), state.tuning.arena_center());
        assert_eq!(state.craft.body.vel, Vec2::ZERO);
        assert_eq!(state.craft.hp, state.craft.max_hp);
        assert_eq!(state.craft.ammo, state.craft.max_ammo);
        assert!((state.craft.heading() - SPAWN_HEADING).abs() < 1e-5);
    }

    #[test]
    fn test_respawn_while_alive_is_noop() {
        let mut state = GameState::new(3);
        state.respawn();
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = GameState::new(4);
        for expected in [2, 1] {
            state.destroy_craft();
            state.respawn();
            assert_eq!(state.lives, expected);
            assert!(state.craft.visible);
        }

        state.destroy_craft();
        state.respawn();
        assert_eq!(state.lives, 0);
        assert!(state.is_game_over());
        assert!(!state.craft.visible);
        assert!(state.cues().contains(&Cue::LifeLost));

        // Continue press after game over
        assert!(!state.finished);
        state.respawn();
        assert!(state.finished);
        assert!(!state.craft.visible);
    }
}
