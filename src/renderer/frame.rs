//! Per-tick frame snapshot

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Body, Craft, GamePhase, GameState};

/// Plain counters for the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub level: u32,
    pub game_over: bool,
}

/// Everything a renderer needs for one frame, borrowed from the state
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// None while the craft is wrecked
    pub craft: Option<&'a Craft>,
    /// Draw the exhaust flame this frame
    pub flame: bool,
    /// Tow beam endpoint while the beam is on
    pub tow_beam: Option<Vec2>,
    pub obstacles: &'a [Body],
    pub projectiles: &'a [Body],
    pub debris: &'a [Body],
    pub pickups: &'a [Body],
    pub boundaries: &'a [Body],
    /// World-to-screen offset: arena center minus craft position
    pub camera: Vec2,
    pub hud: Hud,
    pub life_icon: &'a [Vec2],
    pub hp_icon: &'a [Vec2],
    pub ammo_icon: &'a [Vec2],
}

impl Frame<'_> {
    /// World point to screen space
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world + self.camera
    }

    /// Number of live bodies, craft included
    pub fn body_count(&self) -> usize {
        usize::from(self.craft.is_some())
            + self.obstacles.len()
            + self.projectiles.len()
            + self.debris.len()
            + self.pickups.len()
            + self.boundaries.len()
    }
}

/// Something that can draw a frame
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Snapshot the post-update state for drawing
pub fn capture(state: &GameState) -> Frame<'_> {
    let craft = &state.craft;
    let visible = craft.visible.then_some(craft);
    Frame {
        craft: visible,
        flame: craft.visible && craft.thrusting,
        tow_beam: (craft.visible && craft.tow_active)
            .then(|| craft.tow_beam_end(state.tuning.tow_beam_length)),
        obstacles: &state.obstacles,
        projectiles: &state.projectiles,
        debris: &state.debris,
        pickups: &state.pickups,
        boundaries: &state.boundaries,
        // The camera stays where the craft was wrecked until respawn
        camera: state.tuning.arena_center() - craft.pos(),
        hud: Hud {
            score: state.score,
            lives: state.lives,
            hp: craft.hp,
            max_hp: craft.max_hp,
            ammo: craft.ammo,
            max_ammo: craft.max_ammo,
            level: state.level,
            game_over: state.phase == GamePhase::GameOver,
        },
        life_icon: &state.shapes.life_icon,
        hp_icon: &state.shapes.hp_icon,
        ammo_icon: &state.shapes.ammo_icon,
    }
}
