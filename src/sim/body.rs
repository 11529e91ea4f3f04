//! Simulated bodies
//!
//! Every entity is a [`Polygon`] plus a velocity, tagged with a [`BodyKind`].
//! Behavior differences live in the resolver and integrator, which match on
//! the kind tag. The craft wraps a body with its own gameplay state.

use glam::Vec2;
use serde::Serialize;

use super::polygon::Polygon;
use crate::heading_vector;
use crate::shapes::ShapeTable;
use crate::tuning::Tuning;

/// Obstacle size tiers (base S, S/2, S/4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeTier {
    Base,
    Half,
    Quarter,
}

impl SizeTier {
    /// Polygon scale for this tier given the base size S
    pub fn scale(self, base: f32) -> f32 {
        match self {
            SizeTier::Base => base,
            SizeTier::Half => base / 2.0,
            SizeTier::Quarter => base / 4.0,
        }
    }

    /// Points for destroying an obstacle of this tier
    pub fn score(self) -> u64 {
        match self {
            SizeTier::Base => 20,
            SizeTier::Half => 50,
            SizeTier::Quarter => 100,
        }
    }

    /// Tier of the two children, or None if this tier is final
    pub fn split(self) -> Option<SizeTier> {
        match self {
            SizeTier::Base => Some(SizeTier::Half),
            SizeTier::Half => Some(SizeTier::Quarter),
            SizeTier::Quarter => None,
        }
    }
}

/// Body variant tag with per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BodyKind {
    Craft,
    /// Drifting rock; `spin` is applied every tick
    Obstacle { tier: SizeTier, spin: f32 },
    /// Point-like shot; expires after its range
    Projectile { traveled: f32, expired: bool },
    /// Static map outline
    Boundary,
    /// Resource container
    Pickup,
    /// Wreckage; removed on its second boundary contact
    Debris { crashed: bool, spin: f32 },
}

/// A simulated entity
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub id: u32,
    pub kind: BodyKind,
    pub shape: Polygon,
    pub vel: Vec2,
}

impl Body {
    pub fn new(id: u32, kind: BodyKind, shape: Polygon, vel: Vec2) -> Self {
        Self {
            id,
            kind,
            shape,
            vel,
        }
    }

    /// Projectile leaving `pos` along `angle`
    pub fn projectile(id: u32, pos: Vec2, angle: f32, speed: f32) -> Self {
        Self::new(
            id,
            BodyKind::Projectile {
                traveled: 0.0,
                expired: false,
            },
            Polygon::point(pos),
            heading_vector(angle) * speed,
        )
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.pos
    }

    /// Point containment against this body's outline
    #[inline]
    pub fn has_point(&self, p: Vec2) -> bool {
        self.shape.has_point(p)
    }

    /// Size tier, for obstacles
    pub fn tier(&self) -> Option<SizeTier> {
        match self.kind {
            BodyKind::Obstacle { tier, .. } => Some(tier),
            _ => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.kind, BodyKind::Projectile { expired: true, .. })
    }

    pub fn is_crashed(&self) -> bool {
        matches!(self.kind, BodyKind::Debris { crashed: true, .. })
    }

    /// Scale velocity by `-restitution` and push the body out along it
    pub fn rebound(&mut self, restitution: f32, nudge: f32) {
        self.vel *= -restitution;
        self.shape.translate(self.vel * nudge);
    }
}

/// The player craft
#[derive(Debug, Clone, Serialize)]
pub struct Craft {
    pub body: Body,
    /// Cosmetic thrust flame, rotates and moves with the craft
    pub flame: Polygon,
    pub hp: u32,
    pub max_hp: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Ticks since the last shot (saturating)
    pub fire_cooldown: u32,
    /// False while destroyed and awaiting respawn
    pub visible: bool,
    /// Thrust was applied this tick (renderer draws the flame)
    pub thrusting: bool,
    pub tow_active: bool,
    /// Extra downward pull while the beam holds something
    pub tow_weight: f32,
    /// Spread for the next secondary shot
    pub angle_shift: f32,
}

impl Craft {
    pub fn new(shapes: &ShapeTable, tuning: &Tuning, pos: Vec2) -> Self {
        let shape = Polygon::new(&shapes.craft, pos).scaled(tuning.craft_scale);
        let flame = Polygon::new(&shapes.flame, pos).scaled(tuning.craft_scale);
        Self {
            body: Body::new(0, BodyKind::Craft, shape, Vec2::ZERO),
            flame,
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            ammo: tuning.max_ammo,
            max_ammo: tuning.max_ammo,
            fire_cooldown: 0,
            visible: true,
            thrusting: false,
            tow_active: false,
            tow_weight: 0.0,
            angle_shift: 0.0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos()
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.body.shape.heading()
    }

    pub fn speed(&self) -> f32 {
        self.body.vel.length()
    }

    /// Rotate hull and flame together
    pub fn rotate(&mut self, theta: f32) {
        self.body.shape.rotate(theta);
        self.flame.rotate(theta);
    }

    pub fn set_heading(&mut self, theta: f32) {
        self.rotate(theta - self.heading());
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.body.shape.translate(delta);
        self.flame.translate(delta);
    }

    pub fn place(&mut self, pos: Vec2) {
        self.translate(pos - self.pos());
    }

    /// World position of the nose (vertex 0), where shots spawn
    pub fn nose(&self) -> Vec2 {
        self.body.shape.world_vertex(0).unwrap_or(self.pos())
    }

    /// End of the tow beam, straight down (+y) from the craft
    pub fn tow_beam_end(&self, length: f32) -> Vec2 {
        self.pos() + Vec2::new(0.0, length)
    }

    /// Subtract hp (floored at 0). Returns true when hp is now 0.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    /// Refill hp and ammo. Returns true if anything was missing.
    pub fn restore(&mut self) -> bool {
        let changed = self.hp < self.max_hp || self.ammo < self.max_ammo;
        self.hp = self.max_hp;
        self.ammo = self.max_ammo;
        changed
    }
}
