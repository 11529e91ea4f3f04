//! Input actions and the provider contract

use serde::{Deserialize, Serialize};

/// Discrete player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Thrust,
    RotateLeft,
    RotateRight,
    TowBeam,
    FirePrimary,
    FireSecondary,
    /// Respawn / continue after destruction
    Respawn,
}

/// Queried by the simulation once per tick
pub trait InputProvider {
    /// Action is currently held
    fn is_down(&self, action: Action) -> bool;
    /// Action went down this tick
    fn just_pressed(&self, action: Action) -> bool;
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub tow_beam: bool,
    pub fire_primary: bool,
    pub fire_secondary: bool,
    /// One-shot: cleared by the host after the tick
    pub respawn: bool,
}

impl InputProvider for TickInput {
    fn is_down(&self, action: Action) -> bool {
        match action {
            Action::Thrust => self.thrust,
            Action::RotateLeft => self.rotate_left,
            Action::RotateRight => self.rotate_right,
            Action::TowBeam => self.tow_beam,
            Action::FirePrimary => self.fire_primary,
            Action::FireSecondary => self.fire_secondary,
            Action::Respawn => self.respawn,
        }
    }

    fn just_pressed(&self, action: Action) -> bool {
        // Only respawn is edge-triggered; the host clears it after each tick
        action == Action::Respawn && self.respawn
    }
}
