//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order, never hash order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod physics;
pub mod polygon;
pub mod resolve;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Craft, SizeTier};
pub use physics::FireMode;
pub use polygon::Polygon;
pub use state::{GamePhase, GameState, SPAWN_HEADING};
pub use tick::tick;
