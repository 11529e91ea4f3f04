//! Data-driven game balance
//!
//! Every gameplay constant in one serializable struct. Defaults mirror
//! [`crate::consts`]; a JSON document only needs the fields it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, TuningError};

/// Runtime-tunable gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub map_scale: f32,

    // === Obstacles ===
    pub asteroid_size: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_max_spin: f32,

    // === Craft ===
    pub craft_scale: f32,
    pub max_hp: u32,
    pub max_ammo: u32,
    pub gravity: f32,
    pub tow_weight: f32,
    pub tow_beam_length: f32,
    pub acceleration: f32,
    pub speed_cap: f32,
    pub drag: f32,
    pub fire_interval: u32,
    pub turn_rate: f32,
    pub starting_lives: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_range: f32,

    // === Debris ===
    pub debris_count: usize,
    pub debris_scale: f32,
    pub debris_spread: f32,

    // === Pickup ===
    pub pickup_scale: f32,
    pub pickup_offset: Vec2,

    // === Contacts ===
    pub craft_restitution: f32,
    pub pickup_restitution: f32,
    pub debris_restitution: f32,
    pub contact_nudge: f32,
    pub crash_speed_threshold: f32,
    pub crash_damage_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            map_scale: MAP_SCALE,

            asteroid_size: ASTEROID_SIZE,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_max_spin: ASTEROID_MAX_SPIN,

            craft_scale: CRAFT_SCALE,
            max_hp: CRAFT_MAX_HP,
            max_ammo: CRAFT_MAX_AMMO,
            gravity: CRAFT_GRAVITY,
            tow_weight: TOW_WEIGHT,
            tow_beam_length: TOW_BEAM_LENGTH,
            acceleration: CRAFT_ACCELERATION,
            speed_cap: CRAFT_SPEED_CAP,
            drag: CRAFT_DRAG,
            fire_interval: FIRE_INTERVAL,
            turn_rate: TURN_RATE,
            starting_lives: STARTING_LIVES,

            projectile_speed: PROJECTILE_SPEED,
            projectile_range: PROJECTILE_RANGE,

            debris_count: DEBRIS_COUNT,
            debris_scale: DEBRIS_SCALE,
            debris_spread: DEBRIS_SPREAD,

            pickup_scale: PICKUP_SCALE,
            pickup_offset: Vec2::new(PICKUP_OFFSET_X, PICKUP_OFFSET_Y),

            craft_restitution: CRAFT_RESTITUTION,
            pickup_restitution: PICKUP_RESTITUTION,
            debris_restitution: DEBRIS_RESTITUTION,
            contact_nudge: CONTACT_NUDGE,
            crash_speed_threshold: CRASH_SPEED_THRESHOLD,
            crash_damage_factor: CRASH_DAMAGE_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Load a tuning document from disk. A missing or unreadable file is an
    /// error, not a silent fallback to the defaults.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&text)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Arena center (craft spawn point, map anchor)
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("map_scale", self.map_scale),
            ("asteroid_size", self.asteroid_size),
            ("craft_scale", self.craft_scale),
            ("speed_cap", self.speed_cap),
            ("drag", self.drag),
            ("projectile_speed", self.projectile_speed),
            ("projectile_range", self.projectile_range),
            ("debris_scale", self.debris_scale),
            ("pickup_scale", self.pickup_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let counts = [
            ("max_hp", self.max_hp),
            ("max_ammo", self.max_ammo),
            ("fire_interval", self.fire_interval),
            ("starting_lives", self.starting_lives),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(TuningError::Zero { field });
            }
        }

        if self.asteroid_min_speed >= self.asteroid_max_speed {
            return Err(TuningError::EmptySpeedRange {
                min: self.asteroid_min_speed,
                max: self.asteroid_max_speed,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().arena_center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let path = std::env::temp_dir().join("gravroids-no-such-tuning.json");
        let err = Tuning::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_file_reads_overrides() {
        let name = format!("gravroids-tuning-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, r#"{ "starting_lives": 7 }"#).unwrap();
        let tuning = Tuning::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(tuning.unwrap().starting_lives, 7);
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("gravroids-bad-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "drag": -1.0 }"#).unwrap();
        let err = Tuning::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::Tuning(TuningError::NotPositive { field: "drag", .. })));
    }

    #[test]
    fn test_partial_json_overrides_only_given_fields() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.0, "max_hp": 10 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.0);
        assert_eq!(tuning.max_hp, 10);
        assert_eq!(tuning.max_ammo, CRAFT_MAX_AMMO);
        assert_eq!(tuning.pickup_offset, Vec2::new(PICKUP_OFFSET_X, PICKUP_OFFSET_Y));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "drag": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Tuning(TuningError::NotPositive { field: "drag", .. })
        ));

        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Tuning(TuningError::Zero { .. })));

        assert!(matches!(
            Tuning::from_json("not json"),
            Err(Error::Json(_))
        ));
    }
}
