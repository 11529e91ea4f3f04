//! Sound cues
//!
//! The simulation never plays audio. It records named cues during a tick;
//! the host drains them and hands them to an [`AudioSink`] without waiting
//! for playback or caring whether it worked.

use serde::Serialize;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cue {
    /// Craft destroyed
    Explosion,
    /// Projectile fired
    WeaponFire,
    /// Thrust held
    Thrust,
    /// Last life spent
    LifeLost,
    /// Pickup refilled hp or ammo
    ResourceRestored,
    /// Craft hit a boundary hard enough to take damage
    BoundaryCrash,
    /// Craft scraped an obstacle
    DamageTaken,
    /// Tow beam switched on
    TowBeamActive,
    /// Tow beam switched off
    TowBeamInactive,
}

impl Cue {
    /// Stable cue name (asset lookup key)
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Explosion => "explosion",
            Cue::WeaponFire => "weapon-fire",
            Cue::Thrust => "thrust-whoosh",
            Cue::LifeLost => "life-lost",
            Cue::ResourceRestored => "resource-restored",
            Cue::BoundaryCrash => "boundary-crash",
            Cue::DamageTaken => "damage-taken",
            Cue::TowBeamActive => "tow-beam-active",
            Cue::TowBeamInactive => "tow-beam-inactive",
        }
    }
}

/// Anything that can play (or drop) a cue
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Collects cues, for tests and replays
impl AudioSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: Cue) {}
}

/// Forward drained cues to a sink, in emission order
pub fn dispatch(cues: impl IntoIterator<Item = Cue>, sink: &mut impl AudioSink) {
    for cue in cues {
        sink.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_preserves_order() {
        let mut sink: Vec<Cue> = Vec::new();
        dispatch([Cue::WeaponFire, Cue::Explosion], &mut sink);
        assert_eq!(sink, vec![Cue::WeaponFire, Cue::Explosion]);
        dispatch([Cue::Thrust], &mut Muted);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::Thrust.name(), "thrust-whoosh");
        assert_eq!(Cue::TowBeamInactive.name(), "tow-beam-inactive");
    }
}
