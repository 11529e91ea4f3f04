//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame: input, kinematics,
//! collisions, then level and lifecycle reactions.

use super::physics::{
    FireMode, apply_thrust, expire_projectile, fire, integrate_body, integrate_craft,
};
use super::resolve::resolve;
use super::spawn::generate_level;
use super::state::{GamePhase, GameState};
use crate::audio::Cue;
use crate::platform::{Action, InputProvider};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &impl InputProvider) {
    if state.finished {
        return;
    }
    state.time_ticks += 1;

    handle_input(state, input);
    integrate(state);
    resolve(state);

    if state.obstacles.is_empty() {
        state.level += 1;
        generate_level(state);
    }
}

/// Controls apply only while the craft is flying; otherwise the only
/// accepted input is the respawn / continue press.
fn handle_input(state: &mut GameState, input: &impl InputProvider) {
    state.craft.thrusting = false;

    if state.phase != GamePhase::Playing {
        if input.just_pressed(Action::Respawn) {
            state.respawn();
        }
        return;
    }

    let beam = input.is_down(Action::TowBeam);
    if beam != state.craft.tow_active {
        state.craft.tow_active = beam;
        state.emit(if beam {
            Cue::TowBeamActive
        } else {
            Cue::TowBeamInactive
        });
    }

    let turn = state.tuning.turn_rate;
    if input.is_down(Action::RotateRight) {
        state.craft.rotate(turn);
    }
    if input.is_down(Action::RotateLeft) {
        state.craft.rotate(-turn);
    }

    if input.is_down(Action::Thrust) {
        apply_thrust(&mut state.craft, &state.tuning);
        state.emit(Cue::Thrust);
    }

    // Secondary first: it leaves the cooldown short of a primary shot
    for (action, mode) in [
        (Action::FireSecondary, FireMode::Secondary),
        (Action::FirePrimary, FireMode::Primary),
    ] {
        if !input.is_down(action) {
            continue;
        }
        if let Some(mut shot) = fire(&mut state.craft, mode, &state.tuning, &mut state.rng) {
            shot.id = state.next_entity_id();
            state.projectiles.push(shot);
            state.emit(Cue::WeaponFire);
        }
    }
}

/// Move every body one step and drop spent projectiles
fn integrate(state: &mut GameState) {
    let arena = glam::Vec2::new(state.tuning.arena_width, state.tuning.arena_height);
    let range = state.tuning.projectile_range;

    for body in state
        .obstacles
        .iter_mut()
        .chain(state.pickups.iter_mut())
        .chain(state.debris.iter_mut())
    {
        integrate_body(body);
    }

    for shot in state.projectiles.iter_mut() {
        integrate_body(shot);
        expire_projectile(shot, range, arena);
    }
    state.projectiles.retain(|shot| !shot.is_expired());

    if state.phase != GamePhase::GameOver {
        integrate_craft(&mut state.craft, &state.tuning);
    }
}
