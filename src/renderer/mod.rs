//! Rendering contract
//!
//! The simulation never draws. After each tick the host captures a
//! [`Frame`] and hands it to whatever [`Renderer`] it runs.

pub mod frame;

pub use frame::{Frame, Hud, Renderer, capture};
