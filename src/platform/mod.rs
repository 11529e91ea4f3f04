//! Platform abstraction layer
//!
//! The simulation only ever asks "is this action held" or "was it just
//! pressed"; key mapping and device polling belong to the host.

pub mod input;

pub use input::{Action, InputProvider, TickInput};
