//! Ship module: kinematic state, keyboard actions, and drawing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Ship` (location, velocity, optional target velocity) and `ShipTuning` |
//! | [`control`] | Logical actions, key mapping, acceleration schemes, speed cap and reverse floor |
//! | [`rendering`] | Main-view sprite and overview marker |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::ship::*` imports.

pub mod control;
pub mod rendering;
pub mod state;

pub use control::{ControlScheme, ShipAction};
pub use state::{Ship, ShipTuning};
