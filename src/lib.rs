//! Star Drift library
//!
//! A ship drifting through a scrolling star field.  The main view keeps the
//! ship centred and (optionally) rotated to point up; an overview minimap
//! shows the whole field.  Levels draw through the canvas-like
//! [`surface::Surface`] API and the [`presentation`] plugin hosts them in Bevy.

pub mod actors;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod level;
pub mod math;
pub mod minimap;
pub mod presentation;
pub mod ship;
pub mod star;
pub mod surface;
pub mod view;
