//! Placeholder level inhabitants: boids, the predator, and the safe area.
//!
//! Each implements [`Actor`] on its own; there is no shared base state.  All
//! three are no-ops today.  The level calls `run` once per frame for every
//! actor, after the ship and both views have been drawn.

use crate::surface::Surface;

/// Something the level gives a turn every frame.
pub trait Actor {
    /// Update, then draw.  Must be callable every frame and must not panic.
    fn run(&mut self, surface: &mut dyn Surface) {
        self.render(surface);
    }

    fn render(&self, surface: &mut dyn Surface);
}

/// One member of the flock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boid;

impl Actor for Boid {
    fn render(&self, _surface: &mut dyn Surface) {}
}

/// Hunts the flock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predator;

impl Actor for Predator {
    fn render(&self, _surface: &mut dyn Surface) {}
}

/// Region where boids are out of the predator's reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SafeArea;

impl Actor for SafeArea {
    fn render(&self, _surface: &mut dyn Surface) {}
}
