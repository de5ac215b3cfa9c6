//! Main-view camera transform.
//!
//! Space → main surface is `translate(−camera) · rotate(−θ, about ship.loc)`,
//! with `θ = heading(ship.vel) + 90°`.  The rotation keeps the ship pointing
//! up on screen; with rotation off (or a stationary ship) θ = 0 and the view
//! degenerates to a plain translation.
//!
//! Because the camera moves 1:1 with the ship, `ship.loc − camera` is constant,
//! and rotating about `ship.loc` leaves that screen point fixed.

use crate::math::rotation_about;
use crate::ship::Ship;
use bevy::math::{Affine2, Vec2};

/// Per-frame parameters of the main view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainView {
    /// Space coordinate at the surface origin.
    pub camera: Vec2,
    /// Pivot of the rotation (the ship's location).
    pub pivot: Vec2,
    /// How far the ship is turned from "up"; space is rotated by the negation.
    pub theta: f32,
}

impl MainView {
    /// View of `ship` through `camera`.  `rotate = false` gives translate-only.
    pub fn new(camera: Vec2, ship: &Ship, rotate: bool) -> Self {
        Self {
            camera,
            pivot: ship.loc,
            theta: if rotate { ship.facing() } else { 0.0 },
        }
    }

    /// Rotation part alone; leaves [`MainView::pivot`] fixed.
    pub fn rotation(&self) -> Affine2 {
        rotation_about(self.pivot, -self.theta)
    }

    /// Full space → surface transform.
    pub fn transform(&self) -> Affine2 {
        Affine2::from_translation(-self.camera) * self.rotation()
    }

    /// Where a space point lands on the main surface.
    pub fn to_surface(&self, p: Vec2) -> Vec2 {
        self.transform().transform_point2(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-2;

    fn ship(loc: Vec2, vel: Vec2) -> Ship {
        Ship::new(loc, vel, false, 32.0)
    }

    #[test]
    fn rotation_leaves_the_ship_in_place() {
        let s = ship(Vec2::new(2000.0, 2925.0), Vec2::new(1.3, 0.7));
        let view = MainView::new(Vec2::new(1600.0, 2625.0), &s, true);
        let moved = view.rotation().transform_point2(s.loc);
        assert!((moved - s.loc).length() < EPS, "{moved}");
    }

    #[test]
    fn ship_maps_to_the_surface_centre() {
        let s = ship(Vec2::new(2000.0, 2925.0), Vec2::new(-3.0, 1.0));
        let view = MainView::new(s.loc - Vec2::new(400.0, 300.0), &s, true);
        assert!((view.to_surface(s.loc) - Vec2::new(400.0, 300.0)).length() < EPS);
    }

    #[test]
    fn heading_points_up_on_screen() {
        let s = ship(Vec2::new(500.0, 500.0), Vec2::new(3.0, 0.0));
        let view = MainView::new(Vec2::new(100.0, 200.0), &s, true);
        assert!((view.theta - FRAC_PI_2).abs() < 1e-5);
        let ahead = view.to_surface(s.loc + s.vel) - view.to_surface(s.loc);
        assert!((ahead.normalize() - Vec2::NEG_Y).length() < 1e-3, "{ahead}");
    }

    #[test]
    fn no_rotation_is_a_plain_translation() {
        let s = ship(Vec2::new(500.0, 500.0), Vec2::new(3.0, 0.0));
        let view = MainView::new(Vec2::new(100.0, 200.0), &s, false);
        assert_eq!(view.theta, 0.0);
        let p = Vec2::new(250.0, 700.0);
        assert!((view.to_surface(p) - Vec2::new(150.0, 500.0)).length() < EPS);
    }

    #[test]
    fn upward_ship_needs_no_rotation() {
        let s = ship(Vec2::new(2000.0, 2925.0), Vec2::new(0.0, -2.0));
        let view = MainView::new(Vec2::ZERO, &s, true);
        assert!(view.theta.abs() < 1e-6);
    }
}
