//! Keyboard actions and the acceleration they apply.
//!
//! ## Pipeline (per key event)
//!
//! 1. A key identity maps to one of four [`ShipAction`]s; unmapped keys map to
//!    nothing and are dropped.
//! 2. [`Ship::apply_action`] builds an acceleration for the configured
//!    [`ControlScheme`] and adds it to the steered velocity.
//! 3. The result is clamped to `max_speed`.
//!
//! | Action     | Axis-aligned        | Ship-relative                                   |
//! |------------|---------------------|-------------------------------------------------|
//! | TurnLeft   | `x −= a`            | push to the left of heading, `a × turn × speed` |
//! | Forward    | `y −= a`            | `a` along heading                               |
//! | TurnRight  | `x += a`            | push to the right of heading                    |
//! | Backward   | `y += a`            | slow by `a`, never below the reverse floor      |

use super::state::{Ship, ShipTuning};
use crate::math::VecExt;
use bevy::prelude::*;
use serde::Deserialize;

/// How key presses become acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    /// Forward/turn relative to the current heading.
    #[default]
    ShipRelative,
    /// Up/down/left/right along the space axes.
    AxisAligned,
}

/// The four logical ship controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipAction {
    TurnLeft,
    Forward,
    TurnRight,
    Backward,
}

impl ShipAction {
    /// Physical key binding: WASD and the arrow keys.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Self::TurnLeft),
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Self::TurnRight),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Self::Backward),
            _ => None,
        }
    }

    /// Logical key name, case-insensitive (`"w"`, `"A"`, `"ArrowUp"`, ...).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a" | "arrowleft" => Some(Self::TurnLeft),
            "w" | "arrowup" => Some(Self::Forward),
            "d" | "arrowright" => Some(Self::TurnRight),
            "s" | "arrowdown" => Some(Self::Backward),
            _ => None,
        }
    }
}

/// Acceleration for `action` in the axis-aligned scheme (y points down).
pub fn axis_acceleration(action: ShipAction, magnitude: f32) -> Vec2 {
    match action {
        ShipAction::TurnLeft => Vec2::new(-magnitude, 0.0),
        ShipAction::Forward => Vec2::new(0.0, -magnitude),
        ShipAction::TurnRight => Vec2::new(magnitude, 0.0),
        ShipAction::Backward => Vec2::new(0.0, magnitude),
    }
}

/// Steered velocity after `action` in the ship-relative scheme, before the cap.
pub fn relative_step(steer: Vec2, action: ShipAction, tuning: &ShipTuning) -> Vec2 {
    let speed = steer.length();
    // No heading yet: treat "forward" as up the screen.
    let dir = steer.unit().unwrap_or(Vec2::NEG_Y);
    // Screen-left of `dir` with y pointing down.
    let left = Vec2::new(dir.y, -dir.x);
    let turn = tuning.relative_acceleration * tuning.turn_scale * speed;

    match action {
        ShipAction::Forward => steer + dir * tuning.relative_acceleration,
        ShipAction::TurnLeft => steer + left * turn,
        ShipAction::TurnRight => steer - left * turn,
        ShipAction::Backward => {
            let floor = tuning.reverse_speed_floor;
            if speed <= floor {
                steer
            } else {
                steer.with_magnitude((speed - tuning.relative_acceleration).max(floor))
            }
        }
    }
}

impl Ship {
    /// Apply one key press.  The steered velocity never exceeds `max_speed`
    /// afterwards.
    pub fn apply_action(&mut self, action: ShipAction, tuning: &ShipTuning) {
        let steer = self.steering();
        let next = match tuning.scheme {
            ControlScheme::AxisAligned => {
                steer + axis_acceleration(action, tuning.axis_acceleration)
            }
            ControlScheme::ShipRelative => relative_step(steer, action, tuning),
        };
        self.set_steering(next.clamp_magnitude(tuning.max_speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn relative() -> ShipTuning {
        ShipTuning::default()
    }

    fn axis() -> ShipTuning {
        ShipTuning {
            scheme: ControlScheme::AxisAligned,
            ..ShipTuning::default()
        }
    }

    // ── key mapping ───────────────────────────────────────────────────────────

    #[test]
    fn wasd_and_arrows_map_to_the_same_actions() {
        assert_eq!(ShipAction::from_key_code(KeyCode::KeyW), Some(ShipAction::Forward));
        assert_eq!(ShipAction::from_key_code(KeyCode::ArrowUp), Some(ShipAction::Forward));
        assert_eq!(ShipAction::from_key_code(KeyCode::KeyA), Some(ShipAction::TurnLeft));
        assert_eq!(ShipAction::from_key_code(KeyCode::ArrowRight), Some(ShipAction::TurnRight));
        assert_eq!(ShipAction::from_key_code(KeyCode::KeyS), Some(ShipAction::Backward));
        assert_eq!(ShipAction::from_key_code(KeyCode::KeyQ), None);
    }

    #[test]
    fn key_names_are_case_insensitive() {
        assert_eq!(ShipAction::from_key_name("W"), Some(ShipAction::Forward));
        assert_eq!(ShipAction::from_key_name("d"), Some(ShipAction::TurnRight));
        assert_eq!(ShipAction::from_key_name("ARROWDOWN"), Some(ShipAction::Backward));
        assert_eq!(ShipAction::from_key_name("x"), None);
    }

    // ── axis-aligned ──────────────────────────────────────────────────────────

    #[test]
    fn axis_presses_adjust_one_component() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::ZERO, false, 32.0);
        ship.apply_action(ShipAction::TurnRight, &axis());
        ship.apply_action(ShipAction::Forward, &axis());
        assert!((ship.vel - Vec2::new(0.75, -0.75)).length() < EPS);
    }

    #[test]
    fn smoothing_steers_the_target_not_the_velocity() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::ZERO, true, 32.0);
        ship.apply_action(ShipAction::TurnLeft, &axis());
        assert_eq!(ship.vel, Vec2::ZERO);
        assert_eq!(ship.target_vel, Some(Vec2::new(-0.75, 0.0)));
    }

    // ── ship-relative ─────────────────────────────────────────────────────────

    #[test]
    fn forward_pushes_along_the_heading() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::new(2.0, 0.0), false, 32.0);
        ship.apply_action(ShipAction::Forward, &relative());
        assert!((ship.vel - Vec2::new(2.5, 0.0)).length() < EPS);
    }

    #[test]
    fn forward_from_rest_goes_up() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::ZERO, false, 32.0);
        ship.apply_action(ShipAction::Forward, &relative());
        assert!((ship.vel - Vec2::new(0.0, -0.5)).length() < EPS);
    }

    #[test]
    fn turning_is_perpendicular_and_speed_scaled() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::new(0.0, -4.0), false, 32.0);
        ship.apply_action(ShipAction::TurnLeft, &relative());
        // 0.5 × 0.1 × 4 = 0.2 to the screen-left of "up".
        assert!((ship.vel - Vec2::new(-0.2, -4.0)).length() < EPS);

        let mut slow = Ship::new(Vec2::ZERO, Vec2::new(0.0, -1.0), false, 32.0);
        slow.apply_action(ShipAction::TurnRight, &relative());
        assert!((slow.vel - Vec2::new(0.05, -1.0)).length() < EPS);
    }

    #[test]
    fn backward_never_goes_below_the_floor() {
        let tuning = relative();
        let mut ship = Ship::new(Vec2::ZERO, Vec2::new(3.0, 4.0), false, 32.0);
        let heading = ship.vel.heading();
        for _ in 0..50 {
            ship.apply_action(ShipAction::Backward, &tuning);
            assert!(ship.vel.length() >= tuning.reverse_speed_floor - EPS);
        }
        assert!((ship.vel.length() - tuning.reverse_speed_floor).abs() < EPS);
        assert!((ship.vel.heading() - heading).abs() < EPS, "reverse must not flip heading");
    }

    #[test]
    fn backward_below_the_floor_is_a_no_op() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::new(0.0, -0.3), false, 32.0);
        ship.apply_action(ShipAction::Backward, &relative());
        assert_eq!(ship.vel, Vec2::new(0.0, -0.3));
    }

    // ── speed cap ─────────────────────────────────────────────────────────────

    #[test]
    fn speed_is_capped_after_any_input_sequence() {
        let actions = [
            ShipAction::Forward,
            ShipAction::TurnLeft,
            ShipAction::Forward,
            ShipAction::TurnRight,
            ShipAction::Backward,
            ShipAction::Forward,
        ];
        for tuning in [relative(), axis()] {
            for smoothing in [false, true] {
                let mut ship = Ship::new(Vec2::ZERO, Vec2::new(0.0, -2.0), smoothing, 32.0);
                for step in 0..300 {
                    ship.apply_action(actions[step % actions.len()], &tuning);
                    ship.update(&tuning);
                    assert!(ship.steering().length() <= tuning.max_speed + EPS);
                    assert!(ship.vel.length() <= tuning.max_speed + EPS);
                }
            }
        }
    }

    #[test]
    fn cap_rescales_without_rejecting() {
        let mut ship = Ship::new(Vec2::ZERO, Vec2::new(4.9, 0.0), false, 32.0);
        ship.apply_action(ShipAction::Forward, &relative());
        assert!((ship.vel - Vec2::new(5.0, 0.0)).length() < EPS);
    }
}
