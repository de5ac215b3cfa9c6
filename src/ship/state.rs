//! Ship kinematic state and per-tick integration.
//!
//! Input handlers in [`super::control`] only ever touch the *steered*
//! velocity: `target_vel` when smoothing is on, `vel` otherwise.  `update`
//! is the single place position changes.

use super::control::ControlScheme;
use crate::constants::*;
use crate::math::VecExt;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Kinematic tuning for the player ship.
///
/// Keep this separate from layout configuration (canvas sizes, fonts, etc.).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTuning {
    /// Which acceleration scheme key presses use.
    pub scheme: ControlScheme,

    /// Hard cap on the steered velocity, enforced after every input event.
    pub max_speed: f32,

    /// Fraction of the target-velocity gap closed per tick.
    pub smoothing_gain: f32,

    /// Acceleration per press in the ship-relative scheme.
    pub relative_acceleration: f32,

    /// Acceleration per press in the axis-aligned scheme.
    pub axis_acceleration: f32,

    /// Turning push multiplier (scaled by the current speed as well).
    pub turn_scale: f32,

    /// Reverse thrust never takes the speed below this.
    pub reverse_speed_floor: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            scheme: ControlScheme::default(),
            max_speed: MAX_SPEED,
            smoothing_gain: SMOOTHING_GAIN,
            relative_acceleration: RELATIVE_ACCELERATION,
            axis_acceleration: AXIS_ACCELERATION,
            turn_scale: TURN_SCALE,
            reverse_speed_floor: REVERSE_SPEED_FLOOR,
        }
    }
}

/// The player ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Location in space coordinates.
    pub loc: Vec2,
    /// Displacement applied each tick.
    pub vel: Vec2,
    /// Velocity the ship eases toward; `None` when smoothing is off.
    pub target_vel: Option<Vec2>,
    /// Sprite edge length on the main surface.
    pub size: f32,
}

impl Ship {
    /// A ship at `loc` moving with `vel`.  With `smoothing` the target starts
    /// equal to `vel`, so the first ticks carry no correction.
    pub fn new(loc: Vec2, vel: Vec2, smoothing: bool, size: f32) -> Self {
        Self {
            loc,
            vel,
            target_vel: smoothing.then_some(vel),
            size,
        }
    }

    /// A ship at the horizontal centre of a field, `start_offset` above its
    /// bottom edge, drifting upward at `start_speed`.
    pub fn spawn(
        field_size: Vec2,
        start_offset: f32,
        start_speed: f32,
        smoothing: bool,
        size: f32,
    ) -> Self {
        Self::new(
            Vec2::new(field_size.x * 0.5, field_size.y - start_offset),
            Vec2::new(0.0, -start_speed),
            smoothing,
            size,
        )
    }

    /// The velocity that input acts on.
    pub fn steering(&self) -> Vec2 {
        self.target_vel.unwrap_or(self.vel)
    }

    pub(crate) fn set_steering(&mut self, v: Vec2) {
        match self.target_vel.as_mut() {
            Some(target) => *target = v,
            None => self.vel = v,
        }
    }

    /// Advance one tick and return the displacement applied.
    ///
    /// With smoothing, `vel` first closes `smoothing_gain` of the gap to
    /// `target_vel`; then `loc += vel`.
    ///
    /// Easing between two headings cuts the corner, so in the ship-relative
    /// scheme a target at or above the reverse floor keeps `|vel|` there too.
    pub fn update(&mut self, tuning: &ShipTuning) -> Vec2 {
        if let Some(target) = self.target_vel {
            self.vel += (target - self.vel) * tuning.smoothing_gain;

            let floor = tuning.reverse_speed_floor;
            if tuning.scheme == ControlScheme::ShipRelative
                && target.length() >= floor
                && self.vel.length() < floor
            {
                self.vel = self.vel.with_magnitude(floor);
            }
        }
        self.loc += self.vel;
        self.vel
    }

    /// Rotation that turns an upward-pointing sprite to face along `vel`.
    ///
    /// A stationary ship keeps the unrotated (upward) orientation.
    pub fn facing(&self) -> f32 {
        self.vel
            .unit()
            .map(|dir| dir.heading() + FRAC_PI_2)
            .unwrap_or(0.0)
    }
}
