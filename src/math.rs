//! Vector helpers and the rotate-about-a-point affine.
//!
//! `Vec2` already covers add / sub / scale / length.  [`VecExt`] adds the
//! heading-oriented operations the ship needs, with every direction query
//! guarded against zero-length input so no NaN can reach position state.

use crate::error::{GameError, GameResult};
use bevy::math::{Affine2, Vec2};

/// Heading and magnitude operations on `Vec2`.
pub trait VecExt: Sized {
    /// Angle of the vector, `atan2(y, x)`, in radians.
    fn heading(self) -> f32;

    /// Unit vector, or [`GameError::DegenerateVector`] for a zero-length or
    /// non-finite vector.
    fn unit(self) -> GameResult<Self>;

    /// Same magnitude, pointing along `angle`.
    fn with_heading(self, angle: f32) -> Self;

    /// Same heading, rescaled to `magnitude`.  A zero vector stays zero.
    fn with_magnitude(self, magnitude: f32) -> Self;

    /// Rescale down to `max` if longer; shorter vectors are returned as-is.
    fn clamp_magnitude(self, max: f32) -> Self;
}

impl VecExt for Vec2 {
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    fn unit(self) -> GameResult<Self> {
        self.try_normalize().ok_or(GameError::DegenerateVector)
    }

    fn with_heading(self, angle: f32) -> Self {
        Vec2::from_angle(angle) * self.length()
    }

    fn with_magnitude(self, magnitude: f32) -> Self {
        match self.unit() {
            Ok(dir) => dir * magnitude,
            Err(_) => Vec2::ZERO,
        }
    }

    fn clamp_magnitude(self, max: f32) -> Self {
        if self.length() > max {
            self.with_magnitude(max)
        } else {
            self
        }
    }
}

/// Rotation by `angle` radians about `pivot`, as a single 2×3 affine.
///
/// Coefficients follow the canvas `transform(a, b, c, d, e, f)` layout:
///
/// ```text
/// | a c e |   | cos  -sin  x − x·cos + y·sin |
/// | b d f | = | sin   cos  y − x·sin − y·cos |
/// ```
pub fn rotation_about(pivot: Vec2, angle: f32) -> Affine2 {
    let (sin, cos) = angle.sin_cos();
    let (x, y) = (pivot.x, pivot.y);
    Affine2::from_cols_array(&[
        cos,
        sin,
        -sin,
        cos,
        x - x * cos + y * sin,
        y - x * sin - y * cos,
    ])
}

/// Split an affine with uniform scale into `(translation, rotation, scale)`.
///
/// Used to place retained sprites from recorded draw commands; shear is not
/// representable and never produced by the views.
pub fn decompose(affine: Affine2) -> (Vec2, f32, f32) {
    let x_axis = affine.matrix2.x_axis;
    (affine.translation, x_axis.heading(), x_axis.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    #[test]
    fn heading_of_up_is_minus_half_pi() {
        assert!((Vec2::new(0.0, -2.0).heading() + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn unit_of_zero_is_degenerate() {
        assert_eq!(Vec2::ZERO.unit(), Err(GameError::DegenerateVector));
        assert_eq!(
            Vec2::new(f32::NAN, 1.0).unit(),
            Err(GameError::DegenerateVector)
        );
    }

    #[test]
    fn with_heading_preserves_length() {
        let v = Vec2::new(3.0, 4.0).with_heading(PI);
        assert!((v - Vec2::new(-5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn with_magnitude_preserves_heading_and_guards_zero() {
        let v = Vec2::new(3.0, 4.0).with_magnitude(10.0);
        assert!((v - Vec2::new(6.0, 8.0)).length() < EPS);
        assert_eq!(Vec2::ZERO.with_magnitude(10.0), Vec2::ZERO);
    }

    #[test]
    fn clamp_magnitude_is_a_hard_cap() {
        let capped = Vec2::new(30.0, 40.0).clamp_magnitude(5.0);
        assert!((capped.length() - 5.0).abs() < EPS);
        assert_eq!(Vec2::new(1.0, 1.0).clamp_magnitude(5.0), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn rotation_about_fixes_the_pivot() {
        let pivot = Vec2::new(2000.0, 2925.0);
        for angle in [0.0, 0.3, FRAC_PI_2, -2.0, PI] {
            let moved = rotation_about(pivot, angle).transform_point2(pivot);
            assert!((moved - pivot).length() < 1e-2, "angle {angle}: {moved}");
        }
    }

    #[test]
    fn rotation_about_matches_translate_rotate_translate() {
        let pivot = Vec2::new(10.0, -4.0);
        let angle = 0.7;
        let composed = Affine2::from_translation(pivot)
            * Affine2::from_angle(angle)
            * Affine2::from_translation(-pivot);
        let p = Vec2::new(3.0, 8.0);
        let a = rotation_about(pivot, angle).transform_point2(p);
        let b = composed.transform_point2(p);
        assert!((a - b).length() < EPS);
    }

    #[test]
    fn decompose_recovers_rotation_and_scale() {
        let affine =
            Affine2::from_scale_angle_translation(Vec2::splat(0.5), 0.4, Vec2::new(7.0, 9.0));
        let (t, r, s) = decompose(affine);
        assert!((t - Vec2::new(7.0, 9.0)).length() < EPS);
        assert!((r - 0.4).abs() < EPS);
        assert!((s - 0.5).abs() < EPS);
    }
}
