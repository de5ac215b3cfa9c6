//! Game-specific error types.
//!
//! Only two conditions are fatal, and both are detected once at startup:
//! no drawing surface and a surface without a usable 2D area.  Everything
//! else either degrades silently (unmapped keys) or is guarded locally
//! (zero-length vectors).
//!
//! ## Usage
//!
//! ```rust
//! use star_drift::error::{GameError, GameResult};
//! use bevy::math::Vec2;
//!
//! fn canvas_area(size: Option<Vec2>) -> GameResult<f32> {
//!     let size = size.ok_or(GameError::NoSurface)?;
//!     Ok(size.x * size.y)
//! }
//! ```

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// No drawing surface was available at startup.
    NoSurface,

    /// The drawing surface exists but has no usable 2D area.
    NoContext {
        /// Reported surface width.
        width: f32,
        /// Reported surface height.
        height: f32,
    },

    /// A zero-length or non-finite vector was asked for its direction.
    DegenerateVector,

    /// A configuration value is outside the range the game can run with.
    InvalidConfig {
        /// Name of the offending field.
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoSurface => write!(f, "no valid drawing surface found"),
            GameError::NoContext { width, height } => write!(
                f,
                "no valid 2D context: surface is {}×{}",
                width, height
            ),
            GameError::DegenerateVector => {
                write!(f, "cannot take the direction of a zero-length vector")
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(f, "config '{}' = {} must be {}", name, value, expected),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value as f64,
            expected: "> 0",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn require_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value as f64,
            expected: ">= 0",
        })
    }
}

/// Returns an error unless `value` is finite and strictly positive and at
/// most `max`.
pub fn require_in_range(
    name: &'static str,
    value: f32,
    max: f32,
    expected: &'static str,
) -> GameResult<()> {
    require_positive(name, value)?;
    if value <= max {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value as f64,
            expected,
        })
    }
}

/// Returns an error unless `value` lies in the half-open range `(0, 1]`.
pub fn require_unit_fraction(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value as f64,
            expected: "in (0, 1]",
        })
    }
}
