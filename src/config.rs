//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app starts, [`read_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/game.toml`.
//! 2. Restart the game; no recompilation required.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{
    require_in_range, require_non_negative, require_positive, require_unit_fraction, GameError,
    GameResult,
};
use crate::ship::{ControlScheme, ShipTuning};
use crate::star::star_count;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable kinematics, camera and layout configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Surfaces ──────────────────────────────────────────────────────────────
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub minimap_width: f32,
    pub minimap_height: f32,
    pub minimap_corner_margin: f32,

    // ── Frame driver ──────────────────────────────────────────────────────────
    pub frame_rate: f64,

    // ── Star field ────────────────────────────────────────────────────────────
    pub field_scale: f32,
    pub star_spacing: f32,
    pub star_offset: f32,

    // ── Ship: spawn ───────────────────────────────────────────────────────────
    pub ship_start_offset: f32,
    pub ship_start_speed: f32,
    pub ship_size: f32,
    pub ship_sprite_path: String,

    // ── Ship: kinematics ──────────────────────────────────────────────────────
    pub control_scheme: ControlScheme,
    /// Steer a target velocity and ease the real velocity toward it.
    pub smoothing: bool,
    pub smoothing_gain: f32,
    pub max_speed: f32,
    pub relative_acceleration: f32,
    pub axis_acceleration: f32,
    pub turn_scale: f32,
    pub reverse_speed_floor: f32,

    // ── Camera ────────────────────────────────────────────────────────────────
    /// Rotate the main view so the ship always points up.  `false` gives the
    /// translate-only view.
    pub rotate_view: bool,

    // ── Overview ──────────────────────────────────────────────────────────────
    pub minimap_field_ratio: f32,
    pub minimap_edge_margin: f32,

    // ── Text ──────────────────────────────────────────────────────────────────
    pub star_font_size: f32,
    pub banner_font_size: f32,

    // ── Level ─────────────────────────────────────────────────────────────────
    pub level_count: usize,
    pub boids_per_level: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Surfaces
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            minimap_width: MINIMAP_WIDTH,
            minimap_height: MINIMAP_HEIGHT,
            minimap_corner_margin: MINIMAP_CORNER_MARGIN,
            // Frame driver
            frame_rate: FRAME_RATE,
            // Star field
            field_scale: FIELD_SCALE,
            star_spacing: STAR_SPACING,
            star_offset: STAR_OFFSET,
            // Ship: spawn
            ship_start_offset: SHIP_START_OFFSET,
            ship_start_speed: SHIP_START_SPEED,
            ship_size: SHIP_SIZE,
            ship_sprite_path: SHIP_SPRITE_PATH.to_string(),
            // Ship: kinematics
            control_scheme: ControlScheme::default(),
            smoothing: true,
            smoothing_gain: SMOOTHING_GAIN,
            max_speed: MAX_SPEED,
            relative_acceleration: RELATIVE_ACCELERATION,
            axis_acceleration: AXIS_ACCELERATION,
            turn_scale: TURN_SCALE,
            reverse_speed_floor: REVERSE_SPEED_FLOOR,
            // Camera
            rotate_view: true,
            // Overview
            minimap_field_ratio: MINIMAP_FIELD_RATIO,
            minimap_edge_margin: MINIMAP_EDGE_MARGIN,
            // Text
            star_font_size: STAR_FONT_SIZE,
            banner_font_size: BANNER_FONT_SIZE,
            // Level
            level_count: LEVEL_COUNT,
            boids_per_level: BOIDS_PER_LEVEL,
        }
    }
}

impl GameConfig {
    /// Kinematic tuning handed to the ship.
    pub fn ship_tuning(&self) -> ShipTuning {
        ShipTuning {
            scheme: self.control_scheme,
            max_speed: self.max_speed,
            smoothing_gain: self.smoothing_gain,
            relative_acceleration: self.relative_acceleration,
            axis_acceleration: self.axis_acceleration,
            turn_scale: self.turn_scale,
            reverse_speed_floor: self.reverse_speed_floor,
        }
    }

    /// Overview surface size in pixels.
    pub fn minimap_size(&self) -> Vec2 {
        Vec2::new(self.minimap_width, self.minimap_height)
    }

    /// Reject values the game cannot run with.
    ///
    /// The star grid must stay small enough to build and draw every frame,
    /// and a reverse floor at or above the speed cap would freeze braking.
    pub fn validate(&self) -> GameResult<()> {
        let edge = "in (0, 16384]";
        require_in_range("canvas_width", self.canvas_width, MAX_CANVAS_EDGE, edge)?;
        require_in_range("canvas_height", self.canvas_height, MAX_CANVAS_EDGE, edge)?;
        require_positive("minimap_width", self.minimap_width)?;
        require_positive("minimap_height", self.minimap_height)?;
        require_positive("frame_rate", self.frame_rate as f32)?;
        require_in_range("field_scale", self.field_scale, MAX_FIELD_SCALE, "in (0, 50]")?;
        require_positive("star_spacing", self.star_spacing)?;
        require_non_negative("star_offset", self.star_offset)?;
        let field = Vec2::new(self.canvas_width, self.canvas_height) * self.field_scale;
        let stars = star_count(field, self.star_spacing, self.star_offset);
        if stars > MAX_STARS as f64 {
            return Err(GameError::InvalidConfig {
                name: "star_spacing",
                value: self.star_spacing as f64,
                expected: "wide enough for at most 100000 stars",
            });
        }
        require_positive("max_speed", self.max_speed)?;
        require_positive("minimap_field_ratio", self.minimap_field_ratio)?;
        require_unit_fraction("smoothing_gain", self.smoothing_gain)?;
        require_unit_fraction("minimap_edge_margin", self.minimap_edge_margin)?;
        require_positive("reverse_speed_floor", self.reverse_speed_floor)?;
        if self.reverse_speed_floor >= self.max_speed {
            return Err(GameError::InvalidConfig {
                name: "reverse_speed_floor",
                value: self.reverse_speed_floor as f64,
                expected: "below max_speed",
            });
        }
        if self.level_count == 0 {
            return Err(GameError::InvalidConfig {
                name: "level_count",
                value: 0.0,
                expected: ">= 1",
            });
        }
        Ok(())
    }
}

/// Path of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Parse a TOML document into a validated config.
///
/// Keys absent from `contents` keep their compiled defaults.
pub fn parse_game_config(contents: &str) -> Result<GameConfig, String> {
    let loaded = toml::from_str::<GameConfig>(contents).map_err(|e| e.to_string())?;
    loaded.validate().map_err(|e| e.to_string())?;
    Ok(loaded)
}

/// Read `assets/game.toml`, falling back to the compiled defaults.
///
/// Runs in `main` before the `App` exists because the window is sized from
/// the canvas dimensions, so the outcome goes to stdout/stderr rather than
/// the log.  Parse and validation errors are reported but never abort the
/// game.  A missing file is silently ignored.
pub fn read_game_config() -> GameConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_game_config(&contents) {
            Ok(loaded) => {
                println!("✓ Loaded game config from {CONFIG_PATH}");
                loaded
            }
            Err(e) => {
                eprintln!("⚠ Rejected {CONFIG_PATH}: {e}; using defaults");
                GameConfig::default()
            }
        },
        Err(_) => {
            // File not present: not an error.
            println!("ℹ No {CONFIG_PATH} found; using compiled defaults");
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = parse_game_config("max_speed = 7.5\ncontrol_scheme = \"axis_aligned\"\n")
            .expect("valid override");
        assert_eq!(cfg.max_speed, 7.5);
        assert_eq!(cfg.control_scheme, ControlScheme::AxisAligned);
        assert_eq!(cfg.star_spacing, STAR_SPACING);
        assert!(cfg.rotate_view);
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let err = parse_game_config("star_spacing = 0.0").unwrap_err();
        assert!(err.contains("star_spacing"), "{err}");
    }

    #[test]
    fn unbounded_star_offset_is_rejected() {
        let err = parse_game_config("star_offset = -inf").unwrap_err();
        assert!(err.contains("star_offset"), "{err}");
        assert!(parse_game_config("star_offset = -10.0").is_err());
        assert!(parse_game_config("star_offset = nan").is_err());
        assert!(parse_game_config("star_offset = 0.0").is_ok());
    }

    #[test]
    fn oversized_field_is_rejected() {
        let err = parse_game_config("canvas_width = 1e30").unwrap_err();
        assert!(err.contains("canvas_width"), "{err}");
        let err = parse_game_config("field_scale = 1e6").unwrap_err();
        assert!(err.contains("field_scale"), "{err}");
    }

    #[test]
    fn too_many_stars_is_rejected() {
        let err = parse_game_config("star_spacing = 1.0").unwrap_err();
        assert!(err.contains("star_spacing"), "{err}");
    }

    #[test]
    fn floor_above_cap_is_rejected() {
        let err = parse_game_config("reverse_speed_floor = 6.0").unwrap_err();
        assert!(err.contains("reverse_speed_floor"), "{err}");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_game_config("max_speed = [").is_err());
    }
}
