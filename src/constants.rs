//! Centralised kinematics, camera and layout constants.
//!
//! Every tunable lives here so it can be found and changed in one place.
//! [`crate::config::GameConfig::default`] mirrors these values; a value set in
//! `assets/game.toml` overrides the constant at startup without recompiling.

// ── Surfaces ──────────────────────────────────────────────────────────────────

/// Width of the main drawing surface (pixels).
pub const CANVAS_WIDTH: f32 = 800.0;

/// Height of the main drawing surface (pixels).
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Width of the overview (minimap) surface (pixels).
pub const MINIMAP_WIDTH: f32 = 200.0;

/// Height of the overview (minimap) surface (pixels).
pub const MINIMAP_HEIGHT: f32 = 150.0;

/// Gap between the overview surface and the window's top-right corner (pixels).
pub const MINIMAP_CORNER_MARGIN: f32 = 12.0;

/// Largest accepted canvas edge (pixels).
pub const MAX_CANVAS_EDGE: f32 = 16_384.0;

// ── Frame driver ──────────────────────────────────────────────────────────────

/// Simulation ticks per second.  One tick = one `Level::run`.
pub const FRAME_RATE: f64 = 30.0;

// ── Star field ────────────────────────────────────────────────────────────────

/// The field is this many canvases wide and tall.
///
/// An 800×600 canvas gives a 4000×3000 field.
pub const FIELD_SCALE: f32 = 5.0;

/// Distance between neighbouring grid stars (space units).
///
/// Smaller spacing means more labels per screen; below ~80 the coordinate
/// labels start to overlap at the default font size.
pub const STAR_SPACING: f32 = 150.0;

/// First star column / row sits this far from the field's top-left corner.
pub const STAR_OFFSET: f32 = 100.0;

/// Largest accepted field scale.
pub const MAX_FIELD_SCALE: f32 = 50.0;

/// Upper bound on the grid size; each star is a label entity every frame.
pub const MAX_STARS: usize = 100_000;

// ── Ship: spawn ───────────────────────────────────────────────────────────────

/// The ship spawns this far above the field's bottom edge.
pub const SHIP_START_OFFSET: f32 = 75.0;

/// Initial upward speed (space units per tick).
pub const SHIP_START_SPEED: f32 = 2.0;

/// Edge length of the ship sprite on the main surface (pixels).
pub const SHIP_SIZE: f32 = 32.0;

/// Path of the ship sprite relative to the asset root.
pub const SHIP_SPRITE_PATH: &str = "sprites/ship.png";

// ── Ship: kinematics ──────────────────────────────────────────────────────────

/// Hard speed cap (space units per tick), enforced after every input event.
pub const MAX_SPEED: f32 = 5.0;

/// Fraction of the remaining gap between velocity and target velocity closed
/// each tick when smoothing is on.
///
/// At 0.25 the gap shrinks to 75 % per tick: ~90 % of a step change is
/// absorbed after 8 ticks (about a quarter second at 30 Hz).
pub const SMOOTHING_GAIN: f32 = 0.25;

/// Acceleration per key press in the ship-relative scheme.
pub const RELATIVE_ACCELERATION: f32 = 0.5;

/// Acceleration per key press in the axis-aligned scheme.
pub const AXIS_ACCELERATION: f32 = 0.75;

/// Turning force multiplier, applied together with the current speed.
///
/// Turning push = `RELATIVE_ACCELERATION × TURN_SCALE × speed`, so a slow
/// ship turns gently and a fast one turns harder.
pub const TURN_SCALE: f32 = 0.1;

/// Reverse thrust never takes the speed below this value.
///
/// A zero velocity has no heading, which would snap the rotating view.
pub const REVERSE_SPEED_FLOOR: f32 = 0.51;

// ── Overview ──────────────────────────────────────────────────────────────────

/// The overview fits this many field widths across its own width.
pub const MINIMAP_FIELD_RATIO: f32 = 1.5;

/// Fraction of the field size treated as the edge band on the overview.
///
/// A ship inside the band shifts the overview translation by the overshoot.
pub const MINIMAP_EDGE_MARGIN: f32 = 0.15;

/// Side length of a star dot on the overview (overview pixels).
pub const MINIMAP_STAR_DOT: f32 = 1.5;

/// Side length of the ship marker on the overview (overview pixels).
pub const MINIMAP_SHIP_MARKER: f32 = 10.0;

// ── Text ──────────────────────────────────────────────────────────────────────

/// Font size of a star's coordinate label.
pub const STAR_FONT_SIZE: f32 = 10.0;

/// Font size of the level banner.
pub const BANNER_FONT_SIZE: f32 = 24.0;

// ── Level ─────────────────────────────────────────────────────────────────────

/// Levels built at startup.
pub const LEVEL_COUNT: usize = 1;

/// Boid placeholders created per level.
pub const BOIDS_PER_LEVEL: usize = 100;
