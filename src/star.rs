//! Stars and the star field: the fixed reference grid the ship moves through.

use crate::constants::MINIMAP_STAR_DOT;
use crate::surface::Surface;
use bevy::prelude::*;

/// An immutable point of reference in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pos: Vec2,
}

impl Star {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Coordinate label, e.g. `"100, 250"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.pos.x.round(), self.pos.y.round())
    }

    /// Draw the star as its own coordinates, in space coordinates.
    pub fn render(&self, surface: &mut impl Surface, font_size: f32) {
        surface.fill_text(&self.label(), self.pos, font_size, Color::WHITE);
    }

    /// Draw the star as a dot `size` units across, for the overview.
    pub fn render_dot(&self, surface: &mut impl Surface, size: f32) {
        let half = Vec2::splat(size * 0.5);
        surface.fill_rect(
            Rect::from_corners(self.pos - half, self.pos + half),
            Color::srgb(0.85, 0.85, 0.95),
        );
    }
}

/// Positions from `offset` up to (not including) `limit`, every `spacing`.
///
/// Stops early once adding `spacing` no longer advances `t`.
fn grid_steps(offset: f32, limit: f32, spacing: f32) -> Vec<f32> {
    let mut v = Vec::new();
    let mut t = offset;
    while t < limit {
        v.push(t);
        let next = t + spacing;
        if next <= t {
            break;
        }
        t = next;
    }
    v
}

/// Number of stars [`star_grid`] would produce, computed without building it.
pub fn star_count(size: Vec2, spacing: f32, offset: f32) -> f64 {
    if !(spacing.is_finite() && spacing > 0.0 && offset.is_finite()) {
        return 0.0;
    }
    let per_axis =
        |limit: f32| ((limit as f64 - offset as f64) / spacing as f64).ceil().max(0.0);
    per_axis(size.x) * per_axis(size.y)
}

/// Regular grid of stars: columns and rows every `spacing` units starting at
/// `offset`, stopping before `size`.  Column-major order.
///
/// Deterministic; a non-positive or non-finite spacing, or a non-finite
/// offset, yields no stars.
pub fn star_grid(size: Vec2, spacing: f32, offset: f32) -> Vec<Star> {
    if !(spacing.is_finite() && spacing > 0.0 && offset.is_finite()) {
        return Vec::new();
    }
    let xs = grid_steps(offset, size.x, spacing);
    let ys = grid_steps(offset, size.y, spacing);
    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| Star::new(x, y)))
        .collect()
}

/// The populated region of space plus the camera looking into it.
#[derive(Debug, Clone)]
pub struct StarField {
    size: Vec2,
    stars: Vec<Star>,
    /// Space coordinate mapped to the main surface's origin.
    pub camera: Vec2,
}

impl StarField {
    /// A field `size` units large, its star grid, and the camera at `camera`.
    pub fn new(size: Vec2, spacing: f32, offset: f32, camera: Vec2) -> Self {
        Self {
            size,
            stars: star_grid(size, spacing, offset),
            camera,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Whether `p` lies inside the field rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.size.x && p.y <= self.size.y
    }

    /// Move the camera with the ship's displacement for this tick.
    pub fn update(&mut self, displacement: Vec2) {
        self.camera += displacement;
    }

    /// Draw every star's label in the surface's current coordinates.
    pub fn render_all(&self, surface: &mut impl Surface, font_size: f32) {
        for star in &self.stars {
            star.render(surface, font_size);
        }
    }

    /// Draw every star as a dot sized for an overview scaled by `scale`.
    pub fn render_dots(&self, surface: &mut impl Surface, scale: f32) {
        let size = MINIMAP_STAR_DOT / scale;
        for star in &self.stars {
            star.render_dot(surface, size);
        }
    }
}
