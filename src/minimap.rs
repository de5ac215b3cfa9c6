//! Overview (minimap) viewport.
//!
//! Space → overview is `translate(t) · scale(s)` with
//! `s = minimap_width / (field_ratio × field_width)` so the whole field plus a
//! margin fits.  The default `t` maps the field centre to the overview centre.
//!
//! ## Edge following
//!
//! When the ship enters the edge band (`edge_margin × field size` from any
//! side) `t` shifts by the overshoot, scaled to overview pixels.  Each of the
//! four sides is checked independently and the correction is purely
//! additive: an extreme position can still leave the ship outside the band.

use crate::config::GameConfig;
use crate::ship::Ship;
use crate::star::StarField;
use crate::surface::Surface;
use bevy::math::Affine2;
use bevy::prelude::*;

/// Scale and default placement of the overview for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapView {
    pub size: Vec2,
    pub field_size: Vec2,
    pub scale: f32,
    /// Translation that centres the field.
    pub base: Vec2,
    pub edge_margin: f32,
}

impl MinimapView {
    pub fn new(size: Vec2, field_size: Vec2, field_ratio: f32, edge_margin: f32) -> Self {
        let scale = size.x / (field_ratio * field_size.x);
        Self {
            size,
            field_size,
            scale,
            base: size * 0.5 - field_size * 0.5 * scale,
            edge_margin,
        }
    }

    pub fn from_config(config: &GameConfig, field_size: Vec2) -> Self {
        Self::new(
            config.minimap_size(),
            field_size,
            config.minimap_field_ratio,
            config.minimap_edge_margin,
        )
    }

    /// Shift of the translation for a ship at `loc` (overview pixels).
    pub fn edge_correction(&self, loc: Vec2) -> Vec2 {
        let band = self.field_size * self.edge_margin;
        let mut overshoot = Vec2::ZERO;

        if loc.x < band.x {
            overshoot.x += band.x - loc.x;
        }
        if loc.x > self.field_size.x - band.x {
            overshoot.x -= loc.x - (self.field_size.x - band.x);
        }
        if loc.y < band.y {
            overshoot.y += band.y - loc.y;
        }
        if loc.y > self.field_size.y - band.y {
            overshoot.y -= loc.y - (self.field_size.y - band.y);
        }

        overshoot * self.scale
    }

    /// Translation for a ship at `loc`.
    pub fn translation(&self, loc: Vec2) -> Vec2 {
        self.base + self.edge_correction(loc)
    }

    /// Full space → overview transform for a ship at `loc`.
    pub fn transform(&self, loc: Vec2) -> Affine2 {
        Affine2::from_translation(self.translation(loc))
            * Affine2::from_scale(Vec2::splat(self.scale))
    }

    /// Draw the field and the ship marker.  No main-view rotation is applied.
    pub fn render(
        &self,
        surface: &mut impl Surface,
        field: &StarField,
        ship: &Ship,
        sprite: Option<&Handle<Image>>,
    ) {
        let size = surface.size();
        surface.save();
        surface.fill_rect(Rect::from_corners(Vec2::ZERO, size), Color::BLACK);
        surface.transform(self.transform(ship.loc));
        surface.fill_rect(
            Rect::from_corners(Vec2::ZERO, field.size()),
            Color::srgb(0.12, 0.12, 0.18),
        );
        field.render_dots(surface, self.scale);
        ship.render_marker(surface, sprite, self.scale);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawKind, FrameRecorder};

    const EPS: f32 = 1e-4;

    fn view() -> MinimapView {
        MinimapView::new(
            Vec2::new(200.0, 150.0),
            Vec2::new(4000.0, 3000.0),
            1.5,
            0.15,
        )
    }

    #[test]
    fn scale_fits_one_and_a_half_fields() {
        let v = view();
        assert!((v.scale - 200.0 / 6000.0).abs() < 1e-7);
    }

    #[test]
    fn field_centre_maps_to_overview_centre() {
        let v = view();
        let mid = Vec2::new(2000.0, 1500.0);
        let centre = v.transform(mid).transform_point2(mid);
        assert!((centre - Vec2::new(100.0, 75.0)).length() < EPS);
        assert_eq!(v.translation(Vec2::new(2000.0, 1500.0)), v.base);
    }

    #[test]
    fn near_each_edge_corrects_only_that_axis_and_direction() {
        let v = view();
        // 10 % of the field from each edge.
        let left = v.edge_correction(Vec2::new(400.0, 1500.0));
        assert!(left.x > 0.0 && left.y == 0.0, "{left}");
        let right = v.edge_correction(Vec2::new(3600.0, 1500.0));
        assert!(right.x < 0.0 && right.y == 0.0, "{right}");
        let top = v.edge_correction(Vec2::new(2000.0, 300.0));
        assert!(top.y > 0.0 && top.x == 0.0, "{top}");
        let bottom = v.edge_correction(Vec2::new(2000.0, 2700.0));
        assert!(bottom.y < 0.0 && bottom.x == 0.0, "{bottom}");
    }

    #[test]
    fn correction_is_the_scaled_overshoot() {
        let v = view();
        // Band is 600 wide; 400 is 200 inside it.
        let c = v.edge_correction(Vec2::new(400.0, 1500.0));
        assert!((c.x - 200.0 * v.scale).abs() < EPS);
    }

    #[test]
    fn correction_is_not_clamped() {
        let v = view();
        let far = v.edge_correction(Vec2::new(-10_000.0, 1500.0));
        assert!((far.x - 10_600.0 * v.scale).abs() < 1e-2);
    }

    #[test]
    fn render_draws_background_field_and_stars() {
        let v = view();
        let field = StarField::new(Vec2::new(4000.0, 3000.0), 1000.0, 100.0, Vec2::ZERO);
        let ship = Ship::new(Vec2::new(2000.0, 2925.0), Vec2::new(0.0, -2.0), false, 32.0);
        let mut surface = FrameRecorder::new(Vec2::new(200.0, 150.0));
        let sprite = Handle::<Image>::default();
        v.render(&mut surface, &field, &ship, Some(&sprite));

        let cmds = surface.commands();
        // Background + field + 4×3 stars + marker.
        assert_eq!(cmds.len(), 2 + 12 + 1);
        assert_eq!(cmds[0].transform, Affine2::IDENTITY);
        assert!(matches!(cmds.last().map(|c| &c.kind), Some(DrawKind::Image { .. })));
        assert_eq!(surface.depth(), 0);
    }
}
