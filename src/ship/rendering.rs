//! Ship drawing for the main view and the overview.
//!
//! The sprite loads asynchronously; until it is ready both calls draw nothing.

use super::state::Ship;
use crate::constants::MINIMAP_SHIP_MARKER;
use crate::surface::Surface;
use bevy::prelude::*;

impl Ship {
    /// Draw the sprite at the ship's location in the surface's current
    /// (space) coordinates, turned to face along the velocity.
    ///
    /// Under the rotating main view the two rotations cancel and the ship
    /// points up on screen; under the translate-only view it shows its heading.
    pub fn render(&self, surface: &mut impl Surface, sprite: Option<&Handle<Image>>) {
        let Some(image) = sprite else {
            return;
        };
        surface.draw_image(image, self.loc, Vec2::splat(self.size), self.facing());
    }

    /// Draw the overview marker: the same sprite, sized to stay
    /// `MINIMAP_SHIP_MARKER` overview pixels across under `scale`.
    pub fn render_marker(
        &self,
        surface: &mut impl Surface,
        sprite: Option<&Handle<Image>>,
        scale: f32,
    ) {
        let Some(image) = sprite else {
            return;
        };
        let size = Vec2::splat(MINIMAP_SHIP_MARKER / scale);
        surface.draw_image(image, self.loc, size, self.facing());
    }
}
