//! A level: one star field, one ship, the placeholder actors, and the
//! per-frame update + dual-surface render sequence.

use crate::actors::{Actor, Boid, Predator, SafeArea};
use crate::config::GameConfig;
use crate::minimap::MinimapView;
use crate::ship::{Ship, ShipAction, ShipTuning};
use crate::star::StarField;
use crate::surface::Surface;
use crate::view::MainView;
use bevy::prelude::*;

/// Main-view background.
const BACKGROUND: Color = Color::srgb(0.22, 0.22, 0.24);

/// Where the level banner sits on the main surface.
const BANNER_AT: Vec2 = Vec2::new(16.0, 32.0);

/// Level number spelled out for the banner.
pub fn level_word(number: usize) -> String {
    const WORDS: [&str; 4] = ["Zero", "One", "Two", "Three"];
    WORDS
        .get(number)
        .map(|w| w.to_string())
        .unwrap_or_else(|| number.to_string())
}

pub struct Level {
    number: usize,
    canvas: Vec2,
    field: StarField,
    ship: Ship,
    tuning: ShipTuning,
    minimap: MinimapView,
    rotate_view: bool,
    star_font_size: f32,
    banner_font_size: f32,
    predator: Predator,
    safe_area: SafeArea,
    boids: Vec<Boid>,
}

impl Level {
    /// Build level `number` for a main surface of `canvas` pixels.
    ///
    /// The field is `field_scale` canvases large.  The ship spawns near the
    /// bottom centre and the camera starts with the ship in the middle of the
    /// main surface.
    pub fn new(number: usize, canvas: Vec2, config: &GameConfig) -> Self {
        let field_size = canvas * config.field_scale;
        let ship = Ship::spawn(
            field_size,
            config.ship_start_offset,
            config.ship_start_speed,
            config.smoothing,
            config.ship_size,
        );
        let camera = ship.loc - canvas * 0.5;
        let field = StarField::new(field_size, config.star_spacing, config.star_offset, camera);
        debug!(
            "level {number}: field {field_size}, {} stars, ship at {}",
            field.stars().len(),
            ship.loc
        );

        Self {
            number,
            canvas,
            minimap: MinimapView::from_config(config, field_size),
            field,
            ship,
            tuning: config.ship_tuning(),
            rotate_view: config.rotate_view,
            star_font_size: config.star_font_size,
            banner_font_size: config.banner_font_size,
            predator: Predator,
            safe_area: SafeArea,
            boids: vec![Boid; config.boids_per_level],
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn boid_count(&self) -> usize {
        self.boids.len()
    }

    pub fn banner(&self) -> String {
        format!("Level {}", level_word(self.number))
    }

    /// Apply one key press to the ship.
    pub fn handle_action(&mut self, action: ShipAction) {
        self.ship.apply_action(action, &self.tuning);
    }

    /// Advance the ship one tick and move the camera with it.
    pub fn update(&mut self) {
        let displacement = self.ship.update(&self.tuning);
        self.field.update(displacement);
    }

    pub fn main_view(&self) -> MainView {
        MainView::new(self.field.camera, &self.ship, self.rotate_view)
    }

    /// Draw the main view: background, rotated space (stars, ship), banner.
    pub fn render(&self, surface: &mut impl Surface, sprite: Option<&Handle<Image>>) {
        let size = surface.size();
        surface.save();
        surface.fill_rect(Rect::from_corners(Vec2::ZERO, size), BACKGROUND);

        surface.save();
        surface.transform(self.main_view().transform());
        self.field.render_all(surface, self.star_font_size);
        self.ship.render(surface, sprite);
        surface.restore();

        surface.fill_text(&self.banner(), BANNER_AT, self.banner_font_size, Color::WHITE);
        surface.restore();
    }

    pub fn render_overview(&self, surface: &mut impl Surface, sprite: Option<&Handle<Image>>) {
        self.minimap.render(surface, &self.field, &self.ship, sprite);
    }

    /// One frame: update, then both views from the same post-update state,
    /// then every placeholder actor.
    pub fn run(
        &mut self,
        main: &mut impl Surface,
        overview: &mut impl Surface,
        sprite: Option<&Handle<Image>>,
    ) {
        self.update();
        self.render(main, sprite);
        self.render_overview(overview, sprite);

        self.predator.run(main);
        self.safe_area.run(main);
        for boid in self.boids.iter_mut() {
            boid.run(main);
        }
    }
}
