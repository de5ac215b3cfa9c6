//! Top-level game: the ordered levels, which one is current, and pause.

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::level::Level;
use crate::ship::ShipAction;
use crate::surface::Surface;
use bevy::prelude::*;

/// Owns every level.  Held as a Bevy resource and handed explicitly to the
/// frame and input systems.
#[derive(Resource)]
pub struct Game {
    levels: Vec<Level>,
    /// 1-based index into `levels`.
    current_level: usize,
    is_running: bool,
}

impl Game {
    /// Build all levels for a main surface of `canvas` pixels.
    ///
    /// `None` means there is no drawing surface at all; a surface without a
    /// positive, finite area has no usable 2D context.  Both are fatal.
    pub fn new(config: &GameConfig, canvas: Option<Vec2>) -> GameResult<Self> {
        let canvas = canvas.ok_or(GameError::NoSurface)?;
        if !(canvas.is_finite() && canvas.x > 0.0 && canvas.y > 0.0) {
            return Err(GameError::NoContext {
                width: canvas.x,
                height: canvas.y,
            });
        }

        let levels: Vec<Level> = (1..=config.level_count.max(1))
            .map(|number| Level::new(number, canvas, config))
            .collect();

        Ok(Self {
            levels,
            current_level: 1,
            is_running: true,
        })
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level_number(&self) -> usize {
        self.current_level
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current_level - 1]
    }

    pub fn current_level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current_level - 1]
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Flip pause; returns the new running state.
    pub fn toggle_running(&mut self) -> bool {
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Route a key press to the current level's ship.
    pub fn handle_action(&mut self, action: ShipAction) {
        self.current_level_mut().handle_action(action);
    }

    /// One frame of the current level.  Does nothing while paused.
    pub fn run(
        &mut self,
        main: &mut impl Surface,
        overview: &mut impl Surface,
        sprite: Option<&Handle<Image>>,
    ) {
        if self.is_running {
            self.current_level_mut().run(main, overview, sprite);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameRecorder;

    fn new_game() -> Game {
        Game::new(&GameConfig::default(), Some(Vec2::new(800.0, 600.0))).expect("game")
    }

    #[test]
    fn missing_surface_is_fatal() {
        assert!(matches!(
            Game::new(&GameConfig::default(), None),
            Err(GameError::NoSurface)
        ));
    }

    #[test]
    fn empty_surface_has_no_context() {
        assert!(matches!(
            Game::new(&GameConfig::default(), Some(Vec2::new(0.0, 600.0))),
            Err(GameError::NoContext { .. })
        ));
        assert!(matches!(
            Game::new(&GameConfig::default(), Some(Vec2::new(f32::NAN, 600.0))),
            Err(GameError::NoContext { .. })
        ));
    }

    #[test]
    fn starts_on_level_one_running() {
        let config = GameConfig {
            level_count: 3,
            ..GameConfig::default()
        };
        let game = Game::new(&config, Some(Vec2::new(800.0, 600.0))).expect("game");
        assert_eq!(game.level_count(), 3);
        assert_eq!(game.current_level_number(), 1);
        assert_eq!(game.current_level().number(), 1);
        assert!(game.is_running());
    }

    #[test]
    fn paused_game_neither_moves_nor_draws() {
        let mut game = new_game();
        let before = game.current_level().ship().loc;
        assert!(!game.toggle_running());

        let mut main = FrameRecorder::new(Vec2::new(800.0, 600.0));
        let mut overview = FrameRecorder::new(Vec2::new(200.0, 150.0));
        game.run(&mut main, &mut overview, None);

        assert_eq!(game.current_level().ship().loc, before);
        assert!(main.commands().is_empty());
        assert!(overview.commands().is_empty());
    }

    #[test]
    fn actions_reach_the_current_ship() {
        let mut game = new_game();
        game.handle_action(ShipAction::Forward);
        let target = game.current_level().ship().steering();
        assert!((target - Vec2::new(0.0, -2.5)).length() < 1e-5);
    }
}
