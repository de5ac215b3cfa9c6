use bevy::prelude::*;
use bevy::window::WindowResolution;
use star_drift::config::read_game_config;
use star_drift::presentation::GamePlugin;

fn main() {
    // The window is sized from the canvas dimensions, so the config has to be
    // known before the app is built.
    let config = read_game_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Star Drift".into(),
                resolution: WindowResolution::new(
                    config.canvas_width as u32,
                    config.canvas_height as u32,
                ),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .add_plugins(GamePlugin)
        .run();
}
