//! Bevy host: frame driver, keyboard input, sprite loading, and presentation.
//!
//! ## System Responsibilities
//!
//! | System                       | Schedule    | Purpose                                        |
//! |------------------------------|-------------|------------------------------------------------|
//! | `setup_camera`               | Startup     | Spawn the 2D camera                            |
//! | `setup_game`                 | Startup     | Build `Game` from the window, start sprite load|
//! | `game_tick_system`           | FixedUpdate | `Game::run` into both frame recorders          |
//! | `keyboard_input_system`      | Update      | Key presses → ship actions, `P` pauses         |
//! | `track_ship_sprite_system`   | Update      | Flip `ShipSprite::ready` once the PNG loads    |
//! | `present_frames_system`      | Update      | Mirror recorded commands into sprites/labels   |
//!
//! ## Presentation model
//!
//! The game draws through the canvas-like [`Surface`] API into two
//! [`FrameRecorder`]s.  `present_frames_system` turns each recorded command
//! into a retained entity from a pool: fill-rects and images become `Sprite`s,
//! text becomes `Text2d`.  Surface pixels (origin top-left, y down) are
//! converted to world space (origin centre, y up) for a camera at the origin.
//! The overview sits in the window's top-right corner, drawn above the main
//! view.  Commands anchored outside their surface are culled.

use crate::config::GameConfig;
use crate::game::Game;
use crate::math::decompose;
use crate::ship::ShipAction;
use crate::surface::{DrawCommand, DrawKind, FrameRecorder, Surface};
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_asset::{AssetServer, LoadState};

/// Commands anchored further than this outside a surface are culled (pixels).
const CULL_MARGIN: f32 = 48.0;

/// Z of the first main-view command; later commands stack above.
const MAIN_Z: f32 = 0.0;

/// Z of the first overview command.
const OVERVIEW_Z: f32 = 10.0;

/// Z step between consecutive commands on one surface.
const Z_STEP: f32 = 0.001;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .add_systems(Startup, (setup_camera, setup_game))
            .add_systems(FixedUpdate, game_tick_system)
            .add_systems(
                Update,
                (
                    keyboard_input_system,
                    track_ship_sprite_system,
                    present_frames_system.after(keyboard_input_system),
                ),
            );
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// The two output surfaces for the current frame.
#[derive(Resource, Debug, Clone)]
pub struct SurfaceFrames {
    pub main: FrameRecorder,
    pub overview: FrameRecorder,
}

impl SurfaceFrames {
    pub fn new(main: Vec2, overview: Vec2) -> Self {
        Self {
            main: FrameRecorder::new(main),
            overview: FrameRecorder::new(overview),
        }
    }
}

/// Where each surface sits in the window (logical pixels, top-left origin).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub window: Vec2,
    pub main_origin: Vec2,
    pub overview_origin: Vec2,
}

impl SurfaceLayout {
    /// Main view fills the window; overview in the top-right corner.
    pub fn new(window: Vec2, overview: Vec2, corner_margin: f32) -> Self {
        Self {
            window,
            main_origin: Vec2::ZERO,
            overview_origin: Vec2::new(window.x - overview.x - corner_margin, corner_margin),
        }
    }

    /// Surface pixel at `origin` → world position for a centred camera.
    pub fn to_world(&self, origin: Vec2, p: Vec2) -> Vec2 {
        let w = origin + p;
        Vec2::new(w.x - self.window.x * 0.5, self.window.y * 0.5 - w.y)
    }
}

/// The ship sprite and whether it has finished loading.
#[derive(Resource, Debug, Clone)]
pub struct ShipSprite {
    pub handle: Handle<Image>,
    pub ready: bool,
    pub failed: bool,
}

impl ShipSprite {
    pub fn new(handle: Handle<Image>) -> Self {
        Self {
            handle,
            ready: false,
            failed: false,
        }
    }

    /// The handle, once the image can be drawn.
    pub fn ready_handle(&self) -> Option<&Handle<Image>> {
        self.ready.then_some(&self.handle)
    }
}

/// Pooled entity showing a recorded fill-rect or image.
#[derive(Component)]
pub struct SpriteNode;

/// Pooled entity showing a recorded text command.
#[derive(Component)]
pub struct LabelNode;

// ── Startup ───────────────────────────────────────────────────────────────────

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Build the game for the primary window, set the tick rate, and start
/// loading the ship sprite.
///
/// A missing window or one without a drawable area is fatal: the error is
/// logged and the app exits.
pub fn setup_game(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut fixed: ResMut<Time<Fixed>>,
    mut exit: MessageWriter<AppExit>,
) {
    let canvas = windows.single().ok().map(|w| Vec2::new(w.width(), w.height()));

    let game = match Game::new(&config, canvas) {
        Ok(game) => game,
        Err(e) => {
            error!("[SETUP] {e}");
            exit.write(AppExit::error());
            return;
        }
    };

    let canvas = game.current_level().canvas();
    let overview = config.minimap_size();
    info!(
        "[SETUP] {} level(s) on a {}×{} canvas, field {}",
        game.level_count(),
        canvas.x,
        canvas.y,
        game.current_level().field().size()
    );

    fixed.set_timestep_hz(config.frame_rate);
    commands.insert_resource(SurfaceFrames::new(canvas, overview));
    commands.insert_resource(SurfaceLayout::new(canvas, overview, config.minimap_corner_margin));
    commands.insert_resource(ShipSprite::new(asset_server.load(config.ship_sprite_path.clone())));
    commands.insert_resource(game);
}

// ── Frame driver ──────────────────────────────────────────────────────────────

/// One fixed tick: clear both recorders and run the current level into them.
///
/// While paused the previous frame stays on screen.
pub fn game_tick_system(
    game: Option<ResMut<Game>>,
    frames: Option<ResMut<SurfaceFrames>>,
    sprite: Option<Res<ShipSprite>>,
) {
    let (Some(mut game), Some(mut frames)) = (game, frames) else {
        return;
    };
    if !game.is_running() {
        return;
    }

    let frames = &mut *frames;
    frames.main.clear();
    frames.overview.clear();
    let sprite = sprite.as_deref().and_then(ShipSprite::ready_handle);
    game.run(&mut frames.main, &mut frames.overview, sprite);
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Logical name of a character key, for layouts where the physical WASD
/// positions carry other letters.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

/// Translate key presses (auto-repeat included) into ship actions.
///
/// - **P** toggles pause (repeats ignored).
/// - WASD / arrows, or the matching logical letters, steer the ship.
/// - Anything else is dropped, as are steering keys while paused.
pub fn keyboard_input_system(mut keys: MessageReader<KeyboardInput>, game: Option<ResMut<Game>>) {
    let Some(mut game) = game else {
        keys.read().for_each(drop);
        return;
    };

    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        if event.key_code == KeyCode::KeyP {
            if !event.repeat {
                let running = game.toggle_running();
                info!("[input] {}", if running { "resumed" } else { "paused" });
            }
            continue;
        }
        if !game.is_running() {
            continue;
        }

        let action = ShipAction::from_key_code(event.key_code)
            .or_else(|| key_name(&event.logical_key).and_then(ShipAction::from_key_name));
        if let Some(action) = action {
            game.handle_action(action);
        }
    }
}

// ── Assets ────────────────────────────────────────────────────────────────────

/// Mark the ship sprite ready once loaded; log once if loading fails.
pub fn track_ship_sprite_system(
    sprite: Option<ResMut<ShipSprite>>,
    asset_server: Res<AssetServer>,
) {
    let Some(mut sprite) = sprite else {
        return;
    };
    if sprite.ready || sprite.failed {
        return;
    }

    match asset_server.load_state(sprite.handle.id()) {
        LoadState::Loaded => {
            sprite.ready = true;
            info!("[ASSET] Ship sprite ready");
        }
        LoadState::Failed(err) => {
            sprite.failed = true;
            warn!("[ASSET] Ship sprite failed to load: {err}; the ship will not be drawn");
        }
        _ => {}
    }
}

// ── Presentation ──────────────────────────────────────────────────────────────

/// A recorded command resolved to world space.
#[derive(Debug, Clone)]
pub enum Placed {
    Sprite(Sprite, Transform),
    Label {
        text: String,
        font_size: f32,
        color: Color,
        transform: Transform,
    },
}

/// Resolve one command on a surface at `origin`.  `None` when culled.
pub fn place(
    cmd: &DrawCommand,
    surface: Vec2,
    origin: Vec2,
    layout: &SurfaceLayout,
    z: f32,
) -> Option<Placed> {
    let anchor = cmd.anchor();
    let min = Vec2::splat(-CULL_MARGIN);
    let max = surface + Vec2::splat(CULL_MARGIN);
    if anchor.cmplt(min).any() || anchor.cmpgt(max).any() {
        return None;
    }

    let (_, rotation, scale) = decompose(cmd.transform);
    let world = layout.to_world(origin, anchor);
    // Surface rotations are clockwise on screen (y down); world is y up.
    let at = |extra: f32| {
        Transform::from_xyz(world.x, world.y, z)
            .with_rotation(Quat::from_rotation_z(-(rotation + extra)))
    };

    Some(match &cmd.kind {
        DrawKind::Rect { rect, color } => {
            Placed::Sprite(Sprite::from_color(*color, rect.size() * scale), at(0.0))
        }
        DrawKind::Image {
            image,
            size,
            rotation: own,
            ..
        } => Placed::Sprite(
            Sprite {
                image: image.clone(),
                custom_size: Some(*size * scale),
                ..default()
            },
            at(*own),
        ),
        DrawKind::Text {
            text,
            font_size,
            color,
            ..
        } => Placed::Label {
            text: text.clone(),
            font_size: font_size * scale,
            color: *color,
            transform: at(0.0),
        },
    })
}

/// Resolve every command of one recorder, stacking them upward from `base_z`.
pub fn place_all(
    recorder: &FrameRecorder,
    origin: Vec2,
    layout: &SurfaceLayout,
    base_z: f32,
) -> Vec<Placed> {
    let size = recorder.size();
    recorder
        .commands()
        .iter()
        .enumerate()
        .filter_map(|(i, cmd)| place(cmd, size, origin, layout, base_z + i as f32 * Z_STEP))
        .collect()
}

/// Mirror both recorders into the sprite and label pools.
///
/// Pool entities are reused in query order; extras are spawned, leftovers
/// hidden.  Runs only when the frames changed.
#[allow(clippy::type_complexity)]
pub fn present_frames_system(
    mut commands: Commands,
    frames: Option<Res<SurfaceFrames>>,
    layout: Option<Res<SurfaceLayout>>,
    mut sprites: Query<
        (&mut Sprite, &mut Transform, &mut Visibility),
        (With<SpriteNode>, Without<LabelNode>),
    >,
    mut labels: Query<
        (&mut Text2d, &mut TextFont, &mut TextColor, &mut Transform, &mut Visibility),
        (With<LabelNode>, Without<SpriteNode>),
    >,
) {
    let (Some(frames), Some(layout)) = (frames, layout) else {
        return;
    };
    if !frames.is_changed() {
        return;
    }

    let mut placed = place_all(&frames.main, layout.main_origin, &layout, MAIN_Z);
    placed.extend(place_all(&frames.overview, layout.overview_origin, &layout, OVERVIEW_Z));

    let mut sprite_pool = sprites.iter_mut();
    let mut label_pool = labels.iter_mut();

    for item in placed {
        match item {
            Placed::Sprite(sprite, transform) => match sprite_pool.next() {
                Some((mut s, mut t, mut v)) => {
                    *s = sprite;
                    *t = transform;
                    v.set_if_neq(Visibility::Visible);
                }
                None => {
                    commands.spawn((SpriteNode, sprite, transform));
                }
            },
            Placed::Label {
                text,
                font_size,
                color,
                transform,
            } => match label_pool.next() {
                Some((mut txt, mut font, mut col, mut t, mut v)) => {
                    if txt.0 != text {
                        txt.0 = text;
                    }
                    font.font_size = font_size;
                    col.0 = color;
                    *t = transform;
                    v.set_if_neq(Visibility::Visible);
                }
                None => {
                    commands.spawn((
                        LabelNode,
                        Text2d::new(text),
                        TextFont {
                            font_size,
                            ..default()
                        },
                        TextColor(color),
                        transform,
                    ));
                }
            },
        }
    }

    for (_, _, mut v) in sprite_pool {
        v.set_if_neq(Visibility::Hidden);
    }
    for (_, _, _, _, mut v) in label_pool {
        v.set_if_neq(Visibility::Hidden);
    }
}
