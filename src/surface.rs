//! Drawing surfaces: the canvas-like API the game renders through.
//!
//! The game never talks to Bevy's renderer directly.  Levels draw into a
//! [`Surface`]; the only implementation is [`FrameRecorder`], which captures
//! each call together with the transform active at the time.  The
//! presentation layer later mirrors a recorder's commands into retained
//! sprites and labels, and tests inspect the commands directly.
//!
//! Coordinates are surface pixels: origin at the top-left, y pointing down.

use bevy::math::{Affine2, Rect, Vec2};
use bevy::prelude::{Color, Handle, Image};

/// Canvas-style immediate drawing API.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Fill `rect` (in current coordinates) with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the last saved transform.  Without a matching `save` this is a no-op.
    fn restore(&mut self);

    /// Prepend a translation to the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Compose `affine` onto the current transform (applied to points first).
    fn transform(&mut self, affine: Affine2);

    /// Draw `image` centred on `center`, `size` wide, rotated by `rotation`
    /// radians about its centre.
    fn draw_image(&mut self, image: &Handle<Image>, center: Vec2, size: Vec2, rotation: f32);

    /// Draw `text` anchored at `at`.
    fn fill_text(&mut self, text: &str, at: Vec2, font_size: f32, color: Color);
}

/// What a recorded command draws.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    Rect {
        rect: Rect,
        color: Color,
    },
    Image {
        image: Handle<Image>,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        at: Vec2,
        font_size: f32,
        color: Color,
    },
}

/// One draw call plus the surface transform active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub transform: Affine2,
}

impl DrawCommand {
    /// Anchor point of the command in surface pixels.
    pub fn anchor(&self) -> Vec2 {
        let local = match &self.kind {
            DrawKind::Rect { rect, .. } => rect.center(),
            DrawKind::Image { center, .. } => *center,
            DrawKind::Text { at, .. } => *at,
        };
        self.transform.transform_point2(local)
    }
}

/// A [`Surface`] that records commands for one frame.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    size: Vec2,
    current: Affine2,
    stack: Vec<Affine2>,
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            current: Affine2::IDENTITY,
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Forget the previous frame.  Keeps the command allocation.
    pub fn clear(&mut self) {
        self.current = Affine2::IDENTITY;
        self.stack.clear();
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Transform that the next draw call would use.
    pub fn current_transform(&self) -> Affine2 {
        self.current
    }

    /// Saves not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Text of every recorded label, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match &c.kind {
            DrawKind::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, kind: DrawKind) {
        self.commands.push(DrawCommand {
            kind,
            transform: self.current,
        });
    }
}

impl Surface for FrameRecorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawKind::Rect { rect, color });
    }

    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.current = saved;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine2::from_translation(offset);
    }

    fn transform(&mut self, affine: Affine2) {
        self.current = self.current * affine;
    }

    fn draw_image(&mut self, image: &Handle<Image>, center: Vec2, size: Vec2, rotation: f32) {
        self.push(DrawKind::Image {
            image: image.clone(),
            center,
            size,
            rotation,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_size: f32, color: Color) {
        self.push(DrawKind::Text {
            text: text.to_string(),
            at,
            font_size,
            color,
        });
    }
}
