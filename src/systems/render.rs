//! Drawing.
//!
//! Components draw into a [`Canvas`]. The game records a frame into a
//! [`DrawList`] while it walks its objects and batches, then
//! [`render_draw_list`] replays the list inside raylib's drawing scope,
//! resolving texture keys against the [`TextureStore`].
//!
//! Tests inspect the recorded list directly instead of opening a window.

use log::trace;
use raylib::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::texturestore::TextureStore;

/// Draw target consumed by components and batches.
pub trait Canvas {
    /// Fill `rect` (top-left anchored) with `color`.
    fn draw_rect_filled(&mut self, rect: Rectangle, color: Color);
    /// Draw a sprite at its center, rotation and scale.
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// Build a top-left anchored rectangle from a center point and a size.
pub fn rect_xywh(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x: x - width / 2.0,
        y: y - height / 2.0,
        width,
        height,
    }
}

/// One recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Rect {
        rect: Rectangle,
        color: Color,
    },
    Sprite {
        texture_key: String,
        texture_size: Vector2,
        /// Unrotated screen bounds, top-left anchored.
        bounds: Rectangle,
        /// Degrees, clockwise.
        rotation: f32,
    },
}

/// Canvas that records draw calls for later replay.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded command, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded sprite draws using `texture_key`.
    pub fn sprite_draws(&self, texture_key: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { texture_key: k, .. } if k == texture_key))
            .count()
    }

    /// Number of recorded rectangle fills.
    pub fn rect_draws(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn draw_rect_filled(&mut self, rect: Rectangle, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.commands.push(DrawCommand::Sprite {
            texture_key: sprite.texture.key().to_string(),
            texture_size: Vector2 {
                x: sprite.texture.width(),
                y: sprite.texture.height(),
            },
            bounds: sprite.dest_rect(),
            rotation: sprite.angle,
        });
    }
}

/// Replay a recorded frame through raylib.
///
/// Sprites whose texture key is not in the store are skipped.
pub fn render_draw_list<D: RaylibDraw>(d: &mut D, textures: &TextureStore, list: &DrawList) {
    for command in list.commands() {
        match command {
            DrawCommand::Rect { rect, color } => {
                d.draw_rectangle_rec(*rect, *color);
            }
            DrawCommand::Sprite {
                texture_key,
                texture_size,
                bounds,
                rotation,
            } => {
                let Some(tex) = textures.get(texture_key) else {
                    trace!("Skipping sprite with unloaded texture {}", texture_key);
                    continue;
                };
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: texture_size.x,
                    height: texture_size.y,
                };
                // raylib rotates around `origin`, placed at dest.x/dest.y
                let origin = Vector2 {
                    x: bounds.width / 2.0,
                    y: bounds.height / 2.0,
                };
                let dest = Rectangle {
                    x: bounds.x + origin.x,
                    y: bounds.y + origin.y,
                    width: bounds.width,
                    height: bounds.height,
                };
                d.draw_texture_pro(tex, src, dest, origin, *rotation, Color::WHITE);
            }
        }
    }
}
