//! Position, rotation and scale of a game object.
//!
//! `scale` is interpreted by the renderers as a target size in pixels: a
//! [`SpriteRendererComponent`](super::spriterenderer::SpriteRendererComponent)
//! with scale `(100, 100)` draws 100x100 pixels whatever the texture's
//! resolution, and a [`BoxRenderer`](super::boxrenderer::BoxRenderer) fills a
//! rectangle of exactly that size.

use raylib::prelude::Vector2;

#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// Center of the object in screen pixels.
    pub position: Vector2,
    /// Degrees, clockwise.
    pub rotation: f32,
    pub scale: Vector2,
}

impl Transform {
    /// Transform at `(x, y)` with no rotation and unit scale.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            rotation: 0.0,
            scale: Vector2 { x: 1.0, y: 1.0 },
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder-style: same scale on both axes.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vector2 { x: scale, y: scale };
        self
    }

    pub fn with_scale_xy(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vector2 { x: sx, y: sy };
        self
    }

    /// Grow (or shrink, with negative values) the scale on both axes.
    pub fn grow(&mut self, dx: f32, dy: f32) {
        self.scale.x += dx;
        self.scale.y += dy;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
