//! Filled-rectangle renderer.
//!
//! [`BoxRenderer`] fills the owner's footprint: centered on the transform
//! position, sized by the transform scale. With a translucent color it makes
//! a backdrop panel (the menu uses black at alpha 150).

use raylib::prelude::Color;

use super::{Component, Owner};
use crate::systems::render::{Canvas, rect_xywh};

#[derive(Clone, Copy, Debug)]
pub struct BoxRenderer {
    pub color: Color,
}

impl BoxRenderer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Create from RGBA values.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(Color::new(r, g, b, a))
    }
}

impl Component for BoxRenderer {
    fn draw(&mut self, owner: &Owner<'_>, canvas: &mut dyn Canvas) {
        let Some(t) = owner.transform() else {
            return;
        };
        canvas.draw_rect_filled(
            rect_xywh(t.position.x, t.position.y, t.scale.x, t.scale.y),
            self.color,
        );
    }

    crate::impl_as_any!();
}
