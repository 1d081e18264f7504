use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::{Rectangle, Vector2};

use crate::resources::texturestore::Texture;

/// Drawable textured quad.
///
/// `center` is the pivot used for placement and rotation, `angle` is in
/// degrees, and `scale_x`/`scale_y` multiply the texture's pixel size.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub texture: Texture,
    pub center: Vector2,
    pub angle: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// A sprite shared between its renderer and at most one batch.
pub type SharedSprite = Rc<RefCell<Sprite>>;

impl Sprite {
    pub fn new(texture: Texture, scale: f32) -> Self {
        Self {
            texture,
            center: Vector2 { x: 0.0, y: 0.0 },
            angle: 0.0,
            scale_x: scale,
            scale_y: scale,
        }
    }

    /// Wrap into the shared form used by renderers and batches.
    pub fn shared(self) -> SharedSprite {
        Rc::new(RefCell::new(self))
    }

    /// Rendered width in pixels.
    pub fn width(&self) -> f32 {
        self.texture.width() * self.scale_x
    }

    /// Rendered height in pixels.
    pub fn height(&self) -> f32 {
        self.texture.height() * self.scale_y
    }

    /// Destination rectangle, top-left anchored, before rotation.
    pub fn dest_rect(&self) -> Rectangle {
        let (w, h) = (self.width(), self.height());
        Rectangle {
            x: self.center.x - w / 2.0,
            y: self.center.y - h / 2.0,
            width: w,
            height: h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_uniform_scale() {
        let s = Sprite::new(Texture::new("x.png", 10.0, 20.0), 2.0);
        assert_eq!(s.scale_x, 2.0);
        assert_eq!(s.scale_y, 2.0);
        assert_eq!(s.width(), 20.0);
        assert_eq!(s.height(), 40.0);
    }

    #[test]
    fn test_dest_rect_is_centered() {
        let mut s = Sprite::new(Texture::new("x.png", 10.0, 10.0), 1.0);
        s.center = Vector2 { x: 100.0, y: 50.0 };
        let r = s.dest_rect();
        assert_eq!(r.x, 95.0);
        assert_eq!(r.y, 45.0);
        assert_eq!(r.width, 10.0);
        assert_eq!(r.height, 10.0);
    }
}
