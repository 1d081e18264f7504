//! Sprite renderer component.
//!
//! [`SpriteRendererComponent`] bridges its owner's [`Transform`] to a
//! [`Sprite`]. Every update it copies position and rotation over and turns
//! the transform scale (a target size in pixels) into per-axis sprite scale
//! factors for the current texture.
//!
//! A renderer draws its sprite itself unless the sprite was added to a
//! [`SpriteBatch`]; batched sprites are drawn once, by the batch owner.
//!
//! An optional [`FrameAnimation`] swaps the sprite texture while it plays.
//!
//! Textures must have non-zero dimensions; the scale conversion divides by
//! them unchecked.

use log::debug;

use super::animation::FrameAnimation;
use super::sprite::{SharedSprite, Sprite};
use super::transform::Transform;
use super::{Component, Owner};
use crate::resources::spritebatch::{SpriteBatch, WeakSpriteBatch};
use crate::resources::texturestore::{AssetError, Texture, TextureLoader};
use crate::systems::render::Canvas;

pub struct SpriteRendererComponent {
    sprite: SharedSprite,
    batch: Option<WeakSpriteBatch>,
    animation: Option<FrameAnimation>,
}

impl SpriteRendererComponent {
    /// Load `image_path` and wrap it in a sprite with a uniform base scale.
    pub fn new(
        loader: &mut dyn TextureLoader,
        image_path: &str,
        scale: f32,
    ) -> Result<Self, AssetError> {
        let texture = loader.load_texture(image_path)?;
        Ok(Self::from_texture(texture, scale))
    }

    pub fn from_texture(texture: Texture, scale: f32) -> Self {
        Self {
            sprite: Sprite::new(texture, scale).shared(),
            batch: None,
            animation: None,
        }
    }

    /// The sprite, shared with the batch it belongs to, if any.
    pub fn sprite(&self) -> &SharedSprite {
        &self.sprite
    }

    /// Copy position and rotation, and convert the pixel size into scale factors.
    pub fn sync_with_transform(&mut self, transform: &Transform) {
        let mut sprite = self.sprite.borrow_mut();
        sprite.center = transform.position;
        sprite.angle = transform.rotation;
        sprite.scale_x = transform.scale.x / sprite.texture.width();
        sprite.scale_y = transform.scale.y / sprite.texture.height();
    }

    /// Move the sprite into `batch`, leaving any previous batch first.
    pub fn add_to_batch(&mut self, batch: &SpriteBatch) -> &mut Self {
        self.leave_batch();
        batch.append(self.sprite.clone());
        self.batch = Some(batch.downgrade());
        self
    }

    /// Take the sprite out of its batch, if it is in one.
    pub fn leave_batch(&mut self) {
        if let Some(current) = self.batch.take().and_then(|weak| weak.upgrade()) {
            current.remove(&self.sprite);
        }
    }

    /// The batch currently drawing this sprite.
    ///
    /// `None` also when the batch has been dropped, in which case the
    /// renderer goes back to drawing the sprite itself.
    pub fn batch(&self) -> Option<SpriteBatch> {
        self.batch.as_ref().and_then(|weak| weak.upgrade())
    }

    pub fn is_batched(&self) -> bool {
        self.batch().is_some()
    }

    /// Store and bind `animation`, replacing any previous one.
    pub fn set_animation(&mut self, mut animation: FrameAnimation) -> &mut Self {
        animation.bind();
        self.animation = Some(animation);
        self
    }

    pub fn animation(&self) -> Option<&FrameAnimation> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut FrameAnimation> {
        self.animation.as_mut()
    }

    fn advance_animation(&mut self, dt: f32) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        if let Some(frame) = anim.on_update(dt) {
            self.sprite.borrow_mut().texture = frame.clone();
        }
    }
}

impl Component for SpriteRendererComponent {
    fn start(&mut self, owner: &mut Owner<'_>) {
        if let Some(t) = owner.transform() {
            self.sync_with_transform(t);
        }
    }

    fn update(&mut self, owner: &mut Owner<'_>, dt: f32) {
        if let Some(t) = owner.transform() {
            self.sync_with_transform(t);
        }
        self.advance_animation(dt);
    }

    fn draw(&mut self, _owner: &Owner<'_>, canvas: &mut dyn Canvas) {
        if !self.is_batched() {
            canvas.draw_sprite(&self.sprite.borrow());
        }
    }

    fn destroy(&mut self, owner: &mut Owner<'_>) {
        if self.is_batched() {
            debug!("{}: sprite renderer leaving its batch", owner.name);
        }
        self.leave_batch();
    }

    crate::impl_as_any!();
}
