//! Sprite batches.
//!
//! A [`SpriteBatch`] draws many sprites in one pass. The application owns the
//! batch; renderers keep a [`WeakSpriteBatch`] so they can leave it again
//! without keeping it alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::components::sprite::SharedSprite;
use crate::systems::render::Canvas;

/// Shared, ordered list of sprites drawn together.
///
/// Clones refer to the same batch. Membership is by identity, so two sprites
/// with equal contents are still distinct entries.
#[derive(Clone, Default)]
pub struct SpriteBatch {
    sprites: Rc<RefCell<Vec<SharedSprite>>>,
}

/// Non-owning reference to a [`SpriteBatch`].
#[derive(Clone, Default)]
pub struct WeakSpriteBatch {
    sprites: Weak<RefCell<Vec<SharedSprite>>>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, sprite: SharedSprite) {
        self.sprites.borrow_mut().push(sprite);
    }

    /// Remove `sprite`. Returns false if it was not in the batch.
    pub fn remove(&self, sprite: &SharedSprite) -> bool {
        let mut sprites = self.sprites.borrow_mut();
        match sprites.iter().position(|s| Rc::ptr_eq(s, sprite)) {
            Some(idx) => {
                sprites.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, sprite: &SharedSprite) -> bool {
        self.sprites.borrow().iter().any(|s| Rc::ptr_eq(s, sprite))
    }

    pub fn len(&self) -> usize {
        self.sprites.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.borrow().is_empty()
    }

    /// Draw every sprite in insertion order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for sprite in self.sprites.borrow().iter() {
            canvas.draw_sprite(&sprite.borrow());
        }
    }

    pub fn downgrade(&self) -> WeakSpriteBatch {
        WeakSpriteBatch {
            sprites: Rc::downgrade(&self.sprites),
        }
    }

    /// True when both handles refer to the same batch.
    pub fn ptr_eq(&self, other: &SpriteBatch) -> bool {
        Rc::ptr_eq(&self.sprites, &other.sprites)
    }
}

impl WeakSpriteBatch {
    /// The batch, if the application still holds it.
    pub fn upgrade(&self) -> Option<SpriteBatch> {
        self.sprites.upgrade().map(|sprites| SpriteBatch { sprites })
    }
}
