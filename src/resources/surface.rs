//! Reference surfaces for screen-relative layout.
//!
//! A [`Surface`] is anything with a width and a height that other objects can
//! lay themselves out against. The application window and every
//! [`GameObject`](crate::gameobject::GameObject) footprint are surfaces.
//!
//! [`SharedSize`] is the handle both of them hand out: the owner keeps one
//! clone and writes the current size into it, consumers keep another clone
//! and read it every frame. The window loop refreshes its handle once per
//! frame so resizes propagate without any global lookup.

use std::cell::Cell;
use std::rc::Rc;

use raylib::prelude::Vector2;

/// Something with a size in pixels.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Width and height packed into a vector.
    fn size(&self) -> Vector2 {
        Vector2 {
            x: self.width(),
            y: self.height(),
        }
    }
}

/// Cheaply clonable, shared width/height pair.
///
/// Clones observe the same cell, so a write through any clone is seen by all
/// of them.
#[derive(Clone, Debug)]
pub struct SharedSize {
    size: Rc<Cell<Vector2>>,
}

impl SharedSize {
    /// Create a new shared size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Rc::new(Cell::new(Vector2 {
                x: width,
                y: height,
            })),
        }
    }

    /// Overwrite the size seen by every clone of this handle.
    pub fn set(&self, width: f32, height: f32) {
        self.size.set(Vector2 {
            x: width,
            y: height,
        });
    }

    /// Overwrite the size from a vector.
    pub fn set_vec(&self, size: Vector2) {
        self.size.set(size);
    }

    /// True when both handles observe the same cell.
    pub fn ptr_eq(&self, other: &SharedSize) -> bool {
        Rc::ptr_eq(&self.size, &other.size)
    }
}

impl Default for SharedSize {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Surface for SharedSize {
    fn width(&self) -> f32 {
        self.size.get().x
    }

    fn height(&self) -> f32 {
        self.size.get().y
    }
}
