//! Screen-relative layout component.
//!
//! [`ScreenRelativeTransform`] keeps its owner's [`Transform`] pinned to a
//! fraction of a reference [`Surface`]: the application window, or another
//! game object's footprint (see
//! [`GameObject::surface`](crate::gameobject::GameObject::surface)).
//!
//! Every update both position and scale are recomputed from the subject's
//! current size, so the object follows window resizes. There is no
//! smoothing; the transform snaps to the new values each frame.
//!
//! # Example
//!
//! A panel 35% of the window wide, full height, centered:
//!
//! ```ignore
//! menu.add_component(ScreenRelativeTransform::new(window.clone(), 0.5, 0.5, 0.35, 1.0));
//! ```

use raylib::prelude::Vector2;

use super::transform::Transform;
use super::{Component, Owner};
use crate::resources::surface::Surface;

pub struct ScreenRelativeTransform {
    subject: Box<dyn Surface>,
    /// Position as fractions of the subject's width and height.
    pub relative_position: Vector2,
    /// Scale as fractions of the subject's width and height.
    pub relative_scale: Vector2,
}

impl ScreenRelativeTransform {
    pub fn new(
        subject: impl Surface + 'static,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Self {
        Self {
            subject: Box::new(subject),
            relative_position: Vector2 { x, y },
            relative_scale: Vector2 {
                x: scale_x,
                y: scale_y,
            },
        }
    }

    /// Swap the reference surface.
    pub fn set_subject(&mut self, subject: impl Surface + 'static) {
        self.subject = Box::new(subject);
    }

    /// Write the layout for the subject's current size into `transform`.
    pub fn apply(&self, transform: &mut Transform) {
        let (w, h) = (self.subject.width(), self.subject.height());
        transform.position = Vector2 {
            x: self.relative_position.x * w,
            y: self.relative_position.y * h,
        };
        transform.scale = Vector2 {
            x: self.relative_scale.x * w,
            y: self.relative_scale.y * h,
        };
    }
}

impl Component for ScreenRelativeTransform {
    fn update(&mut self, owner: &mut Owner<'_>, _dt: f32) {
        if let Some(t) = owner.transform_mut() {
            self.apply(t);
        }
    }

    crate::impl_as_any!();
}
