//! Components attachable to a [`GameObject`](crate::gameobject::GameObject).
//!
//! A component is a unit of behavior and state driven through four lifecycle
//! hooks, all optional:
//!
//! | hook      | when                                              |
//! |-----------|---------------------------------------------------|
//! | `start`   | right after the component is attached             |
//! | `update`  | once per frame, in the owner's update pass        |
//! | `draw`    | once per frame, in the owner's draw pass          |
//! | `destroy` | right before the component is detached            |
//!
//! Every hook receives an [`Owner`] view of the object it is attached to, so
//! components reach the owner's [`Transform`](transform::Transform) without
//! holding a reference to the object itself.
//!
//! Submodules overview:
//! - [`animation`] – frame-by-frame texture animation bound to a sprite renderer
//! - [`aspectratio`] – locks one scale axis to a ratio of the other
//! - [`boxrenderer`] – filled rectangle over the owner's footprint
//! - [`screenrelative`] – pins the owner to fractions of a reference surface
//! - [`sprite`] – drawable textured quad shared with batches
//! - [`spriterenderer`] – draws a sprite following the owner's transform
//! - [`transform`] – position, rotation and scale of an object

use std::any::Any;

use crate::gameobject::GameObjectId;
use crate::systems::render::Canvas;

pub mod animation;
pub mod aspectratio;
pub mod boxrenderer;
pub mod screenrelative;
pub mod sprite;
pub mod spriterenderer;
pub mod transform;

use transform::Transform;

/// The object a hook is running on behalf of.
///
/// Lent to the component for the duration of one hook call.
pub struct Owner<'a> {
    pub id: GameObjectId,
    pub name: &'a str,
    pub transform: &'a mut Option<Transform>,
}

impl Owner<'_> {
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.transform.as_mut()
    }
}

/// Behavior attachable to a game object.
///
/// Implementors only override the hooks they need. `as_any`/`as_any_mut`
/// let the owning object hand out typed references.
pub trait Component: Any {
    /// Called once, right after the component is attached.
    fn start(&mut self, _owner: &mut Owner<'_>) {}

    /// Called every frame with the elapsed time in seconds.
    fn update(&mut self, _owner: &mut Owner<'_>, _dt: f32) {}

    /// Called every frame after the update pass.
    fn draw(&mut self, _owner: &Owner<'_>, _canvas: &mut dyn Canvas) {}

    /// Called once, right before the component is detached.
    fn destroy(&mut self, _owner: &mut Owner<'_>) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implements the `as_any`/`as_any_mut` pair of [`Component`].
#[macro_export]
macro_rules! impl_as_any {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}
