//! Game objects: the composition root.
//!
//! A [`GameObject`] owns an optional [`Transform`] and any number of
//! [`Component`]s, grouped into buckets by concrete type. Several components
//! of the same type may be attached; they keep their insertion order inside
//! their bucket.
//!
//! # Ordering
//!
//! Buckets are walked in the order their type was first attached, then in
//! insertion order inside a bucket. This is the order of `update`, `draw`,
//! `remove_all_components` and `get_all_components`. Components that read a
//! value another component writes (e.g. an
//! [`AspectRatioComponent`](crate::components::aspectratio::AspectRatioComponent)
//! after a [`ScreenRelativeTransform`](crate::components::screenrelative::ScreenRelativeTransform))
//! must therefore be added after the writer.
//!
//! # Ownership
//!
//! Components are owned by the object. The link back to the owner is the
//! [`ComponentId`] assigned at attach time plus the [`Owner`] view lent to
//! every hook call; no component ever holds the object itself.

use std::any::TypeId;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;
use smallvec::SmallVec;

use crate::components::transform::Transform;
use crate::components::{Component, Owner};
use crate::resources::surface::SharedSize;
use crate::systems::render::Canvas;

static NEXT_OBJECT_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of a game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameObjectId(u32);

impl GameObjectId {
    fn next() -> Self {
        GameObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to one attached component.
///
/// Carries the id of the owning object, so a handle presented to the wrong
/// object is recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId {
    owner: GameObjectId,
    serial: u32,
}

impl ComponentId {
    /// The object this component was attached to.
    pub fn owner(&self) -> GameObjectId {
        self.owner
    }
}

struct Slot {
    id: ComponentId,
    component: Box<dyn Component>,
}

struct Bucket {
    kind: TypeId,
    slots: SmallVec<[Slot; 1]>,
}

/// Freshly attached component, returned by [`GameObject::add_component`].
///
/// Derefs to the component for chaining.
pub struct ComponentRef<'a, T> {
    id: ComponentId,
    component: &'a mut T,
}

impl<'a, T> ComponentRef<'a, T> {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Give up the handle and keep the plain reference.
    pub fn into_mut(self) -> &'a mut T {
        self.component
    }
}

impl<T> Deref for ComponentRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.component
    }
}

impl<T> DerefMut for ComponentRef<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.component
    }
}

pub struct GameObject {
    id: GameObjectId,
    name: String,
    transform: Option<Transform>,
    buckets: Vec<Bucket>,
    next_serial: u32,
    footprint: SharedSize,
}

impl GameObject {
    pub fn new(name: impl Into<String>, transform: Option<Transform>) -> Self {
        let obj = Self {
            id: GameObjectId::next(),
            name: name.into(),
            transform,
            buckets: Vec::new(),
            next_serial: 0,
            footprint: SharedSize::default(),
        };
        obj.publish_footprint();
        obj
    }

    /// Object with a transform, the common case.
    pub fn with_transform(name: impl Into<String>, transform: Transform) -> Self {
        Self::new(name, Some(transform))
    }

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.transform.as_mut()
    }

    pub fn set_transform(&mut self, transform: Option<Transform>) {
        self.transform = transform;
        self.publish_footprint();
    }

    /// This object's footprint (transform scale) as a layout surface.
    ///
    /// The handle is refreshed at the end of every [`update`](Self::update),
    /// so objects laid out against it follow one frame behind.
    pub fn surface(&self) -> SharedSize {
        self.footprint.clone()
    }

    fn publish_footprint(&self) {
        if let Some(t) = &self.transform {
            self.footprint.set_vec(t.scale);
        }
    }

    /// Attach a component, run its `start` hook and return it.
    pub fn add_component<T: Component>(&mut self, component: T) -> ComponentRef<'_, T> {
        let id = ComponentId {
            owner: self.id,
            serial: self.next_serial,
        };
        self.next_serial += 1;

        let kind = TypeId::of::<T>();
        let idx = match self.buckets.iter().position(|b| b.kind == kind) {
            Some(idx) => idx,
            None => {
                self.buckets.push(Bucket {
                    kind,
                    slots: SmallVec::new(),
                });
                self.buckets.len() - 1
            }
        };
        debug!(
            "{}: attaching {}",
            self.name,
            std::any::type_name::<T>()
        );

        let bucket = &mut self.buckets[idx];
        bucket.slots.push(Slot {
            id,
            component: Box::new(component),
        });
        let slot = bucket
            .slots
            .last_mut()
            .expect("slot was pushed just above");

        let mut owner = Owner {
            id: self.id,
            name: &self.name,
            transform: &mut self.transform,
        };
        slot.component.start(&mut owner);

        let component = slot
            .component
            .as_any_mut()
            .downcast_mut::<T>()
            .expect("bucket holds components of its own kind");
        ComponentRef { id, component }
    }

    fn bucket<T: Component>(&self) -> Option<&Bucket> {
        let kind = TypeId::of::<T>();
        self.buckets.iter().find(|b| b.kind == kind)
    }

    fn bucket_mut<T: Component>(&mut self) -> Option<&mut Bucket> {
        let kind = TypeId::of::<T>();
        self.buckets.iter_mut().find(|b| b.kind == kind)
    }

    /// First attached component of type `T`.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.bucket::<T>()?
            .slots
            .first()
            .and_then(|s| s.component.as_any().downcast_ref::<T>())
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.bucket_mut::<T>()?
            .slots
            .first_mut()
            .and_then(|s| s.component.as_any_mut().downcast_mut::<T>())
    }

    /// Every attached component of type `T`, in insertion order.
    pub fn get_components<T: Component>(&self) -> Vec<&T> {
        match self.bucket::<T>() {
            Some(bucket) => bucket
                .slots
                .iter()
                .filter_map(|s| s.component.as_any().downcast_ref::<T>())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn get_components_mut<T: Component>(&mut self) -> Vec<&mut T> {
        match self.bucket_mut::<T>() {
            Some(bucket) => bucket
                .slots
                .iter_mut()
                .filter_map(|s| s.component.as_any_mut().downcast_mut::<T>())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Component behind `id`, if it is attached here and is a `T`.
    pub fn component<T: Component>(&self, id: ComponentId) -> Option<&T> {
        self.buckets
            .iter()
            .flat_map(|b| b.slots.iter())
            .find(|s| s.id == id)
            .and_then(|s| s.component.as_any().downcast_ref::<T>())
    }

    pub fn component_mut<T: Component>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.buckets
            .iter_mut()
            .flat_map(|b| b.slots.iter_mut())
            .find(|s| s.id == id)
            .and_then(|s| s.component.as_any_mut().downcast_mut::<T>())
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.bucket::<T>().is_some()
    }

    /// Whether `id` is currently attached to this object.
    pub fn contains(&self, id: ComponentId) -> bool {
        id.owner == self.id
            && self
                .buckets
                .iter()
                .any(|b| b.slots.iter().any(|s| s.id == id))
    }

    /// Detach the component behind `id`, running its `destroy` hook first.
    ///
    /// Returns the detached component, or `None` when `id` is not attached to
    /// this object (including handles from other objects).
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        if id.owner != self.id {
            debug!("{}: ignoring removal of a foreign component", self.name);
            return None;
        }
        let Some((b, s)) = self.buckets.iter().enumerate().find_map(|(b, bucket)| {
            bucket
                .slots
                .iter()
                .position(|slot| slot.id == id)
                .map(|s| (b, s))
        }) else {
            debug!("{}: component already detached", self.name);
            return None;
        };

        let mut owner = Owner {
            id: self.id,
            name: &self.name,
            transform: &mut self.transform,
        };
        let bucket = &mut self.buckets[b];
        bucket.slots[s].component.destroy(&mut owner);
        let slot = bucket.slots.remove(s);
        if bucket.slots.is_empty() {
            self.buckets.remove(b);
        }
        Some(slot.component)
    }

    /// Detach everything, running each `destroy` hook in bucket order.
    pub fn remove_all_components(&mut self) {
        let mut owner = Owner {
            id: self.id,
            name: &self.name,
            transform: &mut self.transform,
        };
        for bucket in self.buckets.iter_mut() {
            for slot in bucket.slots.iter_mut() {
                slot.component.destroy(&mut owner);
            }
        }
        self.buckets.clear();
    }

    /// Every attached component, flattened in bucket order.
    pub fn get_all_components(&self) -> Vec<&dyn Component> {
        self.buckets
            .iter()
            .flat_map(|b| b.slots.iter())
            .map(|s| s.component.as_ref())
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.buckets.iter().map(|b| b.slots.len()).sum()
    }

    /// Run every component's `update` hook.
    pub fn update(&mut self, dt: f32) {
        let mut owner = Owner {
            id: self.id,
            name: &self.name,
            transform: &mut self.transform,
        };
        for bucket in self.buckets.iter_mut() {
            for slot in bucket.slots.iter_mut() {
                slot.component.update(&mut owner, dt);
            }
        }
        self.publish_footprint();
    }

    /// Run every component's `draw` hook.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let owner = Owner {
            id: self.id,
            name: &self.name,
            transform: &mut self.transform,
        };
        for bucket in self.buckets.iter_mut() {
            for slot in bucket.slots.iter_mut() {
                slot.component.draw(&owner, canvas);
            }
        }
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("components", &self.component_count())
            .finish()
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.transform {
            Some(t) => write!(
                f,
                "Name: {}; GameObject(Position: ({}, {}))",
                self.name, t.position.x, t.position.y
            ),
            None => write!(f, "Name: {}; GameObject(Position: none)", self.name),
        }
    }
}
