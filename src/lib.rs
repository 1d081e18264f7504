//! Synth pool library.
//!
//! A small GameObject/Component framework on top of raylib: game objects own
//! a transform and a list of heterogeneous components that are updated and
//! drawn every frame. Exposed as a library for integration tests.

pub mod components;
pub mod game;
pub mod gameobject;
pub mod resources;
pub mod systems;
