//! Per-frame systems run by the game loop.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – the `Canvas` seam, the recording `DrawList`, and its raylib replay
//! - [`time`] – update simulation time and delta

pub mod input;
pub mod render;
pub mod time;
