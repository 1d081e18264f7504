//! Long-lived data shared by the game loop and the components.
//!
//! Overview
//! - `gameconfig` – window and asset settings loaded from an INI file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `spritebatch` – sprites drawn together in one pass
//! - `surface` – sizes other objects lay themselves out against
//! - `texturestore` – texture handles, loaders, and the raylib texture cache
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod input;
pub mod spritebatch;
pub mod surface;
pub mod texturestore;
pub mod worldtime;
