//! Texture loading and storage.
//!
//! Components never touch GPU textures directly. They hold a [`Texture`]
//! handle (path key + pixel size) obtained through a [`TextureLoader`], and
//! the render pass resolves the key against the [`TextureStore`] when it
//! replays the frame's draw list.
//!
//! Two loaders are provided:
//! - [`TextureStore::loader`] – loads through raylib and caches by path
//! - [`TextureCatalog`] – headless, serves sizes registered up front (tools
//!   and tests)

use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Failure to produce a texture for a path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },
    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },
}

/// Lightweight handle to a loaded texture.
///
/// Cloning is cheap enough to do per animation frame; the pixel data stays
/// in the [`TextureStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    key: String,
    width: f32,
    height: f32,
}

impl Texture {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// Lookup key (the path it was loaded from).
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Anything that can turn an image path into a [`Texture`].
pub trait TextureLoader {
    fn load_texture(&mut self, path: &str) -> Result<Texture, AssetError>;
}

/// Headless loader serving textures registered ahead of time.
#[derive(Debug, Default, Clone)]
pub struct TextureCatalog {
    entries: FxHashMap<String, Texture>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path with its pixel size and return its handle.
    pub fn insert(&mut self, path: impl Into<String>, width: f32, height: f32) -> Texture {
        let path = path.into();
        let texture = Texture::new(path.clone(), width, height);
        self.entries.insert(path, texture.clone());
        texture
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<String>, width: f32, height: f32) -> Self {
        self.insert(path, width, height);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextureLoader for TextureCatalog {
    fn load_texture(&mut self, path: &str) -> Result<Texture, AssetError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }
}

/// GPU textures keyed by the path they were loaded from.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` through raylib, or return the cached handle.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<Texture, AssetError> {
        if let Some(tex) = self.map.get(path) {
            return Ok(Texture::new(path, tex.width as f32, tex.height as f32));
        }
        if !Path::new(path).exists() {
            warn!("Texture not found: {}", path);
            return Err(AssetError::NotFound {
                path: path.to_string(),
            });
        }
        let tex = rl.load_texture(thread, path).map_err(|e| AssetError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let handle = Texture::new(path, tex.width as f32, tex.height as f32);
        info!(
            "Loaded texture {} ({}x{})",
            path,
            handle.width(),
            handle.height()
        );
        self.map.insert(path.to_string(), tex);
        Ok(handle)
    }

    /// Borrow the store together with the raylib handles as a [`TextureLoader`].
    pub fn loader<'a>(
        &'a mut self,
        rl: &'a mut RaylibHandle,
        thread: &'a RaylibThread,
    ) -> RaylibTextureLoader<'a> {
        RaylibTextureLoader {
            store: self,
            rl,
            thread,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// [`TextureStore`] borrowed with the raylib context it needs to load.
pub struct RaylibTextureLoader<'a> {
    store: &'a mut TextureStore,
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
}

impl TextureLoader for RaylibTextureLoader<'_> {
    fn load_texture(&mut self, path: &str) -> Result<Texture, AssetError> {
        self.store.load(self.rl, self.thread, path)
    }
}
