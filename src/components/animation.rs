//! Frame-by-frame texture animation.
//!
//! A [`FrameAnimation`] is a list of textures played at a fixed rate. It is
//! not a component on its own: it is handed to a
//! [`SpriteRendererComponent`](super::spriterenderer::SpriteRendererComponent)
//! with `set_animation`, which binds it and, while it plays, swaps the
//! sprite's texture for the animation's current frame every update.
//!
//! # Timing
//!
//! `elapsed` accumulates frame time. Once it reaches one frame duration
//! (`1 / fps`) the fractional `index` advances by `elapsed / duration`, so a
//! long tick can skip several frames at once, then wraps modulo the frame
//! count. The leftover time below one duration is kept for the next tick.
//!
//! Playback always wraps around. `looped` is stored and reported but does
//! not stop playback on the last frame.
//!
//! `fps` must be positive; it is not checked.

use log::debug;

use crate::resources::texturestore::{AssetError, Texture, TextureLoader};

#[derive(Clone, Debug)]
pub struct FrameAnimation {
    frames: Vec<Texture>,
    fps: f32,
    looped: bool,
    playing: bool,
    elapsed: f32,
    index: f32,
    bound: bool,
}

impl FrameAnimation {
    /// Load every frame eagerly. Fails on the first path that cannot be loaded.
    pub fn new(
        loader: &mut dyn TextureLoader,
        paths: &[&str],
        fps: f32,
        play_on_start: bool,
        looped: bool,
    ) -> Result<Self, AssetError> {
        let frames = paths
            .iter()
            .map(|p| loader.load_texture(p))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded animation with {} frames at {} fps", frames.len(), fps);
        Ok(Self::from_textures(frames, fps, play_on_start, looped))
    }

    pub fn from_textures(frames: Vec<Texture>, fps: f32, play_on_start: bool, looped: bool) -> Self {
        Self {
            frames,
            fps,
            looped,
            playing: play_on_start,
            elapsed: 0.0,
            index: 0.0,
            bound: false,
        }
    }

    /// Mark the animation as driving a renderer's sprite.
    pub fn bind(&mut self) {
        self.bound = true;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds accumulated since the last frame advance.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fractional position in the frame list.
    pub fn index(&self) -> f32 {
        self.index
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        self.index as usize
    }

    pub fn current_texture(&self) -> Option<&Texture> {
        self.frames.get(self.frame())
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the texture to show when the frame advanced; `None` when
    /// paused, unbound, or still within the current frame.
    pub fn on_update(&mut self, dt: f32) -> Option<&Texture> {
        if !self.playing || !self.bound || self.frames.is_empty() {
            return None;
        }
        self.elapsed += dt;
        let frame_duration = 1.0 / self.fps;
        if self.elapsed < frame_duration {
            return None;
        }
        self.index = (self.index + self.elapsed / frame_duration) % self.frames.len() as f32;
        self.elapsed %= frame_duration;
        self.current_texture()
    }
}
