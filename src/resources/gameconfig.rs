//! Game configuration.
//!
//! Settings loaded from an INI configuration file, with defaults for a safe
//! startup when the file is missing or incomplete.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = Synth pool
//! target_fps = 60
//! resizable = true
//!
//! [assets]
//! background = assets/images/BG.jpg
//! ball = assets/images/RedBall.png
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TITLE: &str = "Synth pool";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_RESIZABLE: bool = true;
const DEFAULT_BACKGROUND: &str = "assets/images/BG.jpg";
const DEFAULT_BALL: &str = "assets/images/RedBall.png";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Allow the user to resize the window.
    pub resizable: bool,
    /// Image stretched over the whole window behind everything else.
    pub background_path: String,
    /// Image used by the ball sprite.
    pub ball_path: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            resizable: DEFAULT_RESIZABLE,
            background_path: DEFAULT_BACKGROUND.to_string(),
            ball_path: DEFAULT_BALL.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(resizable) = config.getbool("window", "resizable").ok().flatten() {
            self.resizable = resizable;
        }

        // [assets] section
        if let Some(background) = config.get("assets", "background") {
            self.background_path = background;
        }
        if let Some(ball) = config.get("assets", "ball") {
            self.ball_path = ball;
        }

        info!(
            "Loaded config: {}x{} window \"{}\", fps={}, resizable={}",
            self.window_width, self.window_height, self.title, self.target_fps, self.resizable
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "resizable", Some(self.resizable.to_string()));

        // [assets] section
        config.set("assets", "background", Some(self.background_path.clone()));
        config.set("assets", "ball", Some(self.ball_path.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("synthpool_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.title, "Synth pool");
        assert!(config.resizable);
        assert_eq!(config.ball_path, "assets/images/RedBall.png");
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.set_window_size(1024, 768);
        saved.title = "Other".to_string();
        saved.resizable = false;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_size(), (1024, 768));
        assert_eq!(loaded.title, "Other");
        assert!(!loaded.resizable);
        assert_eq!(loaded.background_path, saved.background_path);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_config_path("partial");
        std::fs::write(&path, "[window]\nwidth = 320\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_size(), (320, 600));
        assert_eq!(config.target_fps, 60);

        let _ = std::fs::remove_file(path);
    }
}
