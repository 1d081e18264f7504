//! Synth pool main entry point.
//!
//! A small 2D scene written in Rust using:
//! - **raylib** for windowing, input, and graphics
//! - a GameObject/Component model (see [`synthpool::gameobject`]) for the
//!   scene objects
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or the file given with `--config`), apply overrides
//! 2. Open the raylib window and load the scene textures
//! 3. Every frame:
//!    - Refresh the window size the objects lay themselves out against
//!    - Poll input, update the scene
//!    - Record the scene into a draw list and replay it through raylib
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use synthpool::game::Game;
use synthpool::resources::gameconfig::GameConfig;
use synthpool::resources::input::InputState;
use synthpool::resources::surface::SharedSize;
use synthpool::resources::texturestore::TextureStore;
use synthpool::systems::input::update_input_state;
use synthpool::systems::render::{DrawList, render_draw_list};

/// Synth pool
#[derive(Parser)]
#[command(version, about = "A ball, a menu, and a window to put them in.")]
struct Cli {
    /// Configuration file to load (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the initial window width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the initial window height.
    #[arg(long)]
    height: Option<u32>,

    /// Write the resulting configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(width) = cli.width {
        config.window_width = width;
    }
    if let Some(height) = cli.height {
        config.window_height = height;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title);
    if config.resizable {
        builder.resizable();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let window = SharedSize::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

    // --------------- Scene ---------------
    let mut textures = TextureStore::new();
    let mut game = match Game::setup(
        &mut textures.loader(&mut rl, &thread),
        &config,
        window.clone(),
    ) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to set up the scene: {}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} textures", textures.len());

    let mut input = InputState::default();
    let mut frame = DrawList::new();

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // Window size may change due to resize
        window.set(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        update_input_state(&mut input, &rl);
        game.update(dt, &input);

        frame.clear();
        game.draw(&mut frame);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        render_draw_list(&mut d, &textures, &frame);
    }
    info!("Bye after {} frames", game.time().frame_count);
}
