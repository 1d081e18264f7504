//! Time update system.
//!
//! Advances the game's [`WorldTime`](crate::resources::worldtime::WorldTime)
//! once per frame, applying `time_scale` to the provided delta.

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds and return the scaled delta.
///
/// `dt` is expected to be the unscaled frame delta in seconds.
pub fn update_world_time(wt: &mut WorldTime, dt: f32) -> f32 {
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
    scaled_dt
}
