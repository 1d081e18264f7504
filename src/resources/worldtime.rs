//! Simulation clock.

/// Time accumulated by the game loop, advanced once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the game started.
    pub elapsed: f32,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames simulated so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
