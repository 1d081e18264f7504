//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`].
use log::trace;
use raylib::RaylibHandle;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update `input`.
pub fn update_input_state(input: &mut InputState, rl: &RaylibHandle) {
    let key = input.grow.key_binding;
    input
        .grow
        .set(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));

    if input.grow.just_pressed {
        trace!("grow pressed");
    }
}
