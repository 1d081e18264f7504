//! Per-frame keyboard input state.
//!
//! Captures the keys the game reacts to. Holding `grow` (SPACE by default)
//! makes the ball grow.
use raylib::prelude::KeyboardKey;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Default::default()
        }
    }

    /// Overwrite the per-frame flags.
    pub fn set(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub grow: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            grow: BoolState::bound_to(KeyboardKey::KEY_SPACE),
        }
    }
}
