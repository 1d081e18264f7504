//! Aspect-ratio lock.
//!
//! [`AspectRatioComponent`] recomputes one scale axis from the other on every
//! update. It reads the scale as it is when its turn comes, so it has to be
//! attached after whatever writes the scale (typically a
//! [`ScreenRelativeTransform`](super::screenrelative::ScreenRelativeTransform)).

use super::{Component, Owner};

#[derive(Clone, Copy, Debug)]
pub struct AspectRatioComponent {
    pub ratio: f32,
    /// When true `scale.y` follows `scale.x`, otherwise `scale.x` follows `scale.y`.
    pub relative_to_x: bool,
}

impl AspectRatioComponent {
    /// `scale.y = scale.x * ratio`.
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio,
            relative_to_x: true,
        }
    }

    /// `scale.x = scale.y * ratio`.
    pub fn relative_to_y(ratio: f32) -> Self {
        Self {
            ratio,
            relative_to_x: false,
        }
    }
}

impl Default for AspectRatioComponent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Component for AspectRatioComponent {
    fn update(&mut self, owner: &mut Owner<'_>, _dt: f32) {
        let Some(t) = owner.transform_mut() else {
            return;
        };
        if self.relative_to_x {
            t.scale.y = t.scale.x * self.ratio;
        } else {
            t.scale.x = t.scale.y * self.ratio;
        }
    }

    crate::impl_as_any!();
}
