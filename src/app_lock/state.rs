use std::time::SystemTime;

use crate::mvi::UiState;

/// Smallest blur radius that still renders as a blur.
pub const BLUR_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppLockState {
    pub blur_radius: f64,
    pub became_inactive_at: Option<SystemTime>,
    pub is_locked: bool,
}

impl UiState for AppLockState {}

impl AppLockState {
    /// Sets the blur, mapping non-positive input to exactly zero and
    /// anything else to at least [`BLUR_EPSILON`].
    pub fn set_blur_radius(&mut self, radius: f64) {
        self.blur_radius = clamp_blur(radius);
    }
}

fn clamp_blur(radius: f64) -> f64 {
    if radius.is_nan() || radius <= 0.0 {
        0.0
    } else {
        radius.max(BLUR_EPSILON)
    }
}
