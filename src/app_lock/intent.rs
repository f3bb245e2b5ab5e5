use std::time::SystemTime;

use crate::mvi::Intent;
use crate::settings::AutoLockPolicy;

#[derive(Debug, Clone)]
pub enum AppLockIntent {
    /// App moved to the background.
    BecameInactive { at: SystemTime, blur_radius: f64 },
    /// App came back to the foreground.
    BecameActive {
        at: SystemTime,
        policy: AutoLockPolicy,
        blur_radius: f64,
    },
    /// Manual retry from the lock screen.
    Authorize,
    AuthorizeDone { authorized: bool },
}

impl Intent for AppLockIntent {}
