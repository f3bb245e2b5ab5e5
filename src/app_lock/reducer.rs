use crate::command::AppCommand;
use crate::mvi::Reducer;

use super::intent::AppLockIntent;
use super::state::AppLockState;

const AUTHORIZE_REASON: &str = "Unlock to continue browsing";

pub struct AppLockReducer;

impl Reducer for AppLockReducer {
    type State = AppLockState;
    type Intent = AppLockIntent;
    type Effect = AppCommand;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<AppCommand>) {
        match intent {
            AppLockIntent::BecameInactive { at, blur_radius } => {
                state.became_inactive_at = Some(at);
                state.set_blur_radius(blur_radius);
                (state, None)
            }

            AppLockIntent::BecameActive {
                at,
                policy,
                blur_radius,
            } => {
                if state.is_locked {
                    return (state, Some(authorize()));
                }

                // A clock that went backwards counts as no time elapsed.
                let elapsed = state
                    .became_inactive_at
                    .and_then(|since| at.duration_since(since).ok());
                let expired = match (policy.threshold(), elapsed) {
                    (Some(threshold), Some(elapsed)) => elapsed > threshold,
                    _ => false,
                };

                if expired {
                    tracing::info!(policy = policy.as_secs(), "Inactivity threshold exceeded, locking");
                    state.is_locked = true;
                    state.set_blur_radius(blur_radius);
                    (state, Some(authorize()))
                } else {
                    state.set_blur_radius(0.0);
                    state.became_inactive_at = None;
                    (state, None)
                }
            }

            AppLockIntent::Authorize => {
                if !state.is_locked {
                    tracing::debug!("Authorize ignored: not locked");
                    return (state, None);
                }
                (state, Some(authorize()))
            }

            AppLockIntent::AuthorizeDone { authorized } => {
                if authorized {
                    tracing::info!("Authorized, unlocking");
                    state.is_locked = false;
                    state.became_inactive_at = None;
                    state.set_blur_radius(0.0);
                } else {
                    tracing::warn!("Authorization refused, staying locked");
                }
                (state, None)
            }
        }
    }
}

fn authorize() -> AppCommand {
    AppCommand::Authorize {
        reason: AUTHORIZE_REASON.to_string(),
    }
}
