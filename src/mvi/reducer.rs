//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Option<Effect>).
/// No I/O, no blocking, no clock reads; anything time-dependent arrives
/// inside the intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Description of the side effect the caller should run, if any.
    type Effect;

    /// Process an intent and return the new state plus at most one effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
