//! The dispatch loop.
//!
//! A [`Store`] owns the [`AppState`] and is the only thing that mutates it.
//! Actions reach it through [`Dispatcher`]s; each one is reduced, the
//! resulting command is spawned on the runtime, and observers see the new
//! snapshot. Commands feed their outcome back through the same channel.

mod dispatcher;
mod observer;

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::{AppAction, AppReducer, AppState};
use crate::command::{CommandContext, CompletionToken};
use crate::mvi::Reducer;
use crate::services::Dependencies;
use crate::shutdown::ShutdownHandle;

pub use dispatcher::Dispatcher;
pub use observer::{ObserverId, ObserverRegistry};

pub struct Store {
    state: AppState,
    receiver: mpsc::UnboundedReceiver<AppAction>,
    dispatcher: Dispatcher,
    deps: Arc<Dependencies>,
    observers: ObserverRegistry,
}

impl Store {
    /// A state without session tokens picks up the session held by
    /// `deps.credentials`, so a restored login needs no `SignedIn`.
    pub fn new(mut state: AppState, deps: Dependencies) -> Self {
        if state.session.tokens.is_none() {
            state.session.tokens = deps.credentials.session();
            if let Some(tokens) = &state.session.tokens {
                tracing::info!(member_id = %tokens.member_id, "Restored stored session");
            }
        }
        let (dispatcher, receiver) = Dispatcher::channel();
        Self {
            state,
            receiver,
            dispatcher,
            deps: Arc::new(deps),
            observers: ObserverRegistry::new(),
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn observers(&self) -> ObserverRegistry {
        self.observers.clone()
    }

    /// Reduces one action, spawns its command and notifies observers.
    ///
    /// Must be called inside a tokio runtime when the action can produce a
    /// command.
    pub fn process(&mut self, action: AppAction) {
        let feature = action.feature();
        let (state, command) = AppReducer::reduce(mem::take(&mut self.state), action);
        self.state = state;

        if let Some(command) = command {
            let label = command.label();
            tracing::trace!(feature, command = label, "Spawning command");
            let ctx = CommandContext {
                deps: Arc::clone(&self.deps),
                token: CompletionToken::new(label, self.dispatcher.clone()),
            };
            tokio::spawn(command.run(ctx));
        }

        self.observers.publish(&self.state);
    }

    /// Processes every action already queued, without waiting for more.
    /// Returns how many were processed.
    pub fn drain(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.receiver.try_recv() {
            self.process(action);
            processed += 1;
        }
        processed
    }

    /// Owner loop: runs until `shutdown` is signalled, then returns the
    /// final state.
    pub async fn run(mut self, mut shutdown: ShutdownHandle) -> AppState {
        tracing::info!("Store loop started");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                action = self.receiver.recv() => match action {
                    Some(action) => self.process(action),
                    // Only once every dispatcher, including ours, is gone.
                    None => break,
                },
            }
        }
        tracing::info!("Store loop stopped");
        self.state
    }
}
