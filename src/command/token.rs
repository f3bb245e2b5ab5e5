use uuid::Uuid;

use crate::app::AppAction;
use crate::store::Dispatcher;

/// Single-use return path of one running command.
///
/// Both [`complete`](Self::complete) and [`finish`](Self::finish) consume
/// the token, so a command cannot report twice.
pub struct CompletionToken {
    id: Uuid,
    label: &'static str,
    dispatcher: Option<Dispatcher>,
}

impl CompletionToken {
    pub fn new(label: &'static str, dispatcher: Dispatcher) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            dispatcher: Some(dispatcher),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Delivers the command's outcome.
    pub fn complete(mut self, action: impl Into<AppAction>) {
        if let Some(dispatcher) = self.dispatcher.take() {
            dispatcher.submit(action.into());
        }
    }

    /// Ends the command without an outcome (fire-and-forget work).
    pub fn finish(mut self) {
        self.dispatcher = None;
    }
}

impl Drop for CompletionToken {
    fn drop(&mut self) {
        if self.dispatcher.is_some() {
            tracing::trace!(id = %self.id, command = self.label, "Command dropped without an outcome");
        }
    }
}
