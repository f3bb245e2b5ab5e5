use tokio::sync::mpsc;

use crate::app::AppAction;

/// Submission handle for the store's action channel.
///
/// Cheap to clone and usable from any thread or task. `submit` never blocks;
/// actions from one dispatcher arrive in the order they were submitted.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<AppAction>,
}

impl Dispatcher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AppAction>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn submit(&self, action: impl Into<AppAction>) {
        let action = action.into();
        let feature = action.feature();
        if self.sender.send(action).is_err() {
            tracing::trace!(feature, "Action dropped (store gone)");
        }
    }
}
