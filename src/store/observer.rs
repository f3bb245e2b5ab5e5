use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::app::AppState;

type Observer = Arc<dyn Fn(&AppState) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

/// Listeners notified with a snapshot after every processed action.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    observers: Arc<RwLock<Vec<(ObserverId, Observer)>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: impl Fn(&AppState) + Send + Sync + 'static) -> ObserverId {
        let id = ObserverId(Uuid::new_v4());
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    pub(crate) fn publish(&self, state: &AppState) {
        // Snapshot the list so observers may (un)subscribe while being called.
        let observers: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(state);
        }
    }
}
