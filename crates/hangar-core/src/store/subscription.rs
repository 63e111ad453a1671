//! Live snapshot subscriptions.

use std::sync::Arc;

use tokio::sync::watch;

/// The complete current contents of a collection, delivered atomically.
pub type Snapshot<T> = Arc<Vec<T>>;

/// A live subscription to one collection.
///
/// Wraps a `watch` receiver: delivery is ordered and each push supersedes
/// the prior snapshot, so a slow reader skips intermediate states and only
/// ever observes the latest confirmed one. Dropping the subscription
/// unsubscribes; a write already in flight still completes, with no
/// listener left to observe its snapshot.
pub struct Subscription<T> {
    rx: watch::Receiver<Snapshot<T>>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(rx: watch::Receiver<Snapshot<T>>) -> Self {
        Self { rx }
    }

    /// The latest confirmed snapshot, available without waiting.
    ///
    /// Immediately after subscribing this is the initial collection
    /// contents (possibly empty).
    pub fn snapshot(&self) -> Snapshot<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the next snapshot push.
    ///
    /// Returns `None` once the store has been dropped and no further
    /// snapshots can arrive.
    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
