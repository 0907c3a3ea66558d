//! Broadcast publisher for service results
//!
//! Services push whole values (a freshly merged list, a saved record) and
//! every current subscriber receives each push once. Publishing with no
//! subscribers is not an error; the value is simply dropped.

use std::fmt::Display;
use std::future::Future;

use tokio::sync::broadcast;
use tracing::trace;

use super::aggregate::aggregate;

const DEFAULT_CAPACITY: usize = 16;

/// Multi-subscriber publisher of `T` values
#[derive(Debug, Clone)]
pub struct Publisher<T> {
    sender: broadcast::Sender<T>,
}

/// Publisher whose values are whole lists.
pub type ListPublisher<T> = Publisher<Vec<T>>;

impl<T: Clone> Publisher<T> {
    /// Create a publisher with the default backlog per subscriber.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a publisher keeping up to `capacity` unread values per
    /// subscriber. Slow subscribers lag rather than block publishing.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new subscriber. It sees values published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Publish a value to every current subscriber.
    ///
    /// Returns the number of subscribers the value was delivered to.
    pub fn publish(&self, value: T) -> usize {
        match self.sender.send(value) {
            Ok(receivers) => receivers,
            Err(_) => {
                trace!("published with no subscribers");
                0
            }
        }
    }
}

impl<T: Clone> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Publisher<Vec<T>> {
    /// Aggregate `fetches` and publish the merged list exactly once, after
    /// every fetch has settled. The merged list is also returned.
    pub async fn publish_aggregate<E, I, F>(&self, fetches: I) -> Vec<T>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        let merged = aggregate(fetches).await;
        self.publish(merged.clone());
        merged
    }
}
