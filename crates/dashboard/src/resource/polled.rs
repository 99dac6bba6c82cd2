//! A resource that refreshes itself on an interval.
//!
//! Each refresh takes a [`Ticket`] when issued. A finished refresh is applied
//! only if its ticket is newer than the last one applied, so a slow response
//! can never overwrite data from a refresh issued after it.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::RemoteResource;

/// Sequence number of one issued refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// The latest applied refresh.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// Ticket of the refresh that produced this snapshot (0 before any).
    pub sequence: u64,
    pub resource: RemoteResource<T>,
}

/// Shared, self-refreshing resource.
///
/// Cheap to clone; clones share the same sequence counter and snapshot.
pub struct PolledResource<T> {
    inner: Arc<PolledInner<T>>,
}

struct PolledInner<T> {
    issued: AtomicU64,
    latest: watch::Sender<Snapshot<T>>,
}

impl<T> Clone for PolledResource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for PolledResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolledResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A resource with nothing loaded yet.
    #[must_use]
    pub fn new() -> Self {
        let (latest, _) = watch::channel(Snapshot {
            sequence: 0,
            resource: RemoteResource::idle(),
        });
        Self {
            inner: Arc::new(PolledInner {
                issued: AtomicU64::new(0),
                latest,
            }),
        }
    }

    /// Take a ticket for a refresh about to start.
    pub fn issue(&self) -> Ticket {
        Ticket(self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Apply a finished refresh.
    ///
    /// Returns `false` and discards `resource` if a newer ticket has already
    /// been applied.
    pub fn apply(&self, ticket: Ticket, resource: RemoteResource<T>) -> bool {
        let applied = self.inner.latest.send_if_modified(|current| {
            if ticket.0 <= current.sequence {
                return false;
            }
            current.sequence = ticket.0;
            current.resource = resource;
            true
        });

        if !applied {
            tracing::debug!(ticket = ticket.0, "Discarding stale refresh");
        }
        applied
    }

    /// Run one refresh now and apply it.
    pub async fn refresh<F, Fut>(&self, load: F) -> Snapshot<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RemoteResource<T>>,
    {
        let ticket = self.issue();
        let resource = load().await;
        self.apply(ticket, resource);
        self.latest()
    }

    /// The latest applied snapshot.
    #[must_use]
    pub fn latest(&self) -> Snapshot<T> {
        self.inner.latest.borrow().clone()
    }

    /// Receive every applied snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.inner.latest.subscribe()
    }

    /// Refresh on a fixed interval in a background task.
    ///
    /// The first refresh starts immediately. Each refresh runs in its own
    /// task, so a slow backend does not delay the next tick. Polling stops
    /// when the returned handle is dropped.
    pub fn spawn<F, Fut>(&self, interval: Duration, load: F) -> PollHandle
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RemoteResource<T>> + Send + 'static,
    {
        let this = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let ticket = this.issue();
                let pending = load();
                let target = this.clone();
                tokio::spawn(async move {
                    let resource = pending.await;
                    target.apply(ticket, resource);
                });
            }
        });
        PollHandle { handle }
    }
}

/// Stops the poller when dropped.
#[derive(Debug)]
pub struct PollHandle {
    handle: JoinHandle<()>,
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let polled = PolledResource::<u32>::new();
        let first = polled.issue();
        let second = polled.issue();
        assert!(second > first);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let polled = PolledResource::<u32>::new();
        let older = polled.issue();
        let newer = polled.issue();

        assert!(polled.apply(newer, RemoteResource::idle().succeed(2)));
        assert!(!polled.apply(older, RemoteResource::idle().succeed(1)));

        let latest = polled.latest();
        assert_eq!(latest.sequence, 2);
        assert_eq!(latest.resource.value(), Some(&2));
    }

    #[test]
    fn test_in_order_completions_apply() {
        let polled = PolledResource::<u32>::new();
        let first = polled.issue();
        assert!(polled.apply(first, RemoteResource::idle().succeed(1)));
        let second = polled.issue();
        assert!(polled.apply(second, RemoteResource::idle().fail("down", 0)));
        assert!(polled.latest().resource.is_fallback());
    }

    #[tokio::test]
    async fn test_refresh_notifies_subscribers() {
        let polled = PolledResource::<u32>::new();
        let mut rx = polled.subscribe();

        let snapshot = polled
            .refresh(|| async { RemoteResource::idle().succeed(7) })
            .await;
        assert_eq!(snapshot.resource.value(), Some(&7));

        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(rx.borrow_and_update().resource.value(), Some(&7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_polls_on_interval() {
        let polled = PolledResource::<u64>::new();
        let counter = Arc::new(AtomicU64::new(0));
        let calls = Arc::clone(&counter);

        let handle = polled.spawn(Duration::from_secs(15), move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { RemoteResource::idle().succeed(n) }
        });

        let mut rx = polled.subscribe();
        rx.changed().await.unwrap_or_default();
        assert_eq!(rx.borrow_and_update().resource.value(), Some(&1));

        tokio::time::sleep(Duration::from_secs(15)).await;
        rx.changed().await.unwrap_or_default();
        assert_eq!(rx.borrow_and_update().resource.value(), Some(&2));

        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let polled = PolledResource::<u64>::new();
        let counter = Arc::new(AtomicU64::new(0));
        let calls = Arc::clone(&counter);

        let handle = polled.spawn(Duration::from_secs(15), move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { RemoteResource::idle().succeed(n) }
        });

        let mut rx = polled.subscribe();
        rx.changed().await.unwrap_or_default();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
