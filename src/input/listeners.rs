//! Document-level listener registration for active drags.
//!
//! While a drag is in progress the host must route move/end events from the
//! whole document to the dragged marker, not only events over the marker
//! itself. The host exposes that as a subscribe/unsubscribe pair; the drag
//! session holds a [`ListenerGuard`] so every exit path (release, cancel,
//! disposal, drop) unsubscribes exactly once.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// Opaque handle returned by a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// Host-side document/window event bus.
pub trait GlobalListeners: Send + Sync {
    /// Start routing document move/end events to `owner`.
    fn subscribe(&self, owner: &str) -> ListenerToken;

    /// Stop routing for a previously returned token.
    fn unsubscribe(&self, token: ListenerToken);
}

/// Scoped subscription: unsubscribes when dropped.
pub struct ListenerGuard {
    listeners: Arc<dyn GlobalListeners>,
    token: ListenerToken,
}

impl ListenerGuard {
    pub fn acquire(listeners: Arc<dyn GlobalListeners>, owner: &str) -> Self {
        let token = listeners.subscribe(owner);
        trace!(owner, token = token.0, "Document listeners attached");
        Self { listeners, token }
    }

    pub fn token(&self) -> ListenerToken {
        self.token
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.unsubscribe(self.token);
        trace!(token = self.token.0, "Document listeners released");
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("token", &self.token)
            .finish()
    }
}

/// Listener bus for hosts that deliver document events some other way.
#[derive(Debug, Default)]
pub struct NoopListeners;

impl GlobalListeners for NoopListeners {
    fn subscribe(&self, _owner: &str) -> ListenerToken {
        ListenerToken(0)
    }

    fn unsubscribe(&self, _token: ListenerToken) {}
}

/// In-memory bus that tracks live subscriptions. Useful for hosts that poll
/// "who is dragging" and for leak checks in tests.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    inner: Mutex<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_token: u64,
    active: Vec<(ListenerToken, String)>,
    total_subscriptions: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscriptions currently attached.
    pub fn active_count(&self) -> usize {
        self.inner.lock().active.len()
    }

    /// Owners with live subscriptions, oldest first.
    pub fn active_owners(&self) -> Vec<String> {
        self.inner
            .lock()
            .active
            .iter()
            .map(|(_, owner)| owner.clone())
            .collect()
    }

    /// Subscriptions ever made.
    pub fn total_subscriptions(&self) -> u64 {
        self.inner.lock().total_subscriptions
    }
}

impl GlobalListeners for ListenerRegistry {
    fn subscribe(&self, owner: &str) -> ListenerToken {
        let mut inner = self.inner.lock();
        inner.next_token += 1;
        inner.total_subscriptions += 1;
        let token = ListenerToken(inner.next_token);
        inner.active.push((token, owner.to_string()));
        token
    }

    fn unsubscribe(&self, token: ListenerToken) {
        self.inner.lock().active.retain(|(t, _)| *t != token);
    }
}
