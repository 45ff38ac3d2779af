//! Synchronous observer fan-out.
//!
//! The stores expose their state as observable values. Instead of a
//! reactive subject over channels, this is plain callback fan-out: observers
//! register a callback, the owner invokes every registered callback with a
//! reference to the new state immediately after each mutation, in
//! registration order. No coalescing, no event loop, no threads.

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Callback registry for one observable value.
///
/// Emission requires `&mut self`, so a callback can never re-enter the
/// signal it is being delivered from; unsubscription therefore always
/// happens between emissions and takes effect immediately, with no
/// partial-notification leakage.
pub struct Signal<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Register an observer. Callbacks are invoked in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns `false` if the handle was unknown
    /// (already unsubscribed, or from another signal).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver `value` to every registered observer, synchronously.
    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
