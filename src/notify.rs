//! Process-wide change notification.
//!
//! A payload-less broadcast fired after every committed mutation. Subscribers
//! re-run the merge from scratch instead of patching derived state; the merge
//! is bounded by catalog size, so recomputation is cheaper than chasing
//! staleness bugs. Callbacks run synchronously on the notifying call, strictly
//! after the store write, so re-reading the overlay inside a callback always
//! observes the committed value.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`ChangeBus::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn()>;

/// Single-threaded subscriber registry.
#[derive(Default)]
pub struct ChangeBus {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Returns false if the id was already unsubscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Invoke every current subscriber.
    ///
    /// The list is snapshotted first, so callbacks may subscribe or
    /// unsubscribe without deadlocking; a subscriber added during a notify
    /// runs from the next notify on.
    pub fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}
