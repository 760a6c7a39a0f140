//! Synchronous subscriber registry.
//!
//! Callbacks are held by the returned [`Subscription`]; the registry only
//! keeps weak handles. Dropping the subscription removes the callback before
//! the next notification, and dead handles are pruned lazily.

use std::{
    any::Any,
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crossbeam_channel::{Sender, TrySendError};

type Slot<E> = RefCell<Box<dyn FnMut(&E)>>;

/// Keeps a subscriber registered for as long as it is alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _slot: Rc<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

pub(crate) struct Subscribers<E> {
    slots: Vec<Weak<Slot<E>>>,
}

impl<E: 'static> Subscribers<E> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> Subscription {
        let callback: Box<dyn FnMut(&E)> = Box::new(callback);
        let slot: Rc<Slot<E>> = Rc::new(RefCell::new(callback));
        self.slots.push(Rc::downgrade(&slot));
        Subscription { _slot: slot }
    }

    /// Calls every live subscriber in registration order.
    pub(crate) fn notify(&mut self, event: &E) {
        self.slots.retain(|slot| slot.strong_count() > 0);
        for slot in &self.slots {
            if let Some(slot) = slot.upgrade() {
                let mut callback = slot.borrow_mut();
                (*callback)(event);
            }
        }
    }

    pub(crate) fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.strong_count() > 0)
            .count()
    }
}

/// Adapts a channel sender into a subscriber callback.
///
/// Delivery never blocks the mutating call: a full queue drops the event and
/// a disconnected receiver is reported once.
pub(crate) fn channel_forwarder<E>(sender: Sender<E>) -> impl FnMut(&E) + 'static
where
    E: Clone + 'static,
{
    let mut reported_disconnect = false;
    move |event: &E| match sender.try_send(event.clone()) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!("navigation event queue is full; dropping event");
        }
        Err(TrySendError::Disconnected(_)) => {
            if !reported_disconnect {
                reported_disconnect = true;
                tracing::warn!("navigation event receiver disconnected");
            }
        }
    }
}
