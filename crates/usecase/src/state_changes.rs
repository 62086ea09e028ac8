// crates/usecase/src/state_changes.rs
use std::cell::{Cell, RefCell};

use file_input_ports::SubscriptionId;
use log::debug;

type Subscriber = Box<dyn FnMut()>;

#[derive(Default)]
struct Registry {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    /// Ids of the subscribers taken out for the delivery in progress.
    in_flight: Vec<SubscriptionId>,
    removed_in_flight: Vec<SubscriptionId>,
    dispatching: bool,
    queued: usize,
}

/// Multicast "something changed" signal.
///
/// Delivery is synchronous and follows subscription order. A `next` issued by
/// a subscriber is queued and delivered to everyone once the current round
/// finishes. Changes to the subscriber list made during delivery apply from
/// the next round on. Once completed, the stream drops its subscribers and
/// ignores every later `next`.
#[derive(Default)]
pub struct StateChanges {
    registry: RefCell<Registry>,
    next_id: Cell<u64>,
    closed: Cell<bool>,
    emitted: Cell<u64>,
}

impl StateChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        if self.closed.get() {
            debug!("state changes: subscription {} on a completed stream is inert", id.0);
            return id;
        }
        self.registry.borrow_mut().subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber; returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        if let Some(pos) = registry.subscribers.iter().position(|(sub, _)| *sub == id) {
            drop(registry.subscribers.remove(pos));
            return true;
        }
        if registry.in_flight.contains(&id) && !registry.removed_in_flight.contains(&id) {
            registry.removed_in_flight.push(id);
            return true;
        }
        false
    }

    /// Delivers one change signal to every current subscriber.
    pub fn next(&self) {
        if self.closed.get() {
            debug!("state changes: next() after complete() ignored");
            return;
        }
        self.emitted.set(self.emitted.get() + 1);

        let mut active = {
            let mut registry = self.registry.borrow_mut();
            if registry.dispatching {
                registry.queued += 1;
                return;
            }
            registry.dispatching = true;
            registry.in_flight = registry.subscribers.iter().map(|(id, _)| *id).collect();
            std::mem::take(&mut registry.subscribers)
        };

        loop {
            for (id, callback) in &mut active {
                if self.closed.get() {
                    break;
                }
                if self.registry.borrow().removed_in_flight.contains(id) {
                    continue;
                }
                callback();
            }

            let mut registry = self.registry.borrow_mut();
            let removed = std::mem::take(&mut registry.removed_in_flight);
            active.retain(|(id, _)| !removed.contains(id));
            active.append(&mut registry.subscribers);

            if self.closed.get() || registry.queued == 0 {
                registry.dispatching = false;
                registry.in_flight.clear();
                registry.queued = 0;
                if !self.closed.get() {
                    registry.subscribers = active;
                }
                return;
            }
            registry.queued -= 1;
            registry.in_flight = active.iter().map(|(id, _)| *id).collect();
        }
    }

    /// Closes the stream. Idempotent.
    pub fn complete(&self) {
        if self.closed.replace(true) {
            return;
        }
        let mut registry = self.registry.borrow_mut();
        registry.subscribers.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Number of accepted `next` calls since creation.
    #[must_use]
    pub fn emission_count(&self) -> u64 {
        self.emitted.get()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let registry = self.registry.borrow();
        registry.subscribers.len() + registry.in_flight.len() - registry.removed_in_flight.len()
    }
}

impl std::fmt::Debug for StateChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateChanges")
            .field("subscribers", &self.subscriber_count())
            .field("closed", &self.closed.get())
            .field("emitted", &self.emitted.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnMut()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |name: &'static str| -> Box<dyn FnMut()> {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn delivers_in_subscription_order() {
        let stream = StateChanges::new();
        let (log, make) = recorder();
        stream.subscribe(make("a"));
        stream.subscribe(make("b"));
        stream.next();
        stream.next();
        assert_eq!(*log.borrow(), ["a", "b", "a", "b"]);
        assert_eq!(stream.emission_count(), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let stream = StateChanges::new();
        let (log, make) = recorder();
        let a = stream.subscribe(make("a"));
        stream.subscribe(make("b"));
        assert!(stream.unsubscribe(a));
        assert!(!stream.unsubscribe(a));
        stream.next();
        assert_eq!(*log.borrow(), ["b"]);
    }

    #[test]
    fn complete_drops_subscribers_and_ignores_next() {
        let stream = StateChanges::new();
        let (log, make) = recorder();
        stream.subscribe(make("a"));
        stream.complete();
        stream.next();
        stream.subscribe(make("late"));
        stream.next();
        assert!(log.borrow().is_empty());
        assert!(stream.is_closed());
        assert_eq!(stream.subscriber_count(), 0);
        assert_eq!(stream.emission_count(), 0);
    }

    #[test]
    fn reentrant_next_is_delivered_after_current_round() {
        let stream = Rc::new(StateChanges::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let fired = Rc::new(Cell::new(false));
        {
            let stream_ref = Rc::downgrade(&stream);
            let log = Rc::clone(&log);
            let fired = Rc::clone(&fired);
            stream.subscribe(move || {
                log.borrow_mut().push("first");
                if !fired.replace(true) {
                    if let Some(stream) = stream_ref.upgrade() {
                        stream.next();
                    }
                }
            });
        }
        {
            let log = Rc::clone(&log);
            stream.subscribe(move || log.borrow_mut().push("second"));
        }

        stream.next();
        assert_eq!(*log.borrow(), ["first", "second", "first", "second"]);
        assert_eq!(stream.emission_count(), 2);
    }

    #[test]
    fn subscribers_added_during_delivery_start_next_round() {
        let stream = Rc::new(StateChanges::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let stream_ref = Rc::downgrade(&stream);
            let log = Rc::clone(&log);
            let added = Cell::new(false);
            stream.subscribe(move || {
                log.borrow_mut().push("outer");
                if !added.replace(true) {
                    let inner_log = Rc::clone(&log);
                    if let Some(stream) = stream_ref.upgrade() {
                        stream.subscribe(move || inner_log.borrow_mut().push("inner"));
                    }
                }
            });
        }
        stream.next();
        assert_eq!(*log.borrow(), ["outer"]);
        stream.next();
        assert_eq!(*log.borrow(), ["outer", "outer", "inner"]);
    }

    #[test]
    fn unsubscribe_during_delivery_skips_pending_subscriber() {
        let stream = Rc::new(StateChanges::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim = Rc::new(Cell::new(None));
        {
            let stream_ref = Rc::downgrade(&stream);
            let victim = Rc::clone(&victim);
            stream.subscribe(move || {
                if let (Some(stream), Some(id)) = (stream_ref.upgrade(), victim.take()) {
                    assert!(stream.unsubscribe(id));
                }
            });
        }
        {
            let log = Rc::clone(&log);
            victim.set(Some(stream.subscribe(move || log.borrow_mut().push("victim"))));
        }
        stream.next();
        stream.next();
        assert!(log.borrow().is_empty());
        assert_eq!(stream.subscriber_count(), 1);
    }
}
