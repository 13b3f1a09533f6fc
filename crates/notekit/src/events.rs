//! # Document-level key events
//!
//! ## Overview
//!
//! Hosts deliver every key press to a single document-level stream, and
//! plugins subscribe listeners to it through their registration context.
//!
//! Listeners never execute commands directly. Each listener pushes the full
//! identifiers of the commands it wants run onto the [CommandQueue] it is
//! handed, and the host drains the queue once every listener has seen the
//! key. Subscribing returns a [Subscription] token; nothing is cleaned up
//! implicitly, so whoever subscribed is responsible for handing the token
//! back to [KeydownRouter::unsubscribe] at teardown.
use std::collections::VecDeque;
use std::fmt;

use crate::key::Keydown;

/// A callback invoked for every key press delivered to the document.
pub type KeydownListener = Box<dyn FnMut(&Keydown, &mut CommandQueue)>;

/// Commands queued by listeners during the delivery of a key press.
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<String>,
}

impl CommandQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        CommandQueue { queue: VecDeque::new() }
    }

    /// Queue a command for execution by its full identifier.
    pub fn run<I: Into<String>>(&mut self, id: I) {
        self.queue.push_back(id.into());
    }

    /// Fetch the next queued command identifier.
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Whether any commands are currently queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// A token for a registered [KeydownListener].
///
/// Dropping the token does nothing; the registration stays live until the
/// token is handed back to [KeydownRouter::unsubscribe].
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

/// Deliver key presses to subscribed listeners.
#[derive(Default)]
pub struct KeydownRouter {
    listeners: Vec<(u64, KeydownListener)>,
    next_id: u64,
}

impl KeydownRouter {
    /// Create a new instance.
    pub fn new() -> Self {
        KeydownRouter { listeners: Vec::new(), next_id: 0 }
    }

    /// Subscribe a listener to every future key press, and return the
    /// [Subscription] used to remove it again.
    pub fn subscribe(&mut self, listener: KeydownListener) -> Subscription {
        let id = self.next_id;

        self.next_id += 1;
        self.listeners.push((id, listener));

        return Subscription(id);
    }

    /// Remove a previously subscribed listener.
    pub fn unsubscribe(&mut self, sub: Subscription) {
        self.listeners.retain(|(id, _)| *id != sub.0);
    }

    /// The number of live listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a key press to every live listener, in subscription order.
    pub fn route(&mut self, key: &Keydown, queue: &mut CommandQueue) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(key, queue);
        }
    }
}

impl fmt::Debug for KeydownRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeydownRouter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = CommandQueue::new();
        assert_eq!(queue.is_empty(), true);

        queue.run("sample.one");
        queue.run("sample.two");
        assert_eq!(queue.is_empty(), false);

        assert_eq!(queue.pop(), Some("sample.one".to_string()));
        assert_eq!(queue.pop(), Some("sample.two".to_string()));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_route_in_subscription_order() {
        let mut router = KeydownRouter::new();

        let _first = router.subscribe(Box::new(|_, queue| queue.run("sample.first")));
        let _second = router.subscribe(Box::new(|_, queue| queue.run("sample.second")));
        assert_eq!(router.len(), 2);

        let mut queue = CommandQueue::new();
        router.route(&Keydown::char('x'), &mut queue);

        assert_eq!(queue.pop(), Some("sample.first".to_string()));
        assert_eq!(queue.pop(), Some("sample.second".to_string()));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut router = KeydownRouter::new();

        let first = router.subscribe(Box::new(|_, queue| queue.run("sample.first")));
        let _second = router.subscribe(Box::new(|_, queue| queue.run("sample.second")));

        router.unsubscribe(first);
        assert_eq!(router.len(), 1);

        let mut queue = CommandQueue::new();
        router.route(&Keydown::char('x'), &mut queue);

        assert_eq!(queue.pop(), Some("sample.second".to_string()));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_listener_sees_every_key() {
        let mut router = KeydownRouter::new();

        let _sub = router.subscribe(Box::new(|key, queue| {
            if key.get_char() == Some('d') {
                queue.run("sample.delete");
            }
        }));

        let mut queue = CommandQueue::new();

        router.route(&Keydown::char('a'), &mut queue);
        assert_eq!(queue.pop(), None);

        router.route(&Keydown::char('d'), &mut queue);
        assert_eq!(queue.pop(), Some("sample.delete".to_string()));
    }
}
