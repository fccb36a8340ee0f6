//! Observable values
//!
//! Single-threaded publish/subscribe cell used by the engine to publish its
//! score, round count, and scrambled word. Every `set` stores the new value
//! and then notifies each subscriber synchronously; last value wins, and no
//! buffering is performed.

type Subscriber<T> = Box<dyn Fn(&T)>;

/// A value that notifies subscribers on every mutation
pub struct Observable<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Observable<T> {
    /// Create an observable holding `value`, with no subscribers
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    /// Get the current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value and notify every subscriber with it
    pub fn set(&mut self, value: T) {
        self.value = value;
        for subscriber in &self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Register a callback invoked on every subsequent `set`
    ///
    /// Subscribers are not called with the current value at registration time.
    pub fn subscribe<F: Fn(&T) + 'static>(&mut self, callback: F) {
        self.subscribers.push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observable_stores_value() {
        let mut cell = Observable::new(3);
        assert_eq!(*cell.get(), 3);
        cell.set(7);
        assert_eq!(*cell.get(), 7);
    }

    #[test]
    fn observable_notifies_subscriber_on_set() {
        let seen: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut cell = Observable::new(0);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));

        cell.set(1);
        cell.set(2);
        cell.set(2);

        assert_eq!(*seen.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn observable_subscribe_does_not_replay_current_value() {
        let seen: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut cell = Observable::new(9);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn observable_notifies_every_subscriber() {
        let first: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
        let second: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

        let mut cell = Observable::new(0);
        let sink = Rc::clone(&first);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));
        let sink = Rc::clone(&second);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));

        cell.set(5);

        assert_eq!(*first.borrow(), vec![5]);
        assert_eq!(*second.borrow(), vec![5]);
    }

    #[test]
    fn observable_last_value_wins() {
        let latest: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&latest);

        let mut cell = Observable::new(String::new());
        cell.subscribe(move |value: &String| *sink.borrow_mut() = value.clone());

        cell.set("first".to_string());
        cell.set("second".to_string());

        assert_eq!(*latest.borrow(), "second");
        assert_eq!(cell.get(), "second");
    }
}
