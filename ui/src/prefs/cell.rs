//! Single-value cell with synchronous subscribers.
//!
//! This is the reactive heart of the preference services, kept free of any
//! renderer so it can be driven from plain unit tests. Single-threaded on
//! purpose: preferences change from UI event handlers only.

use std::cell::RefCell;
use std::rc::Rc;

use super::Cycle;

type Subscriber<T> = Rc<dyn Fn(T)>;

pub struct PreferenceCell<T: Copy + PartialEq> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: Copy + PartialEq> Clone for PreferenceCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: Copy + PartialEq> PreferenceCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        *self.value.borrow()
    }

    /// Stores `next` and notifies every subscriber, in subscription order,
    /// before returning. Setting the current value again does nothing.
    pub fn set(&self, next: T) {
        if *self.value.borrow() == next {
            return;
        }
        *self.value.borrow_mut() = next;
        self.notify(next);
    }

    /// Registers an observer for subsequent changes. It does not see the
    /// current value; callers wanting that follow up with [`replay`].
    ///
    /// [`replay`]: PreferenceCell::replay
    pub fn subscribe(&self, subscriber: impl Fn(T) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(subscriber));
    }

    /// Re-fires every subscriber with the current value. Used once at
    /// bootstrap so the restored value gets applied and persisted.
    pub fn replay(&self) {
        self.notify(self.get());
    }

    fn notify(&self, value: T) {
        // Snapshot first: a subscriber may register further subscribers
        // without poisoning the borrow. Late registrations see the next set.
        let snapshot: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
        for subscriber in snapshot {
            subscriber(value);
        }
    }
}

impl<T: Cycle + PartialEq> PreferenceCell<T> {
    /// Steps to the next value in the cycle and returns it.
    pub fn toggle(&self) -> T {
        let next = self.get().next();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{Language, Theme};

    #[test]
    fn set_notifies_in_subscription_order() {
        let cell = PreferenceCell::new(Theme::Light);
        let ledger = Rc::new(RefCell::new(Vec::new()));

        for tag in ["reflect", "persist", "render"] {
            let ledger = Rc::clone(&ledger);
            cell.subscribe(move |theme: Theme| {
                ledger.borrow_mut().push(format!("{tag}:{}", theme.code()));
            });
        }

        cell.set(Theme::Dark);
        assert_eq!(
            *ledger.borrow(),
            vec!["reflect:dark", "persist:dark", "render:dark"]
        );
    }

    #[test]
    fn setting_the_same_value_is_silent() {
        let cell = PreferenceCell::new(Language::En);
        let fired = Rc::new(RefCell::new(0));

        let count = Rc::clone(&fired);
        cell.subscribe(move |_| *count.borrow_mut() += 1);

        cell.set(Language::En);
        assert_eq!(*fired.borrow(), 0);

        cell.set(Language::Ar);
        cell.set(Language::Ar);
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn replay_fires_current_value_once() {
        let cell = PreferenceCell::new(Language::Ar);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        cell.subscribe(move |lang: Language| log.borrow_mut().push(lang));

        cell.replay();
        assert_eq!(*seen.borrow(), vec![Language::Ar]);
    }

    #[test]
    fn toggle_returns_the_new_value_and_round_trips() {
        let cell = PreferenceCell::new(Theme::Light);
        assert_eq!(cell.toggle(), Theme::Dark);
        assert_eq!(cell.get(), Theme::Dark);
        assert_eq!(cell.toggle(), Theme::Light);
        assert_eq!(cell.get(), Theme::Light);
    }

    #[test]
    fn subscriber_registered_during_notify_waits_for_next_set() {
        let cell = PreferenceCell::new(Theme::Light);
        let late_calls = Rc::new(RefCell::new(0));

        let cell_for_sub = cell.clone();
        let late = Rc::clone(&late_calls);
        cell.subscribe(move |_| {
            let late = Rc::clone(&late);
            cell_for_sub.subscribe(move |_| *late.borrow_mut() += 1);
        });

        cell.set(Theme::Dark);
        assert_eq!(*late_calls.borrow(), 0, "late subscriber must not fire mid-notify");

        cell.set(Theme::Light);
        assert!(*late_calls.borrow() >= 1);
    }
}
