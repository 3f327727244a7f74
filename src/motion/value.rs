// Observable value cell for the animation pipeline.
//
// A `MotionValue` is a single-threaded cell that notifies listeners on
// every write. `subscribe` hands back a `Subscription` guard and the
// listener stays registered exactly as long as the guard is alive, so a
// consumer that keeps the guard in its effect cleanup can never be called
// after teardown.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct MotionValue<T: Copy> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Copy> Clone for MotionValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + 'static> MotionValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value
    }

    /// Write a new value and notify every live listener with it.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        // Clone the listener list out of the borrow so a callback may
        // subscribe or drop its own subscription while we iterate.
        let listeners: Vec<Listener<T>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Register `listener` for value changes. Dropping the returned guard
    /// unregisters it.
    pub fn subscribe(&self, listener: impl Fn(T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let target: Rc<dyn Detach> = Rc::clone(&self.inner) as Rc<dyn Detach>;
        Subscription {
            target: Rc::downgrade(&target),
            id,
        }
    }
}

impl<T: Copy + PartialEq + 'static> MotionValue<T> {
    /// Write only when the value actually changed.
    pub fn set_if_neq(&self, value: T) {
        if self.inner.borrow().value != value {
            self.set(value);
        }
    }
}

trait Detach {
    fn detach(&self, id: u64);
}

impl<T: Copy + 'static> Detach for RefCell<Inner<T>> {
    fn detach(&self, id: u64) {
        self.borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Guard tying a listener registration to a consumer's lifetime.
pub struct Subscription {
    target: Weak<dyn Detach>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(target) = self.target.upgrade() {
            target.detach(self.id);
        }
    }
}
