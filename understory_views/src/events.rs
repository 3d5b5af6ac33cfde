// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle event channels.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// The four lifecycle notifications a view emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// An open was requested (before the prepare step).
    Opens,
    /// The open sequence completed.
    Opened,
    /// A close was requested (before the prepare step).
    Closes,
    /// The close sequence completed.
    Closed,
}

/// Token returned when subscribing; pass it back to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
pub(crate) struct EventHub {
    listeners: RefCell<Vec<(Subscription, ViewEvent, Listener)>>,
    next: Cell<u64>,
}

impl EventHub {
    pub(crate) fn subscribe(&self, event: ViewEvent, listener: Listener) -> Subscription {
        let sub = Subscription(self.next.get());
        self.next.set(sub.0 + 1);
        self.listeners.borrow_mut().push((sub, event, listener));
        sub
    }

    pub(crate) fn unsubscribe(&self, sub: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(s, ..)| *s != sub);
        listeners.len() != before
    }

    /// Call every listener of `event` in subscription order.
    ///
    /// Works on a snapshot, so listeners may subscribe or unsubscribe while running.
    pub(crate) fn emit(&self, event: ViewEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(.., l)| l.clone())
            .collect();
        for listener in snapshot {
            listener();
        }
    }
}

impl core::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}
