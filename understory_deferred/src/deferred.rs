// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Deferred`] / [`Resolver`] pair.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

type Callback<E> = Box<dyn FnOnce(Result<(), E>)>;

enum State<E> {
    Pending(Vec<Callback<E>>),
    Resolved,
    Rejected(E),
}

/// Coarse settlement state of a [`Deferred`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Settlement {
    /// Neither resolved nor rejected yet.
    Pending,
    /// Settled successfully.
    Resolved,
    /// Settled with a failure cause.
    Rejected,
}

/// Consumer handle of a single-settlement result.
///
/// Clones share the same underlying state. See the [crate docs](crate) for an overview.
pub struct Deferred<E> {
    shared: Rc<RefCell<State<E>>>,
}

/// Producer handle of a [`Deferred`].
///
/// Settling consumes the resolver. Dropping it without settling leaves the
/// deferred pending forever; there is no cancellation.
pub struct Resolver<E> {
    shared: Rc<RefCell<State<E>>>,
}

impl<E> Clone for Deferred<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E: Clone + 'static> Deferred<E> {
    /// Create a pending result and the resolver that settles it.
    #[must_use]
    pub fn new() -> (Self, Resolver<E>) {
        let shared = Rc::new(RefCell::new(State::Pending(Vec::new())));
        (
            Self {
                shared: shared.clone(),
            },
            Resolver { shared },
        )
    }

    /// A result that is already resolved.
    #[must_use]
    pub fn resolved() -> Self {
        Self {
            shared: Rc::new(RefCell::new(State::Resolved)),
        }
    }

    /// A result that is already rejected with `cause`.
    #[must_use]
    pub fn rejected(cause: E) -> Self {
        Self {
            shared: Rc::new(RefCell::new(State::Rejected(cause))),
        }
    }

    /// Current settlement state.
    #[must_use]
    pub fn settlement(&self) -> Settlement {
        match &*self.shared.borrow() {
            State::Pending(_) => Settlement::Pending,
            State::Resolved => Settlement::Resolved,
            State::Rejected(_) => Settlement::Rejected,
        }
    }

    /// Returns `true` while the result has not settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.settlement() == Settlement::Pending
    }

    /// Returns `true` if the result resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.settlement() == Settlement::Resolved
    }

    /// Returns `true` if the result was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.settlement() == Settlement::Rejected
    }

    /// The rejection cause, if the result was rejected.
    #[must_use]
    pub fn error(&self) -> Option<E> {
        match &*self.shared.borrow() {
            State::Rejected(cause) => Some(cause.clone()),
            _ => None,
        }
    }

    /// Register a callback that observes the settlement.
    ///
    /// If the result already settled, `f` runs immediately. Otherwise it runs exactly once,
    /// in registration order, on the thread that settles the result.
    pub fn on_settle(&self, f: impl FnOnce(Result<(), E>) + 'static) {
        let outcome = {
            let mut state = self.shared.borrow_mut();
            match &mut *state {
                State::Pending(callbacks) => {
                    callbacks.push(Box::new(f));
                    return;
                }
                State::Resolved => Ok(()),
                State::Rejected(cause) => Err(cause.clone()),
            }
        };
        f(outcome);
    }

    /// Run `f` after a successful settlement.
    ///
    /// The returned result resolves after `f` has run. A rejection skips `f` and is
    /// propagated unchanged.
    #[must_use = "the chained result reports whether the continuation ran"]
    pub fn then(&self, f: impl FnOnce() + 'static) -> Self {
        let (next, resolver) = Self::new();
        self.on_settle(move |outcome| match outcome {
            Ok(()) => {
                f();
                resolver.resolve();
            }
            Err(cause) => resolver.reject(cause),
        });
        next
    }

    /// Run `f` after a rejection.
    ///
    /// The returned result resolves once the failure has been handled; success is
    /// propagated without calling `f`.
    pub fn catch(&self, f: impl FnOnce(&E) + 'static) -> Self {
        let (next, resolver) = Self::new();
        self.on_settle(move |outcome| {
            if let Err(cause) = outcome {
                f(&cause);
            }
            resolver.resolve();
        });
        next
    }

    /// Resolve when every input resolves; reject with the first rejection.
    ///
    /// An empty input resolves immediately.
    pub fn all(items: impl IntoIterator<Item = Self>) -> Self {
        let items: Vec<Self> = items.into_iter().collect();
        if items.is_empty() {
            return Self::resolved();
        }

        let (out, resolver) = Self::new();
        let remaining = Rc::new(Cell::new(items.len()));
        let resolver = Rc::new(RefCell::new(Some(resolver)));
        for item in items {
            let remaining = remaining.clone();
            let resolver = resolver.clone();
            item.on_settle(move |outcome| match outcome {
                Ok(()) => {
                    remaining.set(remaining.get() - 1);
                    if remaining.get() == 0 {
                        let taken = resolver.borrow_mut().take();
                        if let Some(r) = taken {
                            r.resolve();
                        }
                    }
                }
                Err(cause) => {
                    let taken = resolver.borrow_mut().take();
                    if let Some(r) = taken {
                        r.reject(cause);
                    }
                }
            });
        }
        out
    }
}

impl<E: Clone + 'static> Resolver<E> {
    /// Settle successfully and run pending callbacks.
    pub fn resolve(self) {
        settle(&self.shared, Ok(()));
    }

    /// Settle with `cause` and run pending callbacks.
    pub fn reject(self, cause: E) {
        settle(&self.shared, Err(cause));
    }

    /// Settle from a `Result`.
    pub fn settle(self, outcome: Result<(), E>) {
        settle(&self.shared, outcome);
    }
}

fn settle<E: Clone>(shared: &RefCell<State<E>>, outcome: Result<(), E>) {
    // Callbacks are taken out before running so they may register new callbacks
    // on this same result without hitting a borrow conflict.
    let callbacks = {
        let mut state = shared.borrow_mut();
        // Only a resolver settles, and settling consumes it.
        let State::Pending(callbacks) = &mut *state else {
            return;
        };
        let callbacks = core::mem::take(callbacks);
        *state = match &outcome {
            Ok(()) => State::Resolved,
            Err(cause) => State::Rejected(cause.clone()),
        };
        callbacks
    };
    for callback in callbacks {
        callback(outcome.clone());
    }
}

impl<E: fmt::Debug> fmt::Debug for Deferred<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.shared.borrow() {
            State::Pending(callbacks) => f
                .debug_struct("Deferred")
                .field("state", &"pending")
                .field("callbacks", &callbacks.len())
                .finish(),
            State::Resolved => f
                .debug_struct("Deferred")
                .field("state", &"resolved")
                .finish(),
            State::Rejected(cause) => f
                .debug_struct("Deferred")
                .field("state", &"rejected")
                .field("cause", cause)
                .finish(),
        }
    }
}

impl<E> fmt::Debug for Resolver<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}
