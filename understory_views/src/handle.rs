// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ViewHandle`]: the caller-facing reference to a view owned by a container.

use alloc::rc::{Rc, Weak};
use understory_deferred::Deferred;
use understory_nav_tree::BranchId;

use crate::container::{Shared, ViewsContainer};
use crate::error::ViewError;
use crate::events::{Subscription, ViewEvent};
use crate::id::ViewId;
use crate::lifecycle::ViewSlot;
use crate::view::{OpenArgs, OpenWith, Phase, View};

/// A cloneable reference to one view of a [`ViewsContainer`].
///
/// Handles stay usable after the container is dropped, but exclusivity and suspension
/// need the container and degrade to "no relatives" without it.
pub struct ViewHandle<V: View> {
    pub(crate) slot: Rc<ViewSlot<V>>,
    pub(crate) container: Weak<Shared<V>>,
}

impl<V: View> Clone for ViewHandle<V> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            container: self.container.clone(),
        }
    }
}

impl<V: View> ViewHandle<V> {
    /// The view's id, captured at initialization.
    #[must_use]
    pub fn id(&self) -> &ViewId {
        &self.slot.id
    }

    /// The branch this view occupies in the container's navigation tree.
    #[must_use]
    pub fn branch(&self) -> BranchId {
        self.slot.branch
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.slot.phase()
    }

    /// True from the start of opening until the start of closing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot.is_open()
    }

    /// Whether the view's visual object is currently shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot.is_active()
    }

    /// Open, but not the foreground view of its group: a nested view is open in front of it.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        if !self.slot.is_open() {
            return false;
        }
        let Some(shared) = self.container.upgrade() else {
            return false;
        };
        let tree = shared.tree.borrow();
        tree.descendants(self.slot.branch)
            .filter_map(|id| tree.get(id))
            .any(|slot| slot.is_open())
    }

    /// Start the open sequence.
    ///
    /// Opening notifies the owning container, which closes every open view that is not
    /// this view or one of its ancestors.
    pub fn open(&self) -> Deferred<ViewError> {
        self.slot.open()
    }

    /// Hand `args` to the view, then start the open sequence.
    pub fn open_with<A: OpenArgs>(&self, args: A) -> Deferred<ViewError>
    where
        V: OpenWith<A>,
    {
        self.slot.open_with(move |v| v.receive(args))
    }

    /// Start the close sequence.
    pub fn close(&self) -> Deferred<ViewError> {
        self.slot.close()
    }

    /// Borrow the view.
    ///
    /// Transitions requested from inside `f` run once it returns.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this view's own hooks.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let out = f(&self.slot.view.borrow());
        self.slot.drain();
        out
    }

    /// Mutably borrow the view.
    ///
    /// Transitions requested from inside `f` run once it returns.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this view's own hooks.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let out = f(&mut self.slot.view.borrow_mut());
        self.slot.drain();
        out
    }

    /// Listen for a lifecycle event. Listeners run in subscription order.
    pub fn subscribe(&self, event: ViewEvent, listener: impl Fn() + 'static) -> Subscription {
        self.slot.events.subscribe(event, Rc::new(listener))
    }

    /// Remove a listener; returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.slot.events.unsubscribe(subscription)
    }

    /// Shorthand for `subscribe(ViewEvent::Opens, ..)`.
    pub fn on_opens(&self, listener: impl Fn() + 'static) -> Subscription {
        self.subscribe(ViewEvent::Opens, listener)
    }

    /// Shorthand for `subscribe(ViewEvent::Opened, ..)`.
    pub fn on_opened(&self, listener: impl Fn() + 'static) -> Subscription {
        self.subscribe(ViewEvent::Opened, listener)
    }

    /// Shorthand for `subscribe(ViewEvent::Closes, ..)`.
    pub fn on_closes(&self, listener: impl Fn() + 'static) -> Subscription {
        self.subscribe(ViewEvent::Closes, listener)
    }

    /// Shorthand for `subscribe(ViewEvent::Closed, ..)`.
    pub fn on_closed(&self, listener: impl Fn() + 'static) -> Subscription {
        self.subscribe(ViewEvent::Closed, listener)
    }

    /// The owning container, if it is still alive.
    #[must_use]
    pub fn container(&self) -> Option<ViewsContainer<V>> {
        self.container.upgrade().map(|shared| ViewsContainer { shared })
    }

    /// Returns `true` if both handles refer to the same view.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<V: View> core::fmt::Debug for ViewHandle<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewHandle")
            .field("id", &self.slot.id)
            .field("branch", &self.slot.branch)
            .field("phase", &self.slot.phase())
            .finish_non_exhaustive()
    }
}
