// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-view open/close state machine.
//!
//! A [`ViewSlot`] wraps a user view with the bookkeeping the container needs: the current
//! [`Phase`], whether the visual object is active, the event channels, and a transition
//! epoch. Every transition bumps the epoch; a completion only updates the phase and
//! notifies listeners when its epoch is still current, which keeps superseded transitions
//! from overwriting newer ones.
//!
//! Phase changes happen as soon as a transition is requested. Everything that touches the
//! view itself (hooks, events, activation) runs as a task on the slot's queue. Tasks run
//! one at a time and in request order: a transition requested while the view is inside
//! one of its own hooks, for example a sibling opening from `on_open` and closing this
//! view through exclusivity, runs in full once that hook's task has finished.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use log::{debug, error, trace, warn};
use understory_deferred::{Deferred, Failure, Resolver};
use understory_nav_tree::BranchId;

use crate::config::{ReentrancyPolicy, RollbackPolicy, TransitionPolicy};
use crate::container::ContainerRef;
use crate::error::ViewError;
use crate::events::{EventHub, ViewEvent};
use crate::id::ViewId;
use crate::view::{Phase, Transition, View};

type Task<V> = Box<dyn FnOnce(&Rc<ViewSlot<V>>)>;

pub(crate) struct ViewSlot<V> {
    pub(crate) branch: BranchId,
    pub(crate) id: ViewId,
    pub(crate) view: RefCell<V>,
    pub(crate) events: EventHub,
    phase: Cell<Phase>,
    active: Cell<bool>,
    epoch: Cell<u64>,
    in_flight: Cell<bool>,
    policy: TransitionPolicy,
    pending: RefCell<VecDeque<Task<V>>>,
    draining: Cell<bool>,
}

impl<V: View> ViewSlot<V> {
    pub(crate) fn new(branch: BranchId, view: V, policy: TransitionPolicy) -> Self {
        Self {
            branch,
            id: view.id(),
            view: RefCell::new(view),
            events: EventHub::default(),
            phase: Cell::new(Phase::Closed),
            active: Cell::new(false),
            epoch: Cell::new(0),
            in_flight: Cell::new(false),
            policy,
            pending: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.phase.get().is_open()
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.get()
    }

    fn is_busy(&self) -> bool {
        self.view.try_borrow_mut().is_err()
    }

    /// Run `f` on the view.
    ///
    /// Queued tasks only start while the view is free, so this fails only for callers
    /// outside the queue (state loading) that reach a view from inside its own hook.
    pub(crate) fn hook<R>(&self, name: &'static str, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        match self.view.try_borrow_mut() {
            Ok(mut view) => Some(f(&mut view)),
            Err(_) => {
                error!("view {} is busy in another hook; skipping {name}", self.id);
                None
            }
        }
    }

    /// Queue `task` behind any work already pending for this view, then run the queue.
    fn schedule(self: &Rc<Self>, task: impl FnOnce(&Rc<Self>) + 'static) {
        self.pending.borrow_mut().push_back(Box::new(task));
        self.drain();
    }

    /// Run queued tasks until the queue is empty or the view is borrowed from outside.
    ///
    /// Nested calls return immediately; the outermost call picks up whatever they queued.
    pub(crate) fn drain(self: &Rc<Self>) {
        if self.draining.replace(true) {
            trace!("view {} is busy; work queued", self.id);
            return;
        }
        while !self.is_busy() {
            let Some(task) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            task(self);
        }
        self.draining.set(false);
    }

    fn set_active(&self, active: bool) {
        if self.active.replace(active) != active {
            self.hook("on_activation_changed", |v| v.on_activation_changed(active));
        }
    }

    /// Show or hide the visual object without a transition.
    pub(crate) fn activate(self: &Rc<Self>, active: bool) {
        self.schedule(move |slot| slot.set_active(active));
    }

    /// One-time setup: the view is activated for the duration of its initialization.
    pub(crate) fn initialize(self: &Rc<Self>, container: &ContainerRef<V>) {
        let container = container.clone();
        self.schedule(move |slot| {
            slot.set_active(true);
            slot.hook("on_initialize", |v| v.on_initialize(&container));
            slot.set_active(false);
        });
    }

    pub(crate) fn destroy(self: &Rc<Self>) {
        self.schedule(|slot| {
            slot.hook("on_destroyed", V::on_destroyed);
        });
    }

    fn begin(&self, target: Phase) -> Result<(u64, Phase), ViewError> {
        if self.in_flight.get() && self.policy.reentrancy == ReentrancyPolicy::Reject {
            warn!(
                "view {} is still {:?}; rejecting new transition",
                self.id,
                self.phase.get()
            );
            return Err(ViewError::TransitionInProgress {
                view: self.id.clone(),
                phase: self.phase.get(),
            });
        }
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        self.in_flight.set(true);
        Ok((epoch, self.phase.replace(target)))
    }

    pub(crate) fn open(self: &Rc<Self>) -> Deferred<ViewError> {
        self.open_with(|_| {})
    }

    /// Open, handing caller context to the view once the transition is allowed to start.
    pub(crate) fn open_with(
        self: &Rc<Self>,
        receive: impl FnOnce(&mut V) + 'static,
    ) -> Deferred<ViewError> {
        let (epoch, prior) = match self.begin(Phase::Opening) {
            Ok(started) => started,
            Err(e) => return Deferred::rejected(e),
        };
        debug!("opening view {}", self.id);

        let (result, resolver) = Deferred::new();
        self.schedule(move |slot| {
            slot.hook("receive", receive);
            slot.events.emit(ViewEvent::Opens);
            slot.set_active(true);
            slot.hook("on_before_open", V::on_before_open);
            let prepare = slot.hook("prepare_open", V::prepare_open).flatten();
            slot.settle(Transition::Open, prepare, epoch, prior, resolver);
        });
        result
    }

    pub(crate) fn close(self: &Rc<Self>) -> Deferred<ViewError> {
        let (epoch, prior) = match self.begin(Phase::Closing) {
            Ok(started) => started,
            Err(e) => return Deferred::rejected(e),
        };
        debug!("closing view {}", self.id);

        let (result, resolver) = Deferred::new();
        self.schedule(move |slot| {
            slot.events.emit(ViewEvent::Closes);
            slot.hook("on_before_close", V::on_before_close);
            let prepare = slot.hook("prepare_close", V::prepare_close).flatten();
            slot.settle(Transition::Close, prepare, epoch, prior, resolver);
        });
        result
    }

    fn settle(
        self: &Rc<Self>,
        transition: Transition,
        prepare: Option<Deferred<Failure>>,
        epoch: u64,
        prior: Phase,
        resolver: Resolver<ViewError>,
    ) {
        let Some(prepare) = prepare else {
            self.complete(transition, epoch);
            resolver.resolve();
            return;
        };

        let slot = self.clone();
        prepare.on_settle(move |outcome| {
            slot.schedule(move |slot| match outcome {
                Ok(()) => {
                    slot.complete(transition, epoch);
                    resolver.resolve();
                }
                Err(cause) => {
                    slot.fail(transition, epoch, prior, &cause);
                    resolver.reject(ViewError::Prepare {
                        view: slot.id.clone(),
                        transition,
                        cause,
                    });
                }
            });
        });
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// Finish a transition. A superseded one still runs the view's hook but leaves the
    /// phase, the activation, and the listeners to the transition that replaced it.
    fn complete(&self, transition: Transition, epoch: u64) {
        let current = self.is_current(epoch);
        if current {
            self.in_flight.set(false);
        } else {
            debug!("view {} finished a superseded {transition}", self.id);
        }
        match transition {
            Transition::Open => {
                if current {
                    self.phase.set(Phase::Open);
                    self.events.emit(ViewEvent::Opened);
                }
                self.hook("on_open", V::on_open);
            }
            Transition::Close => {
                if current {
                    self.set_active(false);
                    self.phase.set(Phase::Closed);
                    self.events.emit(ViewEvent::Closed);
                }
                self.hook("on_close", V::on_close);
            }
        }
    }

    fn fail(&self, transition: Transition, epoch: u64, prior: Phase, cause: &Failure) {
        error!("view {} failed to {transition}: {cause}", self.id);
        if !self.is_current(epoch) {
            return;
        }
        self.in_flight.set(false);
        match self.policy.rollback {
            RollbackPolicy::FailForward => {}
            RollbackPolicy::Strict => {
                self.phase.set(prior);
                if prior == Phase::Closed {
                    self.set_active(false);
                }
            }
        }
    }
}

impl<V> core::fmt::Debug for ViewSlot<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewSlot")
            .field("branch", &self.branch)
            .field("id", &self.id)
            .field("phase", &self.phase.get())
            .field("active", &self.active.get())
            .field("epoch", &self.epoch.get())
            .field("pending", &self.pending.borrow().len())
            .finish_non_exhaustive()
    }
}
