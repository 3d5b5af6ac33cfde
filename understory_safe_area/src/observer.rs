// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification for screen metrics.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use log::{debug, trace};

use crate::adapters::SafeAreaAdapter;
use crate::insets::{SafeAreaInsets, ScreenMetrics};

/// Scale changes smaller than this are ignored.
const SCALE_EPSILON: f64 = 1e-3;

/// Token returned by [`SafeAreaObserver::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&SafeAreaInsets, &ScreenMetrics)>;

/// Tracks the latest screen metrics and tells subscribers when the safe area changes.
///
/// There is no global instance: the application creates one observer, feeds it from its
/// frame loop (or from platform resize events) through [`update`](Self::update), and hands
/// it to whatever needs to subscribe.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use kurbo::{Rect, Size};
/// use understory_safe_area::{SafeAreaEdges, SafeAreaObserver, SafeAreaSpacer, ScreenMetrics};
///
/// let mut observer = SafeAreaObserver::new();
/// let header = Rc::new(RefCell::new(SafeAreaSpacer::new(SafeAreaEdges::all())));
/// observer.attach(header.clone());
///
/// let metrics = ScreenMetrics {
///     size: Size::new(390.0, 844.0),
///     safe_area: Rect::new(0.0, 34.0, 390.0, 797.0),
///     scale_factor: 1.0,
/// };
/// assert!(observer.update(metrics));
/// assert_eq!(header.borrow().min_size().height, 81.0);
///
/// // Same metrics again: nothing to do.
/// assert!(!observer.update(metrics));
/// ```
pub struct SafeAreaObserver {
    metrics: Option<ScreenMetrics>,
    insets: SafeAreaInsets,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl Default for SafeAreaObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeAreaObserver {
    /// An observer that has not seen any metrics yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metrics: None,
            insets: SafeAreaInsets::default(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The most recent metrics, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&ScreenMetrics> {
        self.metrics.as_ref()
    }

    /// Insets computed from the most recent metrics.
    #[must_use]
    pub fn insets(&self) -> SafeAreaInsets {
        self.insets
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Call `f` on every change. If metrics are already known, `f` runs once right away.
    pub fn subscribe(
        &mut self,
        mut f: impl FnMut(&SafeAreaInsets, &ScreenMetrics) + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        if let Some(metrics) = &self.metrics {
            f(&self.insets, metrics);
        }
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Subscribe a shared adapter.
    pub fn attach<A: SafeAreaAdapter + 'static>(&mut self, adapter: Rc<RefCell<A>>) -> SubscriberId {
        self.subscribe(move |insets, metrics| adapter.borrow_mut().apply(insets, metrics))
    }

    /// Stop notifying a subscriber; returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != id);
        self.subscribers.len() != before
    }

    /// Record new metrics; notifies every subscriber and returns `true` if they changed.
    ///
    /// A change is a different screen size, a different safe rectangle, or a scale factor
    /// that moved by more than a thousandth.
    pub fn update(&mut self, metrics: ScreenMetrics) -> bool {
        if self.metrics.is_some_and(|old| same(&old, &metrics)) {
            trace!("safe area unchanged");
            return false;
        }
        self.metrics = Some(metrics);
        self.insets = SafeAreaInsets::compute(&metrics);
        debug!(
            "safe area changed: min {:?}, max {:?}, notifying {} subscribers",
            self.insets.min,
            self.insets.max,
            self.subscribers.len()
        );
        for (_, f) in &mut self.subscribers {
            f(&self.insets, &metrics);
        }
        true
    }

    /// Drop every subscriber and forget the last metrics.
    pub fn teardown(&mut self) {
        debug!("safe area observer torn down with {} subscribers", self.subscribers.len());
        self.subscribers.clear();
        self.metrics = None;
        self.insets = SafeAreaInsets::default();
    }
}

fn same(a: &ScreenMetrics, b: &ScreenMetrics) -> bool {
    a.size == b.size
        && a.safe_area == b.safe_area
        && (a.scale_factor - b.scale_factor).abs() < SCALE_EPSILON
}

impl core::fmt::Debug for SafeAreaObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SafeAreaObserver")
            .field("metrics", &self.metrics)
            .field("insets", &self.insets)
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
