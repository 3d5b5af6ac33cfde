// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout adapters that fold safe-area insets into a layout element.

use kurbo::{Point, Size, Vec2};

use crate::insets::{SafeAreaEdges, SafeAreaInsets, ScreenMetrics};

/// Something whose layout follows the safe area.
///
/// Adapters keep the layout values they were created with and recompute their output from
/// those on every [`apply`](SafeAreaAdapter::apply), so applying twice is the same as
/// applying once.
pub trait SafeAreaAdapter {
    /// Recompute the adapted layout for new insets.
    fn apply(&mut self, insets: &SafeAreaInsets, metrics: &ScreenMetrics);

    /// Edges and orientations this adapter respects.
    fn edges(&self) -> SafeAreaEdges;
}

/// Pushes the edges of a stretched rectangle inward so it stays inside the safe area.
///
/// Offsets follow the stretched-rectangle convention: `offset_min` is the lower-left
/// inset from the parent (positive inward) and `offset_max` the upper-right inset
/// (negative inward). An edge keeps its original offset when that is already further in.
///
/// ```rust
/// use kurbo::{Rect, Size, Vec2};
/// use understory_safe_area::{
///     SafeAreaAdapter, SafeAreaEdges, SafeAreaInsets, SafeAreaPadding, ScreenMetrics,
/// };
///
/// let metrics = ScreenMetrics {
///     size: Size::new(300.0, 600.0),
///     safe_area: Rect::new(0.0, 20.0, 300.0, 560.0),
///     scale_factor: 1.0,
/// };
/// let mut panel = SafeAreaPadding::new(SafeAreaEdges::all(), Vec2::new(8.0, 8.0), Vec2::ZERO);
/// panel.apply(&SafeAreaInsets::compute(&metrics), &metrics);
///
/// assert_eq!(panel.offset_min(), Vec2::new(8.0, 20.0));
/// assert_eq!(panel.offset_max(), Vec2::new(0.0, -40.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeAreaPadding {
    edges: SafeAreaEdges,
    original_min: Vec2,
    original_max: Vec2,
    offset_min: Vec2,
    offset_max: Vec2,
}

impl SafeAreaPadding {
    /// Wrap a rectangle's current offsets.
    #[must_use]
    pub fn new(edges: SafeAreaEdges, offset_min: Vec2, offset_max: Vec2) -> Self {
        Self {
            edges,
            original_min: offset_min,
            original_max: offset_max,
            offset_min,
            offset_max,
        }
    }

    /// Adapted lower-left offset.
    #[must_use]
    pub fn offset_min(&self) -> Vec2 {
        self.offset_min
    }

    /// Adapted upper-right offset.
    #[must_use]
    pub fn offset_max(&self) -> Vec2 {
        self.offset_max
    }
}

impl SafeAreaAdapter for SafeAreaPadding {
    fn apply(&mut self, insets: &SafeAreaInsets, metrics: &ScreenMetrics) {
        let (min, max) = (self.original_min, self.original_max);
        let edges = self.edges;
        let on = edges.applies_to(metrics);
        let pick = |edge, adjusted: f64, original: f64| {
            if on && edges.contains(edge) {
                adjusted
            } else {
                original
            }
        };
        self.offset_min = Vec2::new(
            pick(SafeAreaEdges::LEFT, insets.min.x.max(min.x), min.x),
            pick(SafeAreaEdges::BOTTOM, insets.min.y.max(min.y), min.y),
        );
        self.offset_max = Vec2::new(
            pick(SafeAreaEdges::RIGHT, insets.max.x.min(max.x), max.x),
            pick(SafeAreaEdges::TOP, insets.max.y.min(max.y), max.y),
        );
    }

    fn edges(&self) -> SafeAreaEdges {
        self.edges
    }
}

/// Clamps an anchored position so that it stays inside the safe area.
///
/// Suited to elements anchored to a screen corner, such as a floating button.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeAreaOffset {
    edges: SafeAreaEdges,
    original: Point,
    position: Point,
}

impl SafeAreaOffset {
    /// Wrap an element's current anchored position.
    #[must_use]
    pub fn new(edges: SafeAreaEdges, position: Point) -> Self {
        Self {
            edges,
            original: position,
            position,
        }
    }

    /// Adapted anchored position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }
}

impl SafeAreaAdapter for SafeAreaOffset {
    fn apply(&mut self, insets: &SafeAreaInsets, metrics: &ScreenMetrics) {
        let mut p = self.original;
        if self.edges.applies_to(metrics) {
            if self.edges.contains(SafeAreaEdges::BOTTOM) {
                p.y = p.y.max(insets.min.y);
            }
            if self.edges.contains(SafeAreaEdges::TOP) {
                p.y = p.y.min(insets.max.y);
            }
            if self.edges.contains(SafeAreaEdges::LEFT) {
                p.x = p.x.max(insets.min.x);
            }
            if self.edges.contains(SafeAreaEdges::RIGHT) {
                p.x = p.x.min(insets.max.x);
            }
        }
        self.position = p;
    }

    fn edges(&self) -> SafeAreaEdges {
        self.edges
    }
}

/// A layout spacer sized to the selected insets.
///
/// Place one before or after content in a stack to reserve room for a notch or a
/// home indicator. Both the minimum and the preferred size follow the insets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SafeAreaSpacer {
    edges: SafeAreaEdges,
    size: Size,
}

impl SafeAreaSpacer {
    /// A spacer covering `edges`; zero-sized until the first apply.
    #[must_use]
    pub fn new(edges: SafeAreaEdges) -> Self {
        Self {
            edges,
            size: Size::ZERO,
        }
    }

    /// Minimum size for the layout.
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.size
    }

    /// Preferred size for the layout.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        self.size
    }
}

impl SafeAreaAdapter for SafeAreaSpacer {
    fn apply(&mut self, insets: &SafeAreaInsets, metrics: &ScreenMetrics) {
        if !self.edges.applies_to(metrics) {
            self.size = Size::ZERO;
            return;
        }
        let edge = |flag, value: f64| if self.edges.contains(flag) { value } else { 0.0 };
        self.size = Size::new(
            edge(SafeAreaEdges::LEFT, insets.left()) + edge(SafeAreaEdges::RIGHT, insets.right()),
            edge(SafeAreaEdges::BOTTOM, insets.bottom()) + edge(SafeAreaEdges::TOP, insets.top()),
        );
    }

    fn edges(&self) -> SafeAreaEdges {
        self.edges
    }
}
