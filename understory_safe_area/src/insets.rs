// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen metrics, edge selection, and pixel-perfect insets.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size, Vec2};

/// What the platform reports about the screen, in device pixels.
///
/// Coordinates are y-up: `safe_area.y0` is the distance of the safe rectangle from the
/// bottom edge of the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Full screen size.
    pub size: Size,
    /// The part of the screen not covered by notches, cutouts, or system bars.
    pub safe_area: Rect,
    /// Device pixels per canvas unit.
    pub scale_factor: f64,
}

impl ScreenMetrics {
    /// A screen with no cutouts at scale 1.
    #[must_use]
    pub fn unobstructed(size: Size) -> Self {
        Self {
            size,
            safe_area: size.to_rect(),
            scale_factor: 1.0,
        }
    }

    /// Returns `true` when the screen is wider than it is tall.
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }
}

bitflags::bitflags! {
    /// Which edges an adapter respects, and in which orientations it is active.
    ///
    /// An adapter with neither `LANDSCAPE` nor `PORTRAIT` never applies its insets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SafeAreaEdges: u8 {
        /// Respect the top inset.
        const TOP       = 0b0000_0001;
        /// Respect the right inset.
        const RIGHT     = 0b0000_0010;
        /// Respect the bottom inset.
        const BOTTOM    = 0b0000_0100;
        /// Respect the left inset.
        const LEFT      = 0b0000_1000;
        /// Apply while the screen is in landscape.
        const LANDSCAPE = 0b0001_0000;
        /// Apply while the screen is in portrait.
        const PORTRAIT  = 0b0010_0000;

        /// All four edges.
        const EDGES = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Both orientations.
        const ORIENTATIONS = Self::LANDSCAPE.bits() | Self::PORTRAIT.bits();
    }
}

impl Default for SafeAreaEdges {
    fn default() -> Self {
        Self::all()
    }
}

impl SafeAreaEdges {
    /// Whether the orientation flags allow applying insets on this screen.
    #[must_use]
    pub fn applies_to(self, metrics: &ScreenMetrics) -> bool {
        if metrics.is_landscape() {
            self.contains(Self::LANDSCAPE)
        } else {
            self.contains(Self::PORTRAIT)
        }
    }
}

/// Safe-area insets in canvas units, rounded to whole units.
///
/// `min` is the offset of the safe rectangle's lower-left corner from the screen's
/// lower-left corner (non-negative). `max` is the offset of the safe rectangle's
/// upper-right corner from the screen's upper-right corner (non-positive). This matches
/// the offsets a stretched layout rectangle uses for its own edges.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SafeAreaInsets {
    /// Left (`x`) and bottom (`y`) offsets.
    pub min: Vec2,
    /// Right (`x`) and top (`y`) offsets, negative inward.
    pub max: Vec2,
}

impl SafeAreaInsets {
    /// Convert device-pixel metrics into canvas-unit insets.
    ///
    /// A non-positive or non-finite scale factor is treated as 1.
    #[must_use]
    pub fn compute(metrics: &ScreenMetrics) -> Self {
        let scale = if metrics.scale_factor.is_finite() && metrics.scale_factor > 0.0 {
            metrics.scale_factor
        } else {
            1.0
        };
        let safe = metrics.safe_area;
        let screen = metrics.size.to_vec2();
        let min = Vec2::new(safe.x0, safe.y0) / scale;
        let max = -(screen - Vec2::new(safe.x1, safe.y1)) / scale;
        Self {
            min: min.round(),
            max: max.round(),
        }
    }

    /// Left inset as a distance.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    /// Bottom inset as a distance.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.min.y
    }

    /// Right inset as a distance.
    #[must_use]
    pub fn right(&self) -> f64 {
        -self.max.x
    }

    /// Top inset as a distance.
    #[must_use]
    pub fn top(&self) -> f64 {
        -self.max.y
    }
}
