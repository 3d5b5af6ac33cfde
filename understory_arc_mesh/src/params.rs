// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc shape parameters.

/// Shape of a bordered arc in unit space.
///
/// Angles are in degrees, measured from "up" in the fill direction. Widths are fractions
/// of the outer radius. Every setter clamps its input:
///
/// | parameter      | range     | default |
/// |----------------|-----------|---------|
/// | `start_angle`  | any       | -45     |
/// | `length`       | 0–360     | 90      |
/// | `circle_width` | 0–1       | 0.5     |
/// | `border_width` | 0–0.5     | 0.1     |
/// | `precision`    | 2–256     | 64      |
///
/// `precision` is the number of segments a full circle would use; shorter arcs use
/// proportionally fewer.
///
/// ```rust
/// use understory_arc_mesh::ArcParams;
///
/// let mut params = ArcParams::default();
/// params.set_circle_width(3.0).set_precision(1);
/// assert_eq!(params.circle_width(), 1.0);
/// assert_eq!(params.precision(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArcParams {
    start_angle: f64,
    length: f64,
    circle_width: f64,
    border_width: f64,
    precision: u32,
    merge_tips: bool,
    fill_clockwise: bool,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            start_angle: -45.0,
            length: 90.0,
            circle_width: 0.5,
            border_width: 0.1,
            precision: 64,
            merge_tips: true,
            fill_clockwise: true,
        }
    }
}

impl ArcParams {
    /// Fewest segments per full circle.
    pub const MIN_PRECISION: u32 = 2;
    /// Most segments per full circle.
    pub const MAX_PRECISION: u32 = 256;

    /// A full ring with the default widths.
    #[must_use]
    pub fn ring() -> Self {
        Self {
            start_angle: 0.0,
            length: 360.0,
            ..Self::default()
        }
    }

    /// Where the arc starts, in degrees from "up".
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angular extent in degrees.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Thickness of the ring as a fraction of the outer radius.
    #[must_use]
    pub fn circle_width(&self) -> f64 {
        self.circle_width
    }

    /// Thickness of each border band as a fraction of the ring thickness.
    #[must_use]
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Segments per full circle.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Whether a full circle closes exactly onto its first vertices.
    ///
    /// The closing column copies the first column's positions so the seam has no gap;
    /// its texture coordinates still continue at `steps`.
    #[must_use]
    pub fn merge_tips(&self) -> bool {
        self.merge_tips
    }

    /// Whether the arc grows clockwise from its start angle.
    #[must_use]
    pub fn fill_clockwise(&self) -> bool {
        self.fill_clockwise
    }

    /// Returns `true` when the arc covers the whole circle.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.length >= 360.0
    }

    /// Set the start angle. Non-finite values are ignored.
    pub fn set_start_angle(&mut self, degrees: f64) -> &mut Self {
        if degrees.is_finite() {
            self.start_angle = degrees;
        }
        self
    }

    /// Set the angular extent, clamped to 0–360.
    pub fn set_length(&mut self, degrees: f64) -> &mut Self {
        self.length = clamp(degrees, 0.0, 360.0);
        self
    }

    /// Set the ring thickness, clamped to 0–1.
    pub fn set_circle_width(&mut self, width: f64) -> &mut Self {
        self.circle_width = clamp(width, 0.0, 1.0);
        self
    }

    /// Set the border thickness, clamped to 0–0.5.
    pub fn set_border_width(&mut self, width: f64) -> &mut Self {
        self.border_width = clamp(width, 0.0, 0.5);
        self
    }

    /// Set segments per full circle, clamped to
    /// [`MIN_PRECISION`](Self::MIN_PRECISION)–[`MAX_PRECISION`](Self::MAX_PRECISION).
    pub fn set_precision(&mut self, precision: u32) -> &mut Self {
        self.precision = precision.clamp(Self::MIN_PRECISION, Self::MAX_PRECISION);
        self
    }

    /// See [`merge_tips`](Self::merge_tips).
    pub fn set_merge_tips(&mut self, merge: bool) -> &mut Self {
        self.merge_tips = merge;
        self
    }

    /// See [`fill_clockwise`](Self::fill_clockwise).
    pub fn set_fill_clockwise(&mut self, clockwise: bool) -> &mut Self {
        self.fill_clockwise = clockwise;
        self
    }

    /// Re-apply every clamp, for values that bypassed the setters (deserialization).
    #[must_use]
    pub fn clamped(mut self) -> Self {
        let start = if self.start_angle.is_finite() {
            self.start_angle
        } else {
            0.0
        };
        let (length, circle_width, border_width, precision) =
            (self.length, self.circle_width, self.border_width, self.precision);
        self.set_start_angle(start)
            .set_length(length)
            .set_circle_width(circle_width)
            .set_border_width(border_width)
            .set_precision(precision);
        self
    }

    /// Radii of the four vertex rings, innermost first.
    ///
    /// The outer two bands are the borders; the middle band is the fill.
    #[must_use]
    pub fn ring_radii(&self) -> [f64; 4] {
        let w = self.circle_width;
        let b = self.border_width;
        [1.0 - w, 1.0 - (w - b * w), 1.0 - b * w, 1.0]
    }
}

/// `f64::clamp` that maps NaN to `min`.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
