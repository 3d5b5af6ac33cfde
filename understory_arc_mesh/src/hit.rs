// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular hit testing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::mesh::rect_to_unit;
use crate::params::ArcParams;

/// Angle of a unit-space direction, in degrees from "up" in the fill direction (`0..360`).
#[must_use]
pub fn angle_from_up(dir: Point, fill_clockwise: bool) -> f64 {
    // atan2(x, y) is the clockwise angle from +y.
    let clockwise = dir.x.atan2(dir.y).to_degrees();
    let angle = if fill_clockwise { clockwise } else { -clockwise };
    wrap_degrees(angle)
}

/// Returns `true` if `point` (in the coordinate space of `rect`) lands on the arc drawn by
/// `params` inside `rect`.
///
/// The test is radial and angular: the point has to lie inside the unit circle mapped
/// onto `rect`, and its angle has to fall within `[start, start + length]`. Start angles
/// outside `0..360` and arcs that cross "up" are handled by wrapping.
///
/// The inner radius is not considered, so the hole of a ring still hits.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use understory_arc_mesh::{ArcParams, hit_test};
///
/// let mut params = ArcParams::default();
/// params.set_start_angle(0.0).set_length(90.0);
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
///
/// // Upper right quadrant (y grows downward in `rect`).
/// assert!(hit_test(&params, rect, Point::new(80.0, 20.0)));
/// assert!(!hit_test(&params, rect, Point::new(20.0, 20.0)));
/// ```
#[must_use]
pub fn hit_test(params: &ArcParams, rect: Rect, point: Point) -> bool {
    let Some(unit) = rect_to_unit(point, rect) else {
        return false;
    };
    if unit.to_vec2().hypot2() > 1.0 {
        return false;
    }
    let params = params.clamped();
    if params.is_full_circle() {
        return true;
    }
    let angle = angle_from_up(unit, params.fill_clockwise());
    let offset = wrap_degrees(angle - params.start_angle());
    offset <= params.length()
}

fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
