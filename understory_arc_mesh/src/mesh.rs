// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mesh generation.

use alloc::vec::Vec;
use core::f64::consts::TAU;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

use crate::params::ArcParams;

/// Vertices per step column: inner edge, inner border, outer border, outer edge.
const RINGS: u32 = 4;

/// One mesh vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcVertex {
    /// Position in unit space (`-1..=1` on both axes, y up) or, after
    /// [`ArcMesh::layout`], in the target rectangle.
    pub position: Point,
    /// Texture coordinate: `x` counts steps along the arc, `y` runs 0 (inner) to 1 (outer)
    /// with the border bands at `border_width` and `1 - border_width`.
    pub uv: Point,
}

/// Triangle mesh of a bordered arc.
///
/// Vertices are laid out in columns of four, one column per step boundary, innermost
/// ring first. Each step contributes three quads (inner border, fill, outer border),
/// i.e. six triangles.
///
/// ```rust
/// use understory_arc_mesh::{ArcMesh, ArcParams};
///
/// let mut params = ArcParams::default();
/// params.set_length(180.0).set_precision(8);
/// let mesh = ArcMesh::build(&params);
///
/// // Half of an 8-segment circle.
/// assert_eq!(mesh.steps(), 4);
/// assert_eq!(mesh.vertices().len(), 5 * 4);
/// assert_eq!(mesh.triangles().count(), 4 * 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcMesh {
    vertices: Vec<ArcVertex>,
    indices: Vec<u32>,
    steps: usize,
}

impl ArcMesh {
    /// Build the mesh for `params`.
    ///
    /// An arc of zero length produces an empty mesh.
    #[must_use]
    pub fn build(params: &ArcParams) -> Self {
        let params = params.clamped();
        let exact = params.length() / 360.0 * f64::from(params.precision());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "at most MAX_PRECISION after clamping"
        )]
        let steps = exact.ceil() as u32;
        if steps == 0 {
            return Self::default();
        }

        let merged = params.merge_tips() && params.is_full_circle();
        let radii = params.ring_radii();
        let b = params.border_width();
        let v_coords = [0.0, b, 1.0 - b, 1.0];

        let turn_start = (params.start_angle() + 90.0) / 360.0;
        let turn_step = params.length() / f64::from(steps) / 360.0;
        let x_sign = if params.fill_clockwise() { -1.0 } else { 1.0 };

        let mut vertices: Vec<ArcVertex> = Vec::with_capacity(((steps + 1) * RINGS) as usize);
        for i in 0..=steps {
            let angle = (turn_start + f64::from(i) * turn_step) * TAU;
            let dir = Vec2::new(angle.cos() * x_sign, angle.sin());
            // A merged seam repeats the first column's positions exactly; UVs keep counting.
            let seam = merged && i == steps;
            for (ring, (radius, v)) in radii.iter().zip(v_coords).enumerate() {
                let position = if seam {
                    vertices[ring].position
                } else {
                    (dir * *radius).to_point()
                };
                vertices.push(ArcVertex {
                    position,
                    uv: Point::new(f64::from(i), v),
                });
            }
        }

        let mut indices = Vec::with_capacity((steps * (RINGS - 1) * 6) as usize);
        for step in 0..steps {
            let here = step * RINGS;
            let next = here + RINGS;
            for ring in 0..RINGS - 1 {
                let (a, b) = (here + ring, next + ring);
                indices.extend_from_slice(&[a, b, b + 1, a, b + 1, a + 1]);
            }
        }

        Self {
            vertices,
            indices,
            steps: steps as usize,
        }
    }

    /// Number of angular steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// All vertices, column by column.
    #[must_use]
    pub fn vertices(&self) -> &[ArcVertex] {
        &self.vertices
    }

    /// Triangle list indices into [`vertices`](Self::vertices).
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [ArcVertex; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]].map(|i| self.vertices[i as usize]))
    }

    /// Map unit space into `rect`, flipping y so that unit "up" lands at `rect.y0`.
    #[must_use]
    pub fn layout(&self, rect: Rect) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| ArcVertex {
                position: unit_to_rect(v.position, rect),
                uv: v.uv,
            })
            .collect();
        Self {
            vertices,
            indices: self.indices.clone(),
            steps: self.steps,
        }
    }
}

/// Map a unit-space point (`-1..=1`, y up) into `rect` (y down).
pub(crate) fn unit_to_rect(p: Point, rect: Rect) -> Point {
    Point::new(
        rect.x0 + (p.x + 1.0) * 0.5 * rect.width(),
        rect.y1 - (p.y + 1.0) * 0.5 * rect.height(),
    )
}

/// Inverse of [`unit_to_rect`]. Returns `None` for an empty rectangle.
pub(crate) fn rect_to_unit(p: Point, rect: Rect) -> Option<Point> {
    let (w, h) = (rect.width(), rect.height());
    if w == 0.0 || h == 0.0 {
        return None;
    }
    Some(Point::new(
        (p.x - rect.x0) / w * 2.0 - 1.0,
        (rect.y1 - p.y) / h * 2.0 - 1.0,
    ))
}
