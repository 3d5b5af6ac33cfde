// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_arc_mesh --heading-base-level=0

//! Understory Arc Mesh: procedural meshes for bordered rings and arcs.
//!
//! Progress rings, radial gauges, and pie-menu slices are all the same shape: an arc of a
//! ring with a thin border band on each side. This crate builds that shape as a triangle
//! mesh and answers hit tests against it.
//!
//! - [`ArcParams`] describes the arc: start angle, length, widths, and tessellation.
//! - [`ArcMesh::build`] produces vertices in unit space (`-1..=1`, y up) with texture
//!   coordinates that separate the border bands from the fill.
//! - [`ArcMesh::layout`] maps the unit mesh into a [`kurbo::Rect`] in y-down coordinates.
//! - [`hit_test`] checks a point against the arc's angular extent.
//!
//! Angles are in degrees, measured from "up" in the fill direction, so a start angle of 0
//! with `fill_clockwise` draws from twelve o'clock towards three o'clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_arc_mesh::{ArcMesh, ArcParams, hit_test};
//!
//! let mut gauge = ArcParams::default();
//! gauge.set_start_angle(-120.0).set_length(240.0).set_circle_width(0.2);
//!
//! let bounds = Rect::new(0.0, 0.0, 64.0, 64.0);
//! let mesh = ArcMesh::build(&gauge).layout(bounds);
//! assert!(!mesh.is_empty());
//! assert!(mesh.vertices().iter().all(|v| bounds.inflate(1e-9, 1e-9).contains(v.position)));
//!
//! // Straight down is the gap between the ends.
//! assert!(!hit_test(&gauge, bounds, Point::new(32.0, 60.0)));
//! assert!(hit_test(&gauge, bounds, Point::new(32.0, 4.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library float functions.
//! - `libm`: use `libm` for float functions in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ArcParams`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod mesh;
mod params;

pub use hit::{angle_from_up, hit_test};
pub use mesh::{ArcMesh, ArcVertex};
pub use params::ArcParams;
