// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_safe_area --heading-base-level=0

//! Understory Safe Area: keep layout clear of notches, cutouts, and system bars.
//!
//! Platforms report a *safe area*: the part of the screen that is not covered by hardware
//! or system UI. This crate turns that report into layout adjustments:
//!
//! - [`ScreenMetrics`] is the platform report, in device pixels.
//! - [`SafeAreaInsets::compute`] converts it into whole canvas units.
//! - [`SafeAreaPadding`], [`SafeAreaOffset`], and [`SafeAreaSpacer`] implement
//!   [`SafeAreaAdapter`] and fold the insets into a stretched rectangle, an anchored
//!   position, or a spacer size, restricted to the edges and orientations chosen with
//!   [`SafeAreaEdges`].
//! - [`SafeAreaObserver`] remembers the last metrics and notifies subscribers when they
//!   change.
//!
//! Platform specifics (where the metrics come from, when to poll) stay with the caller.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_safe_area::{
//!     SafeAreaAdapter, SafeAreaEdges, SafeAreaInsets, SafeAreaPadding, ScreenMetrics,
//! };
//!
//! // A 3x phone with a notch at the top and a home indicator at the bottom.
//! let metrics = ScreenMetrics {
//!     size: Size::new(1170.0, 2532.0),
//!     safe_area: Rect::new(0.0, 102.0, 1170.0, 2391.0),
//!     scale_factor: 3.0,
//! };
//! let insets = SafeAreaInsets::compute(&metrics);
//! assert_eq!((insets.top(), insets.bottom()), (47.0, 34.0));
//!
//! let mut content = SafeAreaPadding::new(SafeAreaEdges::all(), Vec2::ZERO, Vec2::ZERO);
//! content.apply(&insets, &metrics);
//! assert_eq!(content.offset_min(), Vec2::new(0.0, 34.0));
//! assert_eq!(content.offset_max(), Vec2::new(0.0, -47.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapters;
mod insets;
mod observer;

pub use adapters::{SafeAreaAdapter, SafeAreaOffset, SafeAreaPadding, SafeAreaSpacer};
pub use insets::{SafeAreaEdges, SafeAreaInsets, ScreenMetrics};
pub use observer::{SafeAreaObserver, SubscriberId};
