// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deferred --heading-base-level=0

//! Understory Deferred: single-settlement results for cooperative, single-threaded UI code.
//!
//! A [`Deferred`] is the consumer side of a result that settles at most once, either
//! resolved (no value) or rejected with a cause. The matching [`Resolver`] is the
//! producer side; settling consumes it, so a result can never be settled twice through it.
//!
//! This is deliberately not a `Future`: there is no executor and no waker. Callbacks
//! registered with [`Deferred::on_settle`], [`Deferred::then`], or [`Deferred::catch`] run
//! synchronously on the thread that settles the result, which matches UI frame loops where
//! an animation or a loader calls back once it is done.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_deferred::{Deferred, Failure, Settlement};
//!
//! let (fade_in, resolver) = Deferred::<Failure>::new();
//! let done = Rc::new(Cell::new(false));
//!
//! let flag = done.clone();
//! let chained = fade_in.then(move || flag.set(true));
//! assert_eq!(chained.settlement(), Settlement::Pending);
//!
//! // Later, when the animation finishes:
//! resolver.resolve();
//! assert!(done.get());
//! assert!(chained.is_resolved());
//! ```
//!
//! ## Failures
//!
//! Rejections carry an `E`. Most Understory crates use [`Failure`], a cheaply cloneable,
//! type-erased `core::error::Error` handle, so that a cause can be propagated unchanged
//! through a chain of deferred results and later compared with [`Failure::ptr_eq`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod deferred;
mod failure;

pub use deferred::{Deferred, Resolver, Settlement};
pub use failure::Failure;
