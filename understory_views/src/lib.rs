// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_views --heading-base-level=0

//! Understory Views: navigable views with open/close lifecycles, nesting, and sibling exclusivity.
//!
//! A [`ViewsContainer`] owns a navigation tree of views, built once by its
//! [`ContainerDelegate`]. Each view moves through `Closed → Opening → Open → Closing →
//! Closed`; the `Opening` and `Closing` phases may wait on an asynchronous prepare step
//! (an animation, a loader) expressed as a [`Deferred`].
//!
//! The container's one rule is exclusivity: whenever a view opens, every other open view
//! closes unless it is an ancestor of the opening view. A settings page stays open while
//! its audio sub-page opens; the home page does not.
//!
//! ## Concepts
//!
//! - [`View`]: lifecycle hooks with no-op defaults. Only [`View::id`] is required.
//! - [`ViewHandle`]: cloneable reference used to open, close, inspect, and subscribe.
//! - [`ViewEvent`]: `Opens`, `Opened`, `Closes`, `Closed`, delivered in subscription order.
//! - [`ContainerConfig`]: failure ([`RollbackPolicy`]) and overlap ([`ReentrancyPolicy`])
//!   handling.
//! - [`ViewState`] / [`StateDocument`]: optional persisted state per view.
//!
//! `V` is one concrete type per container. Heterogeneous screens are usually an enum, and
//! typed lookup becomes a predicate:
//!
//! ```rust
//! use understory_nav_tree::{BranchConfig, NavigationTree};
//! use understory_views::{ContainerConfig, ContainerDelegate, View, ViewId, ViewsContainer};
//!
//! enum Screen {
//!     Home,
//!     Profile { user: u64 },
//! }
//!
//! impl View for Screen {
//!     fn id(&self) -> ViewId {
//!         match self {
//!             Self::Home => ViewId::from_static("app", "home"),
//!             Self::Profile { .. } => ViewId::from_static("app", "profile"),
//!         }
//!     }
//! }
//!
//! struct App;
//!
//! impl ContainerDelegate<Screen> for App {
//!     fn build_navigation_tree(&mut self) -> NavigationTree<Screen> {
//!         let mut tree = NavigationTree::new();
//!         tree.insert_root(Screen::Home, BranchConfig::SHOW_ON_AWAKE);
//!         tree.insert_root(Screen::Profile { user: 7 }, BranchConfig::default());
//!         tree
//!     }
//! }
//!
//! let container = ViewsContainer::new(App, ContainerConfig::default());
//! container.initialize().unwrap();
//!
//! let profile = container
//!     .find_view(|s| matches!(s, Screen::Profile { .. }))
//!     .unwrap();
//! assert!(!profile.is_active());
//!
//! let opened = profile.open();
//! assert!(opened.is_resolved());
//! assert!(profile.is_open() && profile.is_active());
//! assert_eq!(profile.with(|s| match s {
//!     Screen::Profile { user } => *user,
//!     Screen::Home => 0,
//! }), 7);
//! ```
//!
//! ## Threading
//!
//! Everything is single-threaded and cooperative: transitions start synchronously, and
//! asynchronous prepare steps call back on the thread that settles them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod container;
mod error;
mod events;
mod handle;
mod id;
mod lifecycle;
mod state;
mod view;

pub use config::{ContainerConfig, ReentrancyPolicy, RollbackPolicy};
pub use container::{ContainerDelegate, ContainerRef, ViewsContainer};
pub use error::ViewError;
pub use events::{Subscription, ViewEvent};
pub use handle::ViewHandle;
pub use id::{ParseViewIdError, ViewId};
pub use state::{NoState, StateDocument, ViewState};
pub use view::{OpenArgs, OpenWith, Phase, Transition, View};

pub use understory_deferred::{Deferred, Failure};
