// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_tree --heading-base-level=0

//! Understory Nav Tree: an arena-indexed hierarchy of navigable views.
//!
//! A [`NavigationTree`] groups views into **branches**. Each branch pairs a payload
//! (usually a view) with a [`BranchConfig`] and links to its parent and children.
//! Containers use the hierarchy to decide exclusivity: opening a view keeps its
//! ancestors open and closes everything else.
//!
//! - Branches live in a flat arena and are addressed by [`BranchId`].
//! - The tree only grows. Ids stay valid for the life of the tree.
//! - Children are attached to existing parents only, so cycles cannot form.
//! - Traversal is depth-first preorder with siblings in insertion order.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_nav_tree::{BranchConfig, NavigationTree};
//!
//! let mut tree = NavigationTree::new();
//! let home = tree.insert_root("home", BranchConfig::SHOW_ON_AWAKE);
//! let settings = tree.insert_root("settings", BranchConfig::default());
//! let audio = tree.insert_child(settings, "audio", BranchConfig::default()).unwrap();
//!
//! assert!(tree.contains(settings, audio));
//! assert!(!tree.contains(home, audio));
//! assert_eq!(tree.views().copied().collect::<Vec<_>>(), ["home", "settings", "audio"]);
//! assert_eq!(tree.find(|v| *v == "audio"), Some(audio));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Ancestors, Branches, NavigationTree, TreeError};
pub use types::{Branch, BranchConfig, BranchId};
