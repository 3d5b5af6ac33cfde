// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the navigation tree: branch identifiers, configuration, and branches.

use smallvec::SmallVec;

/// Identifier for a branch in a [`NavigationTree`](crate::NavigationTree).
///
/// A small, copyable arena index. Because the tree never removes branches, an id
/// stays valid for the life of the tree that issued it. Ids from a different tree
/// are not detected and simply address whatever lives at that index (or nothing).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchId(pub(crate) u32);

impl BranchId {
    /// Position of the branch in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Display configuration attached to a branch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchConfig {
    /// Keep the branch's view active right after container initialization.
    pub show_on_awake: bool,
}

impl BranchConfig {
    /// Configuration with [`BranchConfig::show_on_awake`] set.
    pub const SHOW_ON_AWAKE: Self = Self {
        show_on_awake: true,
    };
}

/// A node of the tree: a payload, its configuration, and structural links.
#[derive(Clone, Debug)]
pub struct Branch<T> {
    pub(crate) view: T,
    pub(crate) config: BranchConfig,
    pub(crate) parent: Option<BranchId>,
    pub(crate) children: SmallVec<[BranchId; 4]>,
    pub(crate) depth: u32,
}

impl<T> Branch<T> {
    /// The payload of this branch.
    pub fn view(&self) -> &T {
        &self.view
    }

    /// Mutable access to the payload.
    pub fn view_mut(&mut self) -> &mut T {
        &mut self.view
    }

    /// Display configuration.
    pub fn config(&self) -> BranchConfig {
        self.config
    }

    /// Parent branch, or `None` for a root.
    pub fn parent(&self) -> Option<BranchId> {
        self.parent
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[BranchId] {
        &self.children
    }

    /// Number of ancestors (roots have depth 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }
}
