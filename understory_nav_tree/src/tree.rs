// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`NavigationTree`] arena and its traversal iterators.

use alloc::vec::Vec;
use core::fmt;
use smallvec::SmallVec;

use crate::types::{Branch, BranchConfig, BranchId};

/// Error returned when a tree edit references a branch that does not exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The parent passed to [`NavigationTree::insert_child`] is not in this tree.
    UnknownParent(BranchId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParent(id) => {
                write!(f, "branch {} is not part of this navigation tree", id.0)
            }
        }
    }
}

impl core::error::Error for TreeError {}

/// Hierarchy of branches addressed by [`BranchId`].
///
/// See the [crate docs](crate) for the model. The tree is built once, typically by a
/// container's builder, and treated as read-only afterwards.
#[derive(Clone, Debug)]
pub struct NavigationTree<T> {
    branches: Vec<Branch<T>>,
    roots: SmallVec<[BranchId; 4]>,
}

impl<T> Default for NavigationTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NavigationTree<T> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            roots: SmallVec::new(),
        }
    }

    /// Number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns `true` if the tree has no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Add a top-level branch.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` branches.
    pub fn insert_root(&mut self, view: T, config: BranchConfig) -> BranchId {
        let id = self.push(view, config, None, 0);
        self.roots.push(id);
        id
    }

    /// Add a branch under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` branches.
    pub fn insert_child(
        &mut self,
        parent: BranchId,
        view: T,
        config: BranchConfig,
    ) -> Result<BranchId, TreeError> {
        let depth = match self.branches.get(parent.index()) {
            Some(p) => p.depth + 1,
            None => return Err(TreeError::UnknownParent(parent)),
        };
        let id = self.push(view, config, Some(parent), depth);
        self.branches[parent.index()].children.push(id);
        Ok(id)
    }

    fn push(
        &mut self,
        view: T,
        config: BranchConfig,
        parent: Option<BranchId>,
        depth: u32,
    ) -> BranchId {
        assert!(
            self.branches.len() < u32::MAX as usize,
            "Too many branches in navigation tree (max {})",
            u32::MAX
        );
        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let idx = self.branches.len() as u32;
        self.branches.push(Branch {
            view,
            config,
            parent,
            children: SmallVec::new(),
            depth,
        });
        BranchId(idx)
    }

    /// Borrow a branch.
    #[must_use]
    pub fn branch(&self, id: BranchId) -> Option<&Branch<T>> {
        self.branches.get(id.index())
    }

    /// Borrow a branch's payload.
    #[must_use]
    pub fn get(&self, id: BranchId) -> Option<&T> {
        self.branch(id).map(Branch::view)
    }

    /// Mutably borrow a branch's payload.
    pub fn get_mut(&mut self, id: BranchId) -> Option<&mut T> {
        self.branches.get_mut(id.index()).map(Branch::view_mut)
    }

    /// Parent of `id`, or `None` for roots and unknown ids.
    #[must_use]
    pub fn parent(&self, id: BranchId) -> Option<BranchId> {
        self.branch(id).and_then(Branch::parent)
    }

    /// Children of `id` in insertion order; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: BranchId) -> &[BranchId] {
        self.branch(id).map(Branch::children).unwrap_or(&[])
    }

    /// Top-level branches in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[BranchId] {
        &self.roots
    }

    /// Depth of `id` (roots are 0).
    #[must_use]
    pub fn depth(&self, id: BranchId) -> Option<u32> {
        self.branch(id).map(Branch::depth)
    }

    /// Walk from the parent of `id` up to its root.
    #[must_use]
    pub fn ancestors(&self, id: BranchId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Returns `true` if `other` is a strict descendant of `branch`.
    #[must_use]
    pub fn contains(&self, branch: BranchId, other: BranchId) -> bool {
        // Depth check first; a descendant is always deeper.
        match (self.depth(branch), self.depth(other)) {
            (Some(a), Some(b)) if b > a => self.ancestors(other).any(|p| p == branch),
            _ => false,
        }
    }

    /// Returns `true` if `ancestor` is `id` itself or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: BranchId, id: BranchId) -> bool {
        (ancestor == id && self.branch(id).is_some()) || self.contains(ancestor, id)
    }

    /// First branch in preorder whose payload satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<BranchId> {
        self.branches().find(|&id| pred(&self.branches[id.index()].view))
    }

    /// Lazily iterate every branch id in depth-first preorder.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn branches(&self) -> Branches<'_, T> {
        let mut stack = SmallVec::new();
        stack.extend(self.roots.iter().rev().copied());
        Branches { tree: self, stack }
    }

    /// Lazily iterate the strict descendants of `id` in depth-first preorder.
    #[must_use]
    pub fn descendants(&self, id: BranchId) -> Branches<'_, T> {
        let mut stack = SmallVec::new();
        stack.extend(self.children(id).iter().rev().copied());
        Branches { tree: self, stack }
    }

    /// Ids paired with payloads in preorder.
    pub fn iter(&self) -> impl Iterator<Item = (BranchId, &T)> + '_ {
        self.branches()
            .map(move |id| (id, &self.branches[id.index()].view))
    }

    /// Flattened payloads in preorder.
    pub fn views(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, view)| view)
    }

    /// Convert every payload, keeping ids and structure.
    pub fn map<U>(self, mut f: impl FnMut(BranchId, T) -> U) -> NavigationTree<U> {
        let branches = self
            .branches
            .into_iter()
            .enumerate()
            .map(|(idx, b)| {
                #[expect(clippy::cast_possible_truncation, reason = "arena is capped at u32")]
                let id = BranchId(idx as u32);
                Branch {
                    view: f(id, b.view),
                    config: b.config,
                    parent: b.parent,
                    children: b.children,
                    depth: b.depth,
                }
            })
            .collect();
        NavigationTree {
            branches,
            roots: self.roots,
        }
    }
}

/// Iterator over the ancestors of a branch, nearest first.
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    tree: &'a NavigationTree<T>,
    next: Option<BranchId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = BranchId;

    fn next(&mut self) -> Option<BranchId> {
        let id = self.next?;
        self.next = self.tree.parent(id);
        Some(id)
    }
}

/// Depth-first preorder iterator over branch ids.
#[derive(Debug)]
pub struct Branches<'a, T> {
    tree: &'a NavigationTree<T>,
    stack: SmallVec<[BranchId; 16]>,
}

impl<T> Iterator for Branches<'_, T> {
    type Item = BranchId;

    fn next(&mut self) -> Option<BranchId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
