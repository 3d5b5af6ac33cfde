// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced through rejected transitions and container calls.

use core::fmt;
use understory_deferred::Failure;

use crate::id::ViewId;
use crate::view::{Phase, Transition};

/// Error carried by rejected view transitions and returned by container operations.
#[derive(Clone, Debug)]
pub enum ViewError {
    /// A `prepare_open` / `prepare_close` step was rejected.
    Prepare {
        /// The view whose transition failed.
        view: ViewId,
        /// Which transition failed.
        transition: Transition,
        /// The cause the prepare step was rejected with.
        cause: Failure,
    },
    /// Another transition is still in flight and the container rejects overlaps.
    TransitionInProgress {
        /// The busy view.
        view: ViewId,
        /// Its phase when the new call arrived.
        phase: Phase,
    },
    /// The container has not been initialized yet.
    NotInitialized,
    /// [`ViewsContainer::initialize`](crate::ViewsContainer::initialize) was called again.
    AlreadyInitialized,
    /// No view with this id exists in the container.
    UnknownView(ViewId),
}

impl ViewError {
    /// The prepare-step cause, for [`ViewError::Prepare`].
    #[must_use]
    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Self::Prepare { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepare {
                view,
                transition,
                cause,
            } => write!(f, "view {view} failed to {transition}: {cause}"),
            Self::TransitionInProgress { view, phase } => {
                write!(f, "view {view} is still {phase:?}; transition rejected")
            }
            Self::NotInitialized => f.write_str("views container is not initialized"),
            Self::AlreadyInitialized => f.write_str("views container is already initialized"),
            Self::UnknownView(id) => write!(f, "no view with id {id}"),
        }
    }
}

impl core::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|c| c as &(dyn core::error::Error + 'static))
    }
}
