// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container configuration and transition policies.

/// What happens to a view's state when its prepare step fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollbackPolicy {
    /// Leave the view where the failed transition stopped.
    ///
    /// A failed open stays logically open ([`Phase::Opening`](crate::Phase::Opening)),
    /// a failed close stays logically closed but visually active
    /// ([`Phase::Closing`](crate::Phase::Closing)).
    #[default]
    FailForward,
    /// Restore the phase and activation the view had before the transition started.
    Strict,
}

/// What happens when a transition starts while another one on the same view is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReentrancyPolicy {
    /// Each call runs its own independent sequence. The most recent transition decides
    /// the final phase; hooks and events of superseded transitions still fire.
    #[default]
    Permissive,
    /// Reject the new call with [`ViewError::TransitionInProgress`](crate::ViewError::TransitionInProgress).
    Reject,
}

/// Per-view transition policies, copied into every view at initialization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct TransitionPolicy {
    pub(crate) rollback: RollbackPolicy,
    pub(crate) reentrancy: ReentrancyPolicy,
}

/// Configuration for a [`ViewsContainer`](crate::ViewsContainer).
///
/// ```rust
/// use understory_views::{ContainerConfig, ReentrancyPolicy, RollbackPolicy};
///
/// let config = ContainerConfig {
///     reentrancy: ReentrancyPolicy::Reject,
///     ..ContainerConfig::default()
/// };
/// assert_eq!(config.rollback, RollbackPolicy::FailForward);
/// assert!(config.start_enabled);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerConfig {
    /// Failure handling for prepare steps.
    pub rollback: RollbackPolicy,
    /// Handling of overlapping transitions on one view.
    pub reentrancy: ReentrancyPolicy,
    /// Whether the container starts enabled. A disabled container still runs one
    /// enable/disable cycle during initialization.
    pub start_enabled: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            rollback: RollbackPolicy::default(),
            reentrancy: ReentrancyPolicy::default(),
            start_enabled: true,
        }
    }
}

impl ContainerConfig {
    pub(crate) fn transitions(&self) -> TransitionPolicy {
        TransitionPolicy {
            rollback: self.rollback,
            reentrancy: self.reentrancy,
        }
    }
}
