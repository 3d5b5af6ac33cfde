// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`View`] trait and the lifecycle vocabulary shared by views and containers.

use core::fmt;
use understory_deferred::{Deferred, Failure};

use crate::container::ContainerRef;
use crate::id::ViewId;
use crate::state::ViewState;

/// Lifecycle phase of a view.
///
/// `Closed → Opening → Open → Closing → Closed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Initial and terminal phase.
    #[default]
    Closed,
    /// `open` was called and the prepare step has not settled yet.
    Opening,
    /// The open sequence completed.
    Open,
    /// `close` was called and the prepare step has not settled yet.
    Closing,
}

impl Phase {
    /// Logical openness: true from the start of opening until the start of closing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// The two transitions a view can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `Closed → Opening → Open`.
    Open,
    /// `Open → Closing → Closed`.
    Close,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Close => "close",
        })
    }
}

/// A navigable UI unit with an open/close lifecycle.
///
/// Implementors supply an [`id`](View::id) and override whichever hooks they need; every
/// hook defaults to a no-op and both prepare steps default to immediate completion.
/// A container owns its views and drives them; callers interact through
/// [`ViewHandle`](crate::ViewHandle).
///
/// Open runs, in order:
/// 1. `opens` event listeners (the owning container closes unrelated views here),
/// 2. [`on_activation_changed(true)`](View::on_activation_changed) if the view was inactive,
/// 3. [`on_before_open`](View::on_before_open),
/// 4. [`prepare_open`](View::prepare_open), possibly deferring the rest,
/// 5. `opened` event listeners, then [`on_open`](View::on_open).
///
/// Close mirrors it, deactivating the view right before the `closed` listeners run.
///
/// Hooks run while the view is mutably borrowed. A hook that synchronously re-enters
/// its own view (for example by opening a sibling that then closes this view) finds
/// the view busy; the nested hook is skipped and an error is logged.
pub trait View: Sized + 'static {
    /// Stable identifier used for lookups and persistence.
    fn id(&self) -> ViewId;

    /// One-time setup, called once during container initialization.
    ///
    /// The container reference can be stored to reach sibling views later.
    fn on_initialize(&mut self, _container: &ContainerRef<Self>) {}

    /// The view's visual object was shown (`true`) or hidden (`false`).
    fn on_activation_changed(&mut self, _active: bool) {}

    /// Called every time the view starts opening.
    fn on_before_open(&mut self) {}

    /// Return a deferred result to delay the opened notification.
    fn prepare_open(&mut self) -> Option<Deferred<Failure>> {
        None
    }

    /// Called every time the view finished opening.
    fn on_open(&mut self) {}

    /// Called every time the view starts closing.
    fn on_before_close(&mut self) {}

    /// Return a deferred result to delay the closed notification.
    fn prepare_close(&mut self) -> Option<Deferred<Failure>> {
        None
    }

    /// Called every time the view finished closing.
    fn on_close(&mut self) {}

    /// The owning container is being torn down.
    fn on_destroyed(&mut self) {}

    /// Serializable state, for views that persist something.
    fn state(&self) -> Option<&dyn ViewState> {
        None
    }

    /// Mutable access to the serializable state.
    fn state_mut(&mut self) -> Option<&mut dyn ViewState> {
        None
    }
}

mod sealed {
    #[allow(unnameable_types, reason = "sealing trait, not meant to be named")]
    pub trait Sealed {}
}

/// Positional arguments accepted by [`OpenWith`]: tuples of zero to six owned elements.
///
/// Arguments are owned because an open requested while the view is busy runs later.
pub trait OpenArgs: sealed::Sealed + 'static {}

macro_rules! open_args {
    ($($name:ident),*) => {
        impl<$($name: 'static),*> sealed::Sealed for ($($name,)*) {}
        impl<$($name: 'static),*> OpenArgs for ($($name,)*) {}
    };
}

open_args!();
open_args!(A);
open_args!(A, B);
open_args!(A, B, C);
open_args!(A, B, C, D);
open_args!(A, B, C, D, E);
open_args!(A, B, C, D, E, F);

/// A view that can be opened with caller-supplied context.
///
/// Navigation triggers use this to forward data to a target without knowing its concrete
/// type: anything that can name the view's id and the argument tuple can open it through
/// [`ViewsContainer::open_with`](crate::ViewsContainer::open_with).
///
/// ```rust
/// use understory_views::{OpenWith, View, ViewId};
///
/// struct Profile {
///     user: Option<(u64, String)>,
/// }
///
/// impl View for Profile {
///     fn id(&self) -> ViewId {
///         ViewId::from_static("social", "profile")
///     }
/// }
///
/// impl OpenWith<(u64, String)> for Profile {
///     fn receive(&mut self, (id, name): (u64, String)) {
///         self.user = Some((id, name));
///     }
/// }
/// ```
pub trait OpenWith<Args: OpenArgs>: View {
    /// Take the arguments. Runs right before the open sequence starts.
    fn receive(&mut self, args: Args);
}
