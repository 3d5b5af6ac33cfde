// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased failure cause shared between chained results.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use core::error::Error;
use core::fmt;

/// A cheaply cloneable failure cause.
///
/// Wraps any `core::error::Error` behind an `Rc`, so the same cause can be handed to
/// several callbacks and compared by identity with [`Failure::ptr_eq`].
///
/// ```rust
/// use understory_deferred::Failure;
///
/// let cause = Failure::msg("load failed");
/// let forwarded = cause.clone();
/// assert!(forwarded.ptr_eq(&cause));
/// assert_eq!(cause.to_string(), "load failed");
/// ```
#[derive(Clone)]
pub struct Failure(Rc<dyn Error + 'static>);

impl Failure {
    /// Wrap an error value.
    pub fn new<E: Error + 'static>(error: E) -> Self {
        Self(Rc::new(error))
    }

    /// A failure carrying only a message.
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Returns `true` if both handles refer to the same underlying error.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn Error + 'static) {
        &*self.0
    }

    /// Downcast the wrapped error to a concrete type.
    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.0).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

#[derive(Debug)]
struct Message(Cow<'static, str>);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}
