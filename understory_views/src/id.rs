// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Namespaced view identifiers.

use alloc::borrow::Cow;
use core::fmt;
use core::str::FromStr;

/// A namespaced key identifying a view within its container, written `namespace:key`.
///
/// Ids are plain values: comparable, hashable and stable across sessions, which makes
/// them suitable as persistence keys (see [`ViewsContainer::save_state`](crate::ViewsContainer::save_state)).
///
/// ```rust
/// use understory_views::ViewId;
///
/// const SETTINGS: ViewId = ViewId::from_static("menu", "settings");
///
/// let parsed: ViewId = "menu:settings".parse().unwrap();
/// assert_eq!(parsed, SETTINGS);
/// assert_eq!(SETTINGS.to_string(), "menu:settings");
/// assert!("menu".parse::<ViewId>().is_err());
/// ```
///
/// The default id has an empty namespace and key. It suits views that are only ever
/// looked up with a predicate, such as attachments that decorate other views.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId {
    namespace: Cow<'static, str>,
    key: Cow<'static, str>,
}

impl ViewId {
    /// Build an id without validating its parts.
    pub fn new(namespace: impl Into<Cow<'static, str>>, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Build an id from static strings, usable in `const` items.
    #[must_use]
    pub const fn from_static(namespace: &'static str, key: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            key: Cow::Borrowed(key),
        }
    }

    /// Parse and validate `namespace:key`.
    ///
    /// The namespace may contain `a-z`, `0-9`, `_`, `-` and `.`; the key additionally
    /// allows `/`. Neither part may be empty.
    pub fn parse(s: &str) -> Result<Self, ParseViewIdError> {
        let Some((namespace, key)) = s.split_once(':') else {
            return Err(ParseViewIdError::MissingSeparator);
        };
        if namespace.is_empty() || key.is_empty() {
            return Err(ParseViewIdError::EmptyPart);
        }
        if let Some(c) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(ParseViewIdError::InvalidChar(c));
        }
        if let Some(c) = key.chars().find(|&c| !is_namespace_char(c) && c != '/') {
            return Err(ParseViewIdError::InvalidChar(c));
        }
        Ok(Self::new(
            alloc::string::String::from(namespace),
            alloc::string::String::from(key),
        ))
    }

    /// The namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The key part.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` for the default (empty) id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() && self.key.is_empty()
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for ViewId {
    type Err = ParseViewIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned by [`ViewId::parse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseViewIdError {
    /// No `:` between namespace and key.
    MissingSeparator,
    /// Namespace or key is empty.
    EmptyPart,
    /// A character outside the allowed set.
    InvalidChar(char),
}

impl fmt::Display for ParseViewIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("view id must be written `namespace:key`"),
            Self::EmptyPart => f.write_str("view id namespace and key must not be empty"),
            Self::InvalidChar(c) => write!(f, "invalid character {c:?} in view id"),
        }
    }
}

impl core::error::Error for ParseViewIdError {}
