// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable view state.

use serde_json::{Map, Value};

/// Order-preserving key/value document used to persist view state.
pub type StateDocument = Map<alloc::string::String, Value>;

/// State a view can save and restore.
///
/// Both methods default to doing nothing, so a state type only overrides what it needs.
///
/// ```rust
/// use serde_json::json;
/// use understory_views::{StateDocument, ViewState};
///
/// #[derive(Default)]
/// struct Volume {
///     level: u8,
/// }
///
/// impl ViewState for Volume {
///     fn serialize(&self) -> Option<StateDocument> {
///         let mut doc = StateDocument::new();
///         doc.insert("level".into(), json!(self.level));
///         Some(doc)
///     }
///
///     fn load(&mut self, doc: &StateDocument) {
///         if let Some(level) = doc.get("level").and_then(|v| v.as_u64()) {
///             self.level = u8::try_from(level).unwrap_or(u8::MAX);
///         }
///     }
/// }
/// ```
pub trait ViewState {
    /// Capture the state, or `None` when there is nothing to save.
    fn serialize(&self) -> Option<StateDocument> {
        None
    }

    /// Restore from a previously serialized document.
    fn load(&mut self, _doc: &StateDocument) {}
}

/// A state that saves and loads nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoState;

impl ViewState for NoState {}
