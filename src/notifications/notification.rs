// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record, the `NewToast` candidate that
//! callers hand to the store, and the advisory `ToastKind` tag.

use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a toast.
///
/// Generated by the store when a toast is inserted. Callers only ever hold
/// ids they got back from an insertion or read from the live collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new random identifier (UUID v4, hyphenated).
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Advisory tag for the rendering side. The store attaches no behavior to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A toast as requested by a caller, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    kind: Option<ToastKind>,
    title: String,
    description: Option<String>,
}

impl NewToast {
    /// Creates a candidate with only a title.
    ///
    /// The title is not validated; an empty string is passed through as is.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            description: None,
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Success)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Error)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Info)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Adds the supplementary line shown under the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Option<ToastKind> {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Turns the candidate into a full record with a freshly generated id.
    pub(crate) fn into_toast(self) -> Toast {
        Toast {
            id: ToastId::generate(),
            kind: self.kind,
            title: self.title,
            description: self.description,
            created_at: Instant::now(),
        }
    }
}

/// A toast held by the store.
///
/// Records are never edited in place; the only way to change what is shown
/// is to remove a toast and insert another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: Option<ToastKind>,
    title: String,
    description: Option<String>,
    created_at: Instant,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// Returns the kind, or `None` when the caller left it unspecified.
    #[must_use]
    pub fn kind(&self) -> Option<ToastKind> {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns when this toast was inserted.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast as seen from `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
