// SPDX-License-Identifier: MPL-2.0
//! Toast collection storage.
//!
//! The `Store` owns the ordered list of active toasts and the two ways to
//! change it: insert with a generated id, and remove by id. Every change
//! replaces the list wholesale, so a `ToastList` handed out earlier keeps
//! showing the state it was taken from. Records themselves are shared
//! between snapshots, never copied.

use super::notification::{NewToast, Toast, ToastId};
use std::ops::Deref;
use std::rc::Rc;

/// Immutable snapshot of the toast collection, oldest first.
#[derive(Debug, Clone)]
pub struct ToastList(Rc<[Rc<Toast>]>);

impl ToastList {
    fn empty() -> Self {
        Self(Rc::from(Vec::new()))
    }

    /// Returns whether both snapshots are the same collection instance.
    ///
    /// Two snapshots taken without a mutation in between are always the same
    /// instance, which lets an observer skip work when nothing changed.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ToastList {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for ToastList {
    type Target = [Rc<Toast>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ToastList {
    type Item = &'a Rc<Toast>;
    type IntoIter = std::slice::Iter<'a, Rc<Toast>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Holds the active toasts.
#[derive(Debug, Default)]
pub struct Store {
    toasts: ToastList,
}

impl Store {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast built from `candidate` and returns its generated id.
    ///
    /// Never fails. No cap is enforced and equal toasts are not merged.
    pub fn insert(&mut self, candidate: NewToast) -> ToastId {
        let toast = Rc::new(candidate.into_toast());
        let id = toast.id().clone();
        log::debug!("toast {id} inserted: {:?}", toast.title());

        let mut next = Vec::with_capacity(self.toasts.len() + 1);
        next.extend(self.toasts.iter().cloned());
        next.push(toast);
        self.toasts = ToastList(Rc::from(next));
        id
    }

    /// Removes the toast with the given id.
    ///
    /// Returns `true` if a toast was removed. An unknown id leaves the
    /// collection untouched, including its identity, so removing twice is
    /// the same as removing once.
    pub fn remove(&mut self, id: &ToastId) -> bool {
        if !self.toasts.iter().any(|t| t.id() == id) {
            log::trace!("toast {id} not present, nothing to remove");
            return false;
        }

        let next: Vec<Rc<Toast>> = self
            .toasts
            .iter()
            .filter(|t| t.id() != id)
            .cloned()
            .collect();
        self.toasts = ToastList(Rc::from(next));
        log::debug!("toast {id} removed, {} remaining", self.toasts.len());
        true
    }

    /// Drops every toast.
    pub fn clear(&mut self) {
        if !self.toasts.is_empty() {
            log::debug!("clearing {} toasts", self.toasts.len());
            self.toasts = ToastList::empty();
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn toasts(&self) -> ToastList {
        self.toasts.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
