// SPDX-License-Identifier: MPL-2.0
//! Provider scope and accessor for the toast store.
//!
//! A `ToastProvider` is created once at the root of a view tree and owns the
//! store. It hands out `ToastContext` handles that are passed down to child
//! views, which call [`use_toast`] to get the insert/remove pair. Nothing is
//! looked up globally: a view can only reach the toasts of a provider whose
//! context it was given.
//!
//! The provider also keeps the live collection and an Elm-style `update`
//! entry point for whatever renders the toasts.

use super::expiry::AutoDismiss;
use super::notification::{NewToast, ToastId};
use super::store::{Store, ToastList};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Messages sent by the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Owns the toast store for the lifetime of a view tree.
///
/// Dropping the provider tears the scope down: every context and api handed
/// out from it stops working.
#[derive(Debug)]
pub struct ToastProvider {
    store: Rc<RefCell<Store>>,
    auto_dismiss: AutoDismiss,
}

impl ToastProvider {
    /// Establishes a new scope with an empty store and the default
    /// auto-dismiss policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_auto_dismiss(AutoDismiss::default())
    }

    /// Establishes a new scope using `policy` for `Message::Tick`.
    #[must_use]
    pub fn with_auto_dismiss(policy: AutoDismiss) -> Self {
        log::debug!("toast provider established");
        Self {
            store: Rc::new(RefCell::new(Store::new())),
            auto_dismiss: policy,
        }
    }

    /// Returns a handle to pass down to nested views.
    #[must_use]
    pub fn context(&self) -> ToastContext {
        ToastContext {
            store: Rc::downgrade(&self.store),
        }
    }

    /// Returns the live collection, for the rendering side.
    #[must_use]
    pub fn toasts(&self) -> ToastList {
        self.store.borrow().toasts()
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> &AutoDismiss {
        &self.auto_dismiss
    }

    /// Handles a message from the rendering side.
    pub fn update(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.store.borrow_mut().remove(id);
            }
            Message::Tick => {
                self.sweep(Instant::now());
            }
        }
    }

    /// Removes every toast the auto-dismiss policy reports expired at `now`.
    ///
    /// Returns the number of toasts removed.
    pub fn sweep(&self, now: Instant) -> usize {
        let toasts = self.toasts();
        let expired = self.auto_dismiss.expired(&toasts[..], now);
        if expired.is_empty() {
            return 0;
        }

        let mut store = self.store.borrow_mut();
        let mut removed = 0;
        for id in &expired {
            if store.remove(id) {
                removed += 1;
            }
        }
        log::debug!("auto-dismissed {removed} toasts");
        removed
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        log::debug!(
            "toast provider torn down with {} active toasts",
            self.store.borrow().len()
        );
    }
}

/// Handle to an enclosing provider scope, passed down the view tree.
///
/// A detached context stands for "no enclosing provider".
#[derive(Debug, Clone, Default)]
pub struct ToastContext {
    store: Weak<RefCell<Store>>,
}

impl ToastContext {
    /// A context with no provider behind it.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns whether the provider behind this context is still alive.
    #[must_use]
    pub fn is_established(&self) -> bool {
        self.store.strong_count() > 0
    }
}

/// Retrieves the toast operations from the enclosing provider.
///
/// # Errors
///
/// Returns [`Error::OutsideProvider`] when `context` is detached or its
/// provider has been dropped. Callers are expected to propagate it.
pub fn use_toast(context: &ToastContext) -> Result<ToastApi> {
    if !context.is_established() {
        return Err(Error::OutsideProvider);
    }
    Ok(ToastApi {
        store: context.store.clone(),
    })
}

/// The insert/remove pair handed to ordinary callers.
///
/// It never exposes the collection itself.
#[derive(Debug, Clone)]
pub struct ToastApi {
    store: Weak<RefCell<Store>>,
}

impl ToastApi {
    /// Shows a new toast and returns its generated id.
    ///
    /// Returns `None`, and does nothing, if the provider has been torn down
    /// since this api was obtained.
    pub fn add_toast(&self, toast: NewToast) -> Option<ToastId> {
        match self.store.upgrade() {
            Some(store) => Some(store.borrow_mut().insert(toast)),
            None => {
                log::warn!("toast {:?} dropped: provider is gone", toast.title());
                None
            }
        }
    }

    /// Removes the toast with the given id. Unknown ids are ignored.
    pub fn remove_toast(&self, id: &ToastId) {
        match self.store.upgrade() {
            Some(store) => {
                store.borrow_mut().remove(id);
            }
            None => log::warn!("cannot remove toast {id}: provider is gone"),
        }
    }
}
