// SPDX-License-Identifier: MPL-2.0
//! Toast notification registry.
//!
//! Keeps the list of active toasts and makes the add/remove operations
//! reachable from anywhere in a view tree without threading the store
//! through every layer.
//!
//! # Components
//!
//! - [`notification`] - `Toast` record, `NewToast` candidate and `ToastKind`
//! - [`store`] - `Store` holding the ordered collection
//! - [`provider`] - `ToastProvider` scope, `ToastContext` handle and the
//!   [`use_toast`] accessor
//! - [`expiry`] - `AutoDismiss` policy used on `Message::Tick`
//!
//! # Usage
//!
//! ```
//! use toast_registry::notifications::{use_toast, NewToast, ToastProvider};
//!
//! // At the root of the view tree
//! let provider = ToastProvider::new();
//! let context = provider.context();
//!
//! // Anywhere below, given the context
//! let toasts = use_toast(&context)?;
//! let id = toasts.add_toast(NewToast::error("Failed").with_description("Network down"));
//!
//! // The rendering side reads the live list
//! assert_eq!(provider.toasts().len(), 1);
//! # let _ = id;
//! # Ok::<(), toast_registry::error::Error>(())
//! ```

pub mod expiry;
pub mod notification;
pub mod provider;
pub mod store;

pub use expiry::AutoDismiss;
pub use notification::{NewToast, Toast, ToastId, ToastKind};
pub use provider::{use_toast, Message as ToastMessage, ToastApi, ToastContext, ToastProvider};
pub use store::{Store, ToastList};
