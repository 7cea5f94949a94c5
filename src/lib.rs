// SPDX-License-Identifier: MPL-2.0
//! `toast_registry` keeps the toast notifications of a GUI application.
//!
//! A [`ToastProvider`](notifications::ToastProvider) owns the active toasts
//! for the lifetime of a view tree; views reach the add/remove operations
//! through [`use_toast`](notifications::use_toast), and whatever draws the
//! toasts reads the live list from the provider.

pub mod config;
pub mod error;
pub mod notifications;
