// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss policy for the rendering side.
//!
//! The store never expires toasts on its own. Whoever draws them can ask
//! this policy which toasts are due and remove them, typically on a timer
//! tick.

use super::notification::{Toast, ToastId, ToastKind};
use crate::config::{ToastSettings, MAX_TIMEOUT_MS};
use std::borrow::Borrow;
use std::time::{Duration, Instant};

/// How long each kind of toast stays before it is dismissed automatically.
///
/// `None` means the toast waits for an explicit dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDismiss {
    success: Option<Duration>,
    info: Option<Duration>,
    error: Option<Duration>,
    unspecified: Option<Duration>,
}

impl AutoDismiss {
    /// A policy that never dismisses anything.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            success: None,
            info: None,
            error: None,
            unspecified: None,
        }
    }

    /// Overrides the timeout for one kind, or for unspecified toasts when
    /// `kind` is `None`.
    #[must_use]
    pub fn with_timeout(mut self, kind: Option<ToastKind>, timeout: Option<Duration>) -> Self {
        match kind {
            Some(ToastKind::Success) => self.success = timeout,
            Some(ToastKind::Info) => self.info = timeout,
            Some(ToastKind::Error) => self.error = timeout,
            None => self.unspecified = timeout,
        }
        self
    }

    /// Returns the timeout for the given kind.
    #[must_use]
    pub fn timeout_for(&self, kind: Option<ToastKind>) -> Option<Duration> {
        match kind {
            Some(ToastKind::Success) => self.success,
            Some(ToastKind::Info) => self.info,
            Some(ToastKind::Error) => self.error,
            None => self.unspecified,
        }
    }

    /// Returns whether `toast` is due for dismissal at `now`.
    #[must_use]
    pub fn is_expired(&self, toast: &Toast, now: Instant) -> bool {
        self.timeout_for(toast.kind())
            .is_some_and(|timeout| toast.age_at(now) >= timeout)
    }

    /// Lists the ids of every toast due for dismissal at `now`, in order.
    ///
    /// Accepts plain records as well as the shared ones held in a `ToastList`.
    pub fn expired<T: Borrow<Toast>>(&self, toasts: &[T], now: Instant) -> Vec<ToastId> {
        let mut ids = Vec::new();
        for toast in toasts {
            let toast: &Toast = toast.borrow();
            if self.is_expired(toast, now) {
                ids.push(toast.id().clone());
            }
        }
        ids
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::from(&ToastSettings::default())
    }
}

impl From<&ToastSettings> for AutoDismiss {
    fn from(settings: &ToastSettings) -> Self {
        Self {
            success: timeout_from_ms(settings.success_ms),
            info: timeout_from_ms(settings.info_ms),
            error: timeout_from_ms(settings.error_ms),
            unspecified: timeout_from_ms(settings.unspecified_ms),
        }
    }
}

/// `None` and `0` both mean manual dismiss; larger values are clamped.
fn timeout_from_ms(ms: Option<u64>) -> Option<Duration> {
    match ms {
        None | Some(0) => None,
        Some(ms) => Some(Duration::from_millis(ms.min(MAX_TIMEOUT_MS))),
    }
}
