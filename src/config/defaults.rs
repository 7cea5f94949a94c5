// SPDX-License-Identifier: MPL-2.0
//! Default values for toast settings.
//!
//! A timeout of `0` means the toast stays until it is dismissed explicitly.

/// Auto-dismiss delay for success toasts (milliseconds).
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u64 = 3_000;

/// Auto-dismiss delay for info toasts (milliseconds).
pub const DEFAULT_INFO_TIMEOUT_MS: u64 = 3_000;

/// Error toasts require a manual dismiss by default.
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 0;

/// Auto-dismiss delay for toasts inserted without a kind (milliseconds).
pub const DEFAULT_UNSPECIFIED_TIMEOUT_MS: u64 = 3_000;

/// Upper bound accepted for any timeout (one hour).
pub const MAX_TIMEOUT_MS: u64 = 3_600_000;
