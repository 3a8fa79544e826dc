//! Codes shared by every subsystem.

use crate::{Facility, StatusCode};

/// Canonical success. Same value as [`StatusCode::SUCCESS`].
pub const SUCCESS: StatusCode = StatusCode::SUCCESS;

crate::status_catalog! {
    Facility::GENERAL;
    /// Functionality not implemented. Use this rather than borrowing a
    /// facility-specific code.
    UNIMPLEMENTED = 0,
}
