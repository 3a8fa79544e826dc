//! # fwstatus — firmware status codes
//!
//! One 16-bit value that every driver and library in the firmware stack
//! returns: a severity bit, a 7-bit owning facility, and an 8-bit
//! facility-local code. No allocation, no per-driver error enums, and any
//! two statuses compare by their raw bits.
//!
//! ## Layout
//!
//! ```text
//! + - + - - - - - - - + - - - - - - - - +
//! | S |    Facility   |       Code      |
//! + - + - - - - - - - + - - - - - - - - +
//! ```
//!
//! The severity is the sign bit, so `succeeded` is a single signed compare.
//!
//! ## Quick Start
//!
//! ```rust
//! use fwstatus::{codes, make_status, status_try, StatusCode, Facility};
//!
//! fn i2c_write(addr: u8, len: usize) -> StatusCode {
//!     if len > 32 {
//!         return codes::i2c::DATA_TOO_LONG;
//!     }
//!     if addr == 0x00 {
//!         return codes::i2c::NACK_ON_ADDR;
//!     }
//!     StatusCode::SUCCESS
//! }
//!
//! fn imu_configure() -> StatusCode {
//!     status_try!(i2c_write(0x68, 2));
//!     status_try!(i2c_write(0x00, 2)); // fails, returned unchanged
//!     StatusCode::SUCCESS
//! }
//!
//! let status = imu_configure();
//! assert!(status.failed());
//! assert_eq!(status.facility(), Facility::DRIVER_I2C);
//! assert_eq!(status.code(), 2);
//! assert_eq!(status, make_status(1, 1, 2));
//! assert_eq!(status.as_u16(), 0x8102);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag            | Effect |
//! |-----------------|--------|
//! | `std` (default) | `kprint` logging, `env` helpers, `std::error::Error` impls |
//! | `debug-logging` | Trace every failure propagated by `status_try!` |
//! | `production`    | Strips symbolic code names from `Debug` and `codes::name_of` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

#[doc(hidden)]
#[macro_use]
pub mod macros;

mod severity;
mod facility;
mod status;
mod convert;
mod parse;

pub mod codes;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub mod env;
        #[macro_use]
        pub mod kprint;

        pub use kprint::{set_log_level, LogLevel};
    }
}

// ── Public API ────────────────────────────────────────────────────

pub use severity::{Severity, SEVERITY_FAILURE, SEVERITY_SUCCESS};
pub use facility::Facility;
pub use status::{code_of, facility_of, failed, make_status, severity_of, succeeded, StatusCode};
pub use convert::{StatusResult, StatusResultExt};
pub use parse::ParseStatusError;
