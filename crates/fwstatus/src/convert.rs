//! Interop between status codes, `Result`, and raw byte encodings.
//!
//! Drivers return a bare [`StatusCode`]. Callers that prefer `?` turn it
//! into a [`StatusResult`] and back again at the driver boundary.

use crate::StatusCode;

/// Convenience Result alias carrying a failed status as the error.
pub type StatusResult<T = ()> = Result<T, StatusCode>;

// ── Result interop ────────────────────────────────────────────────

impl StatusCode {
    /// `Ok(())` for any success, `Err(self)` for a failure.
    ///
    /// A success with non-zero facility or code collapses to `Ok(())`;
    /// going back through [`StatusCode::from_result`] yields the canonical
    /// [`StatusCode::SUCCESS`].
    ///
    /// ```
    /// use fwstatus::{codes, StatusCode, StatusResult};
    ///
    /// fn read_reg() -> StatusCode { codes::i2c::NACK_ON_DATA }
    ///
    /// fn sample() -> StatusResult<u16> {
    ///     read_reg().to_result()?;
    ///     Ok(0)
    /// }
    ///
    /// assert_eq!(sample(), Err(codes::i2c::NACK_ON_DATA));
    /// ```
    #[inline]
    pub const fn to_result(self) -> StatusResult<()> {
        if self.succeeded() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collapse a `StatusResult<()>` back to a status code.
    #[inline]
    pub const fn from_result(result: StatusResult<()>) -> StatusCode {
        match result {
            Ok(()) => StatusCode::SUCCESS,
            Err(status) => status,
        }
    }

    /// Run `next` only if `self` succeeded; otherwise return `self`.
    ///
    /// Composing two fallible steps yields the first failure, or the second
    /// step's status when the first succeeded.
    #[inline]
    pub fn and_then<F>(self, next: F) -> StatusCode
    where
        F: FnOnce() -> StatusCode,
    {
        if self.failed() {
            self
        } else {
            next()
        }
    }

    /// Re-tag a failure into the caller's own facility.
    ///
    /// Successes pass through untouched. The original facility/code is not
    /// kept anywhere.
    ///
    /// ```
    /// use fwstatus::codes;
    ///
    /// let bus = codes::i2c::TIMEOUT;
    /// assert_eq!(bus.remap(codes::imu::DATA_NOT_READY), codes::imu::DATA_NOT_READY);
    /// ```
    #[inline]
    pub const fn remap(self, to: StatusCode) -> StatusCode {
        if self.failed() {
            to
        } else {
            self
        }
    }
}

impl From<StatusResult<()>> for StatusCode {
    #[inline]
    fn from(result: StatusResult<()>) -> Self {
        StatusCode::from_result(result)
    }
}

impl From<StatusCode> for StatusResult<()> {
    #[inline]
    fn from(status: StatusCode) -> Self {
        status.to_result()
    }
}

// ── ResultExt — map foreign errors onto a status ──────────────────

/// Attach a status code to the error side of any `Result` or to a `None`.
pub trait StatusResultExt<T> {
    /// Replace the error (or absence) with `status`.
    ///
    /// `status` should be a failure; a success value here would turn an
    /// error into something callers treat as success.
    fn or_status(self, status: StatusCode) -> StatusResult<T>;
}

impl<T, E> StatusResultExt<T> for Result<T, E> {
    #[inline]
    fn or_status(self, status: StatusCode) -> StatusResult<T> {
        self.map_err(|_| status)
    }
}

impl<T> StatusResultExt<T> for Option<T> {
    #[inline]
    fn or_status(self, status: StatusCode) -> StatusResult<T> {
        self.ok_or(status)
    }
}

// ── Wire encodings ────────────────────────────────────────────────

impl StatusCode {
    /// Big-endian bytes: severity/facility byte first, code second.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.as_u16().to_be_bytes()
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        StatusCode::from_raw(u16::from_be_bytes(bytes))
    }

    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.as_u16().to_le_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        StatusCode::from_raw(u16::from_le_bytes(bytes))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatusCode {}
