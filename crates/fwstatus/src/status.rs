//! The packed status code.
//!
//! ```text
//! + - + - - - - - - - + - - - - - - - - +
//! | S |    Facility   |       Code      |
//! + - + - - - - - - - + - - - - - - - - +
//!  15   14          8   7               0
//! ```
//!
//! - `S`: severity, 0 = success, 1 = failure
//! - `Facility`: 7-bit owning subsystem
//! - `Code`: 8-bit facility-local code
//!
//! Severity sits in the sign bit, so read as an `i16` every failure is
//! negative and every success is non-negative. Field extraction always works
//! on the unsigned pattern; an arithmetic shift of a failure would smear the
//! sign bit across the facility field.

use core::fmt;

use crate::facility::Facility;
use crate::severity::Severity;

const SEVERITY_SHIFT: u32 = 15;
const FACILITY_SHIFT: u32 = 8;
const FACILITY_MASK: u16 = 0x7F;
const CODE_MASK: u16 = 0xFF;

/// Pack raw severity, facility and code into a status code.
///
/// No range checks: `severity` must be 0 or 1 and `facility` must be at most
/// 127. Anything wider spills into neighbouring fields. All three inputs are
/// normally literals, so this folds to a constant.
///
/// ```
/// use fwstatus::make_status;
///
/// assert_eq!(make_status(1, 1, 2).as_u16(), 0x8102);
/// assert_eq!(make_status(0, 0, 0).as_u16(), 0x0000);
/// ```
#[inline]
pub const fn make_status(severity: u8, facility: u8, code: u8) -> StatusCode {
    StatusCode(((severity as u16) << SEVERITY_SHIFT) | ((facility as u16) << FACILITY_SHIFT) | code as u16)
}

/// Severity bit (0 or 1).
#[inline]
pub const fn severity_of(status: StatusCode) -> u8 {
    (status.0 >> SEVERITY_SHIFT) as u8
}

/// Facility field (0..=127).
#[inline]
pub const fn facility_of(status: StatusCode) -> u8 {
    ((status.0 >> FACILITY_SHIFT) & FACILITY_MASK) as u8
}

/// Facility-local code (0..=255).
#[inline]
pub const fn code_of(status: StatusCode) -> u8 {
    (status.0 & CODE_MASK) as u8
}

/// True if the status does not carry the failure bit.
#[inline]
pub const fn succeeded(status: StatusCode) -> bool {
    status.0 as i16 >= 0
}

#[inline]
pub const fn failed(status: StatusCode) -> bool {
    !succeeded(status)
}

/// A 16-bit packed status value returned by fallible driver operations.
///
/// Plain data: `Copy`, compared by its full bit pattern, safe to hand across
/// interrupt and thread boundaries.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    /// The canonical success value. No other pattern stands in for generic
    /// success.
    pub const SUCCESS: StatusCode = make_status(0, 0, 0);

    /// Requested functionality is not implemented.
    pub const UNIMPLEMENTED: StatusCode = make_status(1, 0, 0);

    /// Typed constructor.
    #[inline]
    pub const fn new(severity: Severity, facility: Facility, code: u8) -> Self {
        make_status(severity.as_u8(), facility.as_u8(), code)
    }

    /// Failure in `facility` with facility-local `code`.
    ///
    /// ```
    /// use fwstatus::{Facility, StatusCode};
    ///
    /// const NACK_ON_ADDR: StatusCode = StatusCode::failure(Facility::DRIVER_I2C, 2);
    /// assert!(NACK_ON_ADDR.failed());
    /// ```
    #[inline]
    pub const fn failure(facility: Facility, code: u8) -> Self {
        make_status(Severity::Failure.as_u8(), facility.as_u8(), code)
    }

    /// Reinterpret a raw 16-bit pattern, e.g. one read back from a log or
    /// a wire frame.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        StatusCode(raw)
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// The same bits read as two's complement.
    #[inline]
    pub const fn as_i16(self) -> i16 {
        self.0 as i16
    }

    #[inline]
    pub const fn succeeded(self) -> bool {
        succeeded(self)
    }

    #[inline]
    pub const fn failed(self) -> bool {
        failed(self)
    }

    #[inline]
    pub const fn severity(self) -> Severity {
        Severity::from_bit(severity_of(self))
    }

    #[inline]
    pub const fn facility(self) -> Facility {
        Facility::new(facility_of(self))
    }

    #[inline]
    pub const fn code(self) -> u8 {
        code_of(self)
    }

    /// The `(severity, facility, code)` triple.
    #[inline]
    pub const fn fields(self) -> (Severity, Facility, u8) {
        (self.severity(), self.facility(), self.code())
    }
}

impl From<u16> for StatusCode {
    #[inline]
    fn from(raw: u16) -> Self {
        StatusCode(raw)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(s: StatusCode) -> u16 {
        s.0
    }
}

impl From<StatusCode> for i16 {
    #[inline]
    fn from(s: StatusCode) -> i16 {
        s.0 as i16
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusCode({:#06x}", self.0)?;
        if let Some(name) = crate::codes::name_of(*self) {
            write!(f, " {}::{}", self.facility(), name)?;
        } else {
            write!(f, " {} {:?}/{}", self.severity(), self.facility(), self.code())?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for StatusCode {
    /// `[FACILITY/code] severity (0xNNNN)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {} ({:#06x})", self.facility(), self.code(), self.severity(), self.0)
    }
}

impl fmt::LowerHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
