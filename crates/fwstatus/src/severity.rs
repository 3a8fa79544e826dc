//! Severity bit of a status code.

use core::fmt;

/// Raw severity value for success.
pub const SEVERITY_SUCCESS: u8 = 0;

/// Raw severity value for failure.
pub const SEVERITY_FAILURE: u8 = 1;

/// The single success/failure bit carried in bit 15 of a [`StatusCode`].
///
/// There is no warning or informational level: a status either succeeded or
/// it failed.
///
/// [`StatusCode`]: crate::StatusCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Operation completed
    Success = SEVERITY_SUCCESS,

    /// Operation failed; facility and code say why
    Failure = SEVERITY_FAILURE,
}

impl Severity {
    /// Raw bit value (0 or 1).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Build from the low bit of `bit`. Higher bits are ignored.
    #[inline]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 {
            Severity::Success
        } else {
            Severity::Failure
        }
    }

    #[inline]
    pub const fn is_failure(self) -> bool {
        matches!(self, Severity::Failure)
    }
}

impl From<Severity> for u8 {
    #[inline]
    fn from(s: Severity) -> u8 {
        s as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values() {
        assert_eq!(Severity::Success.as_u8(), 0);
        assert_eq!(Severity::Failure.as_u8(), 1);
        assert_eq!(u8::from(Severity::Failure), SEVERITY_FAILURE);
    }

    #[test]
    fn from_bit_uses_low_bit_only() {
        assert_eq!(Severity::from_bit(0), Severity::Success);
        assert_eq!(Severity::from_bit(1), Severity::Failure);
        assert_eq!(Severity::from_bit(0xFE), Severity::Success);
        assert_eq!(Severity::from_bit(0xFF), Severity::Failure);
    }

    #[test]
    fn ordering() {
        assert!(Severity::Success < Severity::Failure);
        assert!(Severity::Failure.is_failure());
        assert!(!Severity::Success.is_failure());
    }
}
