//! Text parsing for status codes.
//!
//! Accepted forms, surrounding whitespace ignored:
//!
//! | Input      | Meaning                              |
//! |------------|--------------------------------------|
//! | `0x8102`   | raw pattern, hex (`0X` also allowed) |
//! | `33026`    | raw pattern, unsigned decimal        |
//! | `-32510`   | raw pattern, signed 16-bit decimal   |

use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use crate::StatusCode;

/// Why a string could not be read as a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatusError {
    /// Nothing to parse
    Empty,

    /// Not a hex or decimal number
    InvalidDigit,

    /// Number does not fit 16 bits
    OutOfRange,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStatusError::Empty => write!(f, "empty status code"),
            ParseStatusError::InvalidDigit => write!(f, "invalid digit in status code"),
            ParseStatusError::OutOfRange => write!(f, "status code does not fit 16 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseStatusError {}

impl From<core::num::ParseIntError> for ParseStatusError {
    fn from(e: core::num::ParseIntError) -> Self {
        match e.kind() {
            IntErrorKind::Empty => ParseStatusError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseStatusError::OutOfRange,
            _ => ParseStatusError::InvalidDigit,
        }
    }
}

impl FromStr for StatusCode {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseStatusError::Empty);
        }

        let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"));
        let raw = match hex {
            Some(digits) => u16::from_str_radix(digits, 16)?,
            None if s.starts_with('-') => s.parse::<i16>()? as u16,
            None => s.parse::<u16>()?,
        };
        Ok(StatusCode::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn hex_forms() {
        assert_eq!("0x8102".parse::<StatusCode>(), Ok(codes::i2c::NACK_ON_ADDR));
        assert_eq!("0X8102".parse::<StatusCode>(), Ok(codes::i2c::NACK_ON_ADDR));
        assert_eq!("  0x0 ".parse::<StatusCode>(), Ok(StatusCode::SUCCESS));
        assert_eq!("0xffff".parse::<StatusCode>().map(StatusCode::as_u16), Ok(0xFFFF));
    }

    #[test]
    fn decimal_forms() {
        assert_eq!("33026".parse::<StatusCode>(), Ok(codes::i2c::NACK_ON_ADDR));
        assert_eq!("-32510".parse::<StatusCode>(), Ok(codes::i2c::NACK_ON_ADDR));
        assert_eq!("0".parse::<StatusCode>(), Ok(StatusCode::SUCCESS));
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<StatusCode>(), Err(ParseStatusError::Empty));
        assert_eq!("   ".parse::<StatusCode>(), Err(ParseStatusError::Empty));
        assert_eq!("0x".parse::<StatusCode>(), Err(ParseStatusError::Empty));
        assert_eq!("0x10000".parse::<StatusCode>(), Err(ParseStatusError::OutOfRange));
        assert_eq!("65536".parse::<StatusCode>(), Err(ParseStatusError::OutOfRange));
        assert_eq!("-40000".parse::<StatusCode>(), Err(ParseStatusError::OutOfRange));
        assert_eq!("nack".parse::<StatusCode>(), Err(ParseStatusError::InvalidDigit));
        assert_eq!("0xzz".parse::<StatusCode>(), Err(ParseStatusError::InvalidDigit));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ParseStatusError::OutOfRange), "status code does not fit 16 bits");
    }
}
