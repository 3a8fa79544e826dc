//! Facility registry.
//!
//! A facility names the subsystem that owns a status code's code namespace.
//! It occupies 7 bits of the packed value, so identifiers live in `0..=127`.
//!
//! # Assigned identifiers
//!
//! | Value | Constant       | Subsystem          |
//! |-------|----------------|--------------------|
//! | `0`   | `GENERAL`      | Cross-cutting codes |
//! | `1`   | `DRIVER_I2C`   | I2C bus driver     |
//! | `2`   | `DRIVER_IMU`   | IMU sensor driver  |
//! | `3`   | `DRIVER_GPIO`  | GPIO driver        |
//! | `4`   | `DRIVER_UART`  | UART driver        |
//! | `5`   | `LIBRARY_HCI`  | HCI library        |
//! | `6`   | `DRIVER_SOC`   | SoC driver         |
//!
//! Identifiers are never renumbered once assigned. New facilities take the
//! next free value; values nobody has assigned yet still round-trip
//! through a [`StatusCode`](crate::StatusCode) unchanged.

use core::fmt;

/// A 7-bit subsystem identifier.
///
/// This is an open set: the named constants cover the facilities known to
/// this crate, and any other value in range is carried as-is.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Facility(u8);

impl Facility {
    pub const GENERAL: Facility = Facility(0);
    pub const DRIVER_I2C: Facility = Facility(1);
    pub const DRIVER_IMU: Facility = Facility(2);
    pub const DRIVER_GPIO: Facility = Facility(3);
    pub const DRIVER_UART: Facility = Facility(4);
    pub const LIBRARY_HCI: Facility = Facility(5);
    pub const DRIVER_SOC: Facility = Facility(6);

    /// Largest value that fits the 7-bit field.
    pub const MAX: u8 = 0x7F;

    /// Every facility with an assigned name, in numeric order.
    pub const KNOWN: [Facility; 7] = [
        Facility::GENERAL,
        Facility::DRIVER_I2C,
        Facility::DRIVER_IMU,
        Facility::DRIVER_GPIO,
        Facility::DRIVER_UART,
        Facility::LIBRARY_HCI,
        Facility::DRIVER_SOC,
    ];

    /// Wrap a raw identifier without checking its range.
    ///
    /// Values above [`Facility::MAX`] are a caller bug: packed into a status
    /// code they spill into the severity bit.
    #[inline]
    pub const fn new(raw: u8) -> Self {
        Facility(raw)
    }

    /// Wrap a raw identifier, rejecting values that do not fit 7 bits.
    ///
    /// ```
    /// use fwstatus::Facility;
    ///
    /// assert_eq!(Facility::checked(1), Some(Facility::DRIVER_I2C));
    /// assert_eq!(Facility::checked(128), None);
    /// ```
    #[inline]
    pub const fn checked(raw: u8) -> Option<Self> {
        if raw <= Self::MAX {
            Some(Facility(raw))
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Symbolic name of an assigned facility, `None` otherwise.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("GENERAL"),
            1 => Some("DRIVER_I2C"),
            2 => Some("DRIVER_IMU"),
            3 => Some("DRIVER_GPIO"),
            4 => Some("DRIVER_UART"),
            5 => Some("LIBRARY_HCI"),
            6 => Some("DRIVER_SOC"),
            _ => None,
        }
    }

    /// True if this identifier has been assigned to a subsystem.
    #[inline]
    pub const fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<Facility> for u8 {
    #[inline]
    fn from(f: Facility) -> u8 {
        f.0
    }
}

impl fmt::Debug for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "Facility({})", self.0),
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}
