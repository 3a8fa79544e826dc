//! Per-facility catalogs of failure codes.
//!
//! Each submodule owns exactly one facility and numbers its codes from 0.
//! The same number in two catalogs means two unrelated errors.
//!
//! | Module    | Facility      |
//! |-----------|---------------|
//! | `general` | `GENERAL`     |
//! | `i2c`     | `DRIVER_I2C`  |
//! | `imu`     | `DRIVER_IMU`  |
//! | `gpio`    | `DRIVER_GPIO` |
//! | `uart`    | `DRIVER_UART` |
//! | `hci`     | `LIBRARY_HCI` |
//! | `soc`     | `DRIVER_SOC`  |
//!
//! # Usage
//!
//! ```rust
//! use fwstatus::codes;
//! use fwstatus::StatusCode;
//!
//! fn write_byte(ready: bool) -> StatusCode {
//!     if !ready {
//!         return codes::uart::NOT_INITIALIZED;
//!     }
//!     StatusCode::SUCCESS
//! }
//!
//! assert_eq!(write_byte(false).code(), 5);
//! ```

pub mod general;
pub mod i2c;
pub mod imu;
pub mod gpio;
pub mod uart;
pub mod hci;
pub mod soc;

use crate::{Facility, StatusCode};

/// The catalog owned by `facility`, empty for facilities this crate does
/// not define.
pub fn catalog(facility: Facility) -> &'static [(StatusCode, &'static str)] {
    match facility {
        Facility::GENERAL => general::ALL,
        Facility::DRIVER_I2C => i2c::ALL,
        Facility::DRIVER_IMU => imu::ALL,
        Facility::DRIVER_GPIO => gpio::ALL,
        Facility::DRIVER_UART => uart::ALL,
        Facility::LIBRARY_HCI => hci::ALL,
        Facility::DRIVER_SOC => soc::ALL,
        _ => &[],
    }
}

/// Symbolic name of a catalogued status, e.g. `"NACK_ON_ADDR"`.
///
/// Returns `None` for values outside every catalog, and always under the
/// `production` feature.
///
/// ```
/// use fwstatus::codes::{self, name_of};
///
/// # #[cfg(not(feature = "production"))]
/// assert_eq!(name_of(codes::i2c::TIMEOUT), Some("TIMEOUT"));
/// ```
#[cfg(not(feature = "production"))]
pub fn name_of(status: StatusCode) -> Option<&'static str> {
    if status == StatusCode::SUCCESS {
        return Some("SUCCESS");
    }
    catalog(status.facility())
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, name)| *name)
}

#[cfg(feature = "production")]
#[inline]
pub fn name_of(_status: StatusCode) -> Option<&'static str> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i2c_values() {
        assert_eq!(i2c::INVALID_INPUT.as_u16(), 0x8100);
        assert_eq!(i2c::DATA_TOO_LONG.as_u16(), 0x8101);
        assert_eq!(i2c::NACK_ON_ADDR.as_u16(), 0x8102);
        assert_eq!(i2c::NACK_ON_DATA.as_u16(), 0x8103);
        assert_eq!(i2c::TIMEOUT.as_u16(), 0x8104);
    }

    #[test]
    fn imu_values() {
        assert_eq!(imu::INVALID_WHOAMI.as_u16(), 0x8200);
        assert_eq!(imu::UNKNOWN_SENSOR.as_u16(), 0x8201);
        assert_eq!(imu::INVALID_INPUT.as_u16(), 0x8202);
        assert_eq!(imu::DATA_OVERFLOW.as_u16(), 0x8203);
        assert_eq!(imu::DATA_NOT_READY.as_u16(), 0x8204);
    }

    #[test]
    fn gpio_values() {
        assert_eq!(gpio::INVALID_PIN.as_u16(), 0x8300);
        assert_eq!(gpio::INVALID_INPUT.as_u16(), 0x8301);
    }

    #[test]
    fn uart_values() {
        assert_eq!(uart::INVALID_PARITY.as_u16(), 0x8400);
        assert_eq!(uart::INVALID_STOP_BITS.as_u16(), 0x8401);
        assert_eq!(uart::INVALID_DATA_BITS.as_u16(), 0x8402);
        assert_eq!(uart::INVALID_INPUT.as_u16(), 0x8403);
        assert_eq!(uart::WRITE_FAILED.as_u16(), 0x8404);
        assert_eq!(uart::NOT_INITIALIZED.as_u16(), 0x8405);
    }

    #[test]
    fn hci_and_soc_values() {
        assert_eq!(hci::INVALID_INPUT.as_u16(), 0x8500);
        assert_eq!(hci::TX_PACKET_TOO_LARGE.as_u16(), 0x8501);
        assert_eq!(hci::INVALID_COMMAND.as_u16(), 0x8502);
        assert_eq!(soc::INVALID_INPUT.as_u16(), 0x8600);
    }

    #[test]
    fn general_values() {
        assert_eq!(general::SUCCESS.as_u16(), 0x0000);
        assert_eq!(general::UNIMPLEMENTED.as_u16(), 0x8000);
        assert_eq!(general::UNIMPLEMENTED, StatusCode::UNIMPLEMENTED);
    }

    #[test]
    fn catalogs_stay_in_their_facility() {
        for facility in Facility::KNOWN {
            let table = catalog(facility);
            assert!(!table.is_empty(), "{:?} has no codes", facility);
            for (i, (code, _)) in table.iter().enumerate() {
                assert!(code.failed());
                assert_eq!(code.facility(), facility);
                // Numbering restarts at 0 and has no gaps.
                assert_eq!(code.code() as usize, i);
            }
        }
    }

    #[test]
    fn unknown_facility_has_empty_catalog() {
        assert!(catalog(Facility::new(77)).is_empty());
    }

    #[test]
    fn invalid_input_differs_across_facilities() {
        let all = [
            i2c::INVALID_INPUT,
            imu::INVALID_INPUT,
            gpio::INVALID_INPUT,
            uart::INVALID_INPUT,
            hci::INVALID_INPUT,
            soc::INVALID_INPUT,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.facility(), b.facility());
            }
        }
    }

    #[cfg(not(feature = "production"))]
    #[test]
    fn names() {
        assert_eq!(name_of(StatusCode::SUCCESS), Some("SUCCESS"));
        assert_eq!(name_of(i2c::NACK_ON_ADDR), Some("NACK_ON_ADDR"));
        assert_eq!(name_of(uart::NOT_INITIALIZED), Some("NOT_INITIALIZED"));
        assert_eq!(name_of(general::UNIMPLEMENTED), Some("UNIMPLEMENTED"));
        assert_eq!(name_of(StatusCode::failure(Facility::DRIVER_SOC, 9)), None);
        assert_eq!(name_of(StatusCode::from_raw(0x0105)), None);
    }

    #[cfg(not(feature = "production"))]
    #[test]
    fn debug_uses_name() {
        assert_eq!(format!("{:?}", i2c::NACK_ON_ADDR), "StatusCode(0x8102 DRIVER_I2C::NACK_ON_ADDR)");
        assert_eq!(format!("{:?}", StatusCode::SUCCESS), "StatusCode(0x0000 GENERAL::SUCCESS)");
    }
}
