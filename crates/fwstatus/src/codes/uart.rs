//! UART driver codes.

use crate::Facility;

crate::status_catalog! {
    Facility::DRIVER_UART;
    INVALID_PARITY = 0,
    INVALID_STOP_BITS = 1,
    INVALID_DATA_BITS = 2,
    INVALID_INPUT = 3,
    WRITE_FAILED = 4,
    /// Port used before its configuration was applied
    NOT_INITIALIZED = 5,
}
