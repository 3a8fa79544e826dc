//! I2C bus driver codes.

use crate::Facility;

crate::status_catalog! {
    Facility::DRIVER_I2C;
    INVALID_INPUT = 0,
    /// Transfer longer than the controller buffer
    DATA_TOO_LONG = 1,
    /// Target did not acknowledge its address
    NACK_ON_ADDR = 2,
    /// Target did not acknowledge a data byte
    NACK_ON_DATA = 3,
    TIMEOUT = 4,
}
