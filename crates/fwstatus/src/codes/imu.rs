//! IMU sensor driver codes.

use crate::Facility;

crate::status_catalog! {
    Facility::DRIVER_IMU;
    /// WHO_AM_I register returned an unexpected value
    INVALID_WHOAMI = 0,
    UNKNOWN_SENSOR = 1,
    INVALID_INPUT = 2,
    /// Sample FIFO overran before it was drained
    DATA_OVERFLOW = 3,
    DATA_NOT_READY = 4,
}
