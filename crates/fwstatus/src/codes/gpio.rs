//! GPIO driver codes.

use crate::Facility;

crate::status_catalog! {
    Facility::DRIVER_GPIO;
    /// Pin number does not exist on this port
    INVALID_PIN = 0,
    INVALID_INPUT = 1,
}
