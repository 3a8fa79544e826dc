//! SoC driver codes.

use crate::Facility;

crate::status_catalog! {
    Facility::DRIVER_SOC;
    INVALID_INPUT = 0,
}
