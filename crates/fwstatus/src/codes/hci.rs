//! Host Controller Interface library codes.

use crate::Facility;

crate::status_catalog! {
    Facility::LIBRARY_HCI;
    INVALID_INPUT = 0,
    /// Outgoing packet exceeds the transport's maximum size
    TX_PACKET_TOO_LARGE = 1,
    /// Opcode not recognised
    INVALID_COMMAND = 2,
}
