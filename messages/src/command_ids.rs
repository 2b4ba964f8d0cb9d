//! Command identifiers.
//!
//! Responses carry the request id with bit `0x80` set. The codec does not
//! enforce the pairing.

pub const PING_COMMAND: u8 = 0x01;
pub const PING_RESPONSE: u8 = 0x81;
pub const GET_DEVICE_INFO_COMMAND: u8 = 0x02;
pub const DEVICE_INFO_RESPONSE: u8 = 0x82;
pub const SEND_DATA_COMMAND: u8 = 0x03;
pub const SEND_DATA_RESPONSE: u8 = 0x83;
pub const SET_CONFIG_COMMAND: u8 = 0x04;
pub const SET_CONFIG_RESPONSE: u8 = 0x84;
pub const BATCH_COMMAND: u8 = 0x10;
pub const BATCH_RESPONSE: u8 = 0x90;
pub const SENSOR_DATA_RESPONSE: u8 = 0x85;

/// Bit distinguishing responses from requests.
pub const RESPONSE_BIT: u8 = 0x80;

/// Returns `true` if `command_id` names a response by convention.
#[must_use]
pub const fn is_response(command_id: u8) -> bool {
    command_id & RESPONSE_BIT != 0
}

/// Response id paired with a request id by convention.
#[must_use]
pub const fn response_id(command_id: u8) -> u8 {
    command_id | RESPONSE_BIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_response_pairs() {
        assert_eq!(response_id(PING_COMMAND), PING_RESPONSE);
        assert_eq!(response_id(GET_DEVICE_INFO_COMMAND), DEVICE_INFO_RESPONSE);
        assert_eq!(response_id(SEND_DATA_COMMAND), SEND_DATA_RESPONSE);
        assert_eq!(response_id(SET_CONFIG_COMMAND), SET_CONFIG_RESPONSE);
        assert_eq!(response_id(BATCH_COMMAND), BATCH_RESPONSE);
    }

    #[test]
    fn response_bit_classification() {
        assert!(!is_response(PING_COMMAND));
        assert!(is_response(PING_RESPONSE));
        assert!(is_response(SENSOR_DATA_RESPONSE));
        assert!(!is_response(BATCH_COMMAND));
    }
}
