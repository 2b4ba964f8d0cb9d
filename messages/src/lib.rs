//! Typed messages for the devproto device-control protocol.
//!
//! Every record here is a [`codec::Record`] backed by a constant
//! [`schema::Layout`]; the layouts are the wire contract. All multi-byte
//! scalars are little-endian and no padding separates fields.
//!
//! | Record | Command id | Size |
//! |---|---|---|
//! | [`ProtocolHeader`] | | 14 |
//! | [`PingCommand`] / [`PingResponse`] | 0x01 / 0x81 | 8 / 16 |
//! | [`GetDeviceInfoCommand`] / [`DeviceInfoResponse`] | 0x02 / 0x82 | 1 / 56 |
//! | [`SendDataCommand`] / [`SendDataResponse`] | 0x03 / 0x83 | variable / 6 |
//! | [`SetConfigCommand`] / [`SetConfigResponse`] | 0x04 / 0x84 | variable / 2 |
//! | [`BatchCommand`] / [`BatchResponse`] | 0x10 / 0x90 | variable |
//! | [`Vector3D`] / [`SensorData`] | | 12 / 29 |
//! | [`SensorDataResponse`] | 0x85 | variable |
//!
//! ```
//! use codec::Record;
//! use messages::{AnyMessage, Message, PingCommand};
//!
//! let bytes = PingCommand { timestamp: 7 }.serialize().unwrap();
//! let message = AnyMessage::decode(PingCommand::COMMAND_ID, &bytes).unwrap();
//! assert_eq!(message, AnyMessage::PingCommand(PingCommand { timestamp: 7 }));
//! ```
//!
//! The header checksum is carried but never computed or verified.

mod batch;
mod catalog;
mod config;
mod data;
mod device;
mod enums;
mod frame;
mod header;
mod ping;
mod sensor;

pub mod command_ids;

pub use batch::{BatchCommand, BatchResponse, BATCH_COMMAND_LAYOUT, BATCH_RESPONSE_LAYOUT};
pub use catalog::{lookup, AnyMessage, Message, MessageKind};
pub use config::{
    SetConfigCommand, SetConfigResponse, SET_CONFIG_COMMAND_LAYOUT, SET_CONFIG_RESPONSE_LAYOUT,
};
pub use data::{SendDataCommand, SendDataResponse, SEND_DATA_COMMAND_LAYOUT, SEND_DATA_RESPONSE_LAYOUT};
pub use device::{
    fixed_text, DeviceInfoResponse, GetDeviceInfoCommand, DEVICE_INFO_RESPONSE_LAYOUT,
    DEVICE_NAME_LEN, FIRMWARE_VERSION_LEN, GET_DEVICE_INFO_COMMAND_LAYOUT,
};
pub use enums::{DeviceStatus, ErrorCode};
pub use frame::{split_frame, Frame};
pub use header::{ProtocolHeader, HEADER_LAYOUT};
pub use ping::{PingCommand, PingResponse, PING_COMMAND_LAYOUT, PING_RESPONSE_LAYOUT};
pub use sensor::{
    SensorData, SensorDataResponse, Vector3D, SENSOR_DATA_LAYOUT, SENSOR_DATA_RESPONSE_LAYOUT,
    VECTOR3D_LAYOUT,
};

use schema::Layout;

const fn has_size(layout: &Layout, size: usize) -> bool {
    match layout.fixed_size() {
        Some(actual) => actual == size,
        None => false,
    }
}

// Fixed records must keep their declared wire size.
const _: () = assert!(has_size(&HEADER_LAYOUT, ProtocolHeader::HEADER_SIZE));
const _: () = assert!(has_size(&PING_COMMAND_LAYOUT, 8));
const _: () = assert!(has_size(&PING_RESPONSE_LAYOUT, 16));
const _: () = assert!(has_size(&GET_DEVICE_INFO_COMMAND_LAYOUT, 1));
const _: () = assert!(has_size(&DEVICE_INFO_RESPONSE_LAYOUT, 56));
const _: () = assert!(has_size(&SEND_DATA_RESPONSE_LAYOUT, 6));
const _: () = assert!(has_size(&SET_CONFIG_RESPONSE_LAYOUT, 2));
const _: () = assert!(has_size(&VECTOR3D_LAYOUT, 12));
const _: () = assert!(has_size(&SENSOR_DATA_LAYOUT, 29));
const _: () = assert!(!SEND_DATA_COMMAND_LAYOUT.is_fixed_size());
const _: () = assert!(!SET_CONFIG_COMMAND_LAYOUT.is_fixed_size());
const _: () = assert!(!BATCH_COMMAND_LAYOUT.is_fixed_size());
const _: () = assert!(!BATCH_RESPONSE_LAYOUT.is_fixed_size());
const _: () = assert!(!SENSOR_DATA_RESPONSE_LAYOUT.is_fixed_size());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ProtocolHeader::default();
        let _ = command_ids::PING_COMMAND;
        let _ = MessageKind::ALL;
        assert!(command_ids::is_response(command_ids::PING_RESPONSE));
    }

    #[test]
    fn has_size_rejects_variable_layouts() {
        assert!(!has_size(&SEND_DATA_COMMAND_LAYOUT, 4));
        assert!(has_size(&SENSOR_DATA_LAYOUT, 29));
    }
}
