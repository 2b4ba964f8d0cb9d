use codec::{CodecLimits, Record};
use messages::{
    AnyMessage, BatchCommand, BatchResponse, DeviceInfoResponse, DeviceStatus, ErrorCode, Frame,
    GetDeviceInfoCommand, PingCommand, PingResponse, ProtocolHeader, SendDataCommand,
    SendDataResponse, SensorData, SensorDataResponse, SetConfigCommand, SetConfigResponse,
    Vector3D,
};
use proptest::prelude::*;

fn f32_bits() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

fn vector_strategy() -> impl Strategy<Value = Vector3D> {
    (f32_bits(), f32_bits(), f32_bits()).prop_map(|(x, y, z)| Vector3D { x, y, z })
}

fn sensor_strategy() -> impl Strategy<Value = SensorData> {
    (
        any::<u64>(),
        any::<u8>(),
        vector_strategy(),
        f32_bits(),
        f32_bits(),
    )
        .prop_map(|(timestamp, sensor_id, position, temperature, humidity)| SensorData {
            timestamp,
            sensor_id,
            position,
            temperature,
            humidity,
        })
}

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

fn message_strategy() -> impl Strategy<Value = AnyMessage> {
    prop_oneof![command_strategy(), response_strategy()]
}

fn command_strategy() -> impl Strategy<Value = AnyMessage> {
    prop_oneof![
        any::<u64>().prop_map(|timestamp| AnyMessage::from(PingCommand { timestamp })),
        any::<bool>()
            .prop_map(|include_details| AnyMessage::from(GetDeviceInfoCommand { include_details })),
        (any::<u8>(), any::<u8>(), bytes(512)).prop_map(|(channel, priority, data)| {
            AnyMessage::from(SendDataCommand {
                channel,
                priority,
                data,
            })
        }),
        (any::<u8>(), any::<u8>(), bytes(256)).prop_map(|(config_id, value_type, value)| {
            AnyMessage::from(SetConfigCommand {
                config_id,
                value_type,
                value,
            })
        }),
        (any::<u8>(), bytes(256)).prop_map(|(command_count, commands)| {
            AnyMessage::from(BatchCommand {
                command_count,
                commands,
            })
        }),
    ]
}

fn response_strategy() -> impl Strategy<Value = AnyMessage> {
    prop_oneof![
        (any::<u64>(), any::<u64>()).prop_map(|(request_timestamp, response_timestamp)| {
            AnyMessage::from(PingResponse {
                request_timestamp,
                response_timestamp,
            })
        }),
        (
            any::<u8>(),
            any::<[u8; 32]>(),
            any::<[u8; 16]>(),
            any::<u32>(),
            any::<i16>(),
            any::<u8>(),
        )
            .prop_map(
                |(status, device_name, firmware_version, uptime_seconds, temperature, battery_level)| {
                    AnyMessage::from(DeviceInfoResponse {
                        status: DeviceStatus::from(status),
                        device_name,
                        firmware_version,
                        uptime_seconds,
                        temperature,
                        battery_level,
                    })
                }
            ),
        (any::<bool>(), any::<u8>(), any::<u32>()).prop_map(|(success, code, bytes_written)| {
            AnyMessage::from(SendDataResponse {
                success,
                error_code: ErrorCode::from(code),
                bytes_written,
            })
        }),
        (any::<bool>(), any::<u8>()).prop_map(|(success, code)| {
            AnyMessage::from(SetConfigResponse {
                success,
                error_code: ErrorCode::from(code),
            })
        }),
        (any::<u8>(), any::<u8>(), bytes(256)).prop_map(
            |(success_count, failure_count, results)| {
                AnyMessage::from(BatchResponse {
                    success_count,
                    failure_count,
                    results,
                })
            }
        ),
        (any::<u8>(), prop::collection::vec(sensor_strategy(), 0..16)).prop_map(
            |(sensor_count, sensors)| {
                AnyMessage::from(SensorDataResponse {
                    sensor_count,
                    sensors,
                })
            }
        ),
    ]
}

// Float fields may hold NaN, so equality is checked on re-encoded bytes.
proptest! {
    #[test]
    fn prop_message_roundtrip(message in message_strategy()) {
        let bytes = message.encode().unwrap();
        let decoded = AnyMessage::decode_with_limits(
            message.command_id(),
            &bytes,
            &CodecLimits::default().strict(),
        )
        .unwrap();
        prop_assert_eq!(decoded.kind(), message.kind());
        prop_assert_eq!(decoded.encode().unwrap(), bytes);
    }

    #[test]
    fn prop_truncated_message_underflows(
        message in message_strategy(),
        cut in any::<prop::sample::Index>(),
    ) {
        let bytes = message.encode().unwrap();
        let len = cut.index(bytes.len());
        let err = AnyMessage::decode(message.command_id(), &bytes[..len]).unwrap_err();
        prop_assert!(err.is_underflow());
    }

    #[test]
    fn prop_sensor_data_bits_roundtrip(data in sensor_strategy()) {
        let decoded = SensorData::deserialize(&data.serialize().unwrap()).unwrap();
        prop_assert_eq!(decoded.position.x.to_bits(), data.position.x.to_bits());
        prop_assert_eq!(decoded.position.y.to_bits(), data.position.y.to_bits());
        prop_assert_eq!(decoded.position.z.to_bits(), data.position.z.to_bits());
        prop_assert_eq!(decoded.temperature.to_bits(), data.temperature.to_bits());
        prop_assert_eq!(decoded.humidity.to_bits(), data.humidity.to_bits());
        prop_assert_eq!(decoded.timestamp, data.timestamp);
    }

    #[test]
    fn prop_frame_roundtrip(message in message_strategy(), sequence_id in any::<u32>()) {
        let frame = Frame {
            header: ProtocolHeader {
                magic: 0xD00D,
                version: 1,
                sequence_id,
                ..ProtocolHeader::default()
            },
            message,
        };
        let bytes = frame.encode().unwrap();
        let decoded = Frame::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.header.sequence_id, sequence_id);
        prop_assert_eq!(decoded.encode().unwrap(), bytes);
    }

    #[test]
    fn prop_decode_arbitrary_payload_never_panics(
        command_id in any::<u8>(),
        payload in bytes(128),
    ) {
        let _ = AnyMessage::decode_with_limits(command_id, &payload, &CodecLimits::for_testing());
    }
}
