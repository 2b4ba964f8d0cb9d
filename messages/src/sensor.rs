use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout, PrefixWidth};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;

pub const VECTOR3D_LAYOUT: Layout = Layout::new(
    "Vector3D",
    &[FieldDef::f32("x"), FieldDef::f32("y"), FieldDef::f32("z")],
);

pub const SENSOR_DATA_LAYOUT: Layout = Layout::new(
    "SensorData",
    &[
        FieldDef::u64("timestamp"),
        FieldDef::u8("sensor_id"),
        FieldDef::record("position", &VECTOR3D_LAYOUT),
        FieldDef::f32("temperature"),
        FieldDef::f32("humidity"),
    ],
);

pub const SENSOR_DATA_RESPONSE_LAYOUT: Layout = Layout::command(
    "SensorDataResponse",
    command_ids::SENSOR_DATA_RESPONSE,
    &[
        FieldDef::u8("sensor_count"),
        FieldDef::record_list("sensors", PrefixWidth::U16, &SENSOR_DATA_LAYOUT),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One sensor sample. `position` is a nested 12-byte [`Vector3D`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorData {
    pub timestamp: u64,
    pub sensor_id: u8,
    pub position: Vector3D,
    pub temperature: f32,
    pub humidity: f32,
}

/// A set of sensor samples.
///
/// On the wire `sensors` is a u16 byte-length prefix followed by back-to-back
/// 29-byte [`SensorData`] encodings, so at most 2259 samples fit.
/// `sensor_count` is carried as given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorDataResponse {
    pub sensor_count: u8,
    pub sensors: Vec<SensorData>,
}

impl Record for Vector3D {
    const LAYOUT: &'static Layout = &VECTOR3D_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.x.into(), self.y.into(), self.z.into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            x: fields.take()?,
            y: fields.take()?,
            z: fields.take()?,
        })
    }
}

impl Record for SensorData {
    const LAYOUT: &'static Layout = &SENSOR_DATA_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.timestamp.into(),
            self.sensor_id.into(),
            FieldValue::record(&self.position),
            self.temperature.into(),
            self.humidity.into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            timestamp: fields.take()?,
            sensor_id: fields.take()?,
            position: fields.record()?,
            temperature: fields.take()?,
            humidity: fields.take()?,
        })
    }
}

impl Record for SensorDataResponse {
    const LAYOUT: &'static Layout = &SENSOR_DATA_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.sensor_count.into(), FieldValue::records(&self.sensors)]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            sensor_count: fields.take()?,
            sensors: fields.records()?,
        })
    }
}

impl Message for SensorDataResponse {
    const COMMAND_ID: u8 = command_ids::SENSOR_DATA_RESPONSE;
    const KIND: MessageKind = MessageKind::SensorDataResponse;
}
