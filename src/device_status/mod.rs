//! Device Status documents
//!
//! A Device Status document is a JSON array of [`DeviceStatus`] records.

mod models;

use std::io::Read;

use crate::codec::{self, SchemaError};

pub use models::{
    Battery, Cob, DeviceStatus, Enacted, Loop, LoopIob, Predicted, Pump, PumpIob,
    RecommendedTempBasal, Sensor, Uploader,
};

pub fn from_str(raw: &str) -> Result<Vec<DeviceStatus>, SchemaError> {
    codec::decode(raw)
}

pub fn from_slice(raw: &[u8]) -> Result<Vec<DeviceStatus>, SchemaError> {
    codec::decode_slice(raw)
}

pub fn from_reader(reader: impl Read) -> Result<Vec<DeviceStatus>, SchemaError> {
    codec::decode_reader(reader)
}

pub fn to_string(statuses: &[DeviceStatus]) -> Result<String, SchemaError> {
    codec::encode(statuses)
}

pub fn to_string_pretty(statuses: &[DeviceStatus]) -> Result<String, SchemaError> {
    codec::encode_pretty(statuses)
}
