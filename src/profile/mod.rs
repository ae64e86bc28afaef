//! Profile documents
//!
//! A single Profile document is a JSON object. The service's profile endpoint
//! serves several of them as a JSON array, which `list_from_str` decodes.

mod models;

use std::io::Read;

use crate::codec::{self, SchemaError};

pub use models::{
    Profile, ScheduleEntry, Store, StoreProfile, StoreScheduleEntry, DEFAULT_STORE_NAME,
};

pub fn from_str(raw: &str) -> Result<Profile, SchemaError> {
    codec::decode(raw)
}

pub fn from_slice(raw: &[u8]) -> Result<Profile, SchemaError> {
    codec::decode_slice(raw)
}

pub fn from_reader(reader: impl Read) -> Result<Profile, SchemaError> {
    codec::decode_reader(reader)
}

/// Decode a list of profiles, keeping the order they were served in
pub fn list_from_str(raw: &str) -> Result<Vec<Profile>, SchemaError> {
    codec::decode(raw)
}

pub fn list_from_slice(raw: &[u8]) -> Result<Vec<Profile>, SchemaError> {
    codec::decode_slice(raw)
}

pub fn to_string(profile: &Profile) -> Result<String, SchemaError> {
    codec::encode(profile)
}

pub fn to_string_pretty(profile: &Profile) -> Result<String, SchemaError> {
    codec::encode_pretty(profile)
}
