//! JSON decode/encode for the document types
//!
//! Every document family funnels through these functions so that error
//! classification is the same everywhere: a document that parses as JSON but
//! does not have the declared shape is a [`SchemaError::SchemaMismatch`].

use std::any::type_name;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    /// A required field is missing, or a field has the wrong JSON type
    #[error("schema mismatch: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("could not read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => SchemaError::SchemaMismatch(e),
            Category::Syntax | Category::Eof => SchemaError::MalformedJson(e),
            Category::Io => SchemaError::Io(e.into()),
        }
    }
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, SchemaError> {
    log::debug!("Decoding {} from {} bytes", type_name::<T>(), raw.len());
    serde_json::from_str::<T>(raw).map_err(Into::into)
}

pub fn decode_slice<T: DeserializeOwned>(raw: &[u8]) -> Result<T, SchemaError> {
    log::debug!("Decoding {} from {} bytes", type_name::<T>(), raw.len());
    serde_json::from_slice::<T>(raw).map_err(Into::into)
}

pub fn decode_reader<T: DeserializeOwned>(reader: impl Read) -> Result<T, SchemaError> {
    log::debug!("Decoding {} from reader", type_name::<T>());
    serde_json::from_reader::<_, T>(reader).map_err(Into::into)
}

pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, SchemaError> {
    serde_json::from_value::<T>(value).map_err(Into::into)
}

pub fn encode<T: Serialize + ?Sized>(doc: &T) -> Result<String, SchemaError> {
    log::debug!("Encoding {}", type_name::<T>());
    serde_json::to_string(doc).map_err(SchemaError::Encode)
}

pub fn encode_pretty<T: Serialize + ?Sized>(doc: &T) -> Result<String, SchemaError> {
    log::debug!("Encoding {} (pretty)", type_name::<T>());
    serde_json::to_string_pretty(doc).map_err(SchemaError::Encode)
}

pub fn encode_value<T: Serialize + ?Sized>(doc: &T) -> Result<Value, SchemaError> {
    serde_json::to_value(doc).map_err(SchemaError::Encode)
}
