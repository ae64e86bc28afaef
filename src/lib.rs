//! Typed records for the JSON documents exchanged with a Nightscout-style
//! diabetes data-tracking service.
//!
//! Two independent document families are covered:
//! - `device_status`: a list of pump / sensor / uploader / loop snapshots
//! - `profile`: a therapy profile with named stores and flattened schedules
//!
//! The records are passive values. Decoding and encoding go through `codec`,
//! which reports shape problems as [`SchemaError::SchemaMismatch`].

pub mod codec;
pub mod constants;
pub mod decimal;
pub mod device_status;
pub mod profile;
pub mod timestamp;

pub use codec::SchemaError;
pub use decimal::Decimal;
pub use timestamp::Timestamp;
