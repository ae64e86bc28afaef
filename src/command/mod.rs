mod document;

pub use document::{devicestatus, profile, profiles};
