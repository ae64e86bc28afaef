use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Decimal quantity as it appears on the wire
///
/// Keeps the integer or float form of the JSON number, so `0` re-encodes as
/// `0` and not `0.0`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Decimal(Number);

impl Decimal {
    /// Returns `None` for NaN and infinities, which JSON cannot carry
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Decimal)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn is_integer(&self) -> bool {
        !self.0.is_f64()
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(value.into())
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal(value.into())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
