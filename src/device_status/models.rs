use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::timestamp::Timestamp;

/// Snapshot of the state reported by a pump / sensor / uploader / loop setup
///
/// One element of a Device Status list document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DeviceStatus {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: Timestamp,
    pub device: String,
    #[serde(rename = "sensorNotActive")]
    pub sensor_not_active: bool,
    pub pump: Pump,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<Sensor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<Uploader>,
    /// Closed-loop controller state; absent for open-loop setups
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub loop_state: Option<Loop>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Pump {
    pub battery: Battery,
    pub reservoir: Decimal,
    pub clock: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iob: Option<PumpIob>,
    #[serde(rename = "pumpID")]
    pub pump_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Battery {
    pub percent: i32,
    pub status: String,
    pub voltage: Decimal,
}

/// Insulin on board as reported by the pump itself
///
/// Like the other optional sections, its fields may each be absent.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PumpIob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bolusiob: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iob: Option<Decimal>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_remaining: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_age: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Uploader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Decision snapshot of the closed-loop controller
///
/// Loop implementations report different subsets of these fields, so every
/// one of them may be absent.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Present only when the last loop cycle failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_temp_basal: Option<RecommendedTempBasal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_bolus: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<Predicted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iob: Option<LoopIob>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enacted: Option<Enacted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cob: Option<Cob>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RecommendedTempBasal {
    pub timestamp: Timestamp,
    pub rate: Decimal,
    /// Minutes
    pub duration: i32,
}

/// Predicted glucose curve, one value per interval from `start_date`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Predicted {
    pub start_date: Timestamp,
    pub values: Vec<i32>,
}

/// Insulin on board as computed by the loop algorithm
///
/// Same shape as [`PumpIob`] minus the bolus part, but a different quantity.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LoopIob {
    pub timestamp: Timestamp,
    pub iob: Decimal,
}

/// Temp basal the loop attempted to apply
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Enacted {
    pub timestamp: Timestamp,
    pub rate: Decimal,
    pub duration: i32,
    /// Whether the pump acknowledged the command
    pub received: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Cob {
    pub timestamp: Timestamp,
    pub cob: Decimal,
}
