use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

pub const DEFAULT_STORE_NAME: &str = "Default";

/// Therapy profile document
///
/// The schedule arrays at this level duplicate the ones in `store`, in a
/// reduced shape. Both copies are kept exactly as received.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    /// Name of the active entry in `store`
    #[serde(rename = "defaultProfile")]
    pub default_profile: String,
    pub store: Store,
    #[serde(rename = "startDate")]
    pub start_date: Timestamp,
    pub mills: String,
    pub created_at: Timestamp,
    pub dia: String,
    pub carbratio: Vec<ScheduleEntry>,
    pub carbs_hr: String,
    pub delay: String,
    pub sens: Vec<ScheduleEntry>,
    pub timezone: String,
    pub basal: Vec<ScheduleEntry>,
    pub target_low: Vec<ScheduleEntry>,
    pub target_high: Vec<ScheduleEntry>,
    pub units: String,
}

/// Named parameter sets of a profile
///
/// `Default` is always present; any further names are kept in `named`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Store {
    #[serde(rename = "Default")]
    pub default: StoreProfile,
    #[serde(flatten)]
    pub named: BTreeMap<String, StoreProfile>,
}

impl Store {
    pub fn get(&self, name: &str) -> Option<&StoreProfile> {
        if name == DEFAULT_STORE_NAME {
            Some(&self.default)
        } else {
            self.named.get(name)
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(DEFAULT_STORE_NAME).chain(self.named.keys().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StoreProfile {
    pub dia: String,
    pub carbratio: Vec<StoreScheduleEntry>,
    pub carbs_hr: String,
    pub delay: String,
    pub sens: Vec<StoreScheduleEntry>,
    pub timezone: String,
    pub basal: Vec<StoreScheduleEntry>,
    pub target_low: Vec<StoreScheduleEntry>,
    pub target_high: Vec<StoreScheduleEntry>,
    #[serde(rename = "startDate")]
    pub start_date: Timestamp,
    pub units: String,
}

/// Schedule entry inside a store ("HH:MM" plus seconds since midnight)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreScheduleEntry {
    pub time: String,
    pub value: String,
    #[serde(rename = "timeAsSeconds")]
    pub time_as_seconds: String,
}

/// Schedule entry of the flattened top-level arrays
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub value: String,
}
