pub mod store;

pub use store::{LoadOutcome, SettingsStore};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const SETTINGS_FILENAME: &str = "settings_daylight.json";

pub const DEFAULT_TRANSMISSION: u8 = 70;

/// Transmission percentage through the wall, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Transmission(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Value must be between {} and {}.", Transmission::MIN, Transmission::MAX)]
pub struct TransmissionRangeError(pub i64);

impl Transmission {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, TransmissionRangeError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(TransmissionRangeError(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Transmission {
    fn default() -> Self {
        Self(DEFAULT_TRANSMISSION)
    }
}

impl TryFrom<i64> for Transmission {
    type Error = TransmissionRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Transmission> for u8 {
    fn from(value: Transmission) -> Self {
        value.0
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the downstream analysis runs. Only a label here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Web,
    Local,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::Web, ExecutionMode::Local];

    /// Position in the binary choice shown to the user.
    pub fn index(self) -> usize {
        match self {
            ExecutionMode::Web => 0,
            ExecutionMode::Local => 1,
        }
    }

    /// Index 1 is local, anything else is web.
    pub fn from_index(index: usize) -> Self {
        if index == 1 { ExecutionMode::Local } else { ExecutionMode::Web }
    }

    /// Only the exact label `"local"` selects local execution.
    pub fn from_label(label: &str) -> Self {
        if label == "local" { ExecutionMode::Local } else { ExecutionMode::Web }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Web => "web",
            ExecutionMode::Local => "local",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExecutionMode::Web => "Web",
            ExecutionMode::Local => "Local",
        }
    }
}

impl<'de> Deserialize<'de> for ExecutionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Non-string values select web rather than rejecting the file
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or(ExecutionMode::Web, Self::from_label))
    }
}

/// The persisted settings for one daylight analysis run.
///
/// Fields are declared in lexicographic order, which is also the key order of
/// the written file. Keys missing from an older file fall back to their
/// defaults individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    pub execution_mode: ExecutionMode,

    /// Elevation of the ground floor level in millimetres.
    #[serde(serialize_with = "serialize_elevation")]
    pub level_elevation: Option<f64>,

    pub multilayer_wall: bool,
    pub transmission_value: Transmission,
    pub write_results: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Web,
            level_elevation: None,
            multilayer_wall: false,
            transmission_value: Transmission::default(),
            write_results: true,
        }
    }
}

// Whole millimetre values are written as JSON integers.
fn serialize_elevation<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => serializer.serialize_some(&(*v as i64)),
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}
