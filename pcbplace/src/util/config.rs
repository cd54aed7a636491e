use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Configuration of the placement search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Wall-clock budget of the search, in seconds. Once exceeded the search stops without a solution.
    #[serde(rename = "time_limit_s")]
    #[serde(serialize_with = "serialize_secs", deserialize_with = "deserialize_secs")]
    pub time_limit: Duration,
    /// Distance between consecutive positions of the mirrored-pair and edge generators
    pub grid_step: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_millis(1900),
            grid_step: 1.0,
        }
    }
}

fn serialize_secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

fn deserialize_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}
