use super::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `ConsumerStatus` represents the lag evaluation of a consumer group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerStatus {
    /// The cluster the group belongs to.
    pub cluster: String,
    /// The consumer group name.
    pub group: String,
    /// The overall status, e.g. `OK`, `WARN`, `ERR`, `STOP`, `STALL`.
    pub status: String,
    /// How complete the evaluation window is, `1.0` meaning fully complete.
    #[serde(deserialize_with = "deserialize_completeness")]
    pub complete: f64,
    /// The per partition statuses in the order returned by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub partitions: Vec<PartitionStatus>,
    /// The number of partitions the group consumes.
    pub partition_count: u32,
    /// The partition with the highest lag, if any.
    pub maxlag: Option<PartitionStatus>,
    /// The sum of the lag over all partitions.
    pub totallag: i64,
}

/// `PartitionStatus` represents the evaluation of a single topic partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionStatus {
    pub topic: String,
    pub partition: i32,
    pub status: String,
    /// The oldest offset commit of the evaluation window.
    pub start: Option<OffsetSnapshot>,
    /// The newest offset commit of the evaluation window.
    pub end: Option<OffsetSnapshot>,
}

/// An offset commit together with the lag observed at that time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetSnapshot {
    pub offset: i64,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub lag: i64,
    pub max_offset: i64,
}

// Older services report `complete` as a boolean, newer ones as a ratio.
fn deserialize_completeness<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(true) => 1.0,
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    })
}
