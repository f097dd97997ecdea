use crate::models::consumer::ConsumerStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The latest lag figures of one partition of a consumer group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionLag {
    pub status: String,
    pub lag: i64,
    /// Epoch milliseconds of the offset commit.
    pub timestamp: i64,
    pub offset: i64,
}

/// A flattened `PartitionLag` carrying its topic and partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerLagEntry {
    pub topic: String,
    pub partition: i32,
    pub status: String,
    pub lag: i64,
    pub timestamp: i64,
    pub offset: i64,
}

/// Consumer group lag keyed by topic, then by partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumerLag {
    topics: BTreeMap<String, BTreeMap<i32, PartitionLag>>,
}

impl ConsumerLag {
    /// Builds the lag view from the `end` snapshot of every partition status.
    /// When a (topic, partition) pair is reported more than once the first record is kept.
    pub fn from_status(status: &ConsumerStatus) -> Self {
        let mut topics: BTreeMap<String, BTreeMap<i32, PartitionLag>> = BTreeMap::new();
        for partition in &status.partitions {
            topics
                .entry(partition.topic.clone())
                .or_default()
                .entry(partition.partition)
                .or_insert_with(|| {
                    let end = partition.end.clone().unwrap_or_default();
                    PartitionLag {
                        status: partition.status.clone(),
                        lag: end.lag,
                        timestamp: end.timestamp,
                        offset: end.offset,
                    }
                });
        }
        Self { topics }
    }

    pub fn get(&self, topic: &str, partition: i32) -> Option<&PartitionLag> {
        self.topics.get(topic)?.get(&partition)
    }

    pub fn partitions(&self, topic: &str) -> Option<&BTreeMap<i32, PartitionLag>> {
        self.topics.get(topic)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Number of (topic, partition) pairs.
    pub fn len(&self) -> usize {
        self.topics.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the lag over every partition, clamped to the `i64` range.
    pub fn total_lag(&self) -> i64 {
        self.topics
            .values()
            .flat_map(BTreeMap::values)
            .fold(0i64, |total, partition| total.saturating_add(partition.lag))
    }

    pub fn entries(&self) -> Vec<ConsumerLagEntry> {
        self.topics
            .iter()
            .flat_map(|(topic, partitions)| {
                partitions
                    .iter()
                    .map(move |(partition, lag)| ConsumerLagEntry {
                        topic: topic.clone(),
                        partition: *partition,
                        status: lag.status.clone(),
                        lag: lag.lag,
                        timestamp: lag.timestamp,
                        offset: lag.offset,
                    })
            })
            .collect()
    }
}
