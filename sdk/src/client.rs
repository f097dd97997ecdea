use crate::models::cluster::{ClusterInfo, ServerAddress};
use crate::models::consumer::ConsumerStatus;
use crate::models::lag::ConsumerLag;
use async_trait::async_trait;

/// The client is the main interface to the Burrow API.
///
/// Every method returns `None` (or `false`) when the request could not be
/// completed or the service answered with an error envelope, so a valid
/// empty list is always distinguishable from a failed call.
pub trait Client: ClusterClient + ConsumerClient + TopicClient + Sync + Send {}

impl<T> Client for T where T: ClusterClient + ConsumerClient + TopicClient + Sync + Send {}

/// This trait defines the methods to read the Kafka clusters tracked by Burrow.
#[async_trait]
pub trait ClusterClient {
    /// Get the names of all the clusters.
    async fn get_clusters(&self) -> Option<Vec<String>>;
    /// Get the configuration of the cluster.
    async fn get_cluster_info(&self, cluster: &str) -> Option<ClusterInfo>;
    /// Get the ZooKeeper servers of the cluster.
    async fn get_zookeeper_servers(&self, cluster: &str) -> Option<Vec<ServerAddress>>;
    /// Get the Kafka brokers of the cluster.
    async fn get_brokers(&self, cluster: &str) -> Option<Vec<ServerAddress>>;
}

/// This trait defines the methods to interact with the consumer groups of a cluster.
#[async_trait]
pub trait ConsumerClient {
    /// Get the names of all the consumer groups.
    async fn get_consumers(&self, cluster: &str) -> Option<Vec<String>>;
    /// Get the topics the consumer group has committed offsets for.
    async fn get_consumer_topics(&self, cluster: &str, consumer: &str) -> Option<Vec<String>>;
    /// Get the committed offsets of the consumer group, one per partition of the topic.
    async fn get_consumer_offsets(
        &self,
        cluster: &str,
        consumer: &str,
        topic: &str,
    ) -> Option<Vec<i64>>;
    /// Get the lag evaluation of the consumer group.
    async fn get_consumer_status(&self, cluster: &str, consumer: &str) -> Option<ConsumerStatus>;
    /// Get the lag of the consumer group keyed by topic and partition.
    async fn get_consumer_lag(&self, cluster: &str, consumer: &str) -> Option<ConsumerLag>;
    /// Remove the consumer group from Burrow. Returns `true` on success.
    async fn delete_consumer(&self, cluster: &str, consumer: &str) -> bool;
}

/// This trait defines the methods to read the topics of a cluster.
#[async_trait]
pub trait TopicClient {
    /// Get the names of all the topics.
    async fn get_topics(&self, cluster: &str) -> Option<Vec<String>>;
    /// Get the head offsets of the topic, one per partition.
    async fn get_topic_offsets(&self, cluster: &str, topic: &str) -> Option<Vec<i64>>;
}
