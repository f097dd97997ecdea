use crate::client::ConsumerClient;
use crate::http::client::BurrowClient;
use crate::http::{kafka_path, HttpMethod, HttpTransport};
use crate::models::consumer::ConsumerStatus;
use crate::models::lag::ConsumerLag;
use async_trait::async_trait;
use tracing::info;

const CONSUMER: &str = "consumer";
const CONSUMERS: &str = "consumers";
const TOPIC: &str = "topic";
const TOPICS: &str = "topics";
const LAG: &str = "lag";
const OFFSETS: &str = "offsets";
const STATUS: &str = "status";

#[async_trait]
impl<T: HttpTransport> ConsumerClient for BurrowClient<T> {
    async fn get_consumers(&self, cluster: &str) -> Option<Vec<String>> {
        self.fetch(&kafka_path(&[cluster, CONSUMER]), CONSUMERS)
            .await
    }

    async fn get_consumer_topics(&self, cluster: &str, consumer: &str) -> Option<Vec<String>> {
        self.fetch(&kafka_path(&[cluster, CONSUMER, consumer, TOPIC]), TOPICS)
            .await
    }

    async fn get_consumer_offsets(
        &self,
        cluster: &str,
        consumer: &str,
        topic: &str,
    ) -> Option<Vec<i64>> {
        self.fetch(
            &kafka_path(&[cluster, CONSUMER, consumer, TOPIC, topic]),
            OFFSETS,
        )
        .await
    }

    async fn get_consumer_status(&self, cluster: &str, consumer: &str) -> Option<ConsumerStatus> {
        self.fetch(&kafka_path(&[cluster, CONSUMER, consumer, LAG]), STATUS)
            .await
    }

    async fn get_consumer_lag(&self, cluster: &str, consumer: &str) -> Option<ConsumerLag> {
        let status = self.get_consumer_status(cluster, consumer).await?;
        Some(ConsumerLag::from_status(&status))
    }

    async fn delete_consumer(&self, cluster: &str, consumer: &str) -> bool {
        let deleted = self
            .call(
                &kafka_path(&[cluster, CONSUMER, consumer]),
                HttpMethod::Delete,
            )
            .await
            .is_some();
        if deleted {
            info!("Deleted consumer group {consumer} from cluster {cluster}");
        }
        deleted
    }
}
