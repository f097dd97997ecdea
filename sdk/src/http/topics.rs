use crate::client::TopicClient;
use crate::http::client::BurrowClient;
use crate::http::{kafka_path, HttpTransport};
use async_trait::async_trait;

const TOPIC: &str = "topic";
const TOPICS: &str = "topics";
const OFFSETS: &str = "offsets";

#[async_trait]
impl<T: HttpTransport> TopicClient for BurrowClient<T> {
    async fn get_topics(&self, cluster: &str) -> Option<Vec<String>> {
        self.fetch(&kafka_path(&[cluster, TOPIC]), TOPICS).await
    }

    async fn get_topic_offsets(&self, cluster: &str, topic: &str) -> Option<Vec<i64>> {
        self.fetch(&kafka_path(&[cluster, TOPIC, topic]), OFFSETS)
            .await
    }
}
