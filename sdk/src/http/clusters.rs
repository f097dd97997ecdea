use crate::client::ClusterClient;
use crate::http::client::BurrowClient;
use crate::http::{kafka_path, HttpTransport};
use crate::models::cluster::{ClusterInfo, ServerAddress};
use async_trait::async_trait;

const CLUSTERS: &str = "clusters";
const CLUSTER: &str = "cluster";

#[async_trait]
impl<T: HttpTransport> ClusterClient for BurrowClient<T> {
    async fn get_clusters(&self) -> Option<Vec<String>> {
        self.fetch(&kafka_path(&[]), CLUSTERS).await
    }

    async fn get_cluster_info(&self, cluster: &str) -> Option<ClusterInfo> {
        self.fetch(&kafka_path(&[cluster]), CLUSTER).await
    }

    async fn get_zookeeper_servers(&self, cluster: &str) -> Option<Vec<ServerAddress>> {
        let info = self.get_cluster_info(cluster).await?;
        Some(info.zookeeper_servers())
    }

    async fn get_brokers(&self, cluster: &str) -> Option<Vec<ServerAddress>> {
        let info = self.get_cluster_info(cluster).await?;
        Some(info.broker_servers())
    }
}
