use burrow::client::ClusterClient;
use burrow::http::HttpMethod;
use burrow::models::cluster::ServerAddress;

mod common;

const CLUSTER_INFO: &str = r#"{
    "error": false,
    "message": "cluster info returned",
    "cluster": {
        "zookeepers": ["[10.0.0.1]:2181", "10.0.0.2:2181"],
        "zookeeper_port": 2181,
        "zookeeper_path": "/kafka-cluster",
        "brokers": ["kafka01:9092", "kafka02:abc"],
        "broker_port": 9092,
        "offsets_topic": "__consumer_offsets"
    }
}"#;

#[tokio::test]
async fn clusters_should_be_returned() {
    let client = common::client_responding(
        HttpMethod::Get,
        "/v2/kafka",
        r#"{"error": false, "clusters": ["a", "b"]}"#,
    );

    let clusters = client.get_clusters().await;
    assert_eq!(clusters, Some(vec!["a".to_string(), "b".to_string()]));
}

#[tokio::test]
async fn empty_cluster_list_should_differ_from_failure() {
    let client = common::client_responding(
        HttpMethod::Get,
        "/v2/kafka",
        r#"{"error": false, "clusters": []}"#,
    );

    assert_eq!(client.get_clusters().await, Some(Vec::new()));
}

#[tokio::test]
async fn cluster_info_should_be_returned() {
    let client = common::client_responding(HttpMethod::Get, "/v2/kafka/local", CLUSTER_INFO);

    let info = client.get_cluster_info("local").await.unwrap();
    assert_eq!(info.zookeeper_path.as_deref(), Some("/kafka-cluster"));
    assert_eq!(info.brokers.len(), 2);
}

#[tokio::test]
async fn zookeeper_servers_should_be_parsed_from_cluster_info() {
    let client = common::client_responding(HttpMethod::Get, "/v2/kafka/local", CLUSTER_INFO);

    let servers = client.get_zookeeper_servers("local").await;
    assert_eq!(
        servers,
        Some(vec![
            ServerAddress::new("10.0.0.1", 2181),
            ServerAddress::new("10.0.0.2", 2181),
        ])
    );
}

#[tokio::test]
async fn brokers_should_be_parsed_from_cluster_info() {
    let client = common::client_responding(HttpMethod::Get, "/v2/kafka/local", CLUSTER_INFO);

    let brokers = client.get_brokers("local").await;
    assert_eq!(
        brokers,
        Some(vec![
            ServerAddress::new("kafka01", 9092),
            ServerAddress::new("kafka02", 0),
        ])
    );
}

#[tokio::test]
async fn cluster_name_should_be_escaped_in_path() {
    let client = common::client_responding(
        HttpMethod::Get,
        "/v2/kafka/dc1%2Fmain",
        CLUSTER_INFO,
    );

    assert!(client.get_cluster_info("dc1/main").await.is_some());
}

#[tokio::test]
async fn cluster_methods_should_fail_on_error_envelope() {
    let client = common::client_always_responding(404, common::ERROR_ENVELOPE);

    assert!(client.get_clusters().await.is_none());
    assert!(client.get_cluster_info("local").await.is_none());
    assert!(client.get_zookeeper_servers("local").await.is_none());
    assert!(client.get_brokers("local").await.is_none());
}

#[tokio::test]
async fn cluster_methods_should_fail_on_non_json_body() {
    let client = common::client_always_responding(502, common::NOT_JSON);

    assert!(client.get_clusters().await.is_none());
    assert!(client.get_cluster_info("local").await.is_none());
    assert!(client.get_zookeeper_servers("local").await.is_none());
    assert!(client.get_brokers("local").await.is_none());
}

#[tokio::test]
async fn cluster_methods_should_fail_when_service_is_unreachable() {
    let client = common::client_unreachable();

    assert!(client.get_clusters().await.is_none());
    assert!(client.get_brokers("local").await.is_none());
}

#[tokio::test]
async fn missing_payload_field_should_be_a_failure() {
    let client = common::client_responding(HttpMethod::Get, "/v2/kafka", r#"{"error": false}"#);

    assert!(client.get_clusters().await.is_none());
}

#[tokio::test]
async fn null_zookeepers_should_not_hide_brokers() {
    let body = r#"{
        "error": false,
        "cluster": {"zookeepers": null, "brokers": ["k1:9092"], "broker_port": 9092}
    }"#;

    let client = common::client_always_responding(200, body);
    assert_eq!(
        client.get_brokers("local").await,
        Some(vec![ServerAddress::new("k1", 9092)])
    );
    assert_eq!(client.get_zookeeper_servers("local").await, Some(Vec::new()));
}

#[tokio::test]
async fn null_brokers_should_be_an_empty_list() {
    let client = common::client_responding(
        HttpMethod::Get,
        "/v2/kafka/local",
        r#"{"error": false, "cluster": {"zookeepers": ["zk1:2181"], "brokers": null}}"#,
    );

    assert_eq!(client.get_brokers("local").await, Some(Vec::new()));
}
