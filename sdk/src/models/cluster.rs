use super::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// `ClusterInfo` represents the configuration of a Kafka cluster tracked by Burrow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterInfo {
    /// The ZooKeeper ensemble as `host:port` entries.
    #[serde(deserialize_with = "null_as_default")]
    pub zookeepers: Vec<String>,
    /// The default ZooKeeper port.
    pub zookeeper_port: Option<u16>,
    /// The chroot path of the cluster in ZooKeeper.
    pub zookeeper_path: Option<String>,
    /// The Kafka brokers as `host:port` entries.
    #[serde(deserialize_with = "null_as_default")]
    pub brokers: Vec<String>,
    /// The default broker port.
    pub broker_port: Option<u16>,
    /// The topic the consumer offsets are read from.
    pub offsets_topic: Option<String>,
    /// Any other key returned by the service.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ClusterInfo {
    pub fn zookeeper_servers(&self) -> Vec<ServerAddress> {
        self.zookeepers
            .iter()
            .map(|entry| ServerAddress::from(entry.as_str()))
            .collect()
    }

    pub fn broker_servers(&self) -> Vec<ServerAddress> {
        self.brokers
            .iter()
            .map(|entry| ServerAddress::from(entry.as_str()))
            .collect()
    }
}

/// A `host:port` pair taken from the cluster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerAddress {
    pub server: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(server: impl Into<String>, port: u16) -> Self {
        Self {
            server: server.into(),
            port,
        }
    }
}

/// Lenient parsing: brackets around the host are dropped and a missing or
/// non-numeric port becomes `0`.
impl From<&str> for ServerAddress {
    fn from(entry: &str) -> Self {
        let (host, port) = match entry.rsplit_once(':') {
            Some((host, port)) => (host, port.trim().parse::<u16>().unwrap_or(0)),
            None => (entry, 0),
        };
        let server = host.trim().trim_matches(|c: char| c == '[' || c == ']');
        ServerAddress::new(server, port)
    }
}

impl Display for ServerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.server.contains(':') {
            write!(f, "[{}]:{}", self.server, self.port)
        } else {
            write!(f, "{}:{}", self.server, self.port)
        }
    }
}
