use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const ERROR: &str = "error";
const MESSAGE: &str = "message";

/// `Envelope` is the JSON object returned by every Burrow endpoint.
/// It consists of the following fields:
/// - `error`: the failure indicator, only the boolean `false` means success.
/// - `message`: a human readable description of the outcome.
/// - the payload field named after the operation (`clusters`, `status`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    body: Map<String, Value>,
}

impl Envelope {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Decodes a response body. Anything but a JSON object is rejected.
    pub fn from_json(text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(body)) => Some(Self::new(body)),
            _ => None,
        }
    }

    /// True only when `error` is present and is the boolean `false`.
    pub fn is_success(&self) -> bool {
        matches!(self.body.get(ERROR), Some(Value::Bool(false)))
    }

    pub fn error(&self) -> Option<&Value> {
        self.body.get(ERROR)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get(MESSAGE).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Takes the payload field out of the envelope and decodes it.
    pub fn into_field<T: DeserializeOwned>(mut self, field: &str) -> Result<T, serde_json::Error> {
        let value = self.body.remove(field).unwrap_or(Value::Null);
        serde_json::from_value(value)
    }
}
