use serde::{Deserialize, Serialize};

use super::rules::null_as_default;

/// Top-level gateway response: `{ "resource": { "type", "data" }, "status" }`.
///
/// Every part may be absent or `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: Resource<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Resource<T> {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            kind: String::new(),
            data: None,
        }
    }
}

impl<T> Envelope<T> {
    pub fn new(kind: impl Into<String>, data: Option<T>, status: u16) -> Self {
        Self {
            resource: Resource {
                kind: kind.into(),
                data,
            },
            status,
        }
    }

    pub fn has_data(&self) -> bool {
        self.resource.data.is_some()
    }
}

/// Body the gateway sends alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
    #[serde(default)]
    pub error: Option<GatewayErrorBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
