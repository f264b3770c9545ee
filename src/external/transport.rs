//! The seam between the SDK core and whatever actually speaks HTTP.

use async_trait::async_trait;
use uuid::Uuid;

use super::credentials::Credentials;
use super::endpoints::Endpoint;
use crate::error::SdkResult;

/// One outgoing gateway call.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub endpoint: Endpoint,
    pub credentials: Credentials,
    /// JSON-encoded request body, if the endpoint takes one
    pub body: Option<String>,
    pub request_id: Uuid,
}

/// Raw gateway answer, before any status or envelope handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request against the gateway.
///
/// Implementations fail only when no HTTP response was obtained; any status
/// code, including errors, is returned as a [`TransportResponse`].
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> SdkResult<TransportResponse>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = TransportResponse {
            status: 201,
            body: String::new(),
        };
        let redirect = TransportResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
