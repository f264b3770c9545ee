use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::credentials::Credentials;
use super::endpoints::Endpoint;
use super::transport::{GatewayTransport, TransportRequest, TransportResponse};
use crate::config::GatewayConfig;
use crate::dto::ErrorEnvelope;
use crate::error::{SdkError, SdkResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed [`GatewayTransport`].
///
/// Owns the connection pool. Timeouts come from configuration; the core has
/// no timeout logic of its own.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> SdkResult<Self> {
        let client = reqwest::Client::builder()
            // Timeouts
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            // Connection pooling
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            // Enable compression (gzip, deflate, brotli, zstd)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .zstd(true)
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| SdkError::configuration("gateway", format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: &Endpoint) -> SdkResult<reqwest::Url> {
        let raw = format!("{}{}", self.base_url, endpoint.path());
        reqwest::Url::parse(&raw)
            .map_err(|e| SdkError::configuration("gateway.base_url", format!("invalid URL {raw}: {e}")))
    }

    fn transport_error(endpoint: &Endpoint, what: &str, e: reqwest::Error) -> SdkError {
        SdkError::Transport {
            endpoint: endpoint.to_string(),
            message: format!("{}: {}", what, e),
            source: Some(e.into()),
        }
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> SdkResult<TransportResponse> {
        let url = self.url_for(&request.endpoint)?;

        let mut credential = HeaderValue::from_str(request.credentials.value()).map_err(|_| {
            SdkError::validation(
                request.credentials.kind().as_str(),
                "contains characters not allowed in an HTTP header",
            )
        })?;
        credential.set_sensitive(true);

        let mut builder = self
            .client
            .request(request.endpoint.method(), url)
            .header(request.credentials.header_name(), credential)
            .header(REQUEST_ID_HEADER, request.request_id.to_string())
            .header(ACCEPT, "application/json");
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Self::transport_error(&request.endpoint, "request failed", e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Self::transport_error(&request.endpoint, "failed to read body", e))?;

        tracing::debug!(
            endpoint = %request.endpoint,
            request_id = %request.request_id,
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Gateway call completed"
        );

        Ok(TransportResponse { status, body })
    }
}

/// Typed front of a [`GatewayTransport`].
///
/// Encodes the body, tags the call with a request id, turns non-2xx answers
/// into [`SdkError::Http`] and decodes the payload. Cloning is cheap.
#[derive(Clone)]
pub struct GatewayClient {
    transport: Arc<dyn GatewayTransport>,
}

impl GatewayClient {
    pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: &GatewayConfig) -> SdkResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    pub async fn execute<B, R>(
        &self,
        endpoint: Endpoint,
        credentials: Credentials,
        body: Option<&B>,
    ) -> SdkResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|source| SdkError::Serialization { source })?;
        let label = endpoint.to_string();

        let response = self
            .transport
            .send(TransportRequest {
                endpoint,
                credentials,
                body,
                request_id: Uuid::new_v4(),
            })
            .await?;

        if !response.is_success() {
            return Err(http_error(label, response));
        }

        // A 2xx with no body still decodes as an empty envelope.
        let text = if response.body.trim().is_empty() {
            "{}"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(text).map_err(|source| SdkError::Deserialization {
            endpoint: label,
            source,
        })
    }
}

fn http_error(endpoint: String, response: TransportResponse) -> SdkError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(&response.body)
        .ok()
        .and_then(|envelope| envelope.error);

    let (message, code) = match parsed {
        Some(body) => (body.message, body.code),
        None => (None, None),
    };
    let message = message.unwrap_or_else(|| {
        reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unexpected status")
            .to_string()
    });

    SdkError::Http {
        endpoint,
        status: response.status,
        message,
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Envelope;
    use crate::external::transport::mock::MockTransport;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Probe {
        token: String,
    }

    fn creds() -> Credentials {
        Credentials::AccessToken("at_123".to_string())
    }

    #[tokio::test]
    async fn test_execute_decodes_envelope_and_records_call() {
        let mock = MockTransport::json(
            200,
            r#"{"resource":{"type":"token","data":{"token":"abc123"}},"status":200}"#,
        );
        let client = GatewayClient::new(mock.clone());

        let envelope: Envelope<Probe> = client
            .execute(
                Endpoint::TokenisePaymentSource,
                creds(),
                Some(&json!({"card_number": "4111111111111111"})),
            )
            .await
            .unwrap();

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.resource.kind, "token");
        assert_eq!(
            envelope.resource.data,
            Some(Probe {
                token: "abc123".to_string()
            })
        );
        assert_eq!(mock.call_count(), 1);
        let call = mock.last_call().unwrap();
        assert_eq!(call.header, "x-access-token");
        assert_eq!(call.body.unwrap()["card_number"], "4111111111111111");
    }

    #[tokio::test]
    async fn test_non_success_status_uses_gateway_error_body() {
        let mock = MockTransport::json(
            400,
            r#"{"status":400,"error":{"message":"Card number invalid","code":"invalid_card"}}"#,
        );
        let client = GatewayClient::new(mock);

        let err = client
            .execute::<(), Envelope<Probe>>(Endpoint::CreateCharge, creds(), None)
            .await
            .unwrap_err();

        match err {
            SdkError::Http {
                endpoint,
                status,
                message,
                code,
            } => {
                assert_eq!(endpoint, "POST /v1/charges");
                assert_eq!(status, 400);
                assert_eq!(message, "Card number invalid");
                assert_eq!(code.as_deref(), Some("invalid_card"));
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_without_body_falls_back_to_reason() {
        let client = GatewayClient::new(MockTransport::json(503, "upstream down"));
        let err = client
            .execute::<(), Envelope<Probe>>(Endpoint::CreateCustomer, creds(), None)
            .await
            .unwrap_err();
        match err {
            SdkError::Http { message, code, .. } => {
                assert_eq!(message, "Service Unavailable");
                assert!(code.is_none());
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_error() {
        let client = GatewayClient::new(MockTransport::json(200, "{not json"));
        let err = client
            .execute::<(), Envelope<Probe>>(Endpoint::CreateCheckoutIntent, creds(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Deserialization { .. }));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_envelope() {
        let client = GatewayClient::new(MockTransport::json(204, ""));
        let envelope: Envelope<Probe> = client
            .execute::<(), _>(Endpoint::DeclineWalletCharge, creds(), None)
            .await
            .unwrap();
        assert!(envelope.resource.data.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let mock = MockTransport::refusing();
        let client = GatewayClient::new(mock.clone());
        let err = client
            .execute::<(), Envelope<Probe>>(Endpoint::CreateVaultToken, creds(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport { .. }));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_http_transport_connection_refused() {
        // Grab a free port and close it again so nothing is listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = GatewayConfig {
            base_url: Some(format!("http://127.0.0.1:{}", port)),
            connect_timeout: 2,
            request_timeout: 5,
            ..GatewayConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();

        let err = transport
            .send(TransportRequest {
                endpoint: Endpoint::CaptureWalletCharge,
                credentials: creds(),
                body: Some("{}".to_string()),
                request_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        match err {
            SdkError::Transport { endpoint, .. } => {
                assert_eq!(endpoint, "POST /v1/charges/wallet/capture");
            }
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_transport_rejects_header_unsafe_credentials() {
        let transport = HttpTransport::new(&GatewayConfig::default()).unwrap();
        let err = transport
            .send(TransportRequest {
                endpoint: Endpoint::CreateCustomer,
                credentials: Credentials::SecretKey("bad\nvalue".to_string()),
                body: None,
                request_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation { .. }));
    }
}
