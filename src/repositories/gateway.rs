use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dispatch::Dispatchers;
use crate::dto::Envelope;
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint, GatewayClient};

/// Client plus the dispatchers it must run on. Shared by every repository.
#[derive(Clone)]
pub struct Gateway {
    client: GatewayClient,
    dispatchers: Dispatchers,
}

impl Gateway {
    pub fn new(client: GatewayClient, dispatchers: Dispatchers) -> Self {
        Self {
            client,
            dispatchers,
        }
    }

    /// Runs one gateway call on the IO context and returns the raw envelope.
    pub async fn call<B, D>(
        &self,
        endpoint: Endpoint,
        credentials: Credentials,
        body: Option<B>,
    ) -> SdkResult<Envelope<D>>
    where
        B: Serialize + Send + Sync + 'static,
        D: DeserializeOwned + Send + 'static,
    {
        let label = endpoint.to_string();
        tracing::debug!(endpoint = %label, credential = %credentials.kind(), "Dispatching gateway call");

        let client = self.client.clone();
        let envelope: Envelope<D> = self
            .dispatchers
            .io(async move { client.execute(endpoint, credentials, body.as_ref()).await })
            .await?;

        if !envelope.has_data() {
            tracing::warn!(
                endpoint = %label,
                status = envelope.status,
                "Gateway response carried no data, mapping to defaults"
            );
        }
        Ok(envelope)
    }
}
