//! Process-wide SDK handle.
//!
//! Wires the transport, repositories and use cases together once at start
//! up. Everything inside is reference counted, so clones are cheap and can
//! be handed to every UI-state holder.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::dispatch::Dispatchers;
use crate::error::SdkResult;
use crate::external::{GatewayClient, GatewayTransport};
use crate::repositories::Repositories;
use crate::usecases::UseCases;

#[derive(Clone)]
pub struct PaymentSdk {
    /// All business actions
    pub use_cases: UseCases,
    /// Execution contexts the SDK spawns onto
    pub dispatchers: Dispatchers,
}

impl PaymentSdk {
    /// Builds the SDK against the configured gateway over HTTP.
    pub fn new(config: &GatewayConfig, dispatchers: Dispatchers) -> SdkResult<Self> {
        let client = GatewayClient::from_config(config)?;
        tracing::info!(
            base_url = %config.resolved_base_url(),
            mode = ?config.mode,
            "Payment SDK initialized"
        );
        Ok(Self::from_client(client, dispatchers))
    }

    /// Builds the SDK over any transport, e.g. a stub in tests.
    pub fn with_transport(transport: Arc<dyn GatewayTransport>, dispatchers: Dispatchers) -> Self {
        Self::from_client(GatewayClient::new(transport), dispatchers)
    }

    fn from_client(client: GatewayClient, dispatchers: Dispatchers) -> Self {
        let repos = Repositories::new(client, dispatchers.clone());
        Self {
            use_cases: UseCases::new(repos),
            dispatchers,
        }
    }
}
