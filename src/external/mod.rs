//! Everything that talks to the payment gateway over the network.

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod transport;

pub use client::{GatewayClient, HttpTransport};
pub use credentials::{CredentialKind, Credentials};
pub use endpoints::Endpoint;
pub use transport::{GatewayTransport, TransportRequest, TransportResponse};
