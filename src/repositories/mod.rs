//! Repository layer: one gateway call per operation, mapped to a domain model.
//!
//! Repositories never catch or reshape errors; whatever the transport or
//! the decoder reports is handed to the caller as is.

mod account_repo;
mod card_repo;
mod charge_repo;
mod checkout_repo;
mod customer_repo;
mod gateway;
mod threeds_repo;
mod vault_repo;
mod wallet_repo;

pub use account_repo::AccountRepository;
pub use card_repo::CardRepository;
pub use charge_repo::ChargeRepository;
pub use checkout_repo::CheckoutRepository;
pub use customer_repo::CustomerRepository;
pub use gateway::Gateway;
pub use threeds_repo::ThreeDsRepository;
pub use vault_repo::VaultRepository;
pub use wallet_repo::WalletRepository;

use crate::dispatch::Dispatchers;
use crate::external::GatewayClient;

/// Aggregates all repositories for convenient access.
///
/// Every repository shares the same client and dispatchers; cloning is
/// cheap since both are reference counted underneath.
#[derive(Clone)]
pub struct Repositories {
    pub cards: CardRepository,
    pub vaults: VaultRepository,
    pub wallet: WalletRepository,
    pub charges: ChargeRepository,
    pub three_ds: ThreeDsRepository,
    pub checkout: CheckoutRepository,
    pub customers: CustomerRepository,
    pub accounts: AccountRepository,
}

impl Repositories {
    pub fn new(client: GatewayClient, dispatchers: Dispatchers) -> Self {
        let gateway = Gateway::new(client, dispatchers);
        Self {
            cards: CardRepository::new(gateway.clone()),
            vaults: VaultRepository::new(gateway.clone()),
            wallet: WalletRepository::new(gateway.clone()),
            charges: ChargeRepository::new(gateway.clone()),
            three_ds: ThreeDsRepository::new(gateway.clone()),
            checkout: CheckoutRepository::new(gateway.clone()),
            customers: CustomerRepository::new(gateway.clone()),
            accounts: AccountRepository::new(gateway),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::Gateway;
    use crate::dispatch::Dispatchers;
    use crate::external::GatewayClient;
    use crate::external::transport::mock::MockTransport;

    pub fn gateway_with(mock: &Arc<MockTransport>) -> Gateway {
        Gateway::new(
            GatewayClient::new(mock.clone()),
            Dispatchers::current().unwrap(),
        )
    }
}
