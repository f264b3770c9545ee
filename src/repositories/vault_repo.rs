use super::gateway::Gateway;
use crate::dto::vault::{CardVaultTokenRequest, TokenVaultRequest, VaultTokenData};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::VaultToken;

#[derive(Clone)]
pub struct VaultRepository {
    gateway: Gateway,
}

impl VaultRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_card_vault_token(
        &self,
        credentials: Credentials,
        request: CardVaultTokenRequest,
    ) -> SdkResult<VaultToken> {
        self.gateway
            .call::<_, VaultTokenData>(Endpoint::CreateVaultToken, credentials, Some(request))
            .await
            .map(VaultToken::from)
    }

    pub async fn create_vault_token_from_token(
        &self,
        credentials: Credentials,
        request: TokenVaultRequest,
    ) -> SdkResult<VaultToken> {
        self.gateway
            .call::<_, VaultTokenData>(Endpoint::CreateVaultToken, credentials, Some(request))
            .await
            .map(VaultToken::from)
    }
}
