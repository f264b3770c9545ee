use async_trait::async_trait;
use validator::Validate;

use super::{ANY_CREDENTIAL, UseCase, authorize};
use crate::dto::vault::{CardVaultTokenRequest, TokenVaultRequest};
use crate::error::SdkResult;
use crate::external::Credentials;
use crate::models::VaultToken;
use crate::repositories::VaultRepository;

/// Stores card details in the vault and returns a reusable vault token.
#[derive(Clone)]
pub struct CreateCardVaultTokenUseCase {
    repo: VaultRepository,
}

impl CreateCardVaultTokenUseCase {
    pub fn new(repo: VaultRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateCardVaultTokenUseCase {
    type Params = (Credentials, CardVaultTokenRequest);
    type Output = VaultToken;

    fn name(&self) -> &'static str {
        "create_card_vault_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<VaultToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.create_card_vault_token(credentials, request).await
    }
}

/// Exchanges a one-time token for a vault token.
#[derive(Clone)]
pub struct CreateVaultTokenFromTokenUseCase {
    repo: VaultRepository,
}

impl CreateVaultTokenFromTokenUseCase {
    pub fn new(repo: VaultRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateVaultTokenFromTokenUseCase {
    type Params = (Credentials, TokenVaultRequest);
    type Output = VaultToken;

    fn name(&self) -> &'static str {
        "create_vault_token_from_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<VaultToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo
            .create_vault_token_from_token(credentials, request)
            .await
    }
}
