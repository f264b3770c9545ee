//! Linking a wallet account to the gateway.

use async_trait::async_trait;
use validator::Validate;

use super::{UseCase, authorize, path_param};
use crate::dto::account::{PaymentTokenRequest, SetupTokenRequest};
use crate::error::SdkResult;
use crate::external::{CredentialKind, Credentials};
use crate::models::{LinkedPaymentToken, SetupToken, WalletClientId};
use crate::repositories::AccountRepository;

const ACCESS_TOKEN_ONLY: &[CredentialKind] = &[CredentialKind::AccessToken];

#[derive(Clone)]
pub struct CreateSetupTokenUseCase {
    repo: AccountRepository,
}

impl CreateSetupTokenUseCase {
    pub fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateSetupTokenUseCase {
    type Params = (Credentials, SetupTokenRequest);
    type Output = SetupToken;

    fn name(&self) -> &'static str {
        "create_setup_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<SetupToken> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        request.validate()?;
        self.repo.create_setup_token(credentials, request).await
    }
}

#[derive(Clone)]
pub struct GetWalletClientIdUseCase {
    repo: AccountRepository,
}

impl GetWalletClientIdUseCase {
    pub fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for GetWalletClientIdUseCase {
    /// Credentials and the gateway id.
    type Params = (Credentials, String);
    type Output = WalletClientId;

    fn name(&self) -> &'static str {
        "get_wallet_client_id"
    }

    async fn run(&self, (credentials, gateway_id): Self::Params) -> SdkResult<WalletClientId> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        path_param("gateway_id", &gateway_id)?;
        self.repo.get_wallet_client_id(credentials, gateway_id).await
    }
}

#[derive(Clone)]
pub struct CreatePaymentTokenUseCase {
    repo: AccountRepository,
}

impl CreatePaymentTokenUseCase {
    pub fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreatePaymentTokenUseCase {
    type Params = (Credentials, PaymentTokenRequest);
    type Output = LinkedPaymentToken;

    fn name(&self) -> &'static str {
        "create_payment_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<LinkedPaymentToken> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        request.validate()?;
        self.repo.create_payment_token(credentials, request).await
    }
}
