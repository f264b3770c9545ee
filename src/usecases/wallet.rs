//! Wallet charge use cases.
//!
//! Initiation happens server side with the merchant's secret key; the
//! follow-up calls run with the access token returned to the device.

use async_trait::async_trait;
use validator::Validate;

use super::{UseCase, authorize};
use crate::dto::wallet::{
    CaptureWalletChargeRequest, DeclineWalletChargeRequest, InitiateWalletChargeRequest,
    WalletCallbackRequest,
};
use crate::error::{SdkError, SdkResult};
use crate::external::{CredentialKind, Credentials};
use crate::models::{WalletCallback, WalletCharge, WalletChargeToken};
use crate::repositories::WalletRepository;

const SECRET_KEY_ONLY: &[CredentialKind] = &[CredentialKind::SecretKey];
const ACCESS_TOKEN_ONLY: &[CredentialKind] = &[CredentialKind::AccessToken];

#[derive(Clone)]
pub struct InitiateWalletChargeUseCase {
    repo: WalletRepository,
}

impl InitiateWalletChargeUseCase {
    pub fn new(repo: WalletRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for InitiateWalletChargeUseCase {
    type Params = (Credentials, InitiateWalletChargeRequest);
    type Output = WalletChargeToken;

    fn name(&self) -> &'static str {
        "initiate_wallet_charge"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<WalletChargeToken> {
        authorize(&credentials, SECRET_KEY_ONLY)?;
        request.validate()?;
        self.repo.initiate_charge(credentials, request).await
    }
}

#[derive(Clone)]
pub struct CaptureWalletChargeUseCase {
    repo: WalletRepository,
}

impl CaptureWalletChargeUseCase {
    pub fn new(repo: WalletRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CaptureWalletChargeUseCase {
    type Params = (Credentials, CaptureWalletChargeRequest);
    type Output = WalletCharge;

    fn name(&self) -> &'static str {
        "capture_wallet_charge"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<WalletCharge> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        request.validate()?;
        if !request.has_reference() {
            return Err(SdkError::validation(
                "id",
                "one of id, payment_method_id or ref_token is required",
            ));
        }
        self.repo.capture_charge(credentials, request).await
    }
}

#[derive(Clone)]
pub struct DeclineWalletChargeUseCase {
    repo: WalletRepository,
}

impl DeclineWalletChargeUseCase {
    pub fn new(repo: WalletRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for DeclineWalletChargeUseCase {
    type Params = (Credentials, DeclineWalletChargeRequest);
    type Output = WalletCharge;

    fn name(&self) -> &'static str {
        "decline_wallet_charge"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<WalletCharge> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        request.validate()?;
        self.repo.decline_charge(credentials, request).await
    }
}

#[derive(Clone)]
pub struct WalletCallbackUseCase {
    repo: WalletRepository,
}

impl WalletCallbackUseCase {
    pub fn new(repo: WalletRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for WalletCallbackUseCase {
    type Params = (Credentials, WalletCallbackRequest);
    type Output = WalletCallback;

    fn name(&self) -> &'static str {
        "wallet_callback"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<WalletCallback> {
        authorize(&credentials, ACCESS_TOKEN_ONLY)?;
        request.validate()?;
        self.repo.fetch_callback(credentials, request).await
    }
}
