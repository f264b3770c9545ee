//! Wallet charge lifecycle: initiate, capture, decline, callback.

use super::gateway::Gateway;
use crate::dto::charge::ChargeData;
use crate::dto::wallet::{
    CaptureWalletChargeRequest, DeclineWalletChargeRequest, InitiateWalletChargeData,
    InitiateWalletChargeRequest, WalletCallbackData, WalletCallbackRequest,
};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::{WalletCallback, WalletCharge, WalletChargeToken};

#[derive(Clone)]
pub struct WalletRepository {
    gateway: Gateway,
}

impl WalletRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn initiate_charge(
        &self,
        credentials: Credentials,
        request: InitiateWalletChargeRequest,
    ) -> SdkResult<WalletChargeToken> {
        self.gateway
            .call::<_, InitiateWalletChargeData>(
                Endpoint::InitiateWalletCharge,
                credentials,
                Some(request),
            )
            .await
            .map(WalletChargeToken::from)
    }

    pub async fn capture_charge(
        &self,
        credentials: Credentials,
        request: CaptureWalletChargeRequest,
    ) -> SdkResult<WalletCharge> {
        self.gateway
            .call::<_, ChargeData>(Endpoint::CaptureWalletCharge, credentials, Some(request))
            .await
            .map(WalletCharge::from)
    }

    pub async fn decline_charge(
        &self,
        credentials: Credentials,
        request: DeclineWalletChargeRequest,
    ) -> SdkResult<WalletCharge> {
        self.gateway
            .call::<_, ChargeData>(Endpoint::DeclineWalletCharge, credentials, Some(request))
            .await
            .map(WalletCharge::from)
    }

    pub async fn fetch_callback(
        &self,
        credentials: Credentials,
        request: WalletCallbackRequest,
    ) -> SdkResult<WalletCallback> {
        self.gateway
            .call::<_, WalletCallbackData>(Endpoint::WalletCallback, credentials, Some(request))
            .await
            .map(WalletCallback::from)
    }
}
