//! Wallet account linking.

use super::gateway::Gateway;
use crate::dto::account::{
    PaymentTokenData, PaymentTokenRequest, SetupTokenData, SetupTokenRequest, WalletClientIdData,
};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::{LinkedPaymentToken, SetupToken, WalletClientId};

#[derive(Clone)]
pub struct AccountRepository {
    gateway: Gateway,
}

impl AccountRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_setup_token(
        &self,
        credentials: Credentials,
        request: SetupTokenRequest,
    ) -> SdkResult<SetupToken> {
        self.gateway
            .call::<_, SetupTokenData>(Endpoint::CreateSetupToken, credentials, Some(request))
            .await
            .map(SetupToken::from)
    }

    pub async fn get_wallet_client_id(
        &self,
        credentials: Credentials,
        gateway_id: String,
    ) -> SdkResult<WalletClientId> {
        self.gateway
            .call::<(), WalletClientIdData>(
                Endpoint::GetWalletClientId { gateway_id },
                credentials,
                None,
            )
            .await
            .map(WalletClientId::from)
    }

    pub async fn create_payment_token(
        &self,
        credentials: Credentials,
        request: PaymentTokenRequest,
    ) -> SdkResult<LinkedPaymentToken> {
        self.gateway
            .call::<_, PaymentTokenData>(Endpoint::CreatePaymentToken, credentials, Some(request))
            .await
            .map(LinkedPaymentToken::from)
    }
}
