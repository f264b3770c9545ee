//! Card and gift card tokenisation.

use super::gateway::Gateway;
use crate::dto::card::{CardTokenData, TokeniseCardRequest, TokeniseGiftCardRequest};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::CardToken;

#[derive(Clone)]
pub struct CardRepository {
    gateway: Gateway,
}

impl CardRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn tokenise_card(
        &self,
        credentials: Credentials,
        request: TokeniseCardRequest,
    ) -> SdkResult<CardToken> {
        self.gateway
            .call::<_, CardTokenData>(Endpoint::TokenisePaymentSource, credentials, Some(request))
            .await
            .map(CardToken::from)
    }

    pub async fn tokenise_gift_card(
        &self,
        credentials: Credentials,
        request: TokeniseGiftCardRequest,
    ) -> SdkResult<CardToken> {
        self.gateway
            .call::<_, CardTokenData>(Endpoint::TokenisePaymentSource, credentials, Some(request))
            .await
            .map(CardToken::from)
    }
}
