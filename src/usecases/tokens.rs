use async_trait::async_trait;
use validator::Validate;

use super::{ANY_CREDENTIAL, UseCase, authorize};
use crate::dto::card::{TokeniseCardRequest, TokeniseGiftCardRequest};
use crate::error::SdkResult;
use crate::external::Credentials;
use crate::models::CardToken;
use crate::repositories::CardRepository;

/// Turns raw card details into a one-time token.
#[derive(Clone)]
pub struct TokeniseCardUseCase {
    repo: CardRepository,
}

impl TokeniseCardUseCase {
    pub fn new(repo: CardRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for TokeniseCardUseCase {
    type Params = (Credentials, TokeniseCardRequest);
    type Output = CardToken;

    fn name(&self) -> &'static str {
        "tokenise_card"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<CardToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.tokenise_card(credentials, request).await
    }
}

#[derive(Clone)]
pub struct TokeniseGiftCardUseCase {
    repo: CardRepository,
}

impl TokeniseGiftCardUseCase {
    pub fn new(repo: CardRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for TokeniseGiftCardUseCase {
    type Params = (Credentials, TokeniseGiftCardRequest);
    type Output = CardToken;

    fn name(&self) -> &'static str {
        "tokenise_gift_card"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<CardToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.tokenise_gift_card(credentials, request).await
    }
}
