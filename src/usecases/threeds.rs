use async_trait::async_trait;
use validator::Validate;

use super::{ANY_CREDENTIAL, UseCase, authorize};
use crate::dto::threeds::{Integrated3dsRequest, Standalone3dsRequest};
use crate::error::SdkResult;
use crate::external::Credentials;
use crate::models::ThreeDsToken;
use crate::repositories::ThreeDsRepository;

/// 3DS authentication bound to a pending charge.
#[derive(Clone)]
pub struct CreateIntegrated3dsTokenUseCase {
    repo: ThreeDsRepository,
}

impl CreateIntegrated3dsTokenUseCase {
    pub fn new(repo: ThreeDsRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateIntegrated3dsTokenUseCase {
    type Params = (Credentials, Integrated3dsRequest);
    type Output = ThreeDsToken;

    fn name(&self) -> &'static str {
        "create_integrated_3ds_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<ThreeDsToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.create_integrated_token(credentials, request).await
    }
}

/// 3DS authentication against a vaulted source, without a charge.
#[derive(Clone)]
pub struct CreateStandalone3dsTokenUseCase {
    repo: ThreeDsRepository,
}

impl CreateStandalone3dsTokenUseCase {
    pub fn new(repo: ThreeDsRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateStandalone3dsTokenUseCase {
    type Params = (Credentials, Standalone3dsRequest);
    type Output = ThreeDsToken;

    fn name(&self) -> &'static str {
        "create_standalone_3ds_token"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<ThreeDsToken> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.create_standalone_token(credentials, request).await
    }
}
