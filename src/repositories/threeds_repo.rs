//! 3DS token creation, integrated with a charge or standalone.

use super::gateway::Gateway;
use crate::dto::threeds::{Integrated3dsRequest, Standalone3dsRequest, ThreeDsData};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::ThreeDsToken;

#[derive(Clone)]
pub struct ThreeDsRepository {
    gateway: Gateway,
}

impl ThreeDsRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_integrated_token(
        &self,
        credentials: Credentials,
        request: Integrated3dsRequest,
    ) -> SdkResult<ThreeDsToken> {
        self.gateway
            .call::<_, ThreeDsData>(Endpoint::CreateIntegrated3ds, credentials, Some(request))
            .await
            .map(ThreeDsToken::from)
    }

    pub async fn create_standalone_token(
        &self,
        credentials: Credentials,
        request: Standalone3dsRequest,
    ) -> SdkResult<ThreeDsToken> {
        self.gateway
            .call::<_, ThreeDsData>(Endpoint::CreateStandalone3ds, credentials, Some(request))
            .await
            .map(ThreeDsToken::from)
    }
}
