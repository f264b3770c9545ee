use super::gateway::Gateway;
use crate::dto::checkout::{CheckoutIntentData, CheckoutIntentRequest};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::CheckoutIntent;

#[derive(Clone)]
pub struct CheckoutRepository {
    gateway: Gateway,
}

impl CheckoutRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_intent(
        &self,
        credentials: Credentials,
        request: CheckoutIntentRequest,
    ) -> SdkResult<CheckoutIntent> {
        self.gateway
            .call::<_, CheckoutIntentData>(Endpoint::CreateCheckoutIntent, credentials, Some(request))
            .await
            .map(CheckoutIntent::from)
    }
}
