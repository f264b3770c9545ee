use super::gateway::Gateway;
use crate::dto::charge::{ChargeData, CreateChargeRequest};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::ChargeDetails;

#[derive(Clone)]
pub struct ChargeRepository {
    gateway: Gateway,
}

impl ChargeRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_charge(
        &self,
        credentials: Credentials,
        request: CreateChargeRequest,
    ) -> SdkResult<ChargeDetails> {
        self.gateway
            .call::<_, ChargeData>(Endpoint::CreateCharge, credentials, Some(request))
            .await
            .map(ChargeDetails::from)
    }

    pub async fn get_charge(
        &self,
        credentials: Credentials,
        charge_id: String,
    ) -> SdkResult<ChargeDetails> {
        self.gateway
            .call::<(), ChargeData>(Endpoint::GetCharge { charge_id }, credentials, None)
            .await
            .map(ChargeDetails::from)
    }
}
