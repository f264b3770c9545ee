use super::gateway::Gateway;
use crate::dto::customer::{CreateCustomerRequest, CustomerData};
use crate::error::SdkResult;
use crate::external::{Credentials, Endpoint};
use crate::models::Customer;

#[derive(Clone)]
pub struct CustomerRepository {
    gateway: Gateway,
}

impl CustomerRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_customer(
        &self,
        credentials: Credentials,
        request: CreateCustomerRequest,
    ) -> SdkResult<Customer> {
        self.gateway
            .call::<_, CustomerData>(Endpoint::CreateCustomer, credentials, Some(request))
            .await
            .map(Customer::from)
    }
}
