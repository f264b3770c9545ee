use async_trait::async_trait;
use validator::Validate;

use super::{UseCase, authorize};
use crate::dto::customer::CreateCustomerRequest;
use crate::error::SdkResult;
use crate::external::{CredentialKind, Credentials};
use crate::models::Customer;
use crate::repositories::CustomerRepository;

#[derive(Clone)]
pub struct CreateCustomerUseCase {
    repo: CustomerRepository,
}

impl CreateCustomerUseCase {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateCustomerUseCase {
    type Params = (Credentials, CreateCustomerRequest);
    type Output = Customer;

    fn name(&self) -> &'static str {
        "create_customer"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<Customer> {
        authorize(&credentials, &[CredentialKind::SecretKey])?;
        request.validate()?;
        self.repo.create_customer(credentials, request).await
    }
}
