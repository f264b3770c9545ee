use async_trait::async_trait;
use validator::Validate;

use super::{UseCase, authorize, path_param};
use crate::dto::charge::CreateChargeRequest;
use crate::error::SdkResult;
use crate::external::{CredentialKind, Credentials};
use crate::models::ChargeDetails;
use crate::repositories::ChargeRepository;

const SECRET_KEY_ONLY: &[CredentialKind] = &[CredentialKind::SecretKey];

#[derive(Clone)]
pub struct CreateChargeUseCase {
    repo: ChargeRepository,
}

impl CreateChargeUseCase {
    pub fn new(repo: ChargeRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateChargeUseCase {
    type Params = (Credentials, CreateChargeRequest);
    type Output = ChargeDetails;

    fn name(&self) -> &'static str {
        "create_charge"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<ChargeDetails> {
        authorize(&credentials, SECRET_KEY_ONLY)?;
        request.validate()?;
        self.repo.create_charge(credentials, request).await
    }
}

/// Looks up a single charge by id.
#[derive(Clone)]
pub struct GetChargeUseCase {
    repo: ChargeRepository,
}

impl GetChargeUseCase {
    pub fn new(repo: ChargeRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for GetChargeUseCase {
    type Params = (Credentials, String);
    type Output = ChargeDetails;

    fn name(&self) -> &'static str {
        "get_charge"
    }

    async fn run(&self, (credentials, charge_id): Self::Params) -> SdkResult<ChargeDetails> {
        authorize(&credentials, SECRET_KEY_ONLY)?;
        path_param("charge_id", &charge_id)?;
        self.repo.get_charge(credentials, charge_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::external::transport::mock::MockTransport;
    use crate::usecases::test_support::use_cases_with;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_charge_id_with_slash_is_rejected() {
        let mock = MockTransport::json(200, "{}");
        let use_cases = use_cases_with(&mock);

        let err = use_cases
            .get_charge
            .call((Credentials::SecretKey("sk".into()), "../customers".into()))
            .await
            .unwrap_err();

        match err {
            SdkError::Validation { field, .. } => assert_eq!(field, "charge_id"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_charge_sends_decimal_amount() {
        let mock = MockTransport::json(
            201,
            r#"{"resource":{"type":"charge","data":{"_id":"ch_2","status":"complete","amount":"10.50","currency":"AUD"}}}"#,
        );
        let use_cases = use_cases_with(&mock);

        let charge = use_cases
            .create_charge
            .call((
                Credentials::SecretKey("sk".into()),
                CreateChargeRequest {
                    amount: BigDecimal::from_str("10.50").unwrap(),
                    currency: "AUD".into(),
                    token: "ott_1".into(),
                    reference: Some("order-7".into()),
                    description: None,
                    capture: true,
                },
            ))
            .await
            .unwrap();

        assert_eq!(charge.charge_id, "ch_2");
        assert_eq!(charge.amount, Some(BigDecimal::from_str("10.50").unwrap()));
        let body = mock.last_call().unwrap().body.unwrap();
        assert_eq!(body["token"], "ott_1");
        assert_eq!(body["capture"], true);
    }
}
