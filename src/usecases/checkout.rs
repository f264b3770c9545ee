use async_trait::async_trait;
use validator::Validate;

use super::{ANY_CREDENTIAL, UseCase, authorize};
use crate::dto::checkout::CheckoutIntentRequest;
use crate::error::SdkResult;
use crate::external::Credentials;
use crate::models::CheckoutIntent;
use crate::repositories::CheckoutRepository;

#[derive(Clone)]
pub struct CreateCheckoutIntentUseCase {
    repo: CheckoutRepository,
}

impl CreateCheckoutIntentUseCase {
    pub fn new(repo: CheckoutRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for CreateCheckoutIntentUseCase {
    type Params = (Credentials, CheckoutIntentRequest);
    type Output = CheckoutIntent;

    fn name(&self) -> &'static str {
        "create_checkout_intent"
    }

    async fn run(&self, (credentials, request): Self::Params) -> SdkResult<CheckoutIntent> {
        authorize(&credentials, ANY_CREDENTIAL)?;
        request.validate()?;
        self.repo.create_intent(credentials, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::external::transport::mock::MockTransport;
    use crate::usecases::test_support::use_cases_with;
    use bigdecimal::BigDecimal;

    fn intent(currency: &str) -> CheckoutIntentRequest {
        CheckoutIntentRequest {
            amount: BigDecimal::from(40),
            currency: currency.into(),
            reference: Some("basket-3".into()),
            template_id: None,
            customer: None,
        }
    }

    #[tokio::test]
    async fn test_intent_is_created() {
        let mock = MockTransport::json(
            201,
            r#"{"resource":{"type":"checkout","data":{"_id":"int_1","token":"itok","status":"pending","amount":40,"currency":"AUD"}}}"#,
        );
        let use_cases = use_cases_with(&mock);

        let created = use_cases
            .create_checkout_intent
            .call((Credentials::SecretKey("sk".into()), intent("AUD")))
            .await
            .unwrap();

        assert_eq!(created.intent_id, "int_1");
        assert_eq!(created.token, "itok");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_bad_currency_is_rejected() {
        let mock = MockTransport::json(201, "{}");
        let use_cases = use_cases_with(&mock);

        let err = use_cases
            .create_checkout_intent
            .call((Credentials::SecretKey("sk".into()), intent("AUDD")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(mock.call_count(), 0);
    }
}
