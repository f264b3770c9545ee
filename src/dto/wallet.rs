//! Wallet charges (Google Pay, PayPal, Afterpay and friends).

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::charge::ChargeData;
use super::rules::{lenient_string, not_blank, positive_amount};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct WalletPaymentSource {
    #[validate(custom(function = "not_blank"))]
    pub gateway_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct WalletCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(nested)]
    pub payment_source: WalletPaymentSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct WalletMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Success URL must be a valid URL"))]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Error URL must be a valid URL"))]
    pub error_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct InitiateWalletChargeRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: BigDecimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter ISO 4217 code"))]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[validate(nested)]
    pub customer: WalletCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub meta: Option<WalletMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitiateWalletChargeData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,
    #[serde(default)]
    pub charge: Option<ChargeData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CapturePaymentSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number_last4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CaptureCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub payment_source: Option<CapturePaymentSource>,
}

/// Body of a wallet capture. At least one of `id`, `payment_method_id` or
/// `ref_token` identifies the wallet session being captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CaptureWalletChargeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub customer: Option<CaptureCustomer>,
}

impl CaptureWalletChargeRequest {
    pub fn has_reference(&self) -> bool {
        [&self.id, &self.payment_method_id, &self.ref_token]
            .iter()
            .any(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct DeclineWalletChargeRequest {
    #[validate(custom(function = "not_blank"))]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct WalletCallbackRequest {
    #[validate(custom(function = "not_blank"))]
    pub request_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Redirect URL must be a valid URL"))]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WalletCallbackData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ref_id: Option<String>,
    #[serde(rename = "refId", default, deserialize_with = "lenient_string")]
    pub ref_id_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub callback_url: Option<String>,
    #[serde(rename = "callbackUrl", default, deserialize_with = "lenient_string")]
    pub callback_url_camel: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reference_detection() {
        let empty = CaptureWalletChargeRequest::default();
        assert!(!empty.has_reference());

        let blank = CaptureWalletChargeRequest {
            id: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!blank.has_reference());

        let by_ref = CaptureWalletChargeRequest {
            ref_token: Some("ref_1".to_string()),
            ..Default::default()
        };
        assert!(by_ref.has_reference());
    }

    #[test]
    fn test_capture_body_omits_absent_fields() {
        let req = CaptureWalletChargeRequest {
            id: Some("ord_1".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"id": "ord_1"}));
    }

    #[test]
    fn test_callback_data_accepts_camel_case() {
        let data: WalletCallbackData = serde_json::from_str(
            r#"{"id":"cb_1","refId":"r_1","status":"pending","callbackUrl":"https://pay.example/cb"}"#,
        )
        .unwrap();
        assert_eq!(data.ref_id_camel.as_deref(), Some("r_1"));
        assert_eq!(data.callback_url_camel.as_deref(), Some("https://pay.example/cb"));
    }

    #[test]
    fn test_callback_data_with_both_spellings() {
        let data: WalletCallbackData = serde_json::from_str(
            r#"{"ref_id":"r_snake","refId":"r_camel","callback_url":"https://a.example","callbackUrl":"https://b.example"}"#,
        )
        .unwrap();
        assert_eq!(data.ref_id.as_deref(), Some("r_snake"));
        assert_eq!(data.ref_id_camel.as_deref(), Some("r_camel"));
    }

    #[test]
    fn test_initiate_request_validates_nested_customer() {
        let req = InitiateWalletChargeRequest {
            amount: BigDecimal::from(25),
            currency: "AUD".to_string(),
            reference: None,
            customer: WalletCustomer {
                first_name: None,
                last_name: None,
                email: Some("not-an-email".to_string()),
                phone: None,
                payment_source: WalletPaymentSource {
                    gateway_id: "".to_string(),
                    wallet_type: Some("google".to_string()),
                },
            },
            meta: None,
        };
        assert!(req.validate().is_err());
    }
}
