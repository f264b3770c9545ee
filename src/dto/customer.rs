//! Gateway customers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{lenient_string, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CustomerPaymentSource {
    #[validate(custom(function = "not_blank"))]
    pub vault_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CreateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub payment_source: Option<CustomerPaymentSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentSourceData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_scheme: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_number_last4: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vault_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_source: Option<String>,
    #[serde(default)]
    pub payment_sources: Option<Vec<PaymentSourceData>>,
}
