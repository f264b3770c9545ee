//! Hosted checkout intents.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{lenient_string, positive_amount};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CheckoutCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CheckoutIntentRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: BigDecimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter ISO 4217 code"))]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Reference must be at most 100 characters"))]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub customer: Option<CheckoutCustomer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutIntentData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<BigDecimal>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reference: Option<String>,
}
