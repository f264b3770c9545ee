//! Direct charges.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{lenient_string, not_blank, positive_amount};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateChargeRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: BigDecimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter ISO 4217 code"))]
    pub currency: String,
    /// One-time or vault token identifying the payment source
    #[validate(custom(function = "not_blank"))]
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Reference must be at most 100 characters"))]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capture: bool,
}

/// Charge record as returned by charge and wallet endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChargeData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Same identifier under the gateway's `_id` spelling; `id` wins when both are sent
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<BigDecimal>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}
