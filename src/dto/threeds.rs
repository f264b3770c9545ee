//! 3-D Secure challenge tokens.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{lenient_string, not_blank, positive_amount};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct ThreeDsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct ThreeDsCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// 3DS as part of a charge the gateway will complete afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Integrated3dsRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: BigDecimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter ISO 4217 code"))]
    pub currency: String,
    /// One-time card token
    #[validate(custom(function = "not_blank"))]
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub customer: Option<ThreeDsCustomer>,
    #[serde(rename = "_3ds", skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDsOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct VaultSourceRef {
    #[validate(custom(function = "not_blank"))]
    pub vault_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct StandaloneCustomer {
    #[validate(nested)]
    pub payment_source: VaultSourceRef,
}

/// 3DS authentication only; no charge is created.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Standalone3dsRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: BigDecimal,
    #[validate(length(equal = 3, message = "Currency must be a three-letter ISO 4217 code"))]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[validate(nested)]
    pub customer: StandaloneCustomer,
    #[serde(rename = "_3ds")]
    pub three_ds: ThreeDsOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreeDsChallenge {
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreeDsData {
    #[serde(rename = "_3ds", default)]
    pub three_ds: Option<ThreeDsChallenge>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
}
