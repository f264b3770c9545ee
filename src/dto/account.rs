//! Wallet account linking: setup tokens, client ids and linked payment tokens.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{lenient_string, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SetupTokenRequest {
    #[validate(custom(function = "not_blank"))]
    pub gateway_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct PaymentTokenRequest {
    #[validate(custom(function = "not_blank"))]
    pub gateway_id: String,
    #[validate(custom(function = "not_blank"))]
    pub setup_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetupTokenData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub setup_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WalletClientIdData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentTokenData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}
