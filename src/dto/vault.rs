//! Long-lived vault tokens.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{digits_only, lenient_string, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CardVaultTokenRequest {
    #[validate(length(min = 1, max = 100, message = "Cardholder name must be between 1 and 100 characters"))]
    pub card_name: String,
    #[validate(
        length(min = 12, max = 19, message = "Card number must be between 12 and 19 digits"),
        custom(function = "digits_only")
    )]
    pub card_number: String,
    #[validate(
        length(equal = 2, message = "Expiry month must be two digits"),
        custom(function = "digits_only")
    )]
    pub expire_month: String,
    #[validate(
        length(equal = 2, message = "Expiry year must be two digits"),
        custom(function = "digits_only")
    )]
    pub expire_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 4, message = "Security code must be 3 or 4 digits"))]
    pub card_ccv: Option<String>,
}

/// Converts a one-time token into a vault token.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct TokenVaultRequest {
    #[validate(custom(function = "not_blank"))]
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VaultTokenData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub vault_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vault_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_scheme: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_number_last4: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expire_month: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expire_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_data_accepts_numeric_expiry() {
        let data: VaultTokenData = serde_json::from_str(
            r#"{"vault_token":"vt_1","card_scheme":"visa","expire_month":12,"expire_year":2029}"#,
        )
        .unwrap();
        assert_eq!(data.vault_token.as_deref(), Some("vt_1"));
        assert_eq!(data.expire_month.as_deref(), Some("12"));
        assert_eq!(data.expire_year.as_deref(), Some("2029"));
        assert!(data.status.is_none());
    }

    #[test]
    fn test_blank_one_time_token_rejected() {
        let req = TokenVaultRequest {
            token: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
