//! One-time payment source tokens (cards and gift cards).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{digits_only, lenient_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSourceKind {
    Card,
    GiftCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 2, message = "Country must be a two-letter ISO 3166 code"))]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_postcode: Option<String>,
}

/// Body of a card tokenisation call.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct TokeniseCardRequest {
    #[serde(rename = "type")]
    pub kind: PaymentSourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
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
    pub store_ccv: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<BillingAddress>,
}

impl TokeniseCardRequest {
    pub fn new(
        card_name: impl Into<String>,
        card_number: impl Into<String>,
        expire_month: impl Into<String>,
        expire_year: impl Into<String>,
    ) -> Self {
        Self {
            kind: PaymentSourceKind::Card,
            gateway_id: None,
            card_name: card_name.into(),
            card_number: card_number.into(),
            expire_month: expire_month.into(),
            expire_year: expire_year.into(),
            card_ccv: None,
            store_ccv: false,
            address: None,
        }
    }

    pub fn with_ccv(mut self, ccv: impl Into<String>) -> Self {
        self.card_ccv = Some(ccv.into());
        self
    }

    pub fn with_gateway(mut self, gateway_id: impl Into<String>) -> Self {
        self.gateway_id = Some(gateway_id.into());
        self
    }
}

/// Body of a gift card tokenisation call.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct TokeniseGiftCardRequest {
    #[serde(rename = "type")]
    pub kind: PaymentSourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[validate(
        length(min = 8, max = 30, message = "Gift card number must be between 8 and 30 digits"),
        custom(function = "digits_only")
    )]
    pub card_number: String,
    #[validate(length(min = 3, max = 10, message = "PIN must be between 3 and 10 characters"))]
    pub card_pin: String,
    pub store_pin: bool,
}

impl TokeniseGiftCardRequest {
    pub fn new(card_number: impl Into<String>, card_pin: impl Into<String>) -> Self {
        Self {
            kind: PaymentSourceKind::GiftCard,
            gateway_id: None,
            card_number: card_number.into(),
            card_pin: card_pin.into(),
            store_pin: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardTokenData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_request_wire_shape() {
        let req = TokeniseCardRequest::new("Jane Doe", "4111111111111111", "09", "29")
            .with_ccv("123")
            .with_gateway("gw_1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "card");
        assert_eq!(value["gateway_id"], "gw_1");
        assert_eq!(value["card_ccv"], "123");
        assert_eq!(value["store_ccv"], false);
        assert!(value.get("address").is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_card_request_rejects_bad_fields() {
        let req = TokeniseCardRequest::new("", "4111-1111-1111", "9", "2029");
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("card_name"));
        assert!(fields.contains_key("card_number"));
        assert!(fields.contains_key("expire_month"));
        assert!(fields.contains_key("expire_year"));
    }

    #[test]
    fn test_nested_address_is_validated() {
        let mut req = TokeniseCardRequest::new("Jane Doe", "4111111111111111", "09", "29");
        req.address = Some(BillingAddress {
            address_line1: Some("1 Main St".to_string()),
            address_line2: None,
            address_city: None,
            address_state: None,
            address_country: Some("AUS".to_string()),
            address_postcode: None,
        });
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_gift_card_wire_shape() {
        let req = TokeniseGiftCardRequest::new("60280000000000", "1234");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "gift_card");
        assert_eq!(value["card_pin"], "1234");
        assert!(req.validate().is_ok());
    }
}
