use bigdecimal::BigDecimal;
use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::charge::ChargeData;
use crate::dto::wallet::{InitiateWalletChargeData, WalletCallbackData};

/// Token handed to a wallet widget after the charge was initiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletChargeToken {
    pub token: String,
    pub charge_id: String,
    pub status: String,
}

impl From<Envelope<InitiateWalletChargeData>> for WalletChargeToken {
    fn from(envelope: Envelope<InitiateWalletChargeData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        let charge = data.charge.unwrap_or_default();
        Self {
            token: text(data.token),
            charge_id: text(charge.id.or(charge.object_id)),
            status: text(charge.status),
        }
    }
}

/// Outcome of a wallet capture or decline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletCharge {
    pub charge_id: String,
    pub status: String,
    pub amount: Option<BigDecimal>,
    pub currency: String,
}

impl From<Envelope<ChargeData>> for WalletCharge {
    fn from(envelope: Envelope<ChargeData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            charge_id: text(data.id.or(data.object_id)),
            status: text(data.status),
            amount: data.amount,
            currency: text(data.currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletCallback {
    pub callback_id: String,
    pub ref_id: String,
    pub status: String,
    pub callback_url: String,
}

impl From<Envelope<WalletCallbackData>> for WalletCallback {
    fn from(envelope: Envelope<WalletCallbackData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            callback_id: text(data.id.or(data.object_id)),
            ref_id: text(data.ref_id.or(data.ref_id_camel)),
            status: text(data.status),
            callback_url: text(data.callback_url.or(data.callback_url_camel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::charge::ChargeData;
    use proptest::prelude::*;

    #[test]
    fn test_capture_response_maps_id_and_status() {
        let envelope: Envelope<ChargeData> =
            serde_json::from_str(r#"{"resource":{"data":{"id":"ch_1","status":"complete"}}}"#)
                .unwrap();
        let charge = WalletCharge::from(envelope);
        assert_eq!(charge.charge_id, "ch_1");
        assert_eq!(charge.status, "complete");
        assert!(charge.amount.is_none());
        assert_eq!(charge.currency, "");
    }

    #[test]
    fn test_initiate_maps_nested_charge() {
        let envelope: Envelope<InitiateWalletChargeData> = serde_json::from_str(
            r#"{"resource":{"type":"charge","data":{"token":"wt_1",
                "charge":{"_id":"ch_2","status":"inprogress"}}},"status":201}"#,
        )
        .unwrap();
        let token = WalletChargeToken::from(envelope);
        assert_eq!(token.token, "wt_1");
        assert_eq!(token.charge_id, "ch_2");
        assert_eq!(token.status, "inprogress");
    }

    #[test]
    fn test_initiate_without_nested_charge_keeps_token() {
        let envelope: Envelope<InitiateWalletChargeData> =
            serde_json::from_str(r#"{"resource":{"data":{"token":"wt_1"}}}"#).unwrap();
        let token = WalletChargeToken::from(envelope);
        assert_eq!(token.token, "wt_1");
        assert_eq!(token.charge_id, "");
    }

    #[test]
    fn test_absent_data_degrades_to_empty_callback() {
        let callback = WalletCallback::from(Envelope::<WalletCallbackData>::new("", None, 0));
        assert_eq!(
            callback,
            WalletCallback {
                callback_id: String::new(),
                ref_id: String::new(),
                status: String::new(),
                callback_url: String::new(),
            }
        );
    }

    proptest! {
        #[test]
        fn prop_capture_fields_survive_mapping(
            id in "[a-z0-9_]{1,32}",
            status in "[a-z_]{1,16}",
            currency in "[A-Z]{3}",
            cents in 1u64..10_000_000,
        ) {
            let data = ChargeData {
                id: Some(id.clone()),
                status: Some(status.clone()),
                amount: Some(BigDecimal::from(cents)),
                currency: Some(currency.clone()),
                ..ChargeData::default()
            };
            let charge = WalletCharge::from(Envelope::new("charge", Some(data), 200));
            prop_assert_eq!(charge.charge_id, id);
            prop_assert_eq!(charge.status, status);
            prop_assert_eq!(charge.currency, currency);
            prop_assert_eq!(charge.amount, Some(BigDecimal::from(cents)));
        }

        #[test]
        fn prop_absent_data_never_fails(kind in ".{0,20}", status in 0u16..600) {
            let charge = WalletCharge::from(Envelope::<ChargeData>::new(kind, None, status));
            prop_assert_eq!(charge.charge_id, "");
            prop_assert_eq!(charge.status, "");
            prop_assert!(charge.amount.is_none());
        }
    }
}
