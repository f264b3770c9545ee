use bigdecimal::BigDecimal;
use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::checkout::CheckoutIntentData;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutIntent {
    pub intent_id: String,
    pub token: String,
    pub status: String,
    pub amount: Option<BigDecimal>,
    pub currency: String,
    pub reference: Option<String>,
}

impl From<Envelope<CheckoutIntentData>> for CheckoutIntent {
    fn from(envelope: Envelope<CheckoutIntentData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            intent_id: text(data.id.or(data.object_id)),
            token: text(data.token),
            status: text(data.status),
            amount: data.amount,
            currency: text(data.currency),
            reference: data.reference,
        }
    }
}
