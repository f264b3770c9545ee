use bigdecimal::BigDecimal;
use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::charge::ChargeData;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeDetails {
    pub charge_id: String,
    pub status: String,
    pub amount: Option<BigDecimal>,
    pub currency: String,
    pub reference: Option<String>,
    pub created_at: Option<String>,
}

impl From<ChargeData> for ChargeDetails {
    fn from(data: ChargeData) -> Self {
        Self {
            charge_id: text(data.id.or(data.object_id)),
            status: text(data.status),
            amount: data.amount,
            currency: text(data.currency),
            reference: data.reference,
            created_at: data.created_at,
        }
    }
}

impl From<Envelope<ChargeData>> for ChargeDetails {
    fn from(envelope: Envelope<ChargeData>) -> Self {
        envelope.resource.data.unwrap_or_default().into()
    }
}
