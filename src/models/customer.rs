use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::customer::{CustomerData, PaymentSourceData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSource {
    pub source_id: String,
    pub kind: String,
    pub card_scheme: String,
    pub card_number_last4: String,
    pub vault_token: String,
}

impl From<PaymentSourceData> for PaymentSource {
    fn from(data: PaymentSourceData) -> Self {
        Self {
            source_id: text(data.id.or(data.object_id)),
            kind: text(data.kind),
            card_scheme: text(data.card_scheme),
            card_number_last4: text(data.card_number_last4),
            vault_token: text(data.vault_token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub customer_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub default_source: String,
    pub payment_sources: Vec<PaymentSource>,
}

impl From<Envelope<CustomerData>> for Customer {
    fn from(envelope: Envelope<CustomerData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            customer_id: text(data.id.or(data.object_id)),
            email: text(data.email),
            first_name: text(data.first_name),
            last_name: text(data.last_name),
            phone: data.phone,
            default_source: text(data.default_source),
            payment_sources: data
                .payment_sources
                .unwrap_or_default()
                .into_iter()
                .map(PaymentSource::from)
                .collect(),
        }
    }
}
