use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::card::CardTokenData;

/// One-time token for a card or gift card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardToken {
    pub token: String,
    pub resource_type: String,
}

impl From<Envelope<CardTokenData>> for CardToken {
    fn from(envelope: Envelope<CardTokenData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            token: text(data.token),
            resource_type: envelope.resource.kind,
        }
    }
}
