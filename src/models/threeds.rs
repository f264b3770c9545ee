use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::threeds::ThreeDsData;

/// Token that drives the 3DS challenge widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeDsToken {
    pub token: String,
    pub charge_3ds_id: String,
    pub status: String,
}

impl From<Envelope<ThreeDsData>> for ThreeDsToken {
    fn from(envelope: Envelope<ThreeDsData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        let challenge = data.three_ds.unwrap_or_default();
        Self {
            token: text(challenge.token),
            charge_3ds_id: text(challenge.id.or(challenge.object_id)),
            status: text(data.status),
        }
    }
}
