use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::account::{PaymentTokenData, SetupTokenData, WalletClientIdData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupToken {
    pub setup_token: String,
}

impl From<Envelope<SetupTokenData>> for SetupToken {
    fn from(envelope: Envelope<SetupTokenData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            setup_token: text(data.setup_token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletClientId {
    pub client_id: String,
}

impl From<Envelope<WalletClientIdData>> for WalletClientId {
    fn from(envelope: Envelope<WalletClientIdData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            client_id: text(data.client_id),
        }
    }
}

/// Payment token for a linked wallet account, with the account's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedPaymentToken {
    pub token: String,
    pub email: String,
}

impl From<Envelope<PaymentTokenData>> for LinkedPaymentToken {
    fn from(envelope: Envelope<PaymentTokenData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            token: text(data.token),
            email: text(data.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_token_mapping() {
        let envelope: Envelope<PaymentTokenData> = serde_json::from_str(
            r#"{"resource":{"type":"payment_token","data":{"token":"pt_1","email":"buyer@example.com"}},"status":200}"#,
        )
        .unwrap();
        let linked = LinkedPaymentToken::from(envelope);
        assert_eq!(linked.token, "pt_1");
        assert_eq!(linked.email, "buyer@example.com");
    }

    #[test]
    fn test_partial_data_defaults_missing_email() {
        let envelope: Envelope<PaymentTokenData> =
            serde_json::from_str(r#"{"resource":{"data":{"token":"pt_1"}}}"#).unwrap();
        let linked = LinkedPaymentToken::from(envelope);
        assert_eq!(linked.token, "pt_1");
        assert_eq!(linked.email, "");
    }

    #[test]
    fn test_setup_and_client_id_mapping() {
        let setup: Envelope<SetupTokenData> =
            serde_json::from_str(r#"{"resource":{"data":{"setup_token":"st_1"}}}"#).unwrap();
        assert_eq!(SetupToken::from(setup).setup_token, "st_1");

        let client: Envelope<WalletClientIdData> =
            serde_json::from_str(r#"{"resource":{}}"#).unwrap();
        assert_eq!(WalletClientId::from(client).client_id, "");
    }
}
