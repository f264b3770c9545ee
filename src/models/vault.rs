use serde::Serialize;

use super::text;
use crate::dto::Envelope;
use crate::dto::vault::VaultTokenData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultToken {
    pub token: String,
    pub vault_type: String,
    pub card_scheme: String,
    pub card_number_last4: String,
    pub expire_month: Option<String>,
    pub expire_year: Option<String>,
    pub status: String,
}

impl From<Envelope<VaultTokenData>> for VaultToken {
    fn from(envelope: Envelope<VaultTokenData>) -> Self {
        let data = envelope.resource.data.unwrap_or_default();
        Self {
            token: text(data.vault_token),
            vault_type: text(data.vault_type),
            card_scheme: text(data.card_scheme),
            card_number_last4: text(data.card_number_last4),
            expire_month: data.expire_month,
            expire_year: data.expire_year,
            status: text(data.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_mapping() {
        let envelope: Envelope<VaultTokenData> = serde_json::from_str(
            r#"{"resource":{"type":"payment_source","data":{
                "vault_token":"vt_1","vault_type":"permanent","card_scheme":"visa",
                "card_number_last4":"1111","expire_month":9,"expire_year":29,"status":"active"}},
               "status":201}"#,
        )
        .unwrap();
        let vault = VaultToken::from(envelope);
        assert_eq!(vault.token, "vt_1");
        assert_eq!(vault.vault_type, "permanent");
        assert_eq!(vault.card_scheme, "visa");
        assert_eq!(vault.card_number_last4, "1111");
        assert_eq!(vault.expire_month.as_deref(), Some("9"));
        assert_eq!(vault.expire_year.as_deref(), Some("29"));
        assert_eq!(vault.status, "active");
    }

    #[test]
    fn test_absent_data_degrades_to_empty_vault_token() {
        let vault = VaultToken::from(Envelope::<VaultTokenData>::new("payment_source", None, 201));
        assert_eq!(vault.token, "");
        assert_eq!(vault.card_scheme, "");
        assert!(vault.expire_month.is_none());
    }
}
