use std::fmt;

use reqwest::Method;

/// Gateway operations this crate knows how to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    TokenisePaymentSource,
    CreateVaultToken,
    InitiateWalletCharge,
    CaptureWalletCharge,
    DeclineWalletCharge,
    WalletCallback,
    CreateCharge,
    GetCharge { charge_id: String },
    CreateIntegrated3ds,
    CreateStandalone3ds,
    CreateCheckoutIntent,
    CreateCustomer,
    CreateSetupToken,
    GetWalletClientId { gateway_id: String },
    CreatePaymentToken,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::GetCharge { .. } | Endpoint::GetWalletClientId { .. } => Method::GET,
            _ => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::TokenisePaymentSource => "/v1/payment_sources/tokens".to_string(),
            Endpoint::CreateVaultToken => "/v1/vault/payment_sources".to_string(),
            Endpoint::InitiateWalletCharge => "/v1/charges/wallet".to_string(),
            Endpoint::CaptureWalletCharge => "/v1/charges/wallet/capture".to_string(),
            Endpoint::DeclineWalletCharge => "/v1/charges/wallet/decline".to_string(),
            Endpoint::WalletCallback => "/v1/charges/wallet/callback".to_string(),
            Endpoint::CreateCharge => "/v1/charges".to_string(),
            Endpoint::GetCharge { charge_id } => format!("/v1/charges/{}", charge_id),
            Endpoint::CreateIntegrated3ds => "/v1/charges/3ds".to_string(),
            Endpoint::CreateStandalone3ds => "/v1/charges/standalone-3ds".to_string(),
            Endpoint::CreateCheckoutIntent => "/v1/checkouts/intent".to_string(),
            Endpoint::CreateCustomer => "/v1/customers".to_string(),
            Endpoint::CreateSetupToken => "/v1/payment_sources/setup-token".to_string(),
            Endpoint::GetWalletClientId { gateway_id } => {
                format!("/v1/gateways/{}/wallet-config", gateway_id)
            }
            Endpoint::CreatePaymentToken => "/v1/payment_sources/payment-token".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterised_paths() {
        let get = Endpoint::GetCharge {
            charge_id: "ch_42".to_string(),
        };
        assert_eq!(get.method(), Method::GET);
        assert_eq!(get.to_string(), "GET /v1/charges/ch_42");

        let config = Endpoint::GetWalletClientId {
            gateway_id: "gw_1".to_string(),
        };
        assert_eq!(config.path(), "/v1/gateways/gw_1/wallet-config");
    }

    #[test]
    fn test_wallet_operations_are_posts() {
        for endpoint in [
            Endpoint::InitiateWalletCharge,
            Endpoint::CaptureWalletCharge,
            Endpoint::DeclineWalletCharge,
            Endpoint::WalletCallback,
        ] {
            assert_eq!(endpoint.method(), Method::POST);
            assert!(endpoint.path().starts_with("/v1/charges/wallet"));
        }
    }
}
