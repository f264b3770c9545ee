//! Use case layer: one struct per business action.
//!
//! A use case validates its parameters, performs exactly one repository
//! call and hands back an explicit [`SdkResult`]. Nothing thrown below this
//! boundary escapes it: transport failures, task panics and cancellation all
//! arrive as `Err`.

mod account;
mod charges;
mod checkout;
mod customer;
mod threeds;
mod tokens;
mod vaults;
mod wallet;

pub use account::{CreatePaymentTokenUseCase, CreateSetupTokenUseCase, GetWalletClientIdUseCase};
pub use charges::{CreateChargeUseCase, GetChargeUseCase};
pub use checkout::CreateCheckoutIntentUseCase;
pub use customer::CreateCustomerUseCase;
pub use threeds::{CreateIntegrated3dsTokenUseCase, CreateStandalone3dsTokenUseCase};
pub use tokens::{TokeniseCardUseCase, TokeniseGiftCardUseCase};
pub use vaults::{CreateCardVaultTokenUseCase, CreateVaultTokenFromTokenUseCase};
pub use wallet::{
    CaptureWalletChargeUseCase, DeclineWalletChargeUseCase, InitiateWalletChargeUseCase,
    WalletCallbackUseCase,
};

use std::time::Instant;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::dto::rules::path_identifier;
use crate::error::{SdkError, SdkResult};
use crate::external::{CredentialKind, Credentials};
use crate::repositories::Repositories;

/// Every credential kind the gateway accepts.
pub const ANY_CREDENTIAL: &[CredentialKind] = &[
    CredentialKind::AccessToken,
    CredentialKind::SecretKey,
    CredentialKind::PublicKey,
];

/// A single externally invocable business operation.
///
/// Implementors provide [`UseCase::run`]; callers go through
/// [`UseCase::call`] or [`UseCase::call_in_scope`], which add outcome
/// logging and cancellation on top.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Params: Send + 'static;
    type Output: Send + 'static;

    /// Stable name used in log lines.
    fn name(&self) -> &'static str;

    async fn run(&self, params: Self::Params) -> SdkResult<Self::Output>;

    /// Runs the use case and logs the outcome.
    async fn call(&self, params: Self::Params) -> SdkResult<Self::Output> {
        let started = Instant::now();
        let result = self.run(params).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::info!(use_case = self.name(), elapsed_ms, "Use case succeeded"),
            Err(err) => tracing::warn!(
                use_case = self.name(),
                kind = ?err.kind(),
                elapsed_ms,
                error = %err.describe(),
                "Use case failed"
            ),
        }
        result
    }

    /// Like [`UseCase::call`], but gives up with [`SdkError::Cancelled`] as
    /// soon as `scope` is cancelled. The in-flight IO task is aborted.
    async fn call_in_scope(
        &self,
        scope: &CancellationToken,
        params: Self::Params,
    ) -> SdkResult<Self::Output> {
        if scope.is_cancelled() {
            return Err(SdkError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = scope.cancelled() => {
                tracing::info!(use_case = self.name(), "Use case cancelled by its scope");
                Err(SdkError::Cancelled)
            }
            result = self.call(params) => result,
        }
    }
}

/// Rejects blank credentials and credential kinds the endpoint does not take.
pub(crate) fn authorize(credentials: &Credentials, accepted: &[CredentialKind]) -> SdkResult<()> {
    if credentials.is_blank() {
        return Err(SdkError::validation(
            "credentials",
            format!("{} must not be blank", credentials.kind()),
        ));
    }
    if !accepted.contains(&credentials.kind()) {
        let expected = accepted
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(SdkError::validation(
            "credentials",
            format!("expected {}, got {}", expected, credentials.kind()),
        ));
    }
    Ok(())
}

/// Checks an identifier that is interpolated into the request path.
pub(crate) fn path_param(field: &str, value: &str) -> SdkResult<()> {
    path_identifier(value).map_err(|e| {
        let reason = e
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| e.code.into_owned());
        SdkError::validation(field, reason)
    })
}

/// Aggregates all use cases for convenient access.
///
/// Cloning is cheap; every use case holds a repository that shares the
/// same client underneath.
#[derive(Clone)]
pub struct UseCases {
    pub tokenise_card: TokeniseCardUseCase,
    pub tokenise_gift_card: TokeniseGiftCardUseCase,
    pub create_card_vault_token: CreateCardVaultTokenUseCase,
    pub create_vault_token_from_token: CreateVaultTokenFromTokenUseCase,
    pub initiate_wallet_charge: InitiateWalletChargeUseCase,
    pub capture_wallet_charge: CaptureWalletChargeUseCase,
    pub decline_wallet_charge: DeclineWalletChargeUseCase,
    pub wallet_callback: WalletCallbackUseCase,
    pub create_charge: CreateChargeUseCase,
    pub get_charge: GetChargeUseCase,
    pub create_integrated_3ds_token: CreateIntegrated3dsTokenUseCase,
    pub create_standalone_3ds_token: CreateStandalone3dsTokenUseCase,
    pub create_checkout_intent: CreateCheckoutIntentUseCase,
    pub create_customer: CreateCustomerUseCase,
    pub create_setup_token: CreateSetupTokenUseCase,
    pub get_wallet_client_id: GetWalletClientIdUseCase,
    pub create_payment_token: CreatePaymentTokenUseCase,
}

impl UseCases {
    pub fn new(repos: Repositories) -> Self {
        Self {
            tokenise_card: TokeniseCardUseCase::new(repos.cards.clone()),
            tokenise_gift_card: TokeniseGiftCardUseCase::new(repos.cards),
            create_card_vault_token: CreateCardVaultTokenUseCase::new(repos.vaults.clone()),
            create_vault_token_from_token: CreateVaultTokenFromTokenUseCase::new(repos.vaults),
            initiate_wallet_charge: InitiateWalletChargeUseCase::new(repos.wallet.clone()),
            capture_wallet_charge: CaptureWalletChargeUseCase::new(repos.wallet.clone()),
            decline_wallet_charge: DeclineWalletChargeUseCase::new(repos.wallet.clone()),
            wallet_callback: WalletCallbackUseCase::new(repos.wallet),
            create_charge: CreateChargeUseCase::new(repos.charges.clone()),
            get_charge: GetChargeUseCase::new(repos.charges),
            create_integrated_3ds_token: CreateIntegrated3dsTokenUseCase::new(
                repos.three_ds.clone(),
            ),
            create_standalone_3ds_token: CreateStandalone3dsTokenUseCase::new(repos.three_ds),
            create_checkout_intent: CreateCheckoutIntentUseCase::new(repos.checkout),
            create_customer: CreateCustomerUseCase::new(repos.customers),
            create_setup_token: CreateSetupTokenUseCase::new(repos.accounts.clone()),
            get_wallet_client_id: GetWalletClientIdUseCase::new(repos.accounts.clone()),
            create_payment_token: CreatePaymentTokenUseCase::new(repos.accounts),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::UseCases;
    use crate::dispatch::Dispatchers;
    use crate::external::GatewayClient;
    use crate::external::transport::mock::MockTransport;
    use crate::repositories::Repositories;

    pub fn use_cases_with(mock: &Arc<MockTransport>) -> UseCases {
        UseCases::new(Repositories::new(
            GatewayClient::new(mock.clone()),
            Dispatchers::current().unwrap(),
        ))
    }
}
