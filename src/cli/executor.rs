//! Command executor for dispatching CLI commands
//!
//! Turns a parsed subcommand into one use-case invocation and the printable
//! JSON result.

use serde::Serialize;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::parser::{AmountArgs, CardArgs, Cli, Commands};
use crate::config::{Environment, Settings};
use crate::dispatch::Dispatchers;
use crate::dto::card::TokeniseCardRequest;
use crate::dto::checkout::{CheckoutCustomer, CheckoutIntentRequest};
use crate::dto::customer::{CreateCustomerRequest, CustomerPaymentSource};
use crate::dto::threeds::{
    Integrated3dsRequest, Standalone3dsRequest, StandaloneCustomer, ThreeDsOptions,
    VaultSourceRef,
};
use crate::dto::vault::CardVaultTokenRequest;
use crate::dto::wallet::{CaptureWalletChargeRequest, DeclineWalletChargeRequest};
use crate::external::CredentialKind::{AccessToken, PublicKey, SecretKey};
use crate::state::PaymentSdk;
use crate::usecases::UseCase;

/// Execute a CLI command against the configured gateway.
///
/// Returns the JSON document to print. `scope` is cancelled on Ctrl-C.
pub async fn execute_command(
    cli: &Cli,
    settings: &Settings,
    environment: Environment,
    scope: &CancellationToken,
) -> anyhow::Result<Value> {
    if let Commands::CheckConfig = cli.command {
        return Ok(config_summary(settings, environment));
    }

    let sdk = PaymentSdk::new(&settings.gateway, Dispatchers::current()?)?;
    run_command(&cli.command, settings, &sdk, scope).await
}

/// Run one subcommand on an already built SDK.
pub async fn run_command(
    command: &Commands,
    settings: &Settings,
    sdk: &PaymentSdk,
    scope: &CancellationToken,
) -> anyhow::Result<Value> {
    let gateway = &settings.gateway;
    let uc = &sdk.use_cases;
    tracing::debug!(command = command.name(), "Running command");

    match command {
        Commands::TokeniseCard { card, gateway_id } => {
            let credentials = gateway.first_credentials(&[PublicKey, AccessToken, SecretKey])?;
            let mut request = tokenise_request(card);
            request.gateway_id = gateway_id.clone();
            invoke(&uc.tokenise_card, scope, (credentials, request)).await
        }
        Commands::VaultCard { card } => {
            let credentials = gateway.first_credentials(&[PublicKey, SecretKey, AccessToken])?;
            invoke(&uc.create_card_vault_token, scope, (credentials, vault_request(card))).await
        }
        Commands::CaptureWallet {
            charge_id,
            payment_method_id,
            ref_token,
        } => {
            let request = CaptureWalletChargeRequest {
                id: charge_id.clone(),
                payment_method_id: payment_method_id.clone(),
                ref_token: ref_token.clone(),
                customer: None,
            };
            let credentials = gateway.credentials(AccessToken)?;
            invoke(&uc.capture_wallet_charge, scope, (credentials, request)).await
        }
        Commands::DeclineWallet { charge_id } => {
            let request = DeclineWalletChargeRequest {
                id: charge_id.clone(),
            };
            let credentials = gateway.credentials(AccessToken)?;
            invoke(&uc.decline_wallet_charge, scope, (credentials, request)).await
        }
        Commands::Create3ds {
            amount,
            token,
            vault_token,
            service_id,
        } => {
            let credentials = gateway.first_credentials(&[PublicKey, AccessToken, SecretKey])?;
            match (token, vault_token) {
                (_, Some(vault_token)) => {
                    let request = standalone_3ds_request(amount, vault_token, service_id.clone());
                    invoke(&uc.create_standalone_3ds_token, scope, (credentials, request)).await
                }
                (Some(token), None) => {
                    let request = integrated_3ds_request(amount, token, service_id.clone());
                    invoke(&uc.create_integrated_3ds_token, scope, (credentials, request)).await
                }
                (None, None) => anyhow::bail!("either --token or --vault-token is required"),
            }
        }
        Commands::CheckoutIntent {
            amount,
            template_id,
            email,
        } => {
            let request = CheckoutIntentRequest {
                amount: amount.amount.clone(),
                currency: amount.currency.clone(),
                reference: amount.reference.clone(),
                template_id: template_id.clone(),
                customer: email.clone().map(|email| CheckoutCustomer {
                    email: Some(email),
                    ..Default::default()
                }),
            };
            let credentials = gateway.first_credentials(&[SecretKey, PublicKey, AccessToken])?;
            invoke(&uc.create_checkout_intent, scope, (credentials, request)).await
        }
        Commands::CreateCustomer {
            first_name,
            last_name,
            email,
            phone,
            reference,
            vault_token,
        } => {
            let request = CreateCustomerRequest {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                reference: reference.clone(),
                payment_source: vault_token.clone().map(|vault_token| CustomerPaymentSource {
                    vault_token,
                    gateway_id: None,
                }),
            };
            let credentials = gateway.credentials(SecretKey)?;
            invoke(&uc.create_customer, scope, (credentials, request)).await
        }
        Commands::GetCharge { charge_id } => {
            let credentials = gateway.credentials(SecretKey)?;
            invoke(&uc.get_charge, scope, (credentials, charge_id.clone())).await
        }
        Commands::WalletClientId { gateway_id } => {
            let credentials = gateway.credentials(AccessToken)?;
            invoke(&uc.get_wallet_client_id, scope, (credentials, gateway_id.clone())).await
        }
        Commands::CheckConfig => Ok(config_summary(settings, Environment::from_env())),
    }
}

async fn invoke<U>(use_case: &U, scope: &CancellationToken, params: U::Params) -> anyhow::Result<Value>
where
    U: UseCase,
    U::Output: Serialize,
{
    let output = use_case.call_in_scope(scope, params).await?;
    Ok(serde_json::to_value(output)?)
}

fn tokenise_request(card: &CardArgs) -> TokeniseCardRequest {
    let request = TokeniseCardRequest::new(
        card.name.clone(),
        card.number.clone(),
        card.expiry_month.clone(),
        card.expiry_year.clone(),
    );
    match &card.ccv {
        Some(ccv) => request.with_ccv(ccv.clone()),
        None => request,
    }
}

fn vault_request(card: &CardArgs) -> CardVaultTokenRequest {
    CardVaultTokenRequest {
        card_name: card.name.clone(),
        card_number: card.number.clone(),
        expire_month: card.expiry_month.clone(),
        expire_year: card.expiry_year.clone(),
        card_ccv: card.ccv.clone(),
    }
}

fn integrated_3ds_request(
    amount: &AmountArgs,
    token: &str,
    service_id: Option<String>,
) -> Integrated3dsRequest {
    Integrated3dsRequest {
        amount: amount.amount.clone(),
        currency: amount.currency.clone(),
        token: token.to_string(),
        reference: amount.reference.clone(),
        customer: None,
        three_ds: service_id.map(|service_id| ThreeDsOptions {
            service_id: Some(service_id),
            authentication_type: None,
        }),
    }
}

fn standalone_3ds_request(
    amount: &AmountArgs,
    vault_token: &str,
    service_id: Option<String>,
) -> Standalone3dsRequest {
    Standalone3dsRequest {
        amount: amount.amount.clone(),
        currency: amount.currency.clone(),
        reference: amount.reference.clone(),
        customer: StandaloneCustomer {
            payment_source: VaultSourceRef {
                vault_token: vault_token.to_string(),
            },
        },
        three_ds: ThreeDsOptions {
            service_id,
            authentication_type: None,
        },
    }
}

/// Settings with every credential reduced to whether it is configured.
fn config_summary(settings: &Settings, environment: Environment) -> Value {
    let gateway = &settings.gateway;
    json!({
        "application": settings.application,
        "environment": environment,
        "gateway": {
            "mode": gateway.mode,
            "base_url": gateway.resolved_base_url(),
            "request_timeout": gateway.request_timeout,
            "connect_timeout": gateway.connect_timeout,
            "user_agent": gateway.user_agent(),
            "credentials": {
                "access_token": gateway.access_token.is_some(),
                "public_key": gateway.public_key.is_some(),
                "secret_key": gateway.secret_key.is_some(),
            },
        },
        "logger": settings.logger,
    })
}
