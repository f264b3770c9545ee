//! CLI argument parsing with clap
//!
//! Defines the command-line interface of the sample host: one subcommand per
//! SDK use case plus a configuration check.

use std::path::PathBuf;

use bigdecimal::BigDecimal;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use super::validation::{
    validate_amount, validate_card_number, validate_config_file_path, validate_currency,
    validate_expiry_month, validate_expiry_year,
};

/// Sample host for the payment gateway SDK core
#[derive(Parser, Debug)]
#[command(name = "paydock-rs")]
#[command(about = "Run payment gateway SDK use cases from the command line")]
#[command(long_about = "
paydock-rs drives the payment gateway SDK core from the command line. Every
subcommand runs exactly one use case against the configured gateway and prints
the resulting domain model as JSON.

Credentials are read from configuration (gateway.access_token,
gateway.public_key, gateway.secret_key) or the matching PAYDOCK_GATEWAY__*
environment variables.

EXAMPLES:
    # Tokenise a test card against the sandbox
    paydock-rs tokenise-card --name 'Jane Doe' --number 4200000000000000 \\
        --expiry-month 12 --expiry-year 2030 --ccv 123

    # Look up a charge
    paydock-rs get-charge 5f1a2b3c4d

    # Capture a wallet charge with debug logging
    paydock-rs --verbose capture-wallet --charge-id 5f1a2b3c4d

    # Check which configuration would be used in production
    paydock-rs --env production check-config
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered config directory.
    /// PAYDOCK_* environment variables still apply on top.
    #[arg(short, long, value_name = "FILE", value_parser = validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Card details shared by tokenisation and vaulting
#[derive(Args, Debug, Clone)]
pub struct CardArgs {
    /// Cardholder name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Card number; spaces and dashes are ignored
    #[arg(long, value_name = "DIGITS", value_parser = validate_card_number)]
    pub number: String,

    /// Expiry month, 1-12
    #[arg(long, value_name = "MM", value_parser = validate_expiry_month)]
    pub expiry_month: String,

    /// Expiry year, YY or YYYY
    #[arg(long, value_name = "YY", value_parser = validate_expiry_year)]
    pub expiry_year: String,

    /// Card security code
    #[arg(long, value_name = "CCV")]
    pub ccv: Option<String>,
}

/// Amount and currency of a payment
#[derive(Args, Debug, Clone)]
pub struct AmountArgs {
    /// Amount in major units, e.g. 19.95
    #[arg(long, value_parser = validate_amount)]
    pub amount: BigDecimal,

    /// ISO 4217 currency code
    #[arg(long, default_value = "AUD", value_parser = validate_currency)]
    pub currency: String,

    /// Merchant reference
    #[arg(long)]
    pub reference: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenise a card into a one-time token
    TokeniseCard {
        #[command(flatten)]
        card: CardArgs,

        /// Gateway to route the card to
        #[arg(long)]
        gateway_id: Option<String>,
    },

    /// Store a card in the vault and print the vault token
    VaultCard {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Capture a wallet charge (needs an access token)
    CaptureWallet {
        /// Wallet charge id
        #[arg(long)]
        charge_id: Option<String>,

        /// Payment method id returned by the wallet
        #[arg(long)]
        payment_method_id: Option<String>,

        /// Wallet reference token
        #[arg(long)]
        ref_token: Option<String>,
    },

    /// Decline a wallet charge (needs an access token)
    DeclineWallet {
        /// Wallet charge id
        charge_id: String,
    },

    /// Create a 3DS token, integrated with a one-time token or standalone on a vault token
    #[command(
        name = "create-3ds",
        group(ArgGroup::new("source").required(true).args(["token", "vault_token"]))
    )]
    Create3ds {
        #[command(flatten)]
        amount: AmountArgs,

        /// One-time card token (integrated 3DS)
        #[arg(long)]
        token: Option<String>,

        /// Vault token (standalone 3DS)
        #[arg(long, requires = "service_id")]
        vault_token: Option<String>,

        /// 3DS service id
        #[arg(long)]
        service_id: Option<String>,
    },

    /// Create a checkout intent
    CheckoutIntent {
        #[command(flatten)]
        amount: AmountArgs,

        /// Checkout template id
        #[arg(long)]
        template_id: Option<String>,

        /// Customer email
        #[arg(long)]
        email: Option<String>,
    },

    /// Create a customer, optionally with a vaulted payment source
    CreateCustomer {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        reference: Option<String>,

        /// Vault token to attach as the default payment source
        #[arg(long)]
        vault_token: Option<String>,
    },

    /// Fetch a charge by id
    GetCharge {
        charge_id: String,
    },

    /// Fetch the wallet client id configured for a gateway
    WalletClientId {
        gateway_id: String,
    },

    /// Validate configuration and print a redacted summary
    CheckConfig,
}

impl Commands {
    /// Subcommand name as typed on the command line, for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::TokeniseCard { .. } => "tokenise-card",
            Commands::VaultCard { .. } => "vault-card",
            Commands::CaptureWallet { .. } => "capture-wallet",
            Commands::DeclineWallet { .. } => "decline-wallet",
            Commands::Create3ds { .. } => "create-3ds",
            Commands::CheckoutIntent { .. } => "checkout-intent",
            Commands::CreateCustomer { .. } => "create-customer",
            Commands::GetCharge { .. } => "get-charge",
            Commands::WalletClientId { .. } => "wallet-client-id",
            Commands::CheckConfig => "check-config",
        }
    }
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Log level forced by `--verbose` or `--quiet`, if any.
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["paydock-rs", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_registered_subcommand_names() {
        let cmd = Cli::command();
        let mut names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "capture-wallet",
                "check-config",
                "checkout-intent",
                "create-3ds",
                "create-customer",
                "decline-wallet",
                "get-charge",
                "tokenise-card",
                "vault-card",
                "wallet-client-id",
            ]
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["paydock-rs"]).is_err());
    }

    #[test]
    fn test_tokenise_card_normalizes_input() {
        let cli = Cli::try_parse_from([
            "paydock-rs",
            "tokenise-card",
            "--name",
            "Jane Doe",
            "--number",
            "4200 0000 0000 0000",
            "--expiry-month",
            "7",
            "--expiry-year",
            "2031",
        ])
        .unwrap();

        match cli.command {
            Commands::TokeniseCard { card, gateway_id } => {
                assert_eq!(card.number, "4200000000000000");
                assert_eq!(card.expiry_month, "07");
                assert_eq!(card.expiry_year, "31");
                assert!(card.ccv.is_none());
                assert!(gateway_id.is_none());
            }
            other => panic!("Expected TokeniseCard, got {:?}", other),
        }
    }

    #[test]
    fn test_create_3ds_needs_a_source() {
        let result = Cli::try_parse_from(["paydock-rs", "create-3ds", "--amount", "10"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "paydock-rs",
            "create-3ds",
            "--amount",
            "10",
            "--vault-token",
            "vt_1",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_create_3ds_defaults_currency() {
        let cli = Cli::try_parse_from([
            "paydock-rs",
            "create-3ds",
            "--amount",
            "12.50",
            "--token",
            "ott_1",
        ])
        .unwrap();

        match cli.command {
            Commands::Create3ds { amount, token, .. } => {
                assert_eq!(amount.currency, "AUD");
                assert_eq!(token.as_deref(), Some("ott_1"));
            }
            other => panic!("Expected Create3ds, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["paydock-rs", "--verbose", "--env", "prod", "check-config"])
            .unwrap();
        assert_eq!(cli.log_level_override(), Some("debug"));
        assert!(matches!(cli.env, Some(Environment::Production)));
        assert_eq!(cli.command.name(), "check-config");
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["paydock-rs", "--verbose", "--quiet", "check-config"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
