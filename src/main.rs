use clap::Parser;
use tokio_util::sync::CancellationToken;

use paydock_rs::cli::{self, Cli};
use paydock_rs::config::GatewayMode;
use paydock_rs::error::SdkError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = cli::load_config(&cli).map_err(|e| {
        match e.field() {
            Some(field) => eprintln!("Configuration error at `{}`: {}", field, e),
            None => eprintln!("Configuration error: {}", e),
        }
        e
    })?;
    let _log_handle = cli::init_logger_from_settings(&settings, &cli)?;

    if environment.is_production() && settings.gateway.mode != GatewayMode::Production {
        tracing::warn!(
            base_url = %settings.gateway.resolved_base_url(),
            "Production environment is not using the production gateway"
        );
    }

    let scope = CancellationToken::new();
    let ctrl_c_scope = scope.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling the running command");
            ctrl_c_scope.cancel();
        }
    });

    match cli::execute_command(&cli, &settings, environment, &scope).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            match err.downcast_ref::<SdkError>() {
                Some(sdk_err) => eprintln!("Error ({:?}): {}", sdk_err.kind(), sdk_err.describe()),
                None => eprintln!("Error: {:#}", err),
            }
            std::process::exit(1);
        }
    }
}
