//! NFT workflow binary.

use hedera_nft_demo::client::HederaLedger;
use hedera_nft_demo::{workflow, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NFT workflow");

    let config = Config::load().unwrap_or_else(|e| {
        error!(error = %e, "FATAL: set OPERATOR_ID and OPERATOR_KEY");
        std::process::exit(1);
    });

    // Credentials are validated before any network interaction.
    let operator = config.operator()?;

    info!(network = %config.network, operator = %operator.account_id, "Configuration loaded");

    let ledger = HederaLedger::connect(&config.network, &operator)?;

    let summary = workflow::run(&ledger, &operator, &config).await?;

    info!(
        alice = %summary.alice,
        bob = %summary.bob,
        token = %summary.token_id,
        first_transfer = %summary.first_transfer,
        second_transfer = %summary.second_transfer,
        "Workflow complete"
    );
    Ok(())
}
