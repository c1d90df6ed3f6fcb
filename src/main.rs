//! Holder snapshot command-line tool.
//!
//! Reads configuration from the environment, enumerates every token account
//! of the configured mint, and writes the non-zero holder balances to a JSON
//! file in one shot.

#![warn(clippy::all, clippy::pedantic)]

use std::env;
use std::str::FromStr;

use solana_holder_snapshot::common::logging::{self, LogLevel};
use solana_holder_snapshot::{
    write_snapshot, RpcAccountSource, SnapshotConfigBuilder, SnapshotExtractor,
};
use solana_sdk::commitment_config::CommitmentConfig;

/// Mint tracked when `TOKEN_MINT` is not set.
const DEFAULT_TOKEN_MINT: &str = "zebeczgi5fSEtbpfQKVZKCJ3WgYXxjkMUkNNx7fLKAF";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    let rpc_url = env::var("RPC_URL").unwrap_or_default();
    let mint = env::var("TOKEN_MINT").unwrap_or_else(|_| DEFAULT_TOKEN_MINT.to_string());

    let mut builder = SnapshotConfigBuilder::new().with_rpc(rpc_url).mint(mint);
    if let Ok(batch_size) = env::var("BATCH_SIZE") {
        builder = builder.with_batch_size(batch_size.parse()?);
    }
    if let Ok(commitment) = env::var("COMMITMENT") {
        builder = builder.with_commitment(CommitmentConfig::from_str(&commitment)?);
    }
    if let Ok(units_per_token) = env::var("UNITS_PER_TOKEN") {
        builder = builder.with_units_per_token(units_per_token.parse()?);
    }
    if let Ok(include) = env::var("INCLUDE_TOKEN_ACCOUNT") {
        builder = builder.include_token_account(include.parse()?);
    }
    if let Ok(output_path) = env::var("OUTPUT_PATH") {
        builder = builder.with_output_path(output_path);
    }
    let config = builder.build()?;

    let source = RpcAccountSource::new(config.rpc_url.clone(), config.commitment);

    let token_accounts = source.token_accounts_for_mint(&config.mint).await?;
    logging::log(
        LogLevel::Info,
        &format!("token account count: {}", token_accounts.len()),
    );

    let extractor = SnapshotExtractor::from_config(&config);
    let holders = extractor.extract(&token_accounts, &source).await?;
    logging::log(
        LogLevel::Info,
        &format!("holders with amount count: {}", holders.len()),
    );

    write_snapshot(&config.output_path, &holders)?;
    logging::log(
        LogLevel::Success,
        &format!("snapshot written to {}", config.output_path.display()),
    );

    Ok(())
}
