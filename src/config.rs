//! Snapshot run configuration.
//!
//! Built through [`SnapshotConfigBuilder`], which validates everything up
//! front so a bad setting fails before any network activity.

use std::path::PathBuf;
use std::str::FromStr;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::common::error::{Result, SnapshotError};

/// Default number of addresses per multi-account lookup.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default snapshot destination.
pub const DEFAULT_OUTPUT_PATH: &str = "holders.json";

/// Validated configuration for a snapshot run.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// HTTP RPC endpoint URL.
    pub rpc_url: String,
    /// Mint whose token accounts are enumerated.
    pub mint: Pubkey,
    /// Number of addresses per multi-account lookup.
    pub batch_size: usize,
    /// Commitment level passed through to account reads.
    pub commitment: CommitmentConfig,
    /// Base units per whole token. When set, amounts are normalized to
    /// decimal strings; when unset, raw base-unit integers are emitted.
    pub units_per_token: Option<u64>,
    /// Whether each output entry carries its token-account address.
    pub include_token_account: bool,
    /// Destination of the snapshot JSON document.
    pub output_path: PathBuf,
}

impl SnapshotConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> SnapshotConfigBuilder {
        SnapshotConfigBuilder::new()
    }
}

/// Builder for [`SnapshotConfig`].
#[derive(Debug, Default)]
pub struct SnapshotConfigBuilder {
    rpc_url: Option<String>,
    mint: Option<String>,
    batch_size: Option<usize>,
    commitment: Option<CommitmentConfig>,
    units_per_token: Option<u64>,
    include_token_account: bool,
    output_path: Option<PathBuf>,
}

impl SnapshotConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the RPC endpoint URL. Required.
    #[must_use]
    pub fn with_rpc(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Sets the tracked token mint. Required.
    #[must_use]
    pub fn mint(mut self, mint: impl Into<String>) -> Self {
        self.mint = Some(mint.into());
        self
    }

    /// Sets the multi-account lookup batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Sets the commitment level for account reads.
    #[must_use]
    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Normalizes amounts by the given base-units-per-token divisor.
    #[must_use]
    pub fn with_units_per_token(mut self, units_per_token: u64) -> Self {
        self.units_per_token = Some(units_per_token);
        self
    }

    /// Includes the token-account address in each output entry.
    #[must_use]
    pub fn include_token_account(mut self, include: bool) -> Self {
        self.include_token_account = include;
        self
    }

    /// Sets the snapshot output path.
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Validates the settings and produces the configuration.
    pub fn build(self) -> Result<SnapshotConfig> {
        let rpc_url = self
            .rpc_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| SnapshotError::ConfigError("missing RPC URL".to_string()))?;

        let mint_str = self
            .mint
            .filter(|mint| !mint.is_empty())
            .ok_or_else(|| SnapshotError::ConfigError("missing token mint".to_string()))?;
        let mint = Pubkey::from_str(&mint_str).map_err(|e| {
            SnapshotError::ConfigError(format!("invalid token mint {mint_str}: {e}"))
        })?;

        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(SnapshotError::ConfigError(
                "batch size must be greater than zero".to_string(),
            ));
        }

        if self.units_per_token == Some(0) {
            return Err(SnapshotError::ConfigError(
                "units per token must be greater than zero".to_string(),
            ));
        }

        Ok(SnapshotConfig {
            rpc_url,
            mint,
            batch_size,
            commitment: self.commitment.unwrap_or_else(CommitmentConfig::confirmed),
            units_per_token: self.units_per_token,
            include_token_account: self.include_token_account,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        })
    }
}
