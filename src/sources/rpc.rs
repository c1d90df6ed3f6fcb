//! RPC-backed account source.
//!
//! Two collaborators live here: the one-shot program-account query that
//! enumerates every token account of a mint, and the batched multi-account
//! fetch consumed by the extractor. Transport failures propagate unretried.

use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::common::error::{Result, SnapshotError};
use crate::core::decoder::TOKEN_ACCOUNT_LEN;
use crate::core::extractor::AccountFetcher;

/// Account source backed by a Solana JSON-RPC endpoint.
pub struct RpcAccountSource {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcAccountSource {
    /// Creates a source reading at the given commitment level.
    pub fn new(rpc_url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url.into(), commitment),
            commitment,
        }
    }

    /// Enumerates every token account of `mint`.
    ///
    /// One `getProgramAccounts` call against the SPL Token program, filtered
    /// to 165-byte records whose bytes at offset 0 match the mint. Addresses
    /// come back in RPC response order.
    pub async fn token_accounts_for_mint(&self, mint: &Pubkey) -> Result<Vec<Pubkey>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![
                RpcFilterType::DataSize(TOKEN_ACCOUNT_LEN as u64),
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(0, &mint.to_bytes())),
            ]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };

        let accounts = self
            .client
            .get_program_accounts_with_config(&spl_token::id(), config)
            .await
            .map_err(|e| SnapshotError::RpcError(format!("getProgramAccounts failed: {e}")))?;

        Ok(accounts.into_iter().map(|(address, _)| address).collect())
    }
}

#[async_trait]
impl AccountFetcher for RpcAccountSource {
    async fn fetch_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>> {
        let response = self
            .client
            .get_multiple_accounts_with_commitment(addresses, self.commitment)
            .await
            .map_err(|e| SnapshotError::RpcError(format!("getMultipleAccounts failed: {e}")))?;

        Ok(response.value)
    }
}
