//! Batched extraction of token holder balances.
//!
//! The extractor partitions an address list into fixed-size batches, runs
//! one lookup per batch strictly in sequence, decodes every record, and
//! keeps the non-zero holders in batch order. Any missing account, short
//! lookup response or undecodable record aborts the whole run.

use async_trait::async_trait;
use rust_decimal::Decimal;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;

use crate::common::error::{Result, SnapshotError};
use crate::common::logging::{self, LogLevel};
use crate::config::SnapshotConfig;
use crate::core::decoder::decode_token_account;
use crate::snapshot::HolderEntry;

/// Batched account lookup.
///
/// Implementations must return exactly one result per requested address,
/// in request order, with `None` marking an address that does not exist.
#[async_trait]
pub trait AccountFetcher {
    async fn fetch_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>>;
}

/// Decoded holder before filtering. Amounts stay in raw base units here;
/// formatting happens only after the zero filter.
struct RawHolder {
    owner: Pubkey,
    token_account: Pubkey,
    amount: u64,
}

/// Extracts holder balances for a list of token accounts.
#[derive(Debug, Clone)]
pub struct SnapshotExtractor {
    batch_size: usize,
    units_per_token: Option<u64>,
    include_token_account: bool,
}

impl SnapshotExtractor {
    /// Creates an extractor. `batch_size` must be greater than zero.
    #[must_use]
    pub fn new(batch_size: usize, units_per_token: Option<u64>, include_token_account: bool) -> Self {
        Self {
            batch_size,
            units_per_token,
            include_token_account,
        }
    }

    /// Creates an extractor from a validated configuration.
    #[must_use]
    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(
            config.batch_size,
            config.units_per_token,
            config.include_token_account,
        )
    }

    /// Fetches, decodes and filters balances for every address.
    ///
    /// Batches run one after another; the accumulated holders survive only
    /// if every batch succeeds. An empty address list yields an empty
    /// snapshot.
    pub async fn extract<F>(&self, addresses: &[Pubkey], fetcher: &F) -> Result<Vec<HolderEntry>>
    where
        F: AccountFetcher + ?Sized,
    {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let batch_count = addresses.len().div_ceil(self.batch_size);
        logging::log(LogLevel::Info, &format!("chunk count: {batch_count}"));

        let mut holders = Vec::with_capacity(addresses.len());
        for (index, batch) in addresses.chunks(self.batch_size).enumerate() {
            logging::log(
                LogLevel::Info,
                &format!("fetching data - chunk {} of {batch_count}", index + 1),
            );

            let records = fetcher.fetch_accounts(batch).await?;
            if records.len() != batch.len() {
                return Err(SnapshotError::MalformedResponse {
                    requested: batch.len(),
                    received: records.len(),
                });
            }

            for (address, record) in batch.iter().zip(records) {
                let account =
                    record.ok_or_else(|| SnapshotError::MissingAccount(address.to_string()))?;
                let decoded = decode_token_account(&account.data)?;
                holders.push(RawHolder {
                    owner: decoded.owner,
                    token_account: *address,
                    amount: decoded.amount,
                });
            }
        }

        Ok(holders
            .into_iter()
            .filter(|holder| holder.amount != 0)
            .map(|holder| self.to_entry(&holder))
            .collect())
    }

    fn to_entry(&self, holder: &RawHolder) -> HolderEntry {
        HolderEntry {
            owner: holder.owner.to_string(),
            token_account: self
                .include_token_account
                .then(|| holder.token_account.to_string()),
            amount: format_amount(holder.amount, self.units_per_token),
        }
    }
}

/// Renders a raw base-unit amount as its output string.
///
/// With a divisor the value is divided in exact decimal arithmetic and
/// trailing zeros are stripped; without one the raw integer is kept.
#[must_use]
pub fn format_amount(raw_amount: u64, units_per_token: Option<u64>) -> String {
    match units_per_token {
        Some(divisor) => (Decimal::from(raw_amount) / Decimal::from(divisor))
            .normalize()
            .to_string(),
        None => raw_amount.to_string(),
    }
}
