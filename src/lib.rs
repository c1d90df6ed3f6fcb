//! Batched snapshot extraction of SPL token holder balances.
//!
//! Enumerates every token account of a configured mint, fetches the raw
//! records in sequential fixed-size batches, decodes owner and balance from
//! the token-account layout, and keeps the non-zero holders for a flat JSON
//! snapshot document.

pub mod common;
pub mod config;
pub mod core;
pub mod snapshot;
pub mod sources;

pub use crate::common::error::{Result, SnapshotError};
pub use crate::config::{SnapshotConfig, SnapshotConfigBuilder};
pub use crate::core::decoder::{decode_token_account, DecodedTokenAccount, TOKEN_ACCOUNT_LEN};
pub use crate::core::extractor::{format_amount, AccountFetcher, SnapshotExtractor};
pub use crate::snapshot::{write_snapshot, HolderEntry};
pub use crate::sources::rpc::RpcAccountSource;
