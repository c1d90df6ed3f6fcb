//! Snapshot output model and file writer.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::common::error::Result;

/// One non-zero holder in the final snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolderEntry {
    /// Wallet that owns the token account.
    pub owner: String,
    /// Token-account address, present when configured.
    #[serde(rename = "tokenAccount", skip_serializing_if = "Option::is_none")]
    pub token_account: Option<String>,
    /// Balance as a decimal string, normalized or in raw base units.
    pub amount: String,
}

/// Serializes the snapshot and writes it to `path` in one shot, overwriting
/// any prior file. An empty snapshot produces `[]`.
pub fn write_snapshot(path: &Path, entries: &[HolderEntry]) -> Result<()> {
    let document = serde_json::to_string(entries)?;
    fs::write(path, document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_without_token_account() {
        let entry = HolderEntry {
            owner: "zebeczgi5fSEtbpfQKVZKCJ3WgYXxjkMUkNNx7fLKAF".to_string(),
            token_account: None,
            amount: "500".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"owner":"zebeczgi5fSEtbpfQKVZKCJ3WgYXxjkMUkNNx7fLKAF","amount":"500"}"#
        );
    }

    #[test]
    fn test_entry_serializes_with_token_account() {
        let entry = HolderEntry {
            owner: "owner111".to_string(),
            token_account: Some("account111".to_string()),
            amount: "1234".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"owner":"owner111","tokenAccount":"account111","amount":"1234"}"#
        );
    }

    #[test]
    fn test_empty_snapshot_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holders.json");

        write_snapshot(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_overwrites_prior_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holders.json");
        fs::write(&path, "stale contents").unwrap();

        let entries = vec![HolderEntry {
            owner: "owner111".to_string(),
            token_account: None,
            amount: "1".to_string(),
        }];
        write_snapshot(&path, &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, r#"[{"owner":"owner111","amount":"1"}]"#);
    }
}
