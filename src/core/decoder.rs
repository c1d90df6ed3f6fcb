//! Fixed-layout decoding of SPL token-account records.

use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_token::state::Account as TokenAccount;

use crate::common::error::{Result, SnapshotError};

/// Byte length of an SPL token-account record.
pub const TOKEN_ACCOUNT_LEN: usize = TokenAccount::LEN;

/// Owner and raw balance decoded from one token-account record.
///
/// The amount is the unsigned 64-bit little-endian integer at the layout's
/// fixed offset, kept raw in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTokenAccount {
    pub owner: Pubkey,
    pub amount: u64,
}

/// Decodes the raw bytes of a token-account record.
///
/// Fails on any layout violation: wrong length, corrupt fields, or an
/// uninitialized account.
pub fn decode_token_account(data: &[u8]) -> Result<DecodedTokenAccount> {
    if data.len() != TOKEN_ACCOUNT_LEN {
        return Err(SnapshotError::DecodeError(format!(
            "expected a {TOKEN_ACCOUNT_LEN}-byte token account record, got {} bytes",
            data.len()
        )));
    }

    let account = TokenAccount::unpack(data)
        .map_err(|e| SnapshotError::DecodeError(format!("invalid token account record: {e}")))?;

    Ok(DecodedTokenAccount {
        owner: account.owner,
        amount: account.amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_token::state::AccountState;

    fn packed_record(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
        let state = TokenAccount {
            mint: *mint,
            owner: *owner,
            amount,
            state: AccountState::Initialized,
            ..TokenAccount::default()
        };
        let mut data = vec![0u8; TokenAccount::LEN];
        TokenAccount::pack(state, &mut data).unwrap();
        data
    }

    #[test]
    fn test_decode_round_trips_owner_and_amount() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let data = packed_record(&mint, &owner, 500_000_000_000);

        let decoded = decode_token_account(&data).unwrap();
        assert_eq!(decoded.owner, owner);
        assert_eq!(decoded.amount, 500_000_000_000);
    }

    #[test]
    fn test_decode_preserves_full_u64_range() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let data = packed_record(&mint, &owner, u64::MAX);

        let decoded = decode_token_account(&data).unwrap();
        assert_eq!(decoded.amount, u64::MAX);
    }

    #[test]
    fn test_amount_is_little_endian_at_fixed_offset() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut data = packed_record(&mint, &owner, 0);

        // Amount occupies bytes 64..72 of the layout.
        data[64..72].copy_from_slice(&1234u64.to_le_bytes());

        let decoded = decode_token_account(&data).unwrap();
        assert_eq!(decoded.amount, 1234);
    }

    #[test]
    fn test_wrong_length_is_decode_error() {
        let err = decode_token_account(&[0u8; 64]).unwrap_err();
        assert!(matches!(err, SnapshotError::DecodeError(_)));

        let err = decode_token_account(&[0u8; 200]).unwrap_err();
        assert!(matches!(err, SnapshotError::DecodeError(_)));
    }

    #[test]
    fn test_uninitialized_record_is_decode_error() {
        let err = decode_token_account(&[0u8; TOKEN_ACCOUNT_LEN]).unwrap_err();
        assert!(matches!(err, SnapshotError::DecodeError(_)));
    }
}
