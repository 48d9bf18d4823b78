//! Replay protection keyed by the external (Bitcoin) transaction id.

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::PROCESSED_TXS;

/// Longest transaction id accepted
pub const MAX_TX_ID_LEN: usize = 64;

/// Transaction ids must be strictly longer than this
pub const MIN_TX_ID_LEN: usize = 10;

/// Shape check for an external transaction id.
pub fn validate_tx_id(tx_id: &str) -> Result<(), ContractError> {
    let len = tx_id.chars().count();
    if len <= MIN_TX_ID_LEN || len > MAX_TX_ID_LEN {
        return Err(ContractError::InvalidTxHash);
    }
    Ok(())
}

pub fn is_processed(storage: &dyn Storage, tx_id: &str) -> StdResult<bool> {
    Ok(PROCESSED_TXS.may_load(storage, tx_id)?.unwrap_or(false))
}

/// Marks `tx_id` as consumed. Re-marking is a no-op; callers check
/// [`is_processed`] first.
pub fn mark_processed(storage: &mut dyn Storage, tx_id: &str) -> StdResult<()> {
    PROCESSED_TXS.save(storage, tx_id, &true)
}
