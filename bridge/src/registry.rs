//! Oracle registry and recipient whitelist.
//!
//! Both are total `Addr -> bool` maps: revocation writes `false` rather than
//! removing the entry, and an unknown address reads as `false`.

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Map};

use crate::error::ContractError;
use crate::replay::validate_tx_id;
use crate::state::{ORACLES, WHITELIST};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Oracle Registry
// ============================================================================

pub fn is_authorized(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(ORACLES.may_load(storage, account)?.unwrap_or(false))
}

pub fn set_oracle(storage: &mut dyn Storage, oracle: &Addr, authorized: bool) -> StdResult<()> {
    ORACLES.save(storage, oracle, &authorized)
}

/// Attestation check for a claimed Bitcoin deposit.
///
/// Verification of the Bitcoin transaction itself is mocked: the claim is
/// accepted when the caller currently holds oracle authority and the claim
/// is well formed.
pub fn validate_attestation(
    storage: &dyn Storage,
    caller: &Addr,
    tx_id: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    if !is_authorized(storage, caller)? {
        return Err(ContractError::NotAuthorized);
    }
    validate_tx_id(tx_id)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

// ============================================================================
// Whitelist
// ============================================================================

pub fn is_whitelisted(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(WHITELIST.may_load(storage, account)?.unwrap_or(false))
}

pub fn set_whitelisted(storage: &mut dyn Storage, account: &Addr, allowed: bool) -> StdResult<()> {
    WHITELIST.save(storage, account, &allowed)
}

// ============================================================================
// Enumeration
// ============================================================================

/// Lists addresses currently set to `true`, ascending, after `start_after`.
pub fn list_enabled<'a>(
    storage: &dyn Storage,
    map: &Map<'a, &'a Addr, bool>,
    start_after: Option<&'a Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    map.range(storage, start, None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
        .take(limit)
        .map(|item| item.map(|(addr, _)| addr))
        .collect()
}
