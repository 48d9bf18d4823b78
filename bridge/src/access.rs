//! Ownership check and the account validity filter.

use cosmwasm_std::{Addr, Api};

use crate::error::ContractError;
use crate::state::BridgeState;

/// Fails with `NotAuthorized` unless `caller` is the bridge owner.
pub fn require_owner(state: &BridgeState, caller: &Addr) -> Result<(), ContractError> {
    if *caller != state.owner {
        return Err(ContractError::NotAuthorized);
    }
    Ok(())
}

/// Validates a target account for registry writes and deposit recipients.
///
/// Empty or malformed addresses are rejected, and so is an account equal to
/// the calling address. The second rule also blocks the owner from
/// registering itself and an oracle from depositing to itself.
pub fn validate_account(api: &dyn Api, caller: &Addr, account: &str) -> Result<Addr, ContractError> {
    let addr = api
        .addr_validate(account)
        .map_err(|_| ContractError::InvalidRecipient)?;
    if addr == *caller {
        return Err(ContractError::InvalidRecipient);
    }
    Ok(addr)
}
