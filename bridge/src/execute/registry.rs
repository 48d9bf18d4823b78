//! Oracle and whitelist management handlers.
//!
//! Removal writes `false` instead of deleting the entry.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{require_owner, validate_account};
use crate::error::ContractError;
use crate::registry::{set_oracle, set_whitelisted};
use crate::state::BRIDGE_STATE;

// ============================================================================
// Oracle Management
// ============================================================================

/// Grant or revoke oracle authority.
pub fn execute_set_oracle(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    let state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;

    let oracle = validate_account(deps.api, &info.sender, &account)?;
    set_oracle(deps.storage, &oracle, authorized)?;

    let action = if authorized { "add_oracle" } else { "remove_oracle" };
    Ok(Response::new()
        .add_attribute("method", action)
        .add_attribute("oracle", oracle))
}

// ============================================================================
// Whitelist Management
// ============================================================================

/// Allow or disallow an account as deposit recipient.
pub fn execute_set_whitelisted(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    allowed: bool,
) -> Result<Response, ContractError> {
    let state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;

    let account = validate_account(deps.api, &info.sender, &account)?;
    set_whitelisted(deps.storage, &account, allowed)?;

    let action = if allowed {
        "add_to_whitelist"
    } else {
        "remove_from_whitelist"
    };
    Ok(Response::new()
        .add_attribute("method", action)
        .add_attribute("account", account))
}
