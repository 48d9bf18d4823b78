//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause bridge
//! - Fee rate and deposit ceiling updates

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::access::require_owner;
use crate::error::ContractError;
use crate::fee::{validate_fee_rate, validate_max_deposit};
use crate::state::BRIDGE_STATE;

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the bridge (stops deposits and withdrawals).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;

    state.paused = true;
    BRIDGE_STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attribute("method", "pause_bridge"))
}

/// Unpause the bridge.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;

    state.paused = false;
    BRIDGE_STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attribute("method", "unpause_bridge"))
}

// ============================================================================
// Fee & Limits
// ============================================================================

pub fn execute_update_fee(
    deps: DepsMut,
    info: MessageInfo,
    rate: u64,
) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;
    validate_fee_rate(rate)?;

    state.fee_rate = rate;
    BRIDGE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "update_bridge_fee")
        .add_attribute("rate", rate.to_string()))
}

pub fn execute_update_max_deposit(
    deps: DepsMut,
    info: MessageInfo,
    max: Uint128,
) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;
    require_owner(&state, &info.sender)?;
    validate_max_deposit(max)?;

    state.max_deposit = max;
    BRIDGE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "update_max_deposit")
        .add_attribute("max", max.to_string()))
}
