//! Deposit and withdraw handlers.
//!
//! Each handler runs every precondition before its first write; any `Err`
//! also discards all writes of the call, so a rejected transition leaves no
//! trace in the ledger, the replay set, or `total_locked`.

use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, StdError, Uint128};

use crate::access::validate_account;
use crate::error::ContractError;
use crate::fee::compute_fee;
use crate::ledger;
use crate::msg::{DepositResponse, WithdrawResponse};
use crate::registry::{is_whitelisted, validate_attestation};
use crate::replay::{is_processed, mark_processed, validate_tx_id};
use crate::state::BRIDGE_STATE;

// ============================================================================
// Deposit / Oracle
// ============================================================================

/// Credit a Bitcoin deposit attested by the calling oracle.
///
/// Check order: tx id shape, amount, ceiling, recipient validity, whitelist,
/// pause, replay, oracle authority. The gross amount is locked and the net
/// amount is minted.
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;

    validate_tx_id(&tx_id)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    if amount > state.max_deposit {
        return Err(ContractError::MaxDepositExceeded);
    }

    let recipient = validate_account(deps.api, &info.sender, &recipient)?;
    if !is_whitelisted(deps.storage, &recipient)? {
        return Err(ContractError::InvalidRecipient);
    }

    if state.paused {
        return Err(ContractError::BridgePaused);
    }

    if is_processed(deps.storage, &tx_id)? {
        return Err(ContractError::TransactionAlreadyProcessed);
    }

    validate_attestation(deps.storage, &info.sender, &tx_id, amount)?;

    let (fee, net_amount) = compute_fee(amount, state.fee_rate);

    ledger::issue(deps.storage, &recipient, net_amount)?;
    mark_processed(deps.storage, &tx_id)?;

    state.total_locked = state.total_locked.checked_add(amount).map_err(StdError::overflow)?;
    BRIDGE_STATE.save(deps.storage, &state)?;

    let data = DepositResponse {
        tx_id: tx_id.clone(),
        fee,
        net_amount,
    };

    Ok(Response::new()
        .set_data(to_json_binary(&data)?)
        .add_attribute("method", "deposit")
        .add_attribute("tx_id", tx_id)
        .add_attribute("oracle", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("net_amount", net_amount.to_string())
        .add_attribute("total_locked", state.total_locked.to_string()))
}

// ============================================================================
// Withdraw / Holder
// ============================================================================

/// Redeem `amount` accounting tokens held by the caller.
///
/// The gross amount is burned and released from `total_locked`; the
/// reported net amount is informational and is not deducted separately.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut state = BRIDGE_STATE.load(deps.storage)?;
    if state.paused {
        return Err(ContractError::BridgePaused);
    }

    if ledger::user_balance(deps.storage, &info.sender)? < amount {
        return Err(ContractError::InsufficientBalance);
    }

    let (fee, net_amount) = compute_fee(amount, state.fee_rate);

    ledger::destroy(deps.storage, &info.sender, amount)?;

    state.total_locked = state.total_locked.checked_sub(amount).map_err(StdError::overflow)?;
    BRIDGE_STATE.save(deps.storage, &state)?;

    let data = WithdrawResponse { amount, net_amount };

    Ok(Response::new()
        .set_data(to_json_binary(&data)?)
        .add_attribute("method", "withdraw")
        .add_attribute("holder", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("net_amount", net_amount.to_string())
        .add_attribute("total_locked", state.total_locked.to_string()))
}
