//! Query handlers for the BTC bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Addr, Deps, StdResult, Uint128};

use crate::fee::compute_fee;
use crate::ledger::user_balance;
use crate::msg::{
    AccountsResponse, ConfigResponse, IsOracleResponse, IsProcessedResponse,
    IsWhitelistedResponse, SimulateDepositResponse, TotalLockedResponse, UserBalanceResponse,
};
use crate::registry::{is_authorized, is_whitelisted, list_enabled};
use crate::replay::is_processed;
use crate::state::{BRIDGE_STATE, ORACLES, WHITELIST};

/// Lookup key for a read-only view. Addresses that fail validation cannot
/// have been registered, so they resolve to an empty entry instead of an error.
fn lookup_addr(deps: Deps, account: String) -> Addr {
    deps.api
        .addr_validate(&account)
        .unwrap_or_else(|_| Addr::unchecked(account))
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let state = BRIDGE_STATE.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: state.owner,
        paused: state.paused,
        fee_rate: state.fee_rate,
        max_deposit: state.max_deposit,
        total_locked: state.total_locked,
    })
}

pub fn query_total_locked(deps: Deps) -> StdResult<TotalLockedResponse> {
    let state = BRIDGE_STATE.load(deps.storage)?;
    Ok(TotalLockedResponse {
        total_locked: state.total_locked,
    })
}

pub fn query_user_balance(deps: Deps, account: String) -> StdResult<UserBalanceResponse> {
    let account = lookup_addr(deps, account);
    let balance = user_balance(deps.storage, &account)?;
    Ok(UserBalanceResponse { account, balance })
}

/// Fee split for a hypothetical deposit at the current rate.
pub fn query_simulate_deposit(deps: Deps, amount: Uint128) -> StdResult<SimulateDepositResponse> {
    let state = BRIDGE_STATE.load(deps.storage)?;
    let (fee, net_amount) = compute_fee(amount, state.fee_rate);
    Ok(SimulateDepositResponse {
        amount,
        fee,
        net_amount,
        fee_rate: state.fee_rate,
    })
}

// ============================================================================
// Guard Queries
// ============================================================================

pub fn query_is_oracle(deps: Deps, account: String) -> StdResult<IsOracleResponse> {
    let account = lookup_addr(deps, account);
    Ok(IsOracleResponse {
        is_oracle: is_authorized(deps.storage, &account)?,
    })
}

pub fn query_is_whitelisted(deps: Deps, account: String) -> StdResult<IsWhitelistedResponse> {
    let account = lookup_addr(deps, account);
    Ok(IsWhitelistedResponse {
        is_whitelisted: is_whitelisted(deps.storage, &account)?,
    })
}

pub fn query_is_processed(deps: Deps, tx_id: String) -> StdResult<IsProcessedResponse> {
    let processed = is_processed(deps.storage, &tx_id)?;
    Ok(IsProcessedResponse { tx_id, processed })
}

// ============================================================================
// Enumeration Queries
// ============================================================================

pub fn query_oracles(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AccountsResponse> {
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let accounts = list_enabled(deps.storage, &ORACLES, start.as_ref(), limit)?;
    Ok(AccountsResponse { accounts })
}

pub fn query_whitelisted_accounts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AccountsResponse> {
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let accounts = list_enabled(deps.storage, &WHITELIST, start.as_ref(), limit)?;
    Ok(AccountsResponse { accounts })
}
