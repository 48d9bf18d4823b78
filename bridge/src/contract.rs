//! BTC Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_pause, execute_set_oracle, execute_set_whitelisted, execute_unpause,
    execute_update_fee, execute_update_max_deposit, execute_withdraw,
};
use crate::fee::{validate_fee_rate, validate_max_deposit};
use crate::ledger::init_token;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_is_oracle, query_is_processed, query_is_whitelisted, query_oracles,
    query_simulate_deposit, query_total_locked, query_user_balance, query_whitelisted_accounts,
};
use crate::state::{
    BridgeState, BRIDGE_STATE, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_FEE_RATE,
    DEFAULT_MAX_DEPOSIT, DEFAULT_TOKEN_NAME, DEFAULT_TOKEN_SYMBOL,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let fee_rate = msg.fee_rate.unwrap_or(DEFAULT_FEE_RATE);
    validate_fee_rate(fee_rate)?;

    let max_deposit = msg
        .max_deposit
        .unwrap_or_else(|| Uint128::from(DEFAULT_MAX_DEPOSIT));
    validate_max_deposit(max_deposit)?;

    // Deployer owns the bridge
    let state = BridgeState {
        owner: info.sender,
        paused: false,
        fee_rate,
        max_deposit,
        total_locked: Uint128::zero(),
    };
    BRIDGE_STATE.save(deps.storage, &state)?;

    init_token(
        deps.storage,
        msg.token_name.unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string()),
        msg.token_symbol.unwrap_or_else(|| DEFAULT_TOKEN_SYMBOL.to_string()),
        env.contract.address,
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", state.owner)
        .add_attribute("fee_rate", fee_rate.to_string())
        .add_attribute("max_deposit", max_deposit.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge operations
        ExecuteMsg::Deposit {
            tx_id,
            amount,
            recipient,
        } => execute_deposit(deps, info, tx_id, amount, recipient),
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, amount),

        // Oracle & whitelist management
        ExecuteMsg::AddOracle { account } => execute_set_oracle(deps, info, account, true),
        ExecuteMsg::RemoveOracle { account } => execute_set_oracle(deps, info, account, false),
        ExecuteMsg::AddToWhitelist { account } => {
            execute_set_whitelisted(deps, info, account, true)
        }
        ExecuteMsg::RemoveFromWhitelist { account } => {
            execute_set_whitelisted(deps, info, account, false)
        }

        // Bridge configuration
        ExecuteMsg::PauseBridge {} => execute_pause(deps, info),
        ExecuteMsg::UnpauseBridge {} => execute_unpause(deps, info),
        ExecuteMsg::UpdateBridgeFee { rate } => execute_update_fee(deps, info, rate),
        ExecuteMsg::UpdateMaxDeposit { max } => execute_update_max_deposit(deps, info, max),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TotalLockedBitcoin {} => to_json_binary(&query_total_locked(deps)?),
        QueryMsg::UserBalance { account } => to_json_binary(&query_user_balance(deps, account)?),
        QueryMsg::IsOracleAuthorized { account } => {
            to_json_binary(&query_is_oracle(deps, account)?)
        }
        QueryMsg::IsWhitelisted { account } => {
            to_json_binary(&query_is_whitelisted(deps, account)?)
        }
        QueryMsg::IsProcessed { tx_id } => to_json_binary(&query_is_processed(deps, tx_id)?),
        QueryMsg::SimulateDeposit { amount } => {
            to_json_binary(&query_simulate_deposit(deps, amount)?)
        }
        QueryMsg::Oracles { start_after, limit } => {
            to_json_binary(&query_oracles(deps, start_after, limit)?)
        }
        QueryMsg::WhitelistedAccounts { start_after, limit } => {
            to_json_binary(&query_whitelisted_accounts(deps, start_after, limit)?)
        }

        // CW20-compatible token views
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
