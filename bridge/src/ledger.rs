//! Ledger Module
//!
//! Two balances are kept per holder:
//!
//! - the accounting token itself, stored in the cw20-base layout so that
//!   `Balance` and `TokenInfo` answer like any CW20 contract;
//! - `USER_BALANCES`, the redeemable balance checked by withdrawals.
//!
//! Issuance and destruction update both in one step. Bridge backing is
//! tracked separately as `total_locked`, not as token supply.

use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw20_base::state::{MinterData, TokenInfo, BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::state::{TOKEN_DECIMALS, USER_BALANCES};

/// Create the accounting token with the bridge contract as sole minter.
pub fn init_token(
    storage: &mut dyn Storage,
    name: String,
    symbol: String,
    minter: Addr,
) -> StdResult<()> {
    let info = TokenInfo {
        name,
        symbol,
        decimals: TOKEN_DECIMALS,
        total_supply: Uint128::zero(),
        mint: Some(MinterData { minter, cap: None }),
    };
    TOKEN_INFO.save(storage, &info)
}

/// Redeemable balance of `account`; zero when never credited.
pub fn user_balance(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(USER_BALANCES.may_load(storage, account)?.unwrap_or_default())
}

/// Mint `amount` accounting tokens to `recipient`.
pub fn issue(storage: &mut dyn Storage, recipient: &Addr, amount: Uint128) -> StdResult<()> {
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(storage, &info)?;

    BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    USER_BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

/// Burn `amount` accounting tokens held by `holder`.
///
/// Fails with `InsufficientBalance` if either balance cannot cover it.
/// A zero amount writes nothing.
pub fn destroy(
    storage: &mut dyn Storage,
    holder: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Ok(());
    }
    let redeemable = user_balance(storage, holder)?;
    let held = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    if redeemable < amount || held < amount {
        return Err(ContractError::InsufficientBalance);
    }

    BALANCES.save(storage, holder, &(held - amount))?;
    USER_BALANCES.save(storage, holder, &(redeemable - amount))?;

    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::overflow)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(())
}
