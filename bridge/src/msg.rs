//! Message types for the BTC bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The deployer becomes the owner. Omitted fields fall back to the defaults
/// in [`crate::state`].
#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Fee rate in units of 1/1000 (must be below 100)
    pub fee_rate: Option<u64>,
    /// Deposit ceiling in satoshis (must be in 1..100_000_000)
    pub max_deposit: Option<Uint128>,
    /// Accounting token name
    pub token_name: Option<String>,
    /// Accounting token symbol
    pub token_symbol: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Bridge Operations
    // ========================================================================
    /// Credit a Bitcoin deposit
    ///
    /// Authorization: Oracle only
    ///
    /// Mints the fee-adjusted amount to `recipient` and consumes `tx_id`.
    Deposit {
        /// Bitcoin transaction id (11 to 64 characters)
        tx_id: String,
        /// Gross deposited amount in satoshis
        amount: Uint128,
        /// Whitelisted recipient of the minted tokens
        recipient: String,
    },

    /// Redeem accounting tokens held by the caller
    ///
    /// Authorization: Anyone holding a balance
    Withdraw { amount: Uint128 },

    // ========================================================================
    // Oracle & Whitelist Management
    // ========================================================================
    /// Authorization: Owner only
    AddOracle { account: String },

    /// Authorization: Owner only
    RemoveOracle { account: String },

    /// Authorization: Owner only
    AddToWhitelist { account: String },

    /// Authorization: Owner only
    RemoveFromWhitelist { account: String },

    // ========================================================================
    // Bridge Configuration
    // ========================================================================
    /// Halt deposits and withdrawals
    ///
    /// Authorization: Owner only
    PauseBridge {},

    /// Resume deposits and withdrawals
    ///
    /// Authorization: Owner only
    UnpauseBridge {},

    /// Set the fee rate (units of 1/1000, must be below 100)
    ///
    /// Authorization: Owner only
    UpdateBridgeFee { rate: u64 },

    /// Set the deposit ceiling (must be in 1..100_000_000)
    ///
    /// Authorization: Owner only
    UpdateMaxDeposit { max: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the full bridge configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns gross deposits minus withdrawals
    #[returns(TotalLockedResponse)]
    TotalLockedBitcoin {},

    /// Returns the redeemable balance of an account (0 if unknown)
    #[returns(UserBalanceResponse)]
    UserBalance { account: String },

    /// Returns whether an account holds oracle authority
    #[returns(IsOracleResponse)]
    IsOracleAuthorized { account: String },

    /// Returns whether an account may receive deposits
    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { account: String },

    /// Returns whether a Bitcoin transaction id has been consumed
    #[returns(IsProcessedResponse)]
    IsProcessed { tx_id: String },

    /// Fee and net amount for a deposit at the current rate
    #[returns(SimulateDepositResponse)]
    SimulateDeposit { amount: Uint128 },

    /// Active oracles, paginated
    #[returns(AccountsResponse)]
    Oracles {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Whitelisted recipients, paginated
    #[returns(AccountsResponse)]
    WhitelistedAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// CW20-compatible accounting token balance
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// CW20-compatible accounting token info
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},
}

// ============================================================================
// Response Types
// ============================================================================

/// Data attached to a successful deposit
#[cw_serde]
pub struct DepositResponse {
    pub tx_id: String,
    pub fee: Uint128,
    pub net_amount: Uint128,
}

/// Data attached to a successful withdrawal
#[cw_serde]
pub struct WithdrawResponse {
    /// Gross amount debited from balance and total locked
    pub amount: Uint128,
    /// Fee-adjusted amount reported to the holder
    pub net_amount: Uint128,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub fee_rate: u64,
    pub max_deposit: Uint128,
    pub total_locked: Uint128,
}

#[cw_serde]
pub struct TotalLockedResponse {
    pub total_locked: Uint128,
}

#[cw_serde]
pub struct UserBalanceResponse {
    pub account: Addr,
    pub balance: Uint128,
}

#[cw_serde]
pub struct IsOracleResponse {
    pub is_oracle: bool,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub is_whitelisted: bool,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub tx_id: String,
    pub processed: bool,
}

#[cw_serde]
pub struct SimulateDepositResponse {
    pub amount: Uint128,
    pub fee: Uint128,
    pub net_amount: Uint128,
    pub fee_rate: u64,
}

#[cw_serde]
pub struct AccountsResponse {
    pub accounts: Vec<Addr>,
}
