//! State definitions for the BTC bridge contract
//!
//! The accounting token itself lives in the cw20-base storage layout
//! (`balance`, `token_info`); see [`crate::ledger`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Process-wide bridge state
#[cw_serde]
pub struct BridgeState {
    /// Owner address, set to the deployer at instantiate
    pub owner: Addr,
    /// Whether deposits and withdrawals are currently halted
    pub paused: bool,
    /// Fee in units of 1/1000 (e.g., 10 = 1.0%)
    pub fee_rate: u64,
    /// Largest single deposit accepted (in satoshis)
    pub max_deposit: Uint128,
    /// Gross deposits minus withdrawals
    pub total_locked: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:btc-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default fee rate (1.0%)
pub const DEFAULT_FEE_RATE: u64 = 10;

/// Default deposit ceiling (0.1 BTC)
pub const DEFAULT_MAX_DEPOSIT: u128 = 10_000_000;

/// Accounting token defaults
pub const DEFAULT_TOKEN_NAME: &str = "Bridged Bitcoin";
pub const DEFAULT_TOKEN_SYMBOL: &str = "BBTC";
pub const TOKEN_DECIMALS: u8 = 8;

// ============================================================================
// Storage
// ============================================================================

pub const BRIDGE_STATE: Item<BridgeState> = Item::new("bridge_state");

/// Key: oracle address, Value: whether it holds oracle authority
pub const ORACLES: Map<&Addr, bool> = Map::new("oracles");

/// Key: recipient address, Value: whether it may receive deposits
pub const WHITELIST: Map<&Addr, bool> = Map::new("whitelist");

/// Key: external transaction id, Value: true once consumed (never reset)
pub const PROCESSED_TXS: Map<&str, bool> = Map::new("processed_txs");

/// Key: holder address, Value: redeemable balance
pub const USER_BALANCES: Map<&Addr, Uint128> = Map::new("user_balances");
