//! BTC Bridge Contract - Custodial Bitcoin Bridge Ledger
//!
//! Oracles attest that Bitcoin was deposited; the bridge mints an
//! equivalent accounting token to a whitelisted recipient. Holders later
//! withdraw (burn) the token against the locked balance.
//!
//! # Deposit Flow
//! 1. Owner registers oracles and whitelists recipients
//! 2. An oracle calls `Deposit` with the Bitcoin transaction id and amount
//! 3. The fee-adjusted amount is minted; the gross amount is locked
//!
//! # Withdraw Flow
//! 1. A holder calls `Withdraw` with an amount
//! 2. The amount is burned and released from the locked total
//!
//! # Security
//! - Oracle authorization on every deposit
//! - Replay protection keyed by Bitcoin transaction id
//! - Recipient whitelist
//! - Emergency pause functionality

pub mod access;
pub mod contract;
pub mod error;
mod execute;
pub mod fee;
pub mod ledger;
pub mod msg;
mod query;
pub mod registry;
pub mod replay;
pub mod state;

pub use crate::error::ContractError;
pub use crate::fee::compute_fee;
