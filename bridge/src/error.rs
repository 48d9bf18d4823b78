//! Error types for the BTC bridge contract
//!
//! Every business and administrative failure maps onto one of nine stable
//! numeric codes, exposed through [`ContractError::code`].

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks the required role")]
    NotAuthorized,

    #[error("Oracle validation failed")]
    OracleValidationFailed,

    // ========================================================================
    // Amount & Balance Errors
    // ========================================================================

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Maximum deposit exceeded")]
    MaxDepositExceeded,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Transaction already processed")]
    TransactionAlreadyProcessed,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid recipient")]
    InvalidRecipient,

    #[error("Invalid transaction hash")]
    InvalidTxHash,
}

impl ContractError {
    /// Stable numeric identifier for the error.
    ///
    /// Framework errors (`Std`) fall outside the bridge taxonomy and report 0.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Std(_) => 0,
            ContractError::NotAuthorized => 1,
            ContractError::InvalidAmount => 2,
            ContractError::InsufficientBalance => 3,
            ContractError::BridgePaused => 4,
            ContractError::TransactionAlreadyProcessed => 5,
            ContractError::OracleValidationFailed => 6,
            ContractError::InvalidRecipient => 7,
            ContractError::MaxDepositExceeded => 8,
            ContractError::InvalidTxHash => 9,
        }
    }
}
