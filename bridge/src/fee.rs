//! Fee Calculator Module
//!
//! Fees are expressed in units of 1/1000 of the amount, so a rate of 10
//! charges 1.0%. Rates must stay strictly below [`MAX_FEE_RATE`].
//!
//! | Rate | Fee on 1000 | Net |
//! |------|-------------|-----|
//! | 0    | 0           | 1000 |
//! | 10   | 10          | 990 |
//! | 99   | 99          | 901 |

use cosmwasm_std::Uint128;

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Exclusive upper bound for the fee rate
pub const MAX_FEE_RATE: u64 = 100;

/// Fee rate denominator (1000 = 100%)
pub const FEE_DENOMINATOR: u128 = 1000;

/// Exclusive upper bound for the deposit ceiling (1 BTC in satoshis)
pub const MAX_DEPOSIT_CEILING: u128 = 100_000_000;

// ============================================================================
// Fee Calculation
// ============================================================================

/// Split `amount` into `(fee, net)` at the given rate.
///
/// The fee is floored, so small amounts may carry no fee at all.
pub fn compute_fee(amount: Uint128, fee_rate: u64) -> (Uint128, Uint128) {
    let fee = amount.multiply_ratio(fee_rate as u128, FEE_DENOMINATOR);
    // fee <= amount whenever fee_rate <= FEE_DENOMINATOR
    let net = amount.saturating_sub(fee);
    (fee, net)
}

// ============================================================================
// Validation
// ============================================================================

pub fn validate_fee_rate(fee_rate: u64) -> Result<(), ContractError> {
    if fee_rate >= MAX_FEE_RATE {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_max_deposit(max_deposit: Uint128) -> Result<(), ContractError> {
    if max_deposit.is_zero() || max_deposit >= Uint128::from(MAX_DEPOSIT_CEILING) {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_fee_one_percent() {
        let (fee, net) = compute_fee(Uint128::from(1000u128), 10);
        assert_eq!(fee, Uint128::from(10u128));
        assert_eq!(net, Uint128::from(990u128));
    }

    #[test]
    fn test_compute_fee_zero_rate() {
        let (fee, net) = compute_fee(Uint128::from(12_345u128), 0);
        assert_eq!(fee, Uint128::zero());
        assert_eq!(net, Uint128::from(12_345u128));
    }

    #[test]
    fn test_compute_fee_rounds_down() {
        // 1000 / 10 = 100 is the smallest amount that pays a fee at 1.0%
        let (fee, net) = compute_fee(Uint128::from(99u128), 10);
        assert_eq!(fee, Uint128::zero());
        assert_eq!(net, Uint128::from(99u128));

        let (fee, _) = compute_fee(Uint128::from(100u128), 10);
        assert_eq!(fee, Uint128::one());

        // 19.99 floors to 19
        let (fee, net) = compute_fee(Uint128::from(1999u128), 10);
        assert_eq!(fee, Uint128::from(19u128));
        assert_eq!(net, Uint128::from(1980u128));
    }

    #[test]
    fn test_fee_never_exceeds_amount() {
        let amounts = [0u128, 1, 7, 99, 100, 1000, 99_999_999, u64::MAX as u128];
        for rate in 0..MAX_FEE_RATE {
            for amount in amounts {
                let amount = Uint128::from(amount);
                let (fee, net) = compute_fee(amount, rate);
                assert!(fee <= amount, "rate {} amount {}", rate, amount);
                assert_eq!(net + fee, amount);
            }
        }
    }

    #[test]
    fn test_validate_fee_rate() {
        assert!(validate_fee_rate(0).is_ok());
        assert!(validate_fee_rate(99).is_ok());
        assert_eq!(validate_fee_rate(100).unwrap_err(), ContractError::InvalidAmount);
        assert_eq!(validate_fee_rate(1000).unwrap_err(), ContractError::InvalidAmount);
    }

    #[test]
    fn test_validate_max_deposit() {
        assert!(validate_max_deposit(Uint128::one()).is_ok());
        assert!(validate_max_deposit(Uint128::from(99_999_999u128)).is_ok());
        assert_eq!(
            validate_max_deposit(Uint128::zero()).unwrap_err(),
            ContractError::InvalidAmount
        );
        assert_eq!(
            validate_max_deposit(Uint128::from(100_000_000u128)).unwrap_err(),
            ContractError::InvalidAmount
        );
    }
}
