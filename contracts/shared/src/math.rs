//! Fixed-point helpers shared by the pool, the market and the router.
//!
//! All divisions truncate toward zero unless the function name says otherwise.

use crate::constants::{
    BPS_DENOMINATOR, EXCHANGE_RATE_SCALE, PERCENT_TOTAL, SECONDS_PER_YEAR,
};
use crate::errors::Error;
use crate::types::Amount;

/// Underlying value of `c_tokens` at `exchange_rate`.
pub fn c_token_to_underlying(c_tokens: Amount, exchange_rate: i128) -> Result<Amount, Error> {
    c_tokens
        .checked_mul(exchange_rate)
        .map(|v| v / EXCHANGE_RATE_SCALE)
        .ok_or(Error::Overflow)
}

/// cTokens received for depositing `amount` of underlying.
pub fn underlying_to_c_token(amount: Amount, exchange_rate: i128) -> Result<Amount, Error> {
    if exchange_rate <= 0 {
        return Err(Error::InvRate);
    }
    amount
        .checked_mul(EXCHANGE_RATE_SCALE)
        .map(|v| v / exchange_rate)
        .ok_or(Error::Overflow)
}

/// cTokens that must be burned to withdraw `amount` of underlying.
pub fn underlying_to_c_token_ceil(amount: Amount, exchange_rate: i128) -> Result<Amount, Error> {
    if exchange_rate <= 0 {
        return Err(Error::InvRate);
    }
    let scaled = amount
        .checked_mul(EXCHANGE_RATE_SCALE)
        .ok_or(Error::Overflow)?;
    let c_tokens = scaled / exchange_rate;
    if scaled % exchange_rate == 0 {
        Ok(c_tokens)
    } else {
        c_tokens.checked_add(1).ok_or(Error::Overflow)
    }
}

/// Interest generated by a position; never negative.
pub fn generated_interest(
    principal: Amount,
    c_tokens: Amount,
    exchange_rate: i128,
) -> Result<Amount, Error> {
    let value = c_token_to_underlying(c_tokens, exchange_rate)?;
    Ok(value.saturating_sub(principal).max(0))
}

/// `amount * percentage / 100`
pub fn percentage_of(amount: Amount, percentage: u32) -> Result<Amount, Error> {
    amount
        .checked_mul(percentage as i128)
        .map(|v| v / PERCENT_TOTAL as i128)
        .ok_or(Error::Overflow)
}

/// Exchange rate after `elapsed` seconds of linear accrual at `supply_rate_bps` a year.
pub fn accrue_exchange_rate(
    exchange_rate: i128,
    supply_rate_bps: u32,
    elapsed: u64,
) -> Result<i128, Error> {
    let growth = exchange_rate
        .checked_mul(supply_rate_bps as i128)
        .and_then(|v| v.checked_mul(elapsed as i128))
        .map(|v| v / (BPS_DENOMINATOR * SECONDS_PER_YEAR as i128))
        .ok_or(Error::Overflow)?;
    exchange_rate.checked_add(growth).ok_or(Error::Overflow)
}

/// Scale a whole-token amount to base units, e.g. `scale_units(10, 7) == 100_000_000`.
pub fn scale_units(amount: i128, decimals: u32) -> Result<Amount, Error> {
    10i128
        .checked_pow(decimals)
        .and_then(|unit| amount.checked_mul(unit))
        .ok_or(Error::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE_105: i128 = 1_050_000_000_000_000_000;

    #[test]
    fn test_conversion_at_initial_rate_is_identity() {
        assert_eq!(c_token_to_underlying(1_000, EXCHANGE_RATE_SCALE), Ok(1_000));
        assert_eq!(underlying_to_c_token(1_000, EXCHANGE_RATE_SCALE), Ok(1_000));
    }

    #[test]
    fn test_mint_rounds_down_and_burn_rounds_up() {
        // 1_000 / 1.05 = 952.38
        assert_eq!(underlying_to_c_token(1_000, RATE_105), Ok(952));
        assert_eq!(underlying_to_c_token_ceil(1_000, RATE_105), Ok(953));
        // exact division does not round up
        assert_eq!(underlying_to_c_token_ceil(1_050, RATE_105), Ok(1_000));
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert_eq!(underlying_to_c_token(1, 0), Err(Error::InvRate));
        assert_eq!(underlying_to_c_token_ceil(1, -1), Err(Error::InvRate));
    }

    #[test]
    fn test_generated_interest_clamps_at_zero() {
        assert_eq!(generated_interest(1_000, 1_000, RATE_105), Ok(50));
        assert_eq!(generated_interest(1_000, 999, EXCHANGE_RATE_SCALE), Ok(0));
    }

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(percentage_of(16_666, 33), Ok(5_499));
        assert_eq!(percentage_of(16_666, 1), Ok(166));
        assert_eq!(percentage_of(50_000_000_000, 23), Ok(11_500_000_000));
    }

    #[test]
    fn test_one_year_at_five_percent() {
        let rate = accrue_exchange_rate(EXCHANGE_RATE_SCALE, 500, SECONDS_PER_YEAR).unwrap();
        assert_eq!(rate, RATE_105);
        assert_eq!(accrue_exchange_rate(rate, 500, 0), Ok(rate));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(c_token_to_underlying(i128::MAX, RATE_105), Err(Error::Overflow));
        assert_eq!(scale_units(1, 40), Err(Error::Overflow));
    }

    #[test]
    fn test_scale_units() {
        assert_eq!(scale_units(3_000, 7), Ok(30_000_000_000));
        assert_eq!(scale_units(5, 0), Ok(5));
    }
}
