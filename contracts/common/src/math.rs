//! Checked integer helpers. Every division floors toward zero, which for the
//! non-negative amounts used throughout the suite means rounding down.

use crate::{constants::BP_DIVISOR, Error};

/// `floor(a * b / c)` with overflow reported as [`Error::Overflow`].
pub fn mul_div(a: i128, b: i128, c: i128) -> Result<i128, Error> {
    if c == 0 {
        return Err(Error::Overflow);
    }
    a.checked_mul(b)
        .map(|p| p / c)
        .ok_or(Error::Overflow)
}

/// Basis-point share of `amount`, rounded down.
pub fn bp_of(amount: i128, bp: u32) -> Result<i128, Error> {
    mul_div(amount, bp as i128, BP_DIVISOR)
}

/// Split `amount` into `(fee, remainder)` at `bp` basis points.
pub fn split_fee(amount: i128, bp: u32) -> Result<(i128, i128), Error> {
    let fee = bp_of(amount, bp)?;
    Ok((fee, amount - fee))
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

pub fn sum(amounts: &soroban_sdk::Vec<i128>) -> Result<i128, Error> {
    let mut total = 0i128;
    for amount in amounts.iter() {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        total = checked_add(total, amount)?;
    }
    Ok(total)
}
