//! Reward-per-share arithmetic.
//!
//! Every distribution raises a pool-wide accumulator by
//! `amount * SCALE / total_shares`. An account's pending reward is what it
//! already owed plus its shares times the accumulator growth since its last
//! snapshot. Both divisions floor, so the sum of pending rewards never
//! exceeds what was distributed.

use common::Error;

/// Fixed-point scale of the accumulator.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// New accumulator after distributing `amount` across `total_shares`.
pub fn accumulate(acc_per_share: i128, amount: i128, total_shares: i128) -> Result<i128, Error> {
    if total_shares <= 0 {
        return Err(Error::ZeroTotalSupply);
    }
    let increment = amount
        .checked_mul(SCALE)
        .ok_or(Error::Overflow)?
        / total_shares;
    acc_per_share.checked_add(increment).ok_or(Error::Overflow)
}

/// Accrued-but-unscaled reward growth for `shares` since `snapshot`.
pub fn scaled_delta(shares: i128, acc_per_share: i128, snapshot: i128) -> Result<i128, Error> {
    let growth = acc_per_share.saturating_sub(snapshot);
    shares.checked_mul(growth).ok_or(Error::Overflow)
}

/// Total reward an account can claim right now.
pub fn earned(shares: i128, acc_per_share: i128, snapshot: i128, owed: i128) -> Result<i128, Error> {
    let delta = scaled_delta(shares, acc_per_share, snapshot)? / SCALE;
    owed.checked_add(delta).ok_or(Error::Overflow)
}
