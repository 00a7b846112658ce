//! Time-weighted average price of the pair, in main-token per base unit.
//!
//! The cumulative price grows by the spot price times elapsed seconds on
//! every reserve update. Once a full window has passed since the window
//! opened, the next update freezes the window's average and opens a new one.
//! An average older than one window reads as zero.

use soroban_sdk::contracttype;

/// Averaging window, in seconds.
pub const PERIOD: u64 = 300;

/// Fixed-point scale of prices.
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OracleState {
    pub cumulative: i128,
    pub last_update: u64,
    pub window_start: u64,
    pub window_cumulative: i128,
    pub average: i128,
    pub average_at: u64,
}

/// Spot price of one base unit in main-token, scaled by [`PRICE_SCALE`].
pub fn spot_price(token_reserve: i128, base_reserve: i128) -> i128 {
    if base_reserve <= 0 {
        return 0;
    }
    token_reserve
        .checked_mul(PRICE_SCALE)
        .map(|p| p / base_reserve)
        .unwrap_or(0)
}

impl OracleState {
    /// Advance the cumulative price with the reserves held since the last
    /// update, rolling the window when it has run its course.
    pub fn update(&mut self, token_reserve: i128, base_reserve: i128, now: u64) {
        if self.last_update == 0 {
            self.last_update = now;
            self.window_start = now;
            return;
        }
        let elapsed = now.saturating_sub(self.last_update);
        if elapsed > 0 {
            let price = spot_price(token_reserve, base_reserve);
            self.cumulative = self
                .cumulative
                .saturating_add(price.saturating_mul(elapsed as i128));
            self.last_update = now;
        }

        let window = now.saturating_sub(self.window_start);
        if window >= PERIOD {
            self.average = (self.cumulative - self.window_cumulative) / window as i128;
            self.average_at = now;
            self.window_start = now;
            self.window_cumulative = self.cumulative;
        }
    }

    /// Main-token output for `base_amount` at the last average, or zero if
    /// the average is missing or stale.
    pub fn consult(&self, base_amount: i128, now: u64) -> i128 {
        if self.average_at == 0 || now.saturating_sub(self.average_at) >= PERIOD {
            return 0;
        }
        base_amount
            .checked_mul(self.average)
            .map(|v| v / PRICE_SCALE)
            .unwrap_or(0)
    }
}
