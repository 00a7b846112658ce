#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityEvent {
    pub account: Address,
    pub token: i128,
    pub base: i128,
    pub shares: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapEvent {
    pub from: Address,
    pub base_in: bool,
    pub amount_in: i128,
    pub amount_out: i128,
    pub timestamp: u64,
}

pub fn publish_liquidity_added(env: &Env, to: Address, token: i128, base: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("LIQ_ADD"), to.clone()),
        LiquidityEvent {
            account: to,
            token,
            base,
            shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_liquidity_removed(env: &Env, from: Address, shares: i128, token: i128, base: i128) {
    env.events().publish(
        (symbol_short!("LIQ_REM"), from.clone()),
        LiquidityEvent {
            account: from,
            token,
            base,
            shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_swap(env: &Env, from: Address, base_in: bool, amount_in: i128, amount_out: i128) {
    env.events().publish(
        (symbol_short!("SWAP"), from.clone()),
        SwapEvent {
            from,
            base_in,
            amount_in,
            amount_out,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_shares_transferred(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("LP_XFER"), from, to), amount);
}

pub fn publish_sync(env: &Env, token_reserve: i128, base_reserve: i128) {
    env.events()
        .publish((symbol_short!("SYNC"),), (token_reserve, base_reserve));
}
