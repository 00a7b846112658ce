#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub depositor: Address,
    pub value: i128,
    pub shares: i128,
    pub timestamp: u64,
}

/// `leftover` is the reserve burned on close; negative when it was minted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClosedEvent {
    pub deposited: i128,
    pub paired: i128,
    pub liquidity_shares: i128,
    pub leftover: i128,
    pub timestamp: u64,
}

pub fn publish_deposit(env: &Env, depositor: Address, value: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), depositor.clone()),
        DepositEvent {
            depositor,
            value,
            shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_closed(env: &Env, deposited: i128, paired: i128, liquidity_shares: i128, leftover: i128) {
    env.events().publish(
        (symbol_short!("CLOSED"),),
        ClosedEvent {
            deposited,
            paired,
            liquidity_shares,
            leftover,
            timestamp: env.ledger().timestamp(),
        },
    );
}
