#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

/// Fired when airdropped shares are minted as locked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockedEvent {
    pub account: Address,
    pub amount: i128,
    pub locked_balance: i128,
    pub timestamp: u64,
}

/// Fired when locked shares are released against a base-asset payment.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockedEvent {
    pub account: Address,
    pub released: i128,
    pub payment: i128,
    pub timestamp: u64,
}

pub fn publish_locked(env: &Env, account: Address, amount: i128, locked_balance: i128) {
    env.events().publish(
        (symbol_short!("LOCKED"), account.clone()),
        LockedEvent {
            account,
            amount,
            locked_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unlocked(env: &Env, account: Address, released: i128, payment: i128) {
    env.events().publish(
        (symbol_short!("UNLOCKED"), account.clone()),
        UnlockedEvent {
            account,
            released,
            payment,
            timestamp: env.ledger().timestamp(),
        },
    );
}
