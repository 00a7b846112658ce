#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired when pool shares are created for an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesMintedEvent {
    pub account: Address,
    pub amount: i128,
    pub new_total_shares: i128,
    pub timestamp: u64,
}

/// Fired when pool shares are destroyed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesBurnedEvent {
    pub account: Address,
    pub amount: i128,
    pub new_total_shares: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesTransferredEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovedEvent {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when reward is spread over shareholders.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub from: Address,
    pub amount: i128,
    pub acc_per_share: i128,
    pub timestamp: u64,
}

/// Fired when an account's owed reward is released for payout or compounding.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsTakenEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_minted(env: &Env, account: Address, amount: i128, new_total_shares: i128) {
    env.events().publish(
        (symbol_short!("MINTED"), account.clone()),
        SharesMintedEvent {
            account,
            amount,
            new_total_shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_burned(env: &Env, account: Address, amount: i128, new_total_shares: i128) {
    env.events().publish(
        (symbol_short!("BURNED"), account.clone()),
        SharesBurnedEvent {
            account,
            amount,
            new_total_shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_transferred(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("TRANSFER"), from.clone(), to.clone()),
        SharesTransferredEvent {
            from,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_approved(env: &Env, owner: Address, spender: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("APPROVE"), owner.clone(), spender.clone()),
        ApprovedEvent {
            owner,
            spender,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_distributed(env: &Env, from: Address, amount: i128, acc_per_share: i128) {
    env.events().publish(
        (symbol_short!("DISTRIB"), from.clone()),
        RewardsDistributedEvent {
            from,
            amount,
            acc_per_share,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_taken(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_TAKE"), account.clone()),
        RewardsTakenEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

/// Fired when a reward payout leaves the pool, after any fee.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub account: Address,
    pub reward: i128,
    pub received: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundedEvent {
    pub account: Address,
    pub reward: i128,
    pub shares: i128,
    pub timestamp: u64,
}

pub fn publish_withdrawn(env: &Env, account: Address, reward: i128, received: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), account.clone()),
        WithdrawnEvent {
            account,
            reward,
            received,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_compounded(env: &Env, account: Address, reward: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("COMPOUND"), account.clone()),
        CompoundedEvent {
            account,
            reward,
            shares,
            timestamp: env.ledger().timestamp(),
        },
    );
}
