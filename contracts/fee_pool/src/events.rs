#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteEvent {
    pub voter: Address,
    pub increase: bool,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuybackEvent {
    pub shares_removed: i128,
    pub base_swapped: i128,
    pub burned: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RebaseEvent {
    pub to_jdfi_pool: i128,
    pub to_univ2_pool: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSetEvent {
    pub fee_rate: u32,
    pub timestamp: u64,
}

pub fn publish_vote(env: &Env, voter: Address, increase: bool, amount: i128) {
    env.events().publish(
        (symbol_short!("VOTE"), voter.clone()),
        VoteEvent {
            voter,
            increase,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_buyback(env: &Env, shares_removed: i128, base_swapped: i128, burned: i128) {
    env.events().publish(
        (symbol_short!("BUYBACK"),),
        BuybackEvent {
            shares_removed,
            base_swapped,
            burned,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rebase(env: &Env, to_jdfi_pool: i128, to_univ2_pool: i128) {
    env.events().publish(
        (symbol_short!("REBASE"),),
        RebaseEvent {
            to_jdfi_pool,
            to_univ2_pool,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fee_set(env: &Env, fee_rate: u32) {
    env.events().publish(
        (symbol_short!("FEE_SET"),),
        FeeSetEvent {
            fee_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}
