#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyChangedEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when `burn_and_transfer` burns a fee.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeBurnedEvent {
    pub from: Address,
    pub fee: i128,
    pub fee_rate: u32,
    pub timestamp: u64,
}

pub fn publish_minted(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("MINT"), to.clone()),
        SupplyChangedEvent {
            account: to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_burned(env: &Env, from: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("BURN"), from.clone()),
        SupplyChangedEvent {
            account: from,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("TRANSFER"), from.clone(), to.clone()),
        TransferEvent {
            from,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_approved(env: &Env, from: Address, spender: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("APPROVE"), from.clone(), spender.clone()),
        ApprovalEvent {
            from,
            spender,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fee_burned(env: &Env, from: Address, fee: i128, fee_rate: u32) {
    env.events().publish(
        (symbol_short!("FEE_BURN"), from.clone()),
        FeeBurnedEvent {
            from,
            fee,
            fee_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_transfers_enabled(env: &Env) {
    env.events().publish(
        (symbol_short!("XFER_ON"),),
        env.ledger().timestamp(),
    );
}
