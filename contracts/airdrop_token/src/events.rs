#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

/// Balance movement; `None` on either side marks a mint or a burn.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangedEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
    env.events().publish(
        (symbol_short!("TRANSFER"),),
        TransferEvent {
            from,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_exchanged(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EXCHANGE"), account.clone()),
        ExchangedEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
