//! Share transfer control: a per-pool allow-list of senders, a switch that
//! opens transfers to everyone, and spender allowances.

use common::{storage, Error};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, move_shares};

const IGNORE_WHITELIST: Symbol = symbol_short!("IGN_WL");
const WHITELISTED: Symbol = symbol_short!("WL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

pub fn add_to_whitelist(env: &Env, account: &Address) {
    storage::set_persistent(env, &(WHITELISTED, account.clone()), &true);
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&(WHITELISTED, account.clone()))
        .unwrap_or(false)
}

pub fn ignore_whitelist(env: &Env) {
    env.storage().instance().set(&IGNORE_WHITELIST, &true);
}

pub fn whitelist_ignored(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&IGNORE_WHITELIST)
        .unwrap_or(false)
}

/// Staked shares are non-transferable unless `operator` is allowed to move them.
pub fn require_transferable(env: &Env, operator: &Address) -> Result<(), Error> {
    if whitelist_ignored(env) || is_whitelisted(env, operator) {
        return Ok(());
    }
    Err(Error::NonTransferable)
}

// ── Allowances ───────────────────────────────────────────────────────────────

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(ALLOWANCE, owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    storage::set_persistent(env, &(ALLOWANCE, owner.clone(), spender.clone()), &amount);
    events::publish_approved(env, owner.clone(), spender.clone(), amount);
    Ok(())
}

fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    let current = allowance(env, owner, spender);
    if current < amount {
        return Err(Error::InsufficientAllowance);
    }
    storage::set_persistent(
        env,
        &(ALLOWANCE, owner.clone(), spender.clone()),
        &(current - amount),
    );
    Ok(())
}

/// `transfer` with the sender as operator.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    require_transferable(env, from)?;
    move_shares(env, from, to, amount)
}

/// `transfer_from` with the spender as operator.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_transferable(env, spender)?;
    spend_allowance(env, from, spender, amount)?;
    move_shares(env, from, to, amount)
}
