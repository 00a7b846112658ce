#![no_std]

//! Proportional-reward share ledger shared by every staking pool contract.
//!
//! A pool contract composes these functions with its own underlying-asset
//! handling: it pulls the asset and calls [`mint_shares`], calls
//! [`burn_shares`] and returns the asset, and routes reward deposits through
//! [`accrue`]. All state lives in the calling contract's storage.

pub mod events;
pub mod rewards;
pub mod transfers;

use common::{math, storage, Error};
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const POOL_INFO: Symbol = symbol_short!("POOL");
const NAME: Symbol = symbol_short!("NAME");
const SYMBOL: Symbol = symbol_short!("SYMBOL");

// Per-account persistent storage uses tuple keys: (prefix, account)
const POSITION: Symbol = symbol_short!("POS");

// ── Public-facing types ──────────────────────────────────────────────────────

/// Pool-wide accounting.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolInfo {
    pub total_shares: i128,
    /// Reward per share, scaled by [`rewards::SCALE`].
    pub acc_per_share: i128,
    /// Reward units ever passed to [`accrue`].
    pub distributed: i128,
    /// Reward units ever released by [`take_rewards`].
    pub paid_out: i128,
}

/// One account's shares and reward bookkeeping.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub shares: i128,
    /// Accumulator value at the last settlement.
    pub snapshot: i128,
    /// Rewards settled but not yet taken.
    pub owed: i128,
}

// ── Metadata ─────────────────────────────────────────────────────────────────

pub fn set_metadata(env: &Env, name: &str, symbol: &str) {
    env.storage()
        .instance()
        .set(&NAME, &String::from_str(env, name));
    env.storage()
        .instance()
        .set(&SYMBOL, &String::from_str(env, symbol));
}

pub fn name(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&NAME)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn symbol(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&SYMBOL)
        .unwrap_or_else(|| String::from_str(env, ""))
}

// ── Reads ────────────────────────────────────────────────────────────────────

pub fn pool_info(env: &Env) -> PoolInfo {
    env.storage().instance().get(&POOL_INFO).unwrap_or_default()
}

pub fn position(env: &Env, account: &Address) -> Position {
    env.storage()
        .persistent()
        .get(&(POSITION, account.clone()))
        .unwrap_or_default()
}

pub fn balance(env: &Env, account: &Address) -> i128 {
    position(env, account).shares
}

pub fn total_shares(env: &Env) -> i128 {
    pool_info(env).total_shares
}

/// Pending reward of `account`, rounded down.
pub fn pending(env: &Env, account: &Address) -> i128 {
    let info = pool_info(env);
    let pos = position(env, account);
    rewards::earned(pos.shares, info.acc_per_share, pos.snapshot, pos.owed).unwrap_or(pos.owed)
}

/// Pending reward of `account` scaled by [`rewards::SCALE`], before rounding.
pub fn scaled_pending(env: &Env, account: &Address) -> i128 {
    let info = pool_info(env);
    let pos = position(env, account);
    rewards::scaled_delta(pos.shares, info.acc_per_share, pos.snapshot)
        .and_then(|delta| {
            pos.owed
                .checked_mul(rewards::SCALE)
                .and_then(|owed| owed.checked_add(delta))
                .ok_or(Error::Overflow)
        })
        .unwrap_or(i128::MAX)
}

// ── Writes ───────────────────────────────────────────────────────────────────

fn store_info(env: &Env, info: &PoolInfo) {
    env.storage().instance().set(&POOL_INFO, info);
    storage::bump_instance(env);
}

fn store_position(env: &Env, account: &Address, pos: &Position) {
    storage::set_persistent(env, &(POSITION, account.clone()), pos);
}

/// Move the account's pending reward into `owed` and re-snapshot it at the
/// current accumulator. Called before every change to the account's shares.
pub fn settle(env: &Env, account: &Address) -> Result<Position, Error> {
    let info = pool_info(env);
    let mut pos = position(env, account);
    pos.owed = rewards::earned(pos.shares, info.acc_per_share, pos.snapshot, pos.owed)?;
    pos.snapshot = info.acc_per_share;
    store_position(env, account, &pos);
    Ok(pos)
}

/// Mint `amount` shares to `account`.
pub fn mint_shares(env: &Env, account: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let mut pos = settle(env, account)?;
    pos.shares = math::checked_add(pos.shares, amount)?;
    store_position(env, account, &pos);

    let mut info = pool_info(env);
    info.total_shares = math::checked_add(info.total_shares, amount)?;
    store_info(env, &info);

    events::publish_minted(env, account.clone(), amount, info.total_shares);
    Ok(())
}

/// Burn `amount` shares from `account`.
pub fn burn_shares(env: &Env, account: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let mut pos = settle(env, account)?;
    if pos.shares < amount {
        return Err(Error::InsufficientBalance);
    }
    pos.shares -= amount;
    store_position(env, account, &pos);

    let mut info = pool_info(env);
    info.total_shares -= amount;
    store_info(env, &info);

    events::publish_burned(env, account.clone(), amount, info.total_shares);
    Ok(())
}

/// Move shares between accounts. Pending rewards stay with their owner.
pub fn move_shares(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let mut sender = settle(env, from)?;
    if sender.shares < amount {
        return Err(Error::InsufficientBalance);
    }
    sender.shares -= amount;
    store_position(env, from, &sender);

    let mut receiver = settle(env, to)?;
    receiver.shares = math::checked_add(receiver.shares, amount)?;
    store_position(env, to, &receiver);

    events::publish_transferred(env, from.clone(), to.clone(), amount);
    Ok(())
}

/// Spread `amount` of reward over current shareholders.
///
/// Fails with [`Error::ZeroTotalSupply`] when nothing is staked; the caller
/// is expected to have received the reward asset already.
pub fn accrue(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let mut info = pool_info(env);
    info.acc_per_share = rewards::accumulate(info.acc_per_share, amount, info.total_shares)?;
    info.distributed = math::checked_add(info.distributed, amount)?;
    store_info(env, &info);

    events::publish_distributed(env, from.clone(), amount, info.acc_per_share);
    Ok(())
}

/// Settle `account` and release everything it is owed.
pub fn take_rewards(env: &Env, account: &Address) -> Result<i128, Error> {
    let mut pos = settle(env, account)?;
    let reward = pos.owed;
    if reward == 0 {
        return Ok(0);
    }
    pos.owed = 0;
    store_position(env, account, &pos);

    let mut info = pool_info(env);
    info.paid_out = math::checked_add(info.paid_out, reward)?;
    store_info(env, &info);

    events::publish_rewards_taken(env, account.clone(), reward);
    Ok(reward)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
