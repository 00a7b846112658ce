#![no_std]

//! Staked JDFI (JDFI/S).
//!
//! Shares are minted 1:1 against staked main-token and earn main-token
//! rewards from the fee pool. Airdropped shares arrive locked and can only be
//! released by paying base asset through [`JdfiPoolContract::unlock`]; the
//! locked part of a balance can be neither unstaked nor transferred.

pub mod events;

use common::{
    auth,
    constants::BOOTSTRAP_RATIO,
    interfaces::{BootstrapClient, LedgerClient, StakingPoolClient},
    math, storage, Error, Registry,
};
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, String, Symbol, Vec};
use staking::{transfers, PoolInfo};

// Per-account persistent storage uses tuple keys: (prefix, account)
const LOCKED: Symbol = symbol_short!("LOCKED");

#[contract]
pub struct JdfiPoolContract;

#[contractimpl]
impl JdfiPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Only the bootstrap and the airdrop token may move shares.
    pub fn initialize(env: Env, registry: Registry) -> Result<(), Error> {
        registry.install(&env)?;
        staking::set_metadata(&env, "Staked JDFI", "JDFI/S");
        transfers::add_to_whitelist(&env, &registry.bootstrap);
        transfers::add_to_whitelist(&env, &registry.airdrop_token);
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        staking::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        staking::symbol(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        common::constants::DECIMALS
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        staking::balance(&env, &id)
    }

    pub fn total_shares(env: Env) -> i128 {
        staking::total_shares(&env)
    }

    pub fn rewards_of(env: Env, account: Address) -> i128 {
        staking::pending(&env, &account)
    }

    pub fn scaled_rewards_of(env: Env, account: Address) -> i128 {
        staking::scaled_pending(&env, &account)
    }

    pub fn locked_balance_of(env: Env, account: Address) -> i128 {
        read_locked(&env, &account)
    }

    pub fn pool_info(env: Env) -> PoolInfo {
        staking::pool_info(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        transfers::allowance(&env, &owner, &spender)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` main-token for the same number of shares.
    pub fn stake(env: Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        LedgerClient::new(&env, &registry.ledger).transfer(
            &account,
            &env.current_contract_address(),
            &amount,
        );
        staking::mint_shares(&env, &account, amount)
    }

    /// Burn `amount` unlocked shares and return main-token net of the fee.
    pub fn unstake(env: Env, account: Address, amount: i128) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_unlocked(&env, &account, amount)?;

        staking::burn_shares(&env, &account, amount)?;
        let received = LedgerClient::new(&env, &registry.ledger).burn_and_transfer(
            &env.current_contract_address(),
            &account,
            &amount,
        );
        Ok(received)
    }

    /// Pay out pending reward net of the fee.
    pub fn withdraw(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;

        let reward = staking::take_rewards(&env, &account)?;
        if reward == 0 {
            return Ok(0);
        }
        let received = LedgerClient::new(&env, &registry.ledger).burn_and_transfer(
            &env.current_contract_address(),
            &account,
            &reward,
        );
        staking::events::publish_withdrawn(&env, account, reward, received);
        Ok(received)
    }

    /// Restake pending reward without a fee. The reward is already held here.
    pub fn compound(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        Registry::load(&env)?;

        let reward = staking::take_rewards(&env, &account)?;
        if reward > 0 {
            staking::mint_shares(&env, &account, reward)?;
            staking::events::publish_compounded(&env, account, reward, reward);
        }
        Ok(reward)
    }

    /// Pull `amount` main-token from `from` and spread it over all stakers.
    pub fn distribute_rewards(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        let registry = Registry::load(&env)?;

        staking::accrue(&env, &from, amount)?;
        LedgerClient::new(&env, &registry.ledger).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        Ok(())
    }

    // ── Share transfers ─────────────────────────────────────────────────────

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        transfers::approve(&env, &owner, &spender, amount)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        require_unlocked(&env, &from, amount)?;
        transfers::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        require_unlocked(&env, &from, amount)?;
        transfers::transfer_from(&env, &spender, &from, &to, amount)
    }

    // ── Locked balances ─────────────────────────────────────────────────────

    /// Mint locked shares against main-token the caller has already delivered.
    ///
    /// The caller must be the airdrop token or the bootstrap, and the pool's
    /// main-token balance must exceed what existing shares and unpaid rewards
    /// account for by at least `sum(amounts)`.
    pub fn airdrop_locked(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let registry = Registry::load(&env)?;
        if caller != registry.airdrop_token && caller != registry.bootstrap {
            return Err(Error::Unauthorized);
        }
        if accounts.len() != amounts.len() {
            return Err(Error::ArrayLengthMismatch);
        }

        let total = math::sum(&amounts)?;
        let held = LedgerClient::new(&env, &registry.ledger).balance(&env.current_contract_address());
        if held - accounted_reserves(&env)? < total {
            return Err(Error::InsufficientBalance);
        }

        for (account, amount) in accounts.iter().zip(amounts.iter()) {
            let locked = math::checked_add(read_locked(&env, &account), amount)?;
            write_locked(&env, &account, locked);
            staking::mint_shares(&env, &account, amount)?;
            events::publish_locked(&env, account, amount, locked);
        }
        Ok(())
    }

    /// Release `payment * 4` locked shares in exchange for `payment` base
    /// asset, split evenly between the fee pool and the dev pool.
    pub fn unlock(env: Env, account: Address, payment: i128) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if !BootstrapClient::new(&env, &registry.bootstrap).is_closed() {
            return Err(Error::BootstrapInProgress);
        }
        if payment <= 0 {
            return Err(Error::InvalidAmount);
        }

        let released = payment
            .checked_mul(BOOTSTRAP_RATIO)
            .ok_or(Error::Overflow)?;
        let locked = read_locked(&env, &account);
        if released > locked {
            return Err(Error::InsufficientLockedBalance);
        }
        write_locked(&env, &account, locked - released);

        let this = env.current_contract_address();
        let base = token::Client::new(&env, &registry.base_asset);
        base.transfer(&account, &this, &payment);

        let to_fee_pool = payment / 2;
        let to_dev_pool = payment - to_fee_pool;
        base.transfer(&this, &registry.fee_pool, &to_fee_pool);
        auth::authorize_transfer(&env, &registry.base_asset, &registry.dev_pool, to_dev_pool);
        StakingPoolClient::new(&env, &registry.dev_pool).distribute_rewards(&this, &to_dev_pool);

        events::publish_unlocked(&env, account, released, payment);
        Ok(released)
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

fn read_locked(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(LOCKED, account.clone()))
        .unwrap_or(0)
}

fn write_locked(env: &Env, account: &Address, amount: i128) {
    storage::set_persistent(env, &(LOCKED, account.clone()), &amount);
}

fn require_unlocked(env: &Env, account: &Address, amount: i128) -> Result<(), Error> {
    let unlocked = staking::balance(env, account) - read_locked(env, account);
    if amount > unlocked {
        return Err(Error::ExceedsUnlockedBalance);
    }
    Ok(())
}

/// Main-token the pool owes: staked principal plus rewards not yet paid.
fn accounted_reserves(env: &Env) -> Result<i128, Error> {
    let info = staking::pool_info(env);
    math::checked_add(info.total_shares, info.distributed - info.paid_out)
}
