#![no_std]

//! JDFI Dev Share (JDFI/E): a fixed supply of freely transferable shares
//! minted to the deployer, earning the base asset paid for unlocking
//! airdropped JDFI/S. Rewards are paid out without a fee.

use common::{constants::DEV_SUPPLY, Error, Registry};
use soroban_sdk::{contract, contractimpl, token, Address, Env, String};
use staking::{transfers, PoolInfo};

#[contract]
pub struct DevPoolContract;

#[contractimpl]
impl DevPoolContract {
    pub fn initialize(env: Env, registry: Registry) -> Result<(), Error> {
        registry.install(&env)?;
        staking::set_metadata(&env, "JDFI Dev Share", "JDFI/E");
        transfers::ignore_whitelist(&env);
        staking::mint_shares(&env, &registry.deployer, DEV_SUPPLY)
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

    pub fn pool_info(env: Env) -> PoolInfo {
        staking::pool_info(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        transfers::allowance(&env, &owner, &spender)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out pending base-asset reward in full.
    pub fn withdraw(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;

        let reward = staking::take_rewards(&env, &account)?;
        if reward > 0 {
            token::Client::new(&env, &registry.base_asset).transfer(
                &env.current_contract_address(),
                &account,
                &reward,
            );
            staking::events::publish_withdrawn(&env, account, reward, reward);
        }
        Ok(reward)
    }

    pub fn distribute_rewards(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        let registry = Registry::load(&env)?;

        staking::accrue(&env, &from, amount)?;
        token::Client::new(&env, &registry.base_asset).transfer(
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
        transfers::transfer_from(&env, &spender, &from, &to, amount)
    }
}
