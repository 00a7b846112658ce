#![no_std]

//! Staked exchange liquidity (JDFI-LP/S).
//!
//! Shares track exchange pool shares 1:1 and earn main-token rewards. Users
//! either stake pool shares they already hold or provide liquidity through
//! this contract; rewards can be paired with base asset and compounded into
//! more liquidity.

use common::{
    auth,
    interfaces::{ExchangeClient, LedgerClient},
    Error, Registry,
};
use soroban_sdk::{contract, contractimpl, token, Address, Env, String};
use staking::{transfers, PoolInfo};

#[contract]
pub struct Univ2PoolContract;

#[contractimpl]
impl Univ2PoolContract {
    pub fn initialize(env: Env, registry: Registry) -> Result<(), Error> {
        registry.install(&env)?;
        staking::set_metadata(&env, "Staked JDFI/Base LP", "JDFI-LP/S");
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

    pub fn pool_info(env: Env) -> PoolInfo {
        staking::pool_info(&env)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit exchange pool shares already held by `account`.
    pub fn stake(env: Env, account: Address, shares: i128) -> Result<(), Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if shares <= 0 {
            return Err(Error::InvalidAmount);
        }

        ExchangeClient::new(&env, &registry.exchange).transfer_shares(
            &account,
            &env.current_contract_address(),
            &shares,
        );
        staking::mint_shares(&env, &account, shares)
    }

    /// Add liquidity from `account`'s balances and stake the resulting
    /// exchange shares. Only the amounts the exchange uses leave the account.
    pub fn stake_liquidity(
        env: Env,
        account: Address,
        token_desired: i128,
        token_min: i128,
        base_min: i128,
        base_value: i128,
    ) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if token_min > token_desired {
            return Err(Error::MinTokenExceedsDesired);
        }
        if base_min > base_value {
            return Err(Error::MinBaseExceedsValue);
        }

        let added = ExchangeClient::new(&env, &registry.exchange).add_liquidity(
            &account,
            &token_desired,
            &token_min,
            &base_value,
            &base_min,
            &env.current_contract_address(),
        );
        staking::mint_shares(&env, &account, added.shares)?;
        Ok(added.shares)
    }

    /// Pair the full pending reward with base asset from `account`, bounded
    /// by `[base_min, base_value]`, and stake the new liquidity.
    pub fn compound(env: Env, account: Address, base_min: i128, base_value: i128) -> Result<i128, Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if base_min > base_value {
            return Err(Error::MinBaseExceedsValue);
        }

        let reward = staking::take_rewards(&env, &account)?;
        if reward == 0 {
            return Ok(0);
        }

        let exchange = ExchangeClient::new(&env, &registry.exchange);
        let quote = exchange.quote_liquidity(&reward, &reward, &base_value, &base_min);

        let this = env.current_contract_address();
        token::Client::new(&env, &registry.base_asset).transfer(&account, &this, &quote.base);

        auth::authorize_transfers(
            &env,
            &[
                (&registry.ledger, &registry.exchange, reward),
                (&registry.base_asset, &registry.exchange, quote.base),
            ],
        );
        let added = exchange.add_liquidity(&this, &reward, &reward, &quote.base, &base_min, &this);

        staking::mint_shares(&env, &account, added.shares)?;
        staking::events::publish_compounded(&env, account, reward, added.shares);
        Ok(added.shares)
    }

    /// Burn `shares`, withdraw the matching liquidity, and return base asset
    /// directly and main-token net of the fee. Returns `(token, base)` received.
    pub fn unstake(
        env: Env,
        account: Address,
        shares: i128,
        token_min: i128,
        base_min: i128,
    ) -> Result<(i128, i128), Error> {
        account.require_auth();
        let registry = Registry::load(&env)?;
        if shares <= 0 {
            return Err(Error::InvalidAmount);
        }

        staking::burn_shares(&env, &account, shares)?;

        let this = env.current_contract_address();
        let (token, base) = ExchangeClient::new(&env, &registry.exchange)
            .remove_liquidity(&this, &shares, &token_min, &base_min, &this);

        token::Client::new(&env, &registry.base_asset).transfer(&this, &account, &base);
        let received =
            LedgerClient::new(&env, &registry.ledger).burn_and_transfer(&this, &account, &token);
        Ok((received, base))
    }

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

    /// Always fails: no sender is whitelisted for this pool.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        transfers::transfer(&env, &from, &to, amount)
    }
}
