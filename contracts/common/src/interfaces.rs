//! Cross-contract interfaces.
//!
//! Each trait mirrors the public entrypoints another contract exposes, so a
//! caller depends on this crate instead of linking the callee.

use soroban_sdk::{contractclient, contracttype, Address, Env, String, Vec};

use crate::Error;

/// Amounts actually consumed by an `add_liquidity` call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAdded {
    pub token: i128,
    pub base: i128,
    pub shares: i128,
}

#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
    fn transfers_enabled(env: Env) -> bool;
    fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), Error>;
    fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error>;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error>;
    fn burn_and_transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<i128, Error>;
    fn mint_accrued(env: Env, caller: Address) -> Result<i128, Error>;
    fn enable_transfers(env: Env, caller: Address) -> Result<(), Error>;
}

#[contractclient(name = "FeePoolClient")]
pub trait FeePoolInterface {
    fn fee_rate(env: Env) -> u32;
    fn activate(env: Env, caller: Address) -> Result<(), Error>;
}

#[contractclient(name = "BootstrapClient")]
pub trait BootstrapInterface {
    fn is_closed(env: Env) -> bool;
}

/// Entrypoints shared by every staking pool.
#[contractclient(name = "StakingPoolClient")]
pub trait StakingPoolInterface {
    fn balance(env: Env, id: Address) -> i128;
    fn total_shares(env: Env) -> i128;
    fn rewards_of(env: Env, account: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;
    fn distribute_rewards(env: Env, from: Address, amount: i128) -> Result<(), Error>;
}

#[contractclient(name = "JdfiPoolClient")]
pub trait JdfiPoolInterface {
    fn stake(env: Env, account: Address, amount: i128) -> Result<(), Error>;
    fn unstake(env: Env, account: Address, amount: i128) -> Result<i128, Error>;
    fn airdrop_locked(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error>;
    fn locked_balance_of(env: Env, account: Address) -> i128;
}

#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    fn add_liquidity(
        env: Env,
        from: Address,
        token_desired: i128,
        token_min: i128,
        base_desired: i128,
        base_min: i128,
        to: Address,
    ) -> Result<LiquidityAdded, Error>;
    fn quote_liquidity(
        env: Env,
        token_desired: i128,
        token_min: i128,
        base_desired: i128,
        base_min: i128,
    ) -> Result<LiquidityAdded, Error>;
    fn remove_liquidity(
        env: Env,
        from: Address,
        shares: i128,
        token_min: i128,
        base_min: i128,
        to: Address,
    ) -> Result<(i128, i128), Error>;
    fn swap_exact_base_for_token(
        env: Env,
        from: Address,
        base_in: i128,
        token_out_min: i128,
        to: Address,
    ) -> Result<i128, Error>;
    fn swap_exact_token_for_base(
        env: Env,
        from: Address,
        token_in: i128,
        base_out_min: i128,
        to: Address,
    ) -> Result<i128, Error>;
    fn transfer_shares(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;
    fn get_reserves(env: Env) -> (i128, i128);
    fn total_shares(env: Env) -> i128;
    fn share_balance(env: Env, id: Address) -> i128;
    fn consult(env: Env, base_amount: i128) -> i128;
    fn get_amount_out(env: Env, amount_in: i128, base_in: bool) -> Result<i128, Error>;
}
