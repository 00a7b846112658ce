#![no_std]

//! Liquidity bootstrap.
//!
//! Seeds the suite: on initialisation it mints the team and liquidity
//! reserves, stakes them in the JDFI pool and hands the team share to the
//! deployer. Depositors then buy JDFI/S at four shares per base unit until the
//! cap or the deadline, after which anyone may `close` the event. Closing
//! pairs the raised base asset with main-token in the exchange, seeds the fee
//! pool, and opens ledger transfers.

pub mod events;

use common::{
    auth,
    constants::{
        BOOTSTRAP_RATIO, DEPOSIT_CAP, JUSTICE_RESERVE, LIQUIDITY_RESERVE, MIN_DEPOSIT,
        REWARD_SEED, TEAM_RESERVE,
    },
    interfaces::{ExchangeClient, FeePoolClient, JdfiPoolClient, LedgerClient, StakingPoolClient},
    math, storage, Error, Registry,
};
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol};

const CLOSES_AT: Symbol = symbol_short!("CLOSES");
const DEPOSITED: Symbol = symbol_short!("DEPOSITED");
const CLOSED: Symbol = symbol_short!("CLOSED");

#[contract]
pub struct BootstrapContract;

#[contractimpl]
impl BootstrapContract {
    /// Requires the ledger, the JDFI pool and the fee pool to be initialised
    /// with the same registry.
    pub fn initialize(env: Env, registry: Registry, closes_at: u64) -> Result<(), Error> {
        registry.install(&env)?;
        env.storage().instance().set(&CLOSES_AT, &closes_at);
        env.storage().instance().set(&DEPOSITED, &0i128);
        env.storage().instance().set(&CLOSED, &false);

        let this = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &registry.ledger);
        let reserve = TEAM_RESERVE + LIQUIDITY_RESERVE;

        ledger.mint(&this, &this, &reserve);
        auth::authorize_transfer(&env, &registry.ledger, &registry.jdfi_pool, reserve);
        JdfiPoolClient::new(&env, &registry.jdfi_pool).stake(&this, &reserve);
        StakingPoolClient::new(&env, &registry.jdfi_pool).transfer(
            &this,
            &registry.deployer,
            &TEAM_RESERVE,
        );

        ledger.mint(&this, &registry.airdrop_token, &JUSTICE_RESERVE);
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn is_closed(env: Env) -> bool {
        env.storage().instance().get(&CLOSED).unwrap_or(false)
    }

    /// True while open and either past the deadline or at the deposit cap.
    pub fn is_closeable(env: Env) -> bool {
        if Self::is_closed(env.clone()) {
            return false;
        }
        env.ledger().timestamp() >= Self::closes_at(env.clone())
            || Self::total_deposited(env) >= DEPOSIT_CAP
    }

    pub fn total_deposited(env: Env) -> i128 {
        env.storage().instance().get(&DEPOSITED).unwrap_or(0)
    }

    pub fn closes_at(env: Env) -> u64 {
        env.storage().instance().get(&CLOSES_AT).unwrap_or(0)
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Buy `BOOTSTRAP_RATIO * value` reserve shares for `value` base asset.
    pub fn deposit(env: Env, depositor: Address, value: i128) -> Result<i128, Error> {
        depositor.require_auth();
        let registry = Registry::load(&env)?;
        if Self::is_closed(env.clone()) {
            return Err(Error::BootstrapClosed);
        }
        if value < 0 {
            return Err(Error::InvalidAmount);
        }

        let deposited = math::checked_add(Self::total_deposited(env.clone()), value)?;
        if deposited > DEPOSIT_CAP {
            return Err(Error::DepositExceedsCap);
        }
        env.storage().instance().set(&DEPOSITED, &deposited);
        storage::bump_instance(&env);

        let this = env.current_contract_address();
        let shares = value.checked_mul(BOOTSTRAP_RATIO).ok_or(Error::Overflow)?;
        token::Client::new(&env, &registry.base_asset).transfer(&depositor, &this, &value);
        StakingPoolClient::new(&env, &registry.jdfi_pool).transfer(&this, &depositor, &shares);

        events::publish_deposit(&env, depositor, value, shares);
        Ok(shares)
    }

    /// Close the bootstrap and open the market. Callable by anyone once
    /// closeable.
    pub fn close(env: Env) -> Result<(), Error> {
        let registry = Registry::load(&env)?;
        if Self::is_closed(env.clone()) {
            return Err(Error::BootstrapAlreadyClosed);
        }
        if !Self::is_closeable(env.clone()) {
            return Err(Error::BootstrapInProgress);
        }
        let deposited = Self::total_deposited(env.clone());
        if deposited < MIN_DEPOSIT {
            return Err(Error::InsufficientLiquidity);
        }
        env.storage().instance().set(&CLOSED, &true);
        storage::bump_instance(&env);

        let this = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &registry.ledger);

        // Fee rate is still zero here, so the full remainder comes back.
        let remaining = StakingPoolClient::new(&env, &registry.jdfi_pool).balance(&this);
        if remaining > 0 {
            JdfiPoolClient::new(&env, &registry.jdfi_pool).unstake(&this, &remaining);
        }

        let paired = deposited.checked_mul(BOOTSTRAP_RATIO).ok_or(Error::Overflow)?;
        let leftover = ledger.balance(&this) - paired;
        if leftover > 0 {
            ledger.burn(&this, &leftover);
        } else if leftover < 0 {
            ledger.mint(&this, &this, &(-leftover));
        }

        auth::authorize_transfers(
            &env,
            &[
                (&registry.ledger, &registry.exchange, paired),
                (&registry.base_asset, &registry.exchange, deposited),
            ],
        );
        let added = ExchangeClient::new(&env, &registry.exchange).add_liquidity(
            &this,
            &paired,
            &paired,
            &deposited,
            &deposited,
            &registry.fee_pool,
        );

        ledger.mint(&this, &registry.fee_pool, &REWARD_SEED);
        FeePoolClient::new(&env, &registry.fee_pool).activate(&this);
        ledger.enable_transfers(&this);

        events::publish_closed(&env, deposited, paired, added.shares, leftover);
        Ok(())
    }
}
