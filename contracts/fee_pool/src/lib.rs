#![no_std]

//! Fee pool.
//!
//! Holds the suite's reward reserve and sets the fee burned on staking
//! withdrawals. Each Friday `buyback` turns collected base asset (unlock
//! payments, vote deposits, liquidity fees) into main-token and burns it;
//! each Sunday `rebase` re-mints accrued fees, splits the reserve between the
//! JDFI and UNIV2 pools, and applies the week's fee vote.

pub mod events;

use common::{
    auth,
    constants::{
        BUYBACK_WEEKDAY, FEE_STEP, INITIAL_FEE, MAX_FEE, MIN_FEE, REBASE_WEEKDAY,
        UNIV2_REWARD_WEIGHT, VOTE_UNIT,
    },
    interfaces::{ExchangeClient, LedgerClient, StakingPoolClient},
    math,
    schedule::WeeklyWindow,
    storage, Error, Registry,
};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const ACTIVE: Symbol = symbol_short!("ACTIVE");
const FEE_RATE: Symbol = symbol_short!("FEE");
const INITIAL_SHARES: Symbol = symbol_short!("INIT_SH");
const RESERVE: Symbol = symbol_short!("RESERVE");
const VOTES: Symbol = symbol_short!("VOTES");
const LAST_BUYBACK: Symbol = symbol_short!("LAST_BB");
const LAST_REBASE: Symbol = symbol_short!("LAST_RB");

const BUYBACK_WINDOW: WeeklyWindow = WeeklyWindow::new(BUYBACK_WEEKDAY);
const REBASE_WINDOW: WeeklyWindow = WeeklyWindow::new(REBASE_WEEKDAY);

/// Base asset deposited for and against a fee change since the last rebase.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VoteTally {
    pub increase: i128,
    pub decrease: i128,
}

#[contract]
pub struct FeePoolContract;

#[contractimpl]
impl FeePoolContract {
    pub fn initialize(env: Env, registry: Registry) -> Result<(), Error> {
        registry.install(&env)?;
        env.storage().instance().set(&ACTIVE, &false);
        env.storage().instance().set(&VOTES, &VoteTally::default());
        Ok(())
    }

    /// Called by the bootstrap on close. Starts fee collection and records
    /// the exchange share supply the pool was seeded with.
    pub fn activate(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let registry = Registry::load(&env)?;
        if caller != registry.bootstrap {
            return Err(Error::Unauthorized);
        }
        if is_active(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let this = env.current_contract_address();
        let initial_shares = ExchangeClient::new(&env, &registry.exchange).total_shares();
        let reserve = LedgerClient::new(&env, &registry.ledger).balance(&this);

        let store = env.storage().instance();
        store.set(&ACTIVE, &true);
        store.set(&FEE_RATE, &INITIAL_FEE);
        store.set(&INITIAL_SHARES, &initial_shares);
        store.set(&RESERVE, &reserve);
        storage::bump_instance(&env);

        events::publish_fee_set(&env, INITIAL_FEE);
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// Basis points burned by `burn_and_transfer`; zero until activated.
    pub fn fee_rate(env: Env) -> u32 {
        env.storage().instance().get(&FEE_RATE).unwrap_or(0)
    }

    pub fn is_active(env: Env) -> bool {
        is_active(&env)
    }

    pub fn votes(env: Env) -> VoteTally {
        env.storage().instance().get(&VOTES).unwrap_or_default()
    }

    pub fn reward_reserve(env: Env) -> i128 {
        env.storage().instance().get(&RESERVE).unwrap_or(0)
    }

    pub fn last_buyback_at(env: Env) -> u64 {
        env.storage().instance().get(&LAST_BUYBACK).unwrap_or(0)
    }

    pub fn last_rebase_at(env: Env) -> u64 {
        env.storage().instance().get(&LAST_REBASE).unwrap_or(0)
    }

    pub fn initial_share_supply(env: Env) -> i128 {
        env.storage().instance().get(&INITIAL_SHARES).unwrap_or(0)
    }

    /// Fee that `rebase` would apply with the current tally.
    pub fn projected_fee(env: Env) -> u32 {
        next_fee(&Self::votes(env))
    }

    // ── Voting ──────────────────────────────────────────────────────────────

    /// Deposit `amount` base asset towards raising (`increase`) or lowering
    /// the fee at the next rebase. Deposits are not returned.
    pub fn vote(env: Env, voter: Address, increase: bool, amount: i128) -> Result<(), Error> {
        voter.require_auth();
        let registry = Registry::load(&env)?;
        if !is_active(&env) {
            return Err(Error::FeePoolInactive);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        token::Client::new(&env, &registry.base_asset).transfer(
            &voter,
            &env.current_contract_address(),
            &amount,
        );

        let mut tally = Self::votes(env.clone());
        if increase {
            tally.increase = math::checked_add(tally.increase, amount)?;
        } else {
            tally.decrease = math::checked_add(tally.decrease, amount)?;
        }
        env.storage().instance().set(&VOTES, &tally);

        events::publish_vote(&env, voter, increase, amount);
        Ok(())
    }

    // ── Scheduled operations ────────────────────────────────────────────────

    /// Friday: reclaim liquidity added since bootstrap, swap all base asset
    /// for main-token, and burn everything above the reward reserve.
    pub fn buyback(env: Env) -> Result<i128, Error> {
        let registry = Registry::load(&env)?;
        if !is_active(&env) {
            return Err(Error::FeePoolInactive);
        }
        let now = env.ledger().timestamp();
        BUYBACK_WINDOW.check(now, Self::last_buyback_at(env.clone()))?;
        env.storage().instance().set(&LAST_BUYBACK, &now);
        storage::bump_instance(&env);

        let this = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &registry.ledger);
        let exchange = ExchangeClient::new(&env, &registry.exchange);

        let reserve = ledger.balance(&this);
        env.storage().instance().set(&RESERVE, &reserve);

        let total_shares = exchange.total_shares();
        let initial_shares = Self::initial_share_supply(env.clone());
        let mut shares_removed = 0;
        if total_shares > initial_shares {
            shares_removed = (total_shares - initial_shares).min(exchange.share_balance(&this));
            if shares_removed > 0 {
                exchange.remove_liquidity(&this, &shares_removed, &0, &0, &this);
            }
        }

        let base_in = token::Client::new(&env, &registry.base_asset).balance(&this);
        if base_in > 0 && exchange.get_amount_out(&base_in, &true) > 0 {
            auth::authorize_transfer(&env, &registry.base_asset, &registry.exchange, base_in);
            exchange.swap_exact_base_for_token(&this, &base_in, &0, &this);
        }

        let burned = ledger.balance(&this) - reserve;
        if burned > 0 {
            ledger.burn(&this, &burned);
        }

        events::publish_buyback(&env, shares_removed, base_in, burned.max(0));
        Ok(burned.max(0))
    }

    /// Sunday: distribute the reward reserve and apply the fee vote.
    pub fn rebase(env: Env) -> Result<i128, Error> {
        let registry = Registry::load(&env)?;
        if !is_active(&env) {
            return Err(Error::FeePoolInactive);
        }
        let now = env.ledger().timestamp();
        REBASE_WINDOW.check(now, Self::last_rebase_at(env.clone()))?;
        env.storage().instance().set(&LAST_REBASE, &now);
        storage::bump_instance(&env);

        let this = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &registry.ledger);
        let jdfi_pool = StakingPoolClient::new(&env, &registry.jdfi_pool);
        let univ2_pool = StakingPoolClient::new(&env, &registry.univ2_pool);

        let jdfi_shares = jdfi_pool.total_shares();
        let univ2_shares = univ2_pool.total_shares();

        let mut to_jdfi = 0;
        let mut to_univ2 = 0;
        if jdfi_shares > 0 || univ2_shares > 0 {
            ledger.mint_accrued(&this);
            let balance = ledger.balance(&this);

            let univ2_weight = univ2_weight(&env, &registry, univ2_shares)?;
            let total_weight = math::checked_add(jdfi_shares, univ2_weight)?;
            if total_weight > 0 {
                to_jdfi = math::mul_div(balance, jdfi_shares, total_weight)?;
                to_univ2 = balance - to_jdfi;
            }

            if to_jdfi > 0 {
                auth::authorize_transfer(&env, &registry.ledger, &registry.jdfi_pool, to_jdfi);
                jdfi_pool.distribute_rewards(&this, &to_jdfi);
            }
            if to_univ2 > 0 {
                auth::authorize_transfer(&env, &registry.ledger, &registry.univ2_pool, to_univ2);
                univ2_pool.distribute_rewards(&this, &to_univ2);
            }
            env.storage()
                .instance()
                .set(&RESERVE, &ledger.balance(&this));
        }

        let fee = next_fee(&Self::votes(env.clone()));
        env.storage().instance().set(&FEE_RATE, &fee);
        env.storage().instance().set(&VOTES, &VoteTally::default());

        events::publish_rebase(&env, to_jdfi, to_univ2);
        events::publish_fee_set(&env, fee);
        Ok(to_jdfi + to_univ2)
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

fn is_active(env: &Env) -> bool {
    env.storage().instance().get(&ACTIVE).unwrap_or(false)
}

/// UNIV2 stake valued in main-token through the exchange reserve, weighted.
fn univ2_weight(env: &Env, registry: &Registry, univ2_shares: i128) -> Result<i128, Error> {
    if univ2_shares == 0 {
        return Ok(0);
    }
    let exchange = ExchangeClient::new(env, &registry.exchange);
    let exchange_shares = exchange.total_shares();
    if exchange_shares == 0 {
        return Ok(0);
    }
    let (token_reserve, _) = exchange.get_reserves();
    let value = math::mul_div(univ2_shares, token_reserve, exchange_shares)?;
    value.checked_mul(UNIV2_REWARD_WEIGHT).ok_or(Error::Overflow)
}

/// `clamp(INITIAL_FEE + trunc(net / VOTE_UNIT) * FEE_STEP, MIN_FEE, MAX_FEE)`.
pub fn next_fee(tally: &VoteTally) -> u32 {
    let steps = tally.increase.saturating_sub(tally.decrease) / VOTE_UNIT;
    let fee = (INITIAL_FEE as i128).saturating_add(steps.saturating_mul(FEE_STEP as i128));
    fee.clamp(MIN_FEE as i128, MAX_FEE as i128) as u32
}
