#![no_std]

//! JDFI, the main token of the suite.
//!
//! A SEP-41 style balance ledger with two additions: transfers stay locked
//! until the liquidity bootstrap closes (except on the bootstrap and exchange
//! paths), and `burn_and_transfer` burns the fee pool's current fee rate on
//! the way out of a staking pool.

pub mod events;

use common::{
    interfaces::FeePoolClient,
    math,
    storage::{self, bump_instance},
    Error, Registry,
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const TOTAL_SUPPLY: Symbol = symbol_short!("SUPPLY");
const TRANSFERS_ENABLED: Symbol = symbol_short!("XFER_ON");
const ACCRUED_FEES: Symbol = symbol_short!("ACCRUED");

// Per-account persistent storage uses tuple keys: (prefix, account[, spender])
const BALANCE: Symbol = symbol_short!("BAL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

#[contract]
pub struct LedgerTokenContract;

#[contractimpl]
impl LedgerTokenContract {
    pub fn initialize(env: Env, registry: Registry) -> Result<(), Error> {
        registry.install(&env)?;
        env.storage().instance().set(&TOTAL_SUPPLY, &0i128);
        env.storage().instance().set(&TRANSFERS_ENABLED, &false);
        Ok(())
    }

    // ── Metadata ────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, "JusDeFi")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "JDFI")
    }

    pub fn decimals(_env: Env) -> u32 {
        common::constants::DECIMALS
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(ALLOWANCE, from, spender))
            .unwrap_or(0)
    }

    pub fn transfers_enabled(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&TRANSFERS_ENABLED)
            .unwrap_or(false)
    }

    /// Fees burned by `burn_and_transfer` since the last rebase.
    pub fn accrued_fees(env: Env) -> i128 {
        env.storage().instance().get(&ACCRUED_FEES).unwrap_or(0)
    }

    // ── Supply ──────────────────────────────────────────────────────────────

    /// Create `amount` tokens for `to`. Only the bootstrap may mint.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), Error> {
        minter.require_auth();
        let registry = Registry::load(&env)?;
        if minter != registry.bootstrap {
            return Err(Error::Unauthorized);
        }
        require_non_negative(amount)?;

        credit(&env, &to, amount)?;
        adjust_supply(&env, amount)?;

        events::publish_minted(&env, to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Registry::load(&env)?;
        require_non_negative(amount)?;

        debit(&env, &from, amount)?;
        adjust_supply(&env, -amount)?;

        events::publish_burned(&env, from, amount);
        Ok(())
    }

    /// Mint the fees accrued since the last call to the fee pool, which
    /// redistributes them as staking rewards.
    pub fn mint_accrued(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let registry = Registry::load(&env)?;
        if caller != registry.fee_pool {
            return Err(Error::Unauthorized);
        }

        let accrued = Self::accrued_fees(env.clone());
        if accrued == 0 {
            return Ok(0);
        }
        env.storage().instance().set(&ACCRUED_FEES, &0i128);
        credit(&env, &registry.fee_pool, accrued)?;
        adjust_supply(&env, accrued)?;

        events::publish_minted(&env, registry.fee_pool, accrued);
        Ok(accrued)
    }

    /// Unlock general transfers. One-way; bootstrap only.
    pub fn enable_transfers(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let registry = Registry::load(&env)?;
        if caller != registry.bootstrap {
            return Err(Error::Unauthorized);
        }
        env.storage().instance().set(&TRANSFERS_ENABLED, &true);
        bump_instance(&env);

        events::publish_transfers_enabled(&env);
        Ok(())
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        require_non_negative(amount)?;
        storage::set_persistent(&env, &(ALLOWANCE, from.clone(), spender.clone()), &amount);

        events::publish_approved(&env, from, spender, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        let registry = Registry::load(&env)?;
        require_transferable(&env, &registry, &from, &to)?;
        require_non_negative(amount)?;

        move_balance(&env, &from, &to, amount)
    }

    /// Spend `spender`'s allowance over `from`. The exchange needs no allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        let registry = Registry::load(&env)?;
        require_transferable(&env, &registry, &from, &to)?;
        require_non_negative(amount)?;

        if spender != registry.exchange {
            let key = (ALLOWANCE, from.clone(), spender.clone());
            let allowance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
            if allowance < amount {
                return Err(Error::InsufficientAllowance);
            }
            storage::set_persistent(&env, &key, &(allowance - amount));
        }

        move_balance(&env, &from, &to, amount)
    }

    /// Burn the current fee share of `amount` from `from` and transfer the
    /// rest to `to`. Returns the amount `to` received.
    pub fn burn_and_transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        from.require_auth();
        let registry = Registry::load(&env)?;
        require_transferable(&env, &registry, &from, &to)?;
        require_non_negative(amount)?;

        let fee_rate = FeePoolClient::new(&env, &registry.fee_pool).fee_rate();
        let (fee, remainder) = math::split_fee(amount, fee_rate)?;

        if fee > 0 {
            debit(&env, &from, fee)?;
            adjust_supply(&env, -fee)?;
            let accrued = math::checked_add(Self::accrued_fees(env.clone()), fee)?;
            env.storage().instance().set(&ACCRUED_FEES, &accrued);
            events::publish_fee_burned(&env, from.clone(), fee, fee_rate);
        }
        move_balance(&env, &from, &to, remainder)?;
        Ok(remainder)
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

fn require_non_negative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Before the bootstrap closes only the bootstrap and exchange paths move tokens.
fn require_transferable(
    env: &Env,
    registry: &Registry,
    from: &Address,
    to: &Address,
) -> Result<(), Error> {
    let enabled: bool = env
        .storage()
        .instance()
        .get(&TRANSFERS_ENABLED)
        .unwrap_or(false);
    if enabled {
        return Ok(());
    }
    let privileged = |a: &Address| *a == registry.bootstrap || *a == registry.exchange;
    if privileged(from) || privileged(to) {
        return Ok(());
    }
    Err(Error::TransfersLocked)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(BALANCE, id.clone()))
        .unwrap_or(0)
}

fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = math::checked_add(read_balance(env, id), amount)?;
    storage::set_persistent(env, &(BALANCE, id.clone()), &balance);
    Ok(())
}

fn debit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    storage::set_persistent(env, &(BALANCE, id.clone()), &(balance - amount));
    Ok(())
}

fn adjust_supply(env: &Env, delta: i128) -> Result<(), Error> {
    let supply: i128 = env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0);
    let supply = math::checked_add(supply, delta)?;
    env.storage().instance().set(&TOTAL_SUPPLY, &supply);
    bump_instance(env);
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    debit(env, from, amount)?;
    credit(env, to, amount)?;
    events::publish_transfer(env, from.clone(), to.clone(), amount);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
