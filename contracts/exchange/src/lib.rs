#![no_std]

//! Reference constant-product exchange for the main-token / base-asset pair.
//!
//! Combines the pair and the router: liquidity is added at the current
//! reserve ratio with slippage floors, swaps charge 0.3%, and the first
//! `MINIMUM_LIQUIDITY` shares are locked forever. Both sides are SEP-41
//! tokens moved with `token::Client`.

pub mod events;
pub mod oracle;

use common::{interfaces::LiquidityAdded, math, storage, Error};
use oracle::OracleState;
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

pub const MINIMUM_LIQUIDITY: i128 = 1_000;
const FEE_NUMERATOR: i128 = 997;
const FEE_DENOMINATOR: i128 = 1_000;

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Token,
    Base,
    Reserves,
    TotalShares,
    Oracle,
    Shares(Address),
}

#[contract]
pub struct ExchangeContract;

#[contractimpl]
impl ExchangeContract {
    pub fn initialize(env: Env, token: Address, base: Address) -> Result<(), Error> {
        let store = env.storage().instance();
        if store.has(&DataKey::Token) {
            return Err(Error::AlreadyInitialized);
        }
        store.set(&DataKey::Token, &token);
        store.set(&DataKey::Base, &base);
        store.set(&DataKey::Reserves, &(0i128, 0i128));
        store.set(&DataKey::TotalShares, &0i128);
        storage::bump_instance(&env);
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// `(token_reserve, base_reserve)`.
    pub fn get_reserves(env: Env) -> (i128, i128) {
        read_reserves(&env)
    }

    pub fn total_shares(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalShares)
            .unwrap_or(0)
    }

    pub fn share_balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Shares(id))
            .unwrap_or(0)
    }

    /// Spot price of one base unit in main-token, scaled by 10^18.
    pub fn current_price(env: Env) -> i128 {
        let (token_reserve, base_reserve) = read_reserves(&env);
        oracle::spot_price(token_reserve, base_reserve)
    }

    /// Average main-token output for `base_amount` over the last oracle
    /// window; zero once a full window passes without an update.
    pub fn consult(env: Env, base_amount: i128) -> i128 {
        read_oracle(&env).consult(base_amount, env.ledger().timestamp())
    }

    pub fn get_amount_out(env: Env, amount_in: i128, base_in: bool) -> Result<i128, Error> {
        let (token_reserve, base_reserve) = read_reserves(&env);
        if base_in {
            amount_out(amount_in, base_reserve, token_reserve)
        } else {
            amount_out(amount_in, token_reserve, base_reserve)
        }
    }

    // ── Liquidity ───────────────────────────────────────────────────────────

    /// Amounts `add_liquidity` would consume with the same arguments.
    pub fn quote_liquidity(
        env: Env,
        token_desired: i128,
        token_min: i128,
        base_desired: i128,
        base_min: i128,
    ) -> Result<LiquidityAdded, Error> {
        let (token_reserve, base_reserve) = read_reserves(&env);
        let (token, base) = optimal_amounts(
            token_desired,
            token_min,
            base_desired,
            base_min,
            token_reserve,
            base_reserve,
        )?;
        let total = Self::total_shares(env);
        let shares = shares_for(token, base, token_reserve, base_reserve, total)?;
        Ok(LiquidityAdded {
            token,
            base,
            shares,
        })
    }

    pub fn add_liquidity(
        env: Env,
        from: Address,
        token_desired: i128,
        token_min: i128,
        base_desired: i128,
        base_min: i128,
        to: Address,
    ) -> Result<LiquidityAdded, Error> {
        from.require_auth();
        let (token_addr, base_addr) = read_tokens(&env)?;
        let (token_reserve, base_reserve) = read_reserves(&env);
        let (token, base) = optimal_amounts(
            token_desired,
            token_min,
            base_desired,
            base_min,
            token_reserve,
            base_reserve,
        )?;

        let total = Self::total_shares(env.clone());
        let shares = shares_for(token, base, token_reserve, base_reserve, total)?;

        let this = env.current_contract_address();
        token::Client::new(&env, &token_addr).transfer(&from, &this, &token);
        token::Client::new(&env, &base_addr).transfer(&from, &this, &base);

        if total == 0 {
            credit_shares(&env, &this, MINIMUM_LIQUIDITY)?;
            set_total_shares(&env, MINIMUM_LIQUIDITY)?;
        }
        credit_shares(&env, &to, shares)?;
        set_total_shares(&env, Self::total_shares(env.clone()) + shares)?;
        write_reserves(&env, token_reserve + token, base_reserve + base);

        events::publish_liquidity_added(&env, to, token, base, shares);
        Ok(LiquidityAdded {
            token,
            base,
            shares,
        })
    }

    /// Burn `shares` and send the proportional reserves to `to`.
    pub fn remove_liquidity(
        env: Env,
        from: Address,
        shares: i128,
        token_min: i128,
        base_min: i128,
        to: Address,
    ) -> Result<(i128, i128), Error> {
        from.require_auth();
        if shares <= 0 {
            return Err(Error::InvalidAmount);
        }
        let (token_addr, base_addr) = read_tokens(&env)?;
        let (token_reserve, base_reserve) = read_reserves(&env);
        let total = Self::total_shares(env.clone());

        let token = math::mul_div(shares, token_reserve, total)?;
        let base = math::mul_div(shares, base_reserve, total)?;
        if token <= 0 || base <= 0 {
            return Err(Error::InsufficientReserves);
        }
        if token < token_min {
            return Err(Error::InsufficientTokenAmount);
        }
        if base < base_min {
            return Err(Error::InsufficientBaseAmount);
        }

        debit_shares(&env, &from, shares)?;
        set_total_shares(&env, total - shares)?;
        write_reserves(&env, token_reserve - token, base_reserve - base);

        let this = env.current_contract_address();
        token::Client::new(&env, &token_addr).transfer(&this, &to, &token);
        token::Client::new(&env, &base_addr).transfer(&this, &to, &base);

        events::publish_liquidity_removed(&env, from, shares, token, base);
        Ok((token, base))
    }

    pub fn transfer_shares(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        debit_shares(&env, &from, amount)?;
        credit_shares(&env, &to, amount)?;
        events::publish_shares_transferred(&env, from, to, amount);
        Ok(())
    }

    // ── Swaps ───────────────────────────────────────────────────────────────

    pub fn swap_exact_base_for_token(
        env: Env,
        from: Address,
        base_in: i128,
        token_out_min: i128,
        to: Address,
    ) -> Result<i128, Error> {
        from.require_auth();
        let (token_addr, base_addr) = read_tokens(&env)?;
        let (token_reserve, base_reserve) = read_reserves(&env);
        let token_out = amount_out(base_in, base_reserve, token_reserve)?;
        if token_out < token_out_min || token_out <= 0 {
            return Err(Error::InsufficientOutputAmount);
        }

        write_reserves(&env, token_reserve - token_out, base_reserve + base_in);

        let this = env.current_contract_address();
        token::Client::new(&env, &base_addr).transfer(&from, &this, &base_in);
        token::Client::new(&env, &token_addr).transfer(&this, &to, &token_out);

        events::publish_swap(&env, from, true, base_in, token_out);
        Ok(token_out)
    }

    pub fn swap_exact_token_for_base(
        env: Env,
        from: Address,
        token_in: i128,
        base_out_min: i128,
        to: Address,
    ) -> Result<i128, Error> {
        from.require_auth();
        let (token_addr, base_addr) = read_tokens(&env)?;
        let (token_reserve, base_reserve) = read_reserves(&env);
        let base_out = amount_out(token_in, token_reserve, base_reserve)?;
        if base_out < base_out_min || base_out <= 0 {
            return Err(Error::InsufficientOutputAmount);
        }

        write_reserves(&env, token_reserve + token_in, base_reserve - base_out);

        let this = env.current_contract_address();
        token::Client::new(&env, &token_addr).transfer(&from, &this, &token_in);
        token::Client::new(&env, &base_addr).transfer(&this, &to, &base_out);

        events::publish_swap(&env, from, false, token_in, base_out);
        Ok(base_out)
    }
}

// ── Pricing ──────────────────────────────────────────────────────────────────

fn quote(amount: i128, reserve_in: i128, reserve_out: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InsufficientAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(Error::InsufficientReserves);
    }
    math::mul_div(amount, reserve_out, reserve_in)
}

fn amount_out(amount_in: i128, reserve_in: i128, reserve_out: i128) -> Result<i128, Error> {
    if amount_in <= 0 {
        return Err(Error::InsufficientAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(Error::InsufficientReserves);
    }
    let in_with_fee = amount_in.checked_mul(FEE_NUMERATOR).ok_or(Error::Overflow)?;
    let numerator = in_with_fee
        .checked_mul(reserve_out)
        .ok_or(Error::Overflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)
        .and_then(|d| d.checked_add(in_with_fee))
        .ok_or(Error::Overflow)?;
    Ok(numerator / denominator)
}

fn optimal_amounts(
    token_desired: i128,
    token_min: i128,
    base_desired: i128,
    base_min: i128,
    token_reserve: i128,
    base_reserve: i128,
) -> Result<(i128, i128), Error> {
    if token_desired <= 0 || base_desired <= 0 || token_min < 0 || base_min < 0 {
        return Err(Error::InsufficientAmount);
    }
    if token_reserve == 0 && base_reserve == 0 {
        return Ok((token_desired, base_desired));
    }
    let base_optimal = quote(token_desired, token_reserve, base_reserve)?;
    if base_optimal <= base_desired {
        if base_optimal < base_min {
            return Err(Error::InsufficientBaseAmount);
        }
        return Ok((token_desired, base_optimal));
    }
    let token_optimal = quote(base_desired, base_reserve, token_reserve)?;
    if token_optimal < token_min {
        return Err(Error::InsufficientTokenAmount);
    }
    Ok((token_optimal, base_desired))
}

fn shares_for(
    token: i128,
    base: i128,
    token_reserve: i128,
    base_reserve: i128,
    total: i128,
) -> Result<i128, Error> {
    let shares = if total == 0 {
        let product = token.checked_mul(base).ok_or(Error::Overflow)?;
        sqrt(product) - MINIMUM_LIQUIDITY
    } else {
        let by_token = math::mul_div(token, total, token_reserve)?;
        let by_base = math::mul_div(base, total, base_reserve)?;
        by_token.min(by_base)
    };
    if shares <= 0 {
        return Err(Error::InsufficientReserves);
    }
    Ok(shares)
}

/// Integer square root, rounded down.
fn sqrt(value: i128) -> i128 {
    if value <= 0 {
        return 0;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn read_tokens(env: &Env) -> Result<(Address, Address), Error> {
    let store = env.storage().instance();
    let token = store.get(&DataKey::Token).ok_or(Error::NotInitialized)?;
    let base = store.get(&DataKey::Base).ok_or(Error::NotInitialized)?;
    Ok((token, base))
}

fn read_reserves(env: &Env) -> (i128, i128) {
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or((0, 0))
}

fn read_oracle(env: &Env) -> OracleState {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .unwrap_or_default()
}

/// Record new reserves, first folding the outgoing ones into the oracle.
fn write_reserves(env: &Env, token_reserve: i128, base_reserve: i128) {
    let (old_token, old_base) = read_reserves(env);
    let mut oracle = read_oracle(env);
    oracle.update(old_token, old_base, env.ledger().timestamp());
    env.storage().instance().set(&DataKey::Oracle, &oracle);
    env.storage()
        .instance()
        .set(&DataKey::Reserves, &(token_reserve, base_reserve));
    storage::bump_instance(env);
    events::publish_sync(env, token_reserve, base_reserve);
}

fn set_total_shares(env: &Env, total: i128) -> Result<(), Error> {
    if total < 0 {
        return Err(Error::Overflow);
    }
    env.storage().instance().set(&DataKey::TotalShares, &total);
    Ok(())
}

fn credit_shares(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let key = DataKey::Shares(id.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    storage::set_persistent(env, &key, &math::checked_add(balance, amount)?);
    Ok(())
}

fn debit_shares(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let key = DataKey::Shares(id.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    storage::set_persistent(env, &key, &(balance - amount));
    Ok(())
}
