#![no_std]

//! Airdrop claim token.
//!
//! The deployer receives the justice reserve in this token and airdrops it to
//! recipients. Anyone can then `exchange` a holder's balance: the tokens are
//! burned and the same amount of main-token, held by this contract, is staked
//! for the holder as locked JDFI/S.

pub mod events;

use common::{
    constants::{DECIMALS, JUSTICE_RESERVE},
    interfaces::{JdfiPoolClient, LedgerClient},
    math, storage, Error,
};
use soroban_sdk::{contract, contractimpl, contracttype, vec, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Deployer,
    Ledger,
    JdfiPool,
    TotalSupply,
    Balance(Address),
}

#[contract]
pub struct AirdropTokenContract;

#[contractimpl]
impl AirdropTokenContract {
    /// Mint the justice reserve to `deployer`.
    pub fn initialize(env: Env, deployer: Address, ledger: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Deployer) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Deployer, &deployer);
        env.storage().instance().set(&DataKey::Ledger, &ledger);
        storage::bump_instance(&env);

        credit(&env, &deployer, JUSTICE_RESERVE)?;
        set_total_supply(&env, JUSTICE_RESERVE);
        events::publish_transfer(&env, None, Some(deployer), JUSTICE_RESERVE);
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, "JusDeFi Airdrop")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "JDFI/A")
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn jdfi_staking_pool(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::JdfiPool)
    }

    // ── Mutations ───────────────────────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        debit(&env, &from, amount)?;
        credit(&env, &to, amount)?;
        events::publish_transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    /// Move `sum(amounts)` from the deployer to the listed recipients.
    pub fn airdrop(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let deployer = read_deployer(&env)?;
        if caller != deployer {
            return Err(Error::NotDeployer);
        }
        if accounts.len() != amounts.len() {
            return Err(Error::ArrayLengthMismatch);
        }

        let total = math::sum(&amounts)?;
        debit(&env, &deployer, total)?;
        events::publish_transfer(&env, Some(deployer), None, total);

        for (account, amount) in accounts.iter().zip(amounts.iter()) {
            credit(&env, &account, amount)?;
            events::publish_transfer(&env, None, Some(account), amount);
        }
        Ok(())
    }

    /// Bind the JDFI staking pool. Deployer only, once.
    pub fn set_jdfi_staking_pool(env: Env, caller: Address, pool: Address) -> Result<(), Error> {
        caller.require_auth();
        if caller != read_deployer(&env)? {
            return Err(Error::NotDeployer);
        }
        if env.storage().instance().has(&DataKey::JdfiPool) {
            return Err(Error::StakingPoolAlreadySet);
        }
        env.storage().instance().set(&DataKey::JdfiPool, &pool);
        Ok(())
    }

    /// Burn `account`'s whole balance and stake the same amount of
    /// main-token for it as locked JDFI/S. Callable by anyone.
    pub fn exchange(env: Env, account: Address) -> Result<i128, Error> {
        let pool: Address = env
            .storage()
            .instance()
            .get(&DataKey::JdfiPool)
            .ok_or(Error::StakingPoolNotSet)?;
        let ledger: Address = env
            .storage()
            .instance()
            .get(&DataKey::Ledger)
            .ok_or(Error::NotInitialized)?;

        let amount = read_balance(&env, &account);
        if amount == 0 {
            return Ok(0);
        }
        debit(&env, &account, amount)?;
        set_total_supply(&env, Self::total_supply(env.clone()) - amount);
        events::publish_transfer(&env, Some(account.clone()), None, amount);

        let this = env.current_contract_address();
        LedgerClient::new(&env, &ledger).transfer(&this, &pool, &amount);
        JdfiPoolClient::new(&env, &pool).airdrop_locked(
            &this,
            &vec![&env, account.clone()],
            &vec![&env, amount],
        );

        events::publish_exchanged(&env, account, amount);
        Ok(amount)
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

fn read_deployer(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Deployer)
        .ok_or(Error::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = math::checked_add(read_balance(env, id), amount)?;
    storage::set_persistent(env, &DataKey::Balance(id.clone()), &balance);
    Ok(())
}

fn debit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    storage::set_persistent(env, &DataKey::Balance(id.clone()), &(balance - amount));
    Ok(())
}

fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}
