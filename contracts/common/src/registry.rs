//! Address book shared by every contract in the suite.
//!
//! Contracts are deployed first, then each one receives the same [`Registry`]
//! in `initialize` and keeps it in instance storage. Cross-contract calls
//! resolve their target through it rather than through stored siblings.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{storage, Error};

const REGISTRY: Symbol = symbol_short!("REGISTRY");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registry {
    pub deployer: Address,
    pub ledger: Address,
    /// SEP-41 base asset paid into the bootstrap and used as dev reward.
    pub base_asset: Address,
    pub exchange: Address,
    pub bootstrap: Address,
    pub fee_pool: Address,
    pub jdfi_pool: Address,
    pub univ2_pool: Address,
    pub dev_pool: Address,
    pub airdrop_token: Address,
}

impl Registry {
    /// Persist the registry, failing if the contract was already initialised.
    pub fn install(&self, env: &Env) -> Result<(), Error> {
        if env.storage().instance().has(&REGISTRY) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&REGISTRY, self);
        storage::bump_instance(env);
        Ok(())
    }

    pub fn load(env: &Env) -> Result<Registry, Error> {
        env.storage()
            .instance()
            .get(&REGISTRY)
            .ok_or(Error::NotInitialized)
    }

    pub fn is_installed(env: &Env) -> bool {
        env.storage().instance().has(&REGISTRY)
    }
}
