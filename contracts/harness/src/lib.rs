//! Test harness that deploys and wires the full JusDeFi suite inside a
//! `soroban_sdk::Env`.
//!
//! Used by the system and property tests in this crate and by the fuzz
//! targets. Every contract is registered natively, given the same
//! [`Registry`], and initialised in dependency order, with the bootstrap last
//! since its initialisation stakes into the JDFI pool.

use airdrop_token::{AirdropTokenContract, AirdropTokenContractClient};
use bootstrap::{BootstrapContract, BootstrapContractClient};
use common::{constants::SECONDS_PER_DAY, schedule::WeeklyWindow, Registry};
use dev_pool::{DevPoolContract, DevPoolContractClient};
use exchange::{ExchangeContract, ExchangeContractClient};
use fee_pool::{FeePoolContract, FeePoolContractClient};
use jdfi_pool::{JdfiPoolContract, JdfiPoolContractClient};
use ledger_token::{LedgerTokenContract, LedgerTokenContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use univ2_pool::{Univ2PoolContract, Univ2PoolContractClient};

/// 2021-01-01 00:00:00 UTC, a Friday.
pub const GENESIS: u64 = 1_609_459_200;
/// Default bootstrap deadline: one week after genesis, also a Friday.
pub const BOOTSTRAP_PERIOD: u64 = 7 * SECONDS_PER_DAY;

pub struct System {
    pub env: Env,
    pub registry: Registry,
    pub deployer: Address,
    pub base: TokenClient<'static>,
    pub base_admin: StellarAssetClient<'static>,
    pub ledger: LedgerTokenContractClient<'static>,
    pub exchange: ExchangeContractClient<'static>,
    pub bootstrap: BootstrapContractClient<'static>,
    pub fee_pool: FeePoolContractClient<'static>,
    pub jdfi_pool: JdfiPoolContractClient<'static>,
    pub univ2_pool: Univ2PoolContractClient<'static>,
    pub dev_pool: DevPoolContractClient<'static>,
    pub airdrop: AirdropTokenContractClient<'static>,
}

impl System {
    /// Fresh environment at [`GENESIS`] with all auths mocked, including
    /// those first required below the root invocation.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();
        env.ledger().set_timestamp(GENESIS);
        Self::deploy(&env, GENESIS + BOOTSTRAP_PERIOD)
    }

    /// Register and initialise every contract in `env`.
    pub fn deploy(env: &Env, closes_at: u64) -> Self {
        let deployer = Address::generate(env);
        let base_sac = env.register_stellar_asset_contract_v2(Address::generate(env));

        let registry = Registry {
            deployer: deployer.clone(),
            ledger: env.register(LedgerTokenContract, ()),
            base_asset: base_sac.address(),
            exchange: env.register(ExchangeContract, ()),
            bootstrap: env.register(BootstrapContract, ()),
            fee_pool: env.register(FeePoolContract, ()),
            jdfi_pool: env.register(JdfiPoolContract, ()),
            univ2_pool: env.register(Univ2PoolContract, ()),
            dev_pool: env.register(DevPoolContract, ()),
            airdrop_token: env.register(AirdropTokenContract, ()),
        };

        let system = System {
            env: env.clone(),
            deployer,
            base: TokenClient::new(env, &registry.base_asset),
            base_admin: StellarAssetClient::new(env, &registry.base_asset),
            ledger: LedgerTokenContractClient::new(env, &registry.ledger),
            exchange: ExchangeContractClient::new(env, &registry.exchange),
            bootstrap: BootstrapContractClient::new(env, &registry.bootstrap),
            fee_pool: FeePoolContractClient::new(env, &registry.fee_pool),
            jdfi_pool: JdfiPoolContractClient::new(env, &registry.jdfi_pool),
            univ2_pool: Univ2PoolContractClient::new(env, &registry.univ2_pool),
            dev_pool: DevPoolContractClient::new(env, &registry.dev_pool),
            airdrop: AirdropTokenContractClient::new(env, &registry.airdrop_token),
            registry,
        };

        let registry = &system.registry;
        system.ledger.initialize(registry);
        system
            .exchange
            .initialize(&registry.ledger, &registry.base_asset);
        system.fee_pool.initialize(registry);
        system.jdfi_pool.initialize(registry);
        system.univ2_pool.initialize(registry);
        system.dev_pool.initialize(registry);
        system
            .airdrop
            .initialize(&registry.deployer, &registry.ledger);
        system
            .airdrop
            .set_jdfi_staking_pool(&registry.deployer, &registry.jdfi_pool);
        system.bootstrap.initialize(registry, &closes_at);
        system
    }

    // ── Accounts ────────────────────────────────────────────────────────────

    /// A new account holding `base_amount` of the base asset.
    pub fn user_with_base(&self, base_amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.fund(&user, base_amount);
        user
    }

    pub fn fund(&self, account: &Address, base_amount: i128) {
        if base_amount > 0 {
            self.base_admin.mint(account, &base_amount);
        }
    }

    /// Main-token for `account`, bought in the bootstrap and unstaked after
    /// close. Only valid once transfers are enabled.
    pub fn unstake_all(&self, account: &Address) -> i128 {
        let shares = self.jdfi_pool.balance(account) - self.jdfi_pool.locked_balance_of(account);
        if shares == 0 {
            return 0;
        }
        self.jdfi_pool.unstake(account, &shares)
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Deposit `value` from a fresh account, move past the deadline and
    /// close. Returns the depositor.
    pub fn close_bootstrap(&self, value: i128) -> Address {
        let depositor = self.user_with_base(value);
        self.bootstrap.deposit(&depositor, &value);
        self.advance_to(self.bootstrap.closes_at());
        self.bootstrap.close();
        depositor
    }

    // ── Time ────────────────────────────────────────────────────────────────

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// Move the clock forward to `timestamp`; earlier targets are ignored.
    pub fn advance_to(&self, timestamp: u64) {
        if timestamp > self.now() {
            self.env.ledger().set_timestamp(timestamp);
        }
    }

    pub fn advance_days(&self, days: u64) {
        self.advance_to(self.now() + days * SECONDS_PER_DAY);
    }

    /// Jump to the next occurrence of `weekday` at least one day from now.
    pub fn advance_to_next(&self, weekday: u32) {
        let from = self.now() + SECONDS_PER_DAY;
        self.advance_to(WeeklyWindow::new(weekday).next_opening(from));
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
