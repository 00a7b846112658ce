use common::constants::UNIT;
use harness::System;
use soroban_sdk::Address;

/// Close the bootstrap with a single deposit of `units` whole base tokens.
pub fn closed_system(units: i128) -> (System, Address) {
    let system = System::new();
    let depositor = system.close_bootstrap(units * UNIT);
    (system, depositor)
}

/// Main-token for a fresh account, taken from the deployer's unstaked team
/// reserve. Requires a closed bootstrap.
pub fn user_with_token(system: &System, amount: i128) -> Address {
    let user = system.user_with_base(0);
    if system.ledger.balance(&system.deployer) < amount {
        system.unstake_all(&system.deployer);
    }
    system.ledger.transfer(&system.deployer, &user, &amount);
    user
}

/// Pool solvency: held main-token equals principal plus unpaid rewards.
pub fn assert_jdfi_pool_balanced(system: &System) {
    let info = system.jdfi_pool.pool_info();
    assert_eq!(
        system.ledger.balance(&system.registry.jdfi_pool),
        info.total_shares + info.distributed - info.paid_out
    );
}
