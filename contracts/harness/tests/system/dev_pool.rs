use common::{
    constants::{DEV_SUPPLY, UNIT},
    Error,
};
use harness::System;
use soroban_sdk::{testutils::Address as _, vec, Address, String};

use crate::support::closed_system;

#[test]
fn test_dev_supply_minted_to_deployer() {
    let system = System::new();

    assert_eq!(system.dev_pool.balance(&system.deployer), DEV_SUPPLY);
    assert_eq!(system.dev_pool.total_shares(), DEV_SUPPLY);
    assert_eq!(
        system.dev_pool.symbol(),
        String::from_str(&system.env, "JDFI/E")
    );
}

#[test]
fn test_dev_shares_transferable() {
    let system = System::new();
    let bob = Address::generate(&system.env);
    let carol = Address::generate(&system.env);

    system.dev_pool.transfer(&system.deployer, &bob, &(100 * UNIT));
    system.dev_pool.approve(&bob, &carol, &(40 * UNIT));
    system
        .dev_pool
        .transfer_from(&carol, &bob, &carol, &(40 * UNIT));

    assert_eq!(system.dev_pool.balance(&bob), 60 * UNIT);
    assert_eq!(system.dev_pool.balance(&carol), 40 * UNIT);
    assert_eq!(system.dev_pool.allowance(&bob, &carol), 0);

    let result = system
        .dev_pool
        .try_transfer_from(&carol, &bob, &carol, &UNIT);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::InsufficientAllowance),
        _ => unreachable!("Expected InsufficientAllowance error"),
    }
}

#[test]
fn test_dev_rewards_paid_in_base_without_fee() {
    let (system, _depositor) = closed_system(1);
    let bob = Address::generate(&system.env);
    system
        .dev_pool
        .transfer(&system.deployer, &bob, &(DEV_SUPPLY / 2));

    // Unlock an airdropped position to feed the dev pool.
    let holder = Address::generate(&system.env);
    system.airdrop.airdrop(
        &system.deployer,
        &vec![&system.env, holder.clone()],
        &vec![&system.env, 8 * UNIT],
    );
    system.airdrop.exchange(&holder);
    system.fund(&holder, 2 * UNIT);
    system.jdfi_pool.unlock(&holder, &(2 * UNIT));

    assert_eq!(system.dev_pool.rewards_of(&bob), UNIT / 2);
    assert_eq!(system.dev_pool.rewards_of(&system.deployer), UNIT / 2);

    let paid = system.dev_pool.withdraw(&bob);
    assert_eq!(paid, UNIT / 2);
    assert_eq!(system.base.balance(&bob), UNIT / 2);
    assert_eq!(system.dev_pool.rewards_of(&bob), 0);

    let info = system.dev_pool.pool_info();
    assert_eq!(info.distributed, UNIT);
    assert_eq!(info.paid_out, UNIT / 2);
}
