use common::{
    constants::{JUSTICE_RESERVE, UNIT},
    Error,
};
use harness::System;
use soroban_sdk::{testutils::Address as _, vec, Address};

use crate::support::{assert_jdfi_pool_balanced, closed_system};

fn airdrop_to(system: &System, units: i128) -> Address {
    let recipient = Address::generate(&system.env);
    system.airdrop.airdrop(
        &system.deployer,
        &vec![&system.env, recipient.clone()],
        &vec![&system.env, units * UNIT],
    );
    recipient
}

/// Close the bootstrap, then airdrop `units` to a recipient and exchange them
/// into locked JDFI/S.
fn locked_holder(units: i128) -> (System, Address) {
    let (system, _depositor) = closed_system(1);
    let holder = airdrop_to(&system, units);
    system.airdrop.exchange(&holder);
    (system, holder)
}

// ── Airdrop ──────────────────────────────────────────────────────────────────

#[test]
fn test_mismatched_airdrop_changes_nothing() {
    let system = System::new();
    let a = Address::generate(&system.env);
    let b = Address::generate(&system.env);

    let result = system.airdrop.try_airdrop(
        &system.deployer,
        &vec![&system.env, a.clone(), b.clone()],
        &vec![&system.env, UNIT],
    );
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::ArrayLengthMismatch),
        _ => unreachable!("Expected ArrayLengthMismatch error"),
    }
    assert_eq!(system.airdrop.balance(&system.deployer), JUSTICE_RESERVE);
    assert_eq!(system.airdrop.balance(&a), 0);
    assert_eq!(system.airdrop.balance(&b), 0);
}

#[test]
fn test_staking_pool_bound_at_deploy() {
    let system = System::new();

    assert_eq!(
        system.airdrop.jdfi_staking_pool(),
        Some(system.registry.jdfi_pool.clone())
    );
    let result = system
        .airdrop
        .try_set_jdfi_staking_pool(&system.deployer, &system.registry.jdfi_pool);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::StakingPoolAlreadySet),
        _ => unreachable!("Expected StakingPoolAlreadySet error"),
    }
}

// ── Exchange ─────────────────────────────────────────────────────────────────

#[test]
fn test_exchange_blocked_before_close() {
    let system = System::new();
    let holder = airdrop_to(&system, 7);

    let result = system.airdrop.try_exchange(&holder);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::TransfersLocked),
        _ => unreachable!("Expected TransfersLocked error"),
    }
    assert_eq!(system.airdrop.balance(&holder), 7 * UNIT);
    assert_eq!(system.jdfi_pool.balance(&holder), 0);
}

#[test]
fn test_exchange_stakes_locked_shares() {
    let (system, holder) = locked_holder(7);

    assert_eq!(system.airdrop.balance(&holder), 0);
    assert_eq!(system.airdrop.total_supply(), JUSTICE_RESERVE - 7 * UNIT);
    assert_eq!(system.jdfi_pool.balance(&holder), 7 * UNIT);
    assert_eq!(system.jdfi_pool.locked_balance_of(&holder), 7 * UNIT);
    assert_eq!(
        system.ledger.balance(&system.registry.airdrop_token),
        JUSTICE_RESERVE - 7 * UNIT
    );
    assert_jdfi_pool_balanced(&system);

    // Nothing left to exchange.
    assert_eq!(system.airdrop.exchange(&holder), 0);
}

// ── Unlock ───────────────────────────────────────────────────────────────────

#[test]
fn test_unlock_more_than_locked_fails() {
    let (system, holder) = locked_holder(7);
    system.fund(&holder, 2 * UNIT);

    let result = system.jdfi_pool.try_unlock(&holder, &(2 * UNIT));
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::InsufficientLockedBalance),
        _ => unreachable!("Expected InsufficientLockedBalance error"),
    }
    assert_eq!(system.jdfi_pool.locked_balance_of(&holder), 7 * UNIT);
    assert_eq!(system.base.balance(&holder), 2 * UNIT);
}

#[test]
fn test_unlock_before_close_fails() {
    let system = System::new();
    let holder = system.user_with_base(UNIT);

    let result = system.jdfi_pool.try_unlock(&holder, &UNIT);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::BootstrapInProgress),
        _ => unreachable!("Expected BootstrapInProgress error"),
    }
}

#[test]
fn test_unlock_splits_payment_between_pools() {
    let (system, holder) = locked_holder(7);
    system.fund(&holder, UNIT);

    let released = system.jdfi_pool.unlock(&holder, &UNIT);

    assert_eq!(released, 4 * UNIT);
    assert_eq!(system.jdfi_pool.locked_balance_of(&holder), 3 * UNIT);
    assert_eq!(system.base.balance(&holder), 0);
    assert_eq!(system.base.balance(&system.registry.fee_pool), UNIT / 2);
    assert_eq!(system.base.balance(&system.registry.dev_pool), UNIT / 2);
    assert_eq!(system.dev_pool.rewards_of(&system.deployer), UNIT / 2);
}

#[test]
fn test_locked_shares_cannot_leave_pool() {
    let (system, holder) = locked_holder(7);
    system.fund(&holder, UNIT);
    system.jdfi_pool.unlock(&holder, &UNIT);

    let result = system.jdfi_pool.try_unstake(&holder, &(5 * UNIT));
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::ExceedsUnlockedBalance),
        _ => unreachable!("Expected ExceedsUnlockedBalance error"),
    }

    let received = system.jdfi_pool.unstake(&holder, &(4 * UNIT));
    assert_eq!(received, 36 * UNIT / 10);
    assert_eq!(system.jdfi_pool.balance(&holder), 3 * UNIT);
    assert_jdfi_pool_balanced(&system);
}
