use common::{constants::UNIT, Error};
use harness::System;
use soroban_sdk::{testutils::Address as _, Address};

use crate::support::{closed_system, user_with_token};

#[test]
fn test_only_bootstrap_mints() {
    let system = System::new();
    let stranger = Address::generate(&system.env);

    let result = system.ledger.try_mint(&stranger, &stranger, &UNIT);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_transfers_open_after_close() {
    let (system, _depositor) = closed_system(1);
    let alice = user_with_token(&system, 10 * UNIT);
    let bob = Address::generate(&system.env);

    system.ledger.transfer(&alice, &bob, &(4 * UNIT));

    assert_eq!(system.ledger.balance(&alice), 6 * UNIT);
    assert_eq!(system.ledger.balance(&bob), 4 * UNIT);
}

#[test]
fn test_enable_transfers_only_bootstrap() {
    let (system, depositor) = closed_system(1);

    let result = system.ledger.try_enable_transfers(&depositor);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_mint_accrued_only_fee_pool() {
    let (system, depositor) = closed_system(1);
    system.unstake_all(&depositor);

    let result = system.ledger.try_mint_accrued(&depositor);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(system.ledger.accrued_fees(), 4 * UNIT / 10);
}

#[test]
fn test_fee_follows_fee_pool_rate() {
    let (system, depositor) = closed_system(1);
    assert_eq!(system.fee_pool.fee_rate(), 1_000);
    let supply = system.ledger.total_supply();

    let received = system.jdfi_pool.unstake(&depositor, &(2 * UNIT));

    assert_eq!(received, 18 * UNIT / 10);
    assert_eq!(system.ledger.total_supply(), supply - 2 * UNIT / 10);
}
