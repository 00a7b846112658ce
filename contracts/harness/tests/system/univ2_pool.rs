use common::{
    constants::{REBASE_WEEKDAY, UNIT},
    Error,
};
use harness::System;
use soroban_sdk::{testutils::Address as _, Address};

use crate::support::closed_system;

/// Closed at 10 base units; the depositor's 36 unstaked tokens paired with
/// 9 base units are staked in the UNIV2 pool.
fn liquidity_staker() -> (System, Address) {
    let (system, depositor) = closed_system(10);
    let token = system.unstake_all(&depositor);
    system.fund(&depositor, 9 * UNIT);
    system
        .univ2_pool
        .stake_liquidity(&depositor, &token, &0, &0, &(9 * UNIT));
    (system, depositor)
}

// ── Staking ──────────────────────────────────────────────────────────────────

#[test]
fn test_stake_liquidity_mints_pool_shares() {
    let (system, staker) = liquidity_staker();

    assert_eq!(system.univ2_pool.balance(&staker), 180_000_000);
    assert_eq!(system.univ2_pool.total_shares(), 180_000_000);
    assert_eq!(
        system.exchange.share_balance(&system.registry.univ2_pool),
        180_000_000
    );
    assert_eq!(system.exchange.get_reserves(), (76 * UNIT, 19 * UNIT));
    assert_eq!(system.ledger.balance(&staker), 0);
    assert_eq!(system.base.balance(&staker), 0);
}

#[test]
fn test_stake_liquidity_checks_bounds() {
    let (system, depositor) = closed_system(10);

    let result = system
        .univ2_pool
        .try_stake_liquidity(&depositor, &UNIT, &(2 * UNIT), &0, &UNIT);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::MinTokenExceedsDesired),
        _ => unreachable!("Expected MinTokenExceedsDesired error"),
    }

    let result = system
        .univ2_pool
        .try_stake_liquidity(&depositor, &UNIT, &0, &(2 * UNIT), &UNIT);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::MinBaseExceedsValue),
        _ => unreachable!("Expected MinBaseExceedsValue error"),
    }
}

#[test]
fn test_stake_existing_exchange_shares() {
    let (system, depositor) = closed_system(10);
    let token = system.unstake_all(&depositor);
    system.fund(&depositor, 9 * UNIT);
    let added = system.exchange.add_liquidity(
        &depositor,
        &token,
        &0,
        &(9 * UNIT),
        &0,
        &depositor,
    );

    system.univ2_pool.stake(&depositor, &added.shares);

    assert_eq!(system.univ2_pool.balance(&depositor), added.shares);
    assert_eq!(system.exchange.share_balance(&depositor), 0);
}

#[test]
fn test_unstake_returns_both_sides() {
    let (system, staker) = liquidity_staker();

    let (token, base) = system
        .univ2_pool
        .unstake(&staker, &180_000_000, &0, &0);

    assert_eq!(base, 9 * UNIT);
    assert_eq!(token, 36 * UNIT * 9 / 10);
    assert_eq!(system.base.balance(&staker), 9 * UNIT);
    assert_eq!(system.ledger.balance(&staker), token);
    assert_eq!(system.univ2_pool.total_shares(), 0);
}

#[test]
fn test_unstake_respects_slippage_floor() {
    let (system, staker) = liquidity_staker();

    let result = system
        .univ2_pool
        .try_unstake(&staker, &180_000_000, &(37 * UNIT), &0);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::InsufficientTokenAmount),
        _ => unreachable!("Expected InsufficientTokenAmount error"),
    }
    assert_eq!(system.univ2_pool.balance(&staker), 180_000_000);
}

// ── Rewards ──────────────────────────────────────────────────────────────────

#[test]
fn test_withdraw_rewards_net_of_fee() {
    let (system, staker) = liquidity_staker();
    system.advance_to_next(REBASE_WEEKDAY);
    system.fee_pool.rebase();

    let reward = system.univ2_pool.rewards_of(&staker);
    assert!(reward > 0);
    assert!(reward <= 1_026_717_268);

    let received = system.univ2_pool.withdraw(&staker);
    assert_eq!(received, reward - reward / 10);
    assert_eq!(system.ledger.balance(&staker), received);
    assert_eq!(system.univ2_pool.rewards_of(&staker), 0);
}

#[test]
fn test_compound_pairs_reward_with_base() {
    let (system, staker) = liquidity_staker();
    system.advance_to_next(REBASE_WEEKDAY);
    system.fee_pool.rebase();
    system.fund(&staker, 100 * UNIT);
    let shares_before = system.univ2_pool.balance(&staker);

    let added = system.univ2_pool.compound(&staker, &0, &(100 * UNIT));

    assert!(added > 0);
    assert_eq!(system.univ2_pool.balance(&staker), shares_before + added);
    assert_eq!(system.univ2_pool.rewards_of(&staker), 0);
    assert!(system.base.balance(&staker) < 100 * UNIT);
    // Only rounding dust stays behind.
    assert!(system.ledger.balance(&system.registry.univ2_pool) <= 1);
}

#[test]
fn test_compound_without_reward_is_noop() {
    let (system, staker) = liquidity_staker();

    assert_eq!(system.univ2_pool.compound(&staker, &0, &UNIT), 0);
}

#[test]
fn test_shares_not_transferable() {
    let (system, staker) = liquidity_staker();
    let other = Address::generate(&system.env);

    let result = system.univ2_pool.try_transfer(&staker, &other, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::NonTransferable),
        _ => unreachable!("Expected NonTransferable error"),
    }
}
