use common::{
    constants::{BUYBACK_WEEKDAY, REBASE_WEEKDAY, UNIT},
    schedule::weekday,
    Error,
};
use fee_pool::VoteTally;

use crate::support::{assert_jdfi_pool_balanced, closed_system};

// ── Activation ───────────────────────────────────────────────────────────────

#[test]
fn test_activation_is_bootstrap_only_and_once() {
    let (system, depositor) = closed_system(1);

    assert!(system.fee_pool.is_active());
    let result = system.fee_pool.try_activate(&depositor);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    let result = system.fee_pool.try_activate(&system.registry.bootstrap);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::AlreadyInitialized),
        _ => unreachable!("Expected AlreadyInitialized error"),
    }
}

// ── Buyback ──────────────────────────────────────────────────────────────────

#[test]
fn test_buyback_gated_to_friday_once_a_day() {
    let (system, _depositor) = closed_system(1);
    assert_eq!(weekday(system.now()), BUYBACK_WEEKDAY);

    system.fee_pool.buyback();
    assert_eq!(system.fee_pool.last_buyback_at(), system.now());

    let result = system.fee_pool.try_buyback();
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::AlreadyCalledToday),
        _ => unreachable!("Expected AlreadyCalledToday error"),
    }

    system.advance_days(1);
    let result = system.fee_pool.try_buyback();
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::WrongWeekday),
        _ => unreachable!("Expected WrongWeekday error"),
    }

    system.advance_to_next(BUYBACK_WEEKDAY);
    system.fee_pool.buyback();
}

#[test]
fn test_buyback_burns_bought_token() {
    let (system, _depositor) = closed_system(1);
    let voter = system.user_with_base(UNIT / 2);
    system.fee_pool.vote(&voter, &true, &(UNIT / 2));
    let supply = system.ledger.total_supply();

    let burned = system.fee_pool.buyback();

    assert_eq!(burned, 13_306_639);
    assert_eq!(system.ledger.total_supply(), supply - burned);
    assert_eq!(system.ledger.balance(&system.registry.fee_pool), 2_000 * UNIT);
    assert_eq!(system.base.balance(&system.registry.fee_pool), 0);
    assert_eq!(
        system.exchange.get_reserves(),
        (4 * UNIT - burned, UNIT + UNIT / 2)
    );
}

#[test]
fn test_buyback_reclaims_liquidity_added_after_bootstrap() {
    let (system, depositor) = closed_system(10);
    let token = system.unstake_all(&depositor);
    system.fund(&depositor, 9 * UNIT);
    let added = system
        .univ2_pool
        .stake_liquidity(&depositor, &token, &0, &0, &(9 * UNIT));
    assert_eq!(added, 180_000_000);

    system.fee_pool.buyback();

    let fee_pool = &system.registry.fee_pool;
    assert_eq!(system.exchange.share_balance(fee_pool), 199_999_000 - added);
    assert_eq!(system.ledger.balance(fee_pool), 2_000 * UNIT);
    assert_eq!(system.base.balance(fee_pool), 0);
    assert_eq!(system.fee_pool.reward_reserve(), 2_000 * UNIT);
}

// ── Rebase ───────────────────────────────────────────────────────────────────

#[test]
fn test_rebase_gated_to_sunday_once_a_day() {
    let (system, _depositor) = closed_system(1);

    let result = system.fee_pool.try_rebase();
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::WrongWeekday),
        _ => unreachable!("Expected WrongWeekday error"),
    }

    system.advance_to_next(REBASE_WEEKDAY);
    system.fee_pool.rebase();
    assert_eq!(system.fee_pool.last_rebase_at(), system.now());

    let result = system.fee_pool.try_rebase();
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::AlreadyCalledToday),
        _ => unreachable!("Expected AlreadyCalledToday error"),
    }
}

#[test]
fn test_rebase_distributes_reserve_to_stakers() {
    let (system, depositor) = closed_system(1);
    system.advance_to_next(REBASE_WEEKDAY);

    let distributed = system.fee_pool.rebase();

    assert_eq!(distributed, 2_000 * UNIT);
    assert_eq!(system.ledger.balance(&system.registry.fee_pool), 0);
    assert_eq!(system.fee_pool.reward_reserve(), 0);
    assert_eq!(system.jdfi_pool.pool_info().distributed, 2_000 * UNIT);

    let pending = system.jdfi_pool.rewards_of(&system.deployer)
        + system.jdfi_pool.rewards_of(&depositor);
    assert!(pending <= 2_000 * UNIT);
    assert!(pending >= 2_000 * UNIT - 2);
    assert_jdfi_pool_balanced(&system);
}

#[test]
fn test_rebase_remints_accrued_fees() {
    let (system, depositor) = closed_system(1);
    system.unstake_all(&depositor);
    assert_eq!(system.ledger.accrued_fees(), 4 * UNIT / 10);
    system.advance_to_next(REBASE_WEEKDAY);

    let distributed = system.fee_pool.rebase();

    assert_eq!(distributed, 2_000 * UNIT + 4 * UNIT / 10);
    assert_eq!(system.ledger.accrued_fees(), 0);
    assert_eq!(
        system.jdfi_pool.rewards_of(&system.deployer),
        2_000 * UNIT + 4 * UNIT / 10
    );
}

#[test]
fn test_rebase_without_stakers_keeps_reserve() {
    let (system, depositor) = closed_system(1);
    system.unstake_all(&depositor);
    system.unstake_all(&system.deployer);
    let accrued = system.ledger.accrued_fees();
    system.advance_to_next(REBASE_WEEKDAY);

    assert_eq!(system.fee_pool.rebase(), 0);

    assert_eq!(system.ledger.balance(&system.registry.fee_pool), 2_000 * UNIT);
    assert_eq!(system.ledger.accrued_fees(), accrued);
    assert_eq!(system.fee_pool.fee_rate(), 1_000);
}

#[test]
fn test_rebase_weights_univ2_stake_threefold() {
    let (system, depositor) = closed_system(10);
    let token = system.unstake_all(&depositor);
    system.fund(&depositor, 9 * UNIT);
    system
        .univ2_pool
        .stake_liquidity(&depositor, &token, &0, &0, &(9 * UNIT));
    system.advance_to_next(REBASE_WEEKDAY);

    system.fee_pool.rebase();

    // 2_004 units split 20_000_000_000 : 3 * 360_000_000.
    assert_eq!(system.jdfi_pool.pool_info().distributed, 19_013_282_732);
    assert_eq!(system.univ2_pool.pool_info().distributed, 1_026_717_268);
}

// ── Fee vote ─────────────────────────────────────────────────────────────────

#[test]
fn test_fee_vote_applied_at_rebase() {
    let (system, _depositor) = closed_system(1);
    let voter = system.user_with_base(3 * UNIT);

    system.fee_pool.vote(&voter, &true, &(2 * UNIT));
    assert_eq!(
        system.fee_pool.votes(),
        VoteTally {
            increase: 2 * UNIT,
            decrease: 0
        }
    );
    assert_eq!(system.fee_pool.projected_fee(), 1_500);
    assert_eq!(system.base.balance(&system.registry.fee_pool), 2 * UNIT);

    system.advance_to_next(REBASE_WEEKDAY);
    system.fee_pool.rebase();
    assert_eq!(system.fee_pool.fee_rate(), 1_500);
    assert_eq!(system.fee_pool.votes(), VoteTally::default());

    system.fee_pool.vote(&voter, &false, &UNIT);
    system.advance_to_next(REBASE_WEEKDAY);
    system.fee_pool.rebase();
    assert_eq!(system.fee_pool.fee_rate(), 750);
}

#[test]
fn test_vote_rejects_non_positive() {
    let (system, _depositor) = closed_system(1);
    let voter = system.user_with_base(UNIT);

    let result = system.fee_pool.try_vote(&voter, &true, &0);
    match result {
        Err(Ok(e)) => assert_eq!(e, Error::InvalidAmount),
        _ => unreachable!("Expected InvalidAmount error"),
    }
}
