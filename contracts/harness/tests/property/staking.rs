//! Random stake / unstake / withdraw / compound / distribute sequences on the
//! JDFI pool after the bootstrap has closed.
//!
//! Invariants tested:
//! - `total_shares` always equals the sum of account balances
//! - The pool holds exactly its principal plus unpaid rewards
//! - Pending rewards never exceed what was distributed and not yet paid
//! - Locked shares never exceed an account's balance

use common::constants::UNIT;
use harness::System;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::{vec, Address};

const USERS: usize = 3;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Stake {
        #[proptest(strategy = "0..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..=500 * UNIT")]
        amount: i128,
    },
    Unstake {
        #[proptest(strategy = "0..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..=500 * UNIT")]
        amount: i128,
    },
    Withdraw {
        #[proptest(strategy = "0..USERS")]
        user: usize,
    },
    Compound {
        #[proptest(strategy = "0..USERS")]
        user: usize,
    },
    Distribute {
        #[proptest(strategy = "0..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..=100 * UNIT")]
        amount: i128,
    },
    Unlock {
        #[proptest(strategy = "0..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..=5 * UNIT")]
        payment: i128,
    },
}

struct World {
    system: System,
    users: [Address; USERS],
}

/// Three depositors of 100 base units each, every one also holding 20 units
/// of airdropped (locked) shares and 20 base units for unlocking.
fn world() -> World {
    let system = System::new();
    let users = core::array::from_fn(|_| system.user_with_base(120 * UNIT));
    for user in &users {
        system.bootstrap.deposit(user, &(100 * UNIT));
    }
    system.advance_to(system.bootstrap.closes_at());
    system.bootstrap.close();

    for user in &users {
        system.airdrop.airdrop(
            &system.deployer,
            &vec![&system.env, user.clone()],
            &vec![&system.env, 20 * UNIT],
        );
        system.airdrop.exchange(user);
    }
    World { system, users }
}

fn apply(world: &World, op: &Op) {
    let system = &world.system;
    let pool = &system.jdfi_pool;
    match *op {
        Op::Stake { user, amount } => {
            let user = &world.users[user];
            let amount = amount.min(system.ledger.balance(user));
            if amount > 0 {
                pool.stake(user, &amount);
            }
        }
        Op::Unstake { user, amount } => {
            let user = &world.users[user];
            let unlocked = pool.balance(user) - pool.locked_balance_of(user);
            let amount = amount.min(unlocked);
            if amount > 0 {
                pool.unstake(user, &amount);
            }
        }
        Op::Withdraw { user } => {
            pool.withdraw(&world.users[user]);
        }
        Op::Compound { user } => {
            pool.compound(&world.users[user]);
        }
        Op::Distribute { user, amount } => {
            let user = &world.users[user];
            let amount = amount.min(system.ledger.balance(user));
            if amount > 0 && pool.total_shares() > 0 {
                pool.distribute_rewards(user, &amount);
            }
        }
        Op::Unlock { user, payment } => {
            let user = &world.users[user];
            let payment = payment
                .min(pool.locked_balance_of(user) / 4)
                .min(system.base.balance(user));
            if payment > 0 {
                pool.unlock(user, &payment);
            }
        }
    }
}

fn check_invariants(world: &World) -> Result<(), TestCaseError> {
    let system = &world.system;
    let pool = &system.jdfi_pool;
    let info = pool.pool_info();

    let mut holders: Vec<&Address> = world.users.iter().collect();
    holders.push(&system.deployer);

    let shares: i128 = holders.iter().map(|a| pool.balance(a)).sum();
    prop_assert_eq!(info.total_shares, shares);

    prop_assert_eq!(
        system.ledger.balance(&system.registry.jdfi_pool),
        info.total_shares + info.distributed - info.paid_out
    );

    let pending: i128 = holders.iter().map(|a| pool.rewards_of(a)).sum();
    prop_assert!(pending <= info.distributed - info.paid_out);

    for user in &world.users {
        prop_assert!(pool.locked_balance_of(user) <= pool.balance(user));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_pool_accounting_holds(ops in prop::collection::vec(any::<Op>(), 1..16)) {
        let world = world();
        check_invariants(&world)?;

        for op in &ops {
            apply(&world, op);
            check_invariants(&world)?;
        }
    }
}
