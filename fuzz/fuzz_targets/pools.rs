#![no_main]

use arbitrary::Arbitrary;
use common::constants::UNIT;
use harness::System;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::Address;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake { amount: u64 },
    Withdraw,
    Compound,
    Distribute { amount: u64 },
    StakeLiquidity { token: u64, base: u64 },
    UnstakeLiquidity { shares: u64 },
    Rebase,
    Buyback,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let system = System::new();
    let users: Vec<Address> = (0..4).map(|_| system.user_with_base(1_000 * UNIT)).collect();
    for user in &users {
        system.bootstrap.deposit(user, &(100 * UNIT));
    }
    system.advance_to(system.bootstrap.closes_at());
    system.bootstrap.close();

    // Failures are expected for out-of-range amounts; only panics outside a
    // contract error and broken accounting are findings.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = system.jdfi_pool.try_stake(caller, &(amount as i128));
            }
            FuzzAction::Unstake { amount } => {
                let _ = system.jdfi_pool.try_unstake(caller, &(amount as i128));
            }
            FuzzAction::Withdraw => {
                let _ = system.jdfi_pool.try_withdraw(caller);
                let _ = system.univ2_pool.try_withdraw(caller);
            }
            FuzzAction::Compound => {
                let _ = system.jdfi_pool.try_compound(caller);
            }
            FuzzAction::Distribute { amount } => {
                let _ = system
                    .jdfi_pool
                    .try_distribute_rewards(caller, &(amount as i128));
            }
            FuzzAction::StakeLiquidity { token, base } => {
                let _ = system.univ2_pool.try_stake_liquidity(
                    caller,
                    &(token as i128),
                    &0,
                    &0,
                    &(base as i128),
                );
            }
            FuzzAction::UnstakeLiquidity { shares } => {
                let _ = system
                    .univ2_pool
                    .try_unstake(caller, &(shares as i128), &0, &0);
            }
            FuzzAction::Rebase => {
                system.advance_days(1);
                let _ = system.fee_pool.try_rebase();
            }
            FuzzAction::Buyback => {
                system.advance_days(1);
                let _ = system.fee_pool.try_buyback();
            }
        }

        let info = system.jdfi_pool.pool_info();
        assert_eq!(
            system.ledger.balance(&system.registry.jdfi_pool),
            info.total_shares + info.distributed - info.paid_out
        );
        let univ2 = system.univ2_pool.pool_info();
        assert_eq!(
            system.exchange.share_balance(&system.registry.univ2_pool),
            univ2.total_shares
        );
    }
});
