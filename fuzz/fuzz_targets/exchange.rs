#![no_main]

use arbitrary::Arbitrary;
use common::constants::UNIT;
use harness::System;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    SwapBase { amount: u64 },
    SwapToken { amount: u64 },
    AddLiquidity { token: u64, base: u64 },
    RemoveLiquidity { shares: u64 },
    Wait { seconds: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let system = System::new();
    let trader = system.close_bootstrap(100 * UNIT);
    system.fund(&trader, 1_000 * UNIT);
    system.unstake_all(&trader);

    for action in actions {
        match action {
            FuzzAction::SwapBase { amount } => {
                let _ = system.exchange.try_swap_exact_base_for_token(
                    &trader,
                    &(amount as i128),
                    &0,
                    &trader,
                );
            }
            FuzzAction::SwapToken { amount } => {
                let _ = system.exchange.try_swap_exact_token_for_base(
                    &trader,
                    &(amount as i128),
                    &0,
                    &trader,
                );
            }
            FuzzAction::AddLiquidity { token, base } => {
                let _ = system.exchange.try_add_liquidity(
                    &trader,
                    &(token as i128),
                    &0,
                    &(base as i128),
                    &0,
                    &trader,
                );
            }
            FuzzAction::RemoveLiquidity { shares } => {
                let _ = system.exchange.try_remove_liquidity(
                    &trader,
                    &(shares as i128),
                    &0,
                    &0,
                    &trader,
                );
            }
            FuzzAction::Wait { seconds } => {
                system.advance_to(system.now() + seconds as u64);
            }
        }

        let (token_reserve, base_reserve) = system.exchange.get_reserves();
        assert!(token_reserve > 0 && base_reserve > 0);
        assert_eq!(
            system.ledger.balance(&system.registry.exchange),
            token_reserve
        );
        assert_eq!(
            system.base.balance(&system.registry.exchange),
            base_reserve
        );
    }
});
