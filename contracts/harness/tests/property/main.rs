#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based suite over a deployed system.
//!
//! Every case deploys the full contract set, so case counts are kept low.
//! To run more:
//!
//! ```bash
//! PROPTEST_CASES=256 cargo test -p harness --test property
//! ```

mod staking;
