#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! End-to-end scenarios against a fully deployed suite.
//!
//! Run with:
//!
//! ```bash
//! cargo test -p harness --test system
//! ```

mod airdrop;
mod dev_pool;
mod fee_pool;
mod ledger;
mod support;
mod univ2_pool;
