//! Shared building blocks for the JusDeFi contract suite.
//!
//! This crate provides:
//! - [`Error`]: the error codes every contract returns, so a failure raised
//!   deep inside a cross-contract call reaches the caller unchanged.
//! - [`Registry`]: the address book handed to each contract at initialisation.
//! - `#[contractclient]` interfaces for cross-contract calls.
//! - Fixed-point math, the weekly scheduler, and auth helpers.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod auth;
pub mod constants;
pub mod interfaces;
pub mod math;
pub mod registry;
pub mod schedule;
pub mod storage;

pub use registry::Registry;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by every JusDeFi contract.
///
/// # Code ranges
/// | Range   | Kind                          |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authorization                 |
/// | 30 – 39 | Validation / input            |
/// | 40 – 49 | Contract state (wrong phase)  |
/// | 50 – 59 | Accounting invariants         |
/// | 60 – 69 | Exchange slippage bounds      |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Authorization (10–19) ────────────────────────────────
    /// The caller is not the contract allowed to perform this operation.
    Unauthorized = 10,
    /// Only the deployer may call this.
    NotDeployer = 11,
    /// Staked tokens are non-transferable for this sender.
    NonTransferable = 12,

    // ── Input (30–39) ────────────────────────────────────────
    /// Negative amount, or zero where zero is disallowed.
    InvalidAmount = 30,
    /// Parallel account/amount lists differ in length.
    ArrayLengthMismatch = 31,
    /// Minimum main-token amount exceeds the desired amount.
    MinTokenExceedsDesired = 32,
    /// Minimum base amount exceeds the supplied base value.
    MinBaseExceedsValue = 33,

    // ── State (40–49) ────────────────────────────────────────
    /// Ledger transfers are disabled until the bootstrap closes.
    TransfersLocked = 40,
    /// The liquidity bootstrap is still in progress.
    BootstrapInProgress = 41,
    /// The liquidity bootstrap has closed; no further deposits.
    BootstrapClosed = 42,
    /// `close` already ran.
    BootstrapAlreadyClosed = 43,
    /// Aggregate deposits are below the close threshold.
    InsufficientLiquidity = 44,
    /// Scheduled operation called on the wrong weekday.
    WrongWeekday = 45,
    /// Scheduled operation already ran within the last day.
    AlreadyCalledToday = 46,
    StakingPoolAlreadySet = 47,
    StakingPoolNotSet = 48,
    /// The fee pool has not been activated by the bootstrap.
    FeePoolInactive = 49,

    // ── Invariant (50–59) ────────────────────────────────────
    /// Amount exceeds the account's unlocked balance.
    ExceedsUnlockedBalance = 50,
    /// Unlock would release more than the account has locked.
    InsufficientLockedBalance = 51,
    /// Rewards cannot be distributed while nothing is staked.
    ZeroTotalSupply = 52,
    InsufficientBalance = 53,
    InsufficientAllowance = 54,
    /// Deposit would exceed the bootstrap's available supply.
    DepositExceedsCap = 55,
    /// Arithmetic overflow in fixed-point math.
    Overflow = 56,

    // ── Exchange slippage (60–69) ────────────────────────────
    InsufficientTokenAmount = 60,
    InsufficientBaseAmount = 61,
    InsufficientAmount = 62,
    InsufficientReserves = 63,
    InsufficientOutputAmount = 64,
}

/// Coarse classification of [`Error`] for callers that only branch on kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Input,
    Invariant,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            10..=19 => ErrorKind::Authorization,
            30..=39 => ErrorKind::Input,
            50..=69 => ErrorKind::Invariant,
            _ => ErrorKind::State,
        }
    }
}
