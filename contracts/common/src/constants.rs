//! Supply reserves, ratios and the fee schedule.
//!
//! Amounts are in the smallest unit of a 7-decimal token.

/// One whole token.
pub const UNIT: i128 = 10_000_000;

pub const DECIMALS: u32 = 7;

/// Staked main-token minted to the deployer at bootstrap.
pub const TEAM_RESERVE: i128 = 2_000 * UNIT;
/// Staked main-token sold during the liquidity bootstrap.
pub const LIQUIDITY_RESERVE: i128 = 10_000 * UNIT;
/// Main-token minted to the airdrop token for later exchange.
pub const JUSTICE_RESERVE: i128 = 10_000 * UNIT;
/// Main-token minted to the fee pool when the bootstrap closes.
pub const REWARD_SEED: i128 = 2_000 * UNIT;
/// Dev pool shares minted to the deployer.
pub const DEV_SUPPLY: i128 = 10_000 * UNIT;

/// Main-token units credited (or paired, or unlocked) per base unit.
pub const BOOTSTRAP_RATIO: i128 = 4;
/// Smallest aggregate deposit that allows the bootstrap to close.
pub const MIN_DEPOSIT: i128 = UNIT / 4;
/// Largest aggregate deposit the liquidity reserve can back.
pub const DEPOSIT_CAP: i128 = LIQUIDITY_RESERVE / BOOTSTRAP_RATIO;

// ── Fee schedule (basis points) ─────────────────────────────────────────────

pub const BP_DIVISOR: i128 = 10_000;
pub const INITIAL_FEE: u32 = 1_000;
pub const MIN_FEE: u32 = 500;
pub const MAX_FEE: u32 = 1_500;
pub const FEE_STEP: u32 = 250;
/// Net vote weight that moves the fee by one step.
pub const VOTE_UNIT: i128 = UNIT;

/// Weight of UNIV2 stake relative to JDFI stake at rebase.
pub const UNIV2_REWARD_WEIGHT: i128 = 3;

// ── Scheduler ───────────────────────────────────────────────────────────────

pub const SECONDS_PER_DAY: u64 = 86_400;
/// 0 = Sunday.
pub const BUYBACK_WEEKDAY: u32 = 5;
pub const REBASE_WEEKDAY: u32 = 0;
