use super::*;

pub const SCALE: u128 = 1_000_000_000_000_000_000; // 1e18 fixed-point one
pub const BASIS_POINT_MAX: u16 = 10_000;           // 100% in basis points
pub const ONE_IN_BASIS_POINTS: u128 = BASIS_POINT_MAX as u128;
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

pub const DEFAULT_REBASE_INTERVAL: i64 = 24 * 60 * 60; // one day
pub const MAX_REBASE_PERIODS: u64 = 365;

pub const MAX_ROLE_GRANTS: usize = 16;
pub const MAX_PRICE_FEEDS: usize = 8;

// PDA seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const ACCESS_SEED: &[u8] = b"access";
pub const PRICE_ORACLE_SEED: &[u8] = b"price_oracle";

/// The null principal. Never a valid holder or grantee.
pub const NULL_PRINCIPAL: Pubkey = Pubkey::new_from_array([0u8; 32]);
