/// Rounding unit for lock expiries and scheduled slope changes (7 days)
pub const WEEK: u64 = 7 * 24 * 60 * 60;

/// Longest lock accepted: 208 weeks (4 years)
pub const MAX_LOCK_DURATION: u64 = 208 * WEEK;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fixed-point scale of the aggregate slope, so that small locks still decay
pub const SLOPE_PRECISION: u64 = 1_000_000_000_000_000_000;

/// Upper bound on registered destinations; keeps `distribute` within gas
pub const MAX_DESTINATIONS: usize = 32;
