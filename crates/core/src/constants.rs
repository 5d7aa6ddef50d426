//! Domain-wide constants.

/// Lower bound (inclusive) of the GDP estimate multiplier draw.
pub const GDP_MULTIPLIER_MIN: f64 = 1000.0;

/// Upper bound (exclusive) of the GDP estimate multiplier draw.
pub const GDP_MULTIPLIER_MAX: f64 = 2000.0;

/// GDP estimates are rounded to this many decimal places.
pub const GDP_SCALE: u32 = 2;

/// Longest accepted canonical currency code.
pub const MAX_CURRENCY_CODE_LEN: usize = 10;

/// Base currency used for the degraded (empty) rate snapshot when the
/// rate source is unreachable.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
