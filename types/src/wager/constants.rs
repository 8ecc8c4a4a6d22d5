/// Number of pockets on a single-zero wheel (0 through 36).
pub const WHEEL_POCKETS: u8 = 37;

/// Red numbers on a single-zero wheel.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Smallest stake any strategy may place.
pub const MIN_STAKE: u64 = 1;

/// Absolute stake ceiling applied to every progression, independent of the base unit.
pub const MAX_STAKE: u64 = 10_000;

/// Base unit used when none is configured.
pub const DEFAULT_BASE_STAKE: u64 = 1;

/// Inclusive bounds of the random-stake draw.
pub const RANDOM_STAKE_MIN: u64 = 1;
pub const RANDOM_STAKE_MAX: u64 = 10;

/// Expected return per unit staked on an even-money outside bet (18 wins out of 37 pockets).
pub const THEORETICAL_EDGE: f64 = -1.0 / 37.0;

/// Check if a pocket is red.
pub fn is_red(pocket: u8) -> bool {
    RED_NUMBERS.contains(&pocket)
}
