//! compression/constants.rs
//! Codec defaults.

/// Default zstd level (balanced).
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;

/// Accepted zstd level range.
pub const MIN_LEVEL_ZSTD: i32 = 1;
pub const MAX_LEVEL_ZSTD: i32 = 22;
