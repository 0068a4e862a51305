use thiserror::Error;

use crate::constants::{SKIPPABLE_FRAME_MAGIC, SKIPPABLE_HEADER_LEN, SKIPPABLE_TAG_MASK};
use crate::utils::fmt_magic;

/// Borrowed view of a parsed skippable frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippableFrameView<'a> {
    pub tag: u8,
    pub payload: &'a [u8],
}

impl SkippableFrameView<'_> {
    pub const HEADER_LEN: usize = SKIPPABLE_HEADER_LEN;

    /// Total encoded length, header included.
    pub fn frame_len(&self) -> usize {
        Self::HEADER_LEN + self.payload.len()
    }
}

/// True if `magic` falls in the skippable range `0x184D2A50..=0x184D2A5F`.
#[inline]
pub const fn is_skippable_magic(magic: u32) -> bool {
    magic & !SKIPPABLE_TAG_MASK == SKIPPABLE_FRAME_MAGIC
}

#[derive(Debug, Error)]
pub enum SkippableFrameError {
    #[error("invalid skippable frame tag: {0} > 15")]
    InvalidTag(u8),

    #[error("skippable frame payload too large: {have} > {max}")]
    PayloadTooLarge { have: usize, max: u64 },

    #[error("not a skippable frame: magic {}", fmt_magic(.0))]
    NotSkippable(u32),

    #[error("truncated skippable frame")]
    Truncated,

    #[error("skippable frame length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
