//! seek_table/types.rs
//! Fixed-layout records of the seek table.

use bitflags::bitflags;
use thiserror::Error;

use crate::constants::{FRAME_ENTRY_LEN, SEEKABLE_MAGIC_NUMBER, SEEK_TABLE_FOOTER_LEN};
use crate::utils::fmt_magic;

bitflags! {
    /// Seek table descriptor byte.
    ///
    /// Bit 7 marks checksums as present. Bits 6..2 are reserved and must be
    /// zero. Bits 1..0 are unused.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeekTableDescriptor: u8 {
        const CHECKSUM = 0b1000_0000;
    }
}

impl SeekTableDescriptor {
    pub const RESERVED_MASK: u8 = 0b0111_1100;
}

/// One seek table record, describing one compressed chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEntry {
    pub compressed_size: u32,
    pub decompressed_size: u32,
    /// Low 32 bits of XXH64 over the decompressed bytes.
    pub checksum: u32,
}

impl FrameEntry {
    pub const LEN: usize = FRAME_ENTRY_LEN;
}

/// Trailing record of the seek table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub number_of_frames: u32,
    pub descriptor: SeekTableDescriptor,
    pub magic: u32,
}

impl Footer {
    pub const LEN: usize = SEEK_TABLE_FOOTER_LEN;

    /// Footer as written by this encoder: checksums always present.
    pub fn new(number_of_frames: u32) -> Self {
        Self {
            number_of_frames,
            descriptor: SeekTableDescriptor::CHECKSUM,
            magic: SEEKABLE_MAGIC_NUMBER,
        }
    }

    pub fn has_checksums(&self) -> bool {
        self.descriptor.contains(SeekTableDescriptor::CHECKSUM)
    }
}

/// A decoded seek table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekTable {
    pub entries: Vec<FrameEntry>,
    pub footer: Footer,
}

impl SeekTable {
    pub fn total_compressed(&self) -> u64 {
        self.entries.iter().map(|e| e.compressed_size as u64).sum()
    }

    pub fn total_decompressed(&self) -> u64 {
        self.entries.iter().map(|e| e.decompressed_size as u64).sum()
    }
}

/// Serialized table length for `n` entries.
#[inline]
pub const fn seek_table_len(n: usize) -> usize {
    n * FRAME_ENTRY_LEN + SEEK_TABLE_FOOTER_LEN
}

/// `seek_table_len` for an untrusted count; `None` if it overflows `usize`.
#[inline]
pub const fn checked_seek_table_len(n: usize) -> Option<usize> {
    match n.checked_mul(FRAME_ENTRY_LEN) {
        Some(body) => body.checked_add(SEEK_TABLE_FOOTER_LEN),
        None => None,
    }
}

#[derive(Debug, Error)]
pub enum SeekTableError {
    #[error("number of frames for seekable format: {have} > {max}")]
    TooManyFrames { have: usize, max: u64 },

    #[error("seek table buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("invalid seek table magic: expected {}, got {}", fmt_magic(.need), fmt_magic(.have))]
    InvalidMagic { have: u32, need: u32 },

    #[error("seek table descriptor has reserved bits set: 0b{descriptor:08b}")]
    ReservedBitsSet { descriptor: u8 },

    #[error("seek table length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
