//! constants.rs
//! Wire constants and format limits for the seekable zstd format.

/// Magic number closing every seek table footer.
pub const SEEKABLE_MAGIC_NUMBER: u32 = 0x8F92_EAB1;

/// Base of the zstd skippable frame magic range (`0x184D2A50..=0x184D2A5F`).
/// The low nibble carries a caller-chosen tag.
pub const SKIPPABLE_FRAME_MAGIC: u32 = 0x184D_2A50;

/// Mask isolating the tag nibble of a skippable frame magic.
pub const SKIPPABLE_TAG_MASK: u32 = 0x0000_000F;

/// Largest tag the skippable magic range can carry.
pub const MAX_SKIPPABLE_TAG: u8 = 0x0F;

/// Tag used for the seek table frame.
pub const SEEKABLE_TAG: u8 = 0x0E;

/// Bytes per serialized frame entry.
pub const FRAME_ENTRY_LEN: usize = 12;

/// Bytes in the serialized seek table footer.
pub const SEEK_TABLE_FOOTER_LEN: usize = 9;

/// Skippable frame header: magic (4) + frame size (4).
pub const SKIPPABLE_HEADER_LEN: usize = 8;

/// Hard bound on a chunk, compressed or not: the entry fields are u32.
pub const MAX_CHUNK_SIZE: u64 = u32::MAX as u64;

/// Hard bound on the number of entries: the footer count is u32.
pub const MAX_NUMBER_OF_FRAMES: u64 = u32::MAX as u64;

/// Largest payload a skippable frame can declare.
pub const MAX_SKIPPABLE_PAYLOAD: u64 = u32::MAX as u64;

/// Seed for the per-chunk XXH64 checksum.
pub const CHECKSUM_SEED: u64 = 0;
