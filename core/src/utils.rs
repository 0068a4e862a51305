use xxhash_rust::xxh64::xxh64;

use crate::constants::CHECKSUM_SEED;

/// Low 32 bits of XXH64 over `data`, as stored in a frame entry.
#[inline]
pub fn compute_checksum(data: &[u8]) -> u32 {
    xxh64(data, CHECKSUM_SEED) as u32
}

/// Render a u32 magic as `0x` followed by its big-endian hex digits.
pub fn fmt_magic(magic: &u32) -> String {
    format!("0x{}", hex::encode(magic.to_be_bytes()))
}

/// Concatenate encoded pieces into one stream buffer.
pub fn concat_frames(frames: &[impl AsRef<[u8]>]) -> Vec<u8> {
    frames.iter()
        .flat_map(|f| f.as_ref())
        .copied()
        .collect()
}
