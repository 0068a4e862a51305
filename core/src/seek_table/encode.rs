//! seek_table/encode.rs
//!
//! Record encoding.
//!
//! Design notes:
//! - Each record is written into a caller-provided slot so a whole table can
//!   be laid out in one pre-sized buffer without intermediate copies.
//! - Field order and offsets are the wire contract; keep them in sync with
//!   `decode.rs`.

use byteorder::{ByteOrder, LittleEndian};

use crate::seek_table::types::{Footer, FrameEntry, SeekTableError};

/// Write `entry` into the first 12 bytes of `out`.
///
/// ```text
/// 0..4   compressed_size
/// 4..8   decompressed_size
/// 8..12  checksum
/// ```
#[inline]
pub fn encode_frame_entry_le(entry: &FrameEntry, out: &mut [u8]) -> Result<(), SeekTableError> {
    if out.len() < FrameEntry::LEN {
        return Err(SeekTableError::BufferTooShort { have: out.len(), need: FrameEntry::LEN });
    }

    put_frame_entry(entry, out);
    Ok(())
}

// Caller guarantees `out.len() >= FrameEntry::LEN`.
#[inline]
fn put_frame_entry(entry: &FrameEntry, out: &mut [u8]) {
    LittleEndian::write_u32(&mut out[0..4], entry.compressed_size);
    LittleEndian::write_u32(&mut out[4..8], entry.decompressed_size);
    LittleEndian::write_u32(&mut out[8..12], entry.checksum);
}

/// Write `footer` into the first 9 bytes of `out`.
///
/// ```text
/// 0..4   number_of_frames
/// 4      descriptor
/// 5..9   magic
/// ```
#[inline]
pub fn encode_footer_le(footer: &Footer, out: &mut [u8]) -> Result<(), SeekTableError> {
    if out.len() < Footer::LEN {
        return Err(SeekTableError::BufferTooShort { have: out.len(), need: Footer::LEN });
    }

    put_footer(footer, out);
    Ok(())
}

// Caller guarantees `out.len() >= Footer::LEN`.
#[inline]
fn put_footer(footer: &Footer, out: &mut [u8]) {
    LittleEndian::write_u32(&mut out[0..4], footer.number_of_frames);
    out[4] = footer.descriptor.bits();
    LittleEndian::write_u32(&mut out[5..9], footer.magic);
}

impl FrameEntry {
    pub fn to_le_bytes(&self) -> [u8; FrameEntry::LEN] {
        let mut out = [0u8; FrameEntry::LEN];
        put_frame_entry(self, &mut out);
        out
    }
}

impl Footer {
    pub fn to_le_bytes(&self) -> [u8; Footer::LEN] {
        let mut out = [0u8; Footer::LEN];
        put_footer(self, &mut out);
        out
    }
}
