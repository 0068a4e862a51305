//! seek_table/decode.rs
//!
//! Record decoding.
//!
//! Design notes:
//! - Mirrors `encode.rs` field for field.
//! - The footer is validated (magic, reserved bits); entries carry no
//!   redundancy and are taken as-is.
//! - `decode_seek_table` locates the footer at the tail of the payload, then
//!   checks that the payload holds exactly the declared number of entries.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::SEEKABLE_MAGIC_NUMBER;
use crate::seek_table::types::{
    checked_seek_table_len, Footer, FrameEntry, SeekTable, SeekTableDescriptor, SeekTableError,
};

#[inline]
pub fn decode_frame_entry_le(buf: &[u8]) -> Result<FrameEntry, SeekTableError> {
    if buf.len() < FrameEntry::LEN {
        return Err(SeekTableError::BufferTooShort { have: buf.len(), need: FrameEntry::LEN });
    }

    Ok(FrameEntry {
        compressed_size: LittleEndian::read_u32(&buf[0..4]),
        decompressed_size: LittleEndian::read_u32(&buf[4..8]),
        checksum: LittleEndian::read_u32(&buf[8..12]),
    })
}

#[inline]
pub fn decode_footer_le(buf: &[u8]) -> Result<Footer, SeekTableError> {
    if buf.len() < Footer::LEN {
        return Err(SeekTableError::BufferTooShort { have: buf.len(), need: Footer::LEN });
    }

    let number_of_frames = LittleEndian::read_u32(&buf[0..4]);
    let raw_descriptor = buf[4];
    let magic = LittleEndian::read_u32(&buf[5..9]);

    if magic != SEEKABLE_MAGIC_NUMBER {
        return Err(SeekTableError::InvalidMagic { have: magic, need: SEEKABLE_MAGIC_NUMBER });
    }
    if raw_descriptor & SeekTableDescriptor::RESERVED_MASK != 0 {
        return Err(SeekTableError::ReservedBitsSet { descriptor: raw_descriptor });
    }

    Ok(Footer {
        number_of_frames,
        // Unused low bits are dropped.
        descriptor: SeekTableDescriptor::from_bits_truncate(raw_descriptor),
        magic,
    })
}

/// Decode a complete seek table payload (the skippable frame body).
pub fn decode_seek_table(payload: &[u8]) -> Result<SeekTable, SeekTableError> {
    if payload.len() < Footer::LEN {
        return Err(SeekTableError::BufferTooShort { have: payload.len(), need: Footer::LEN });
    }

    let footer_at = payload.len() - Footer::LEN;
    let footer = decode_footer_le(&payload[footer_at..])?;

    let n = footer.number_of_frames as usize;
    let expected = checked_seek_table_len(n).unwrap_or(usize::MAX);
    if payload.len() != expected {
        return Err(SeekTableError::LengthMismatch { expected, actual: payload.len() });
    }

    let entries = payload[..footer_at]
        .chunks_exact(FrameEntry::LEN)
        .map(decode_frame_entry_le)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeekTable { entries, footer })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_with_reserved_bits_is_rejected() {
        let mut bytes = Footer::new(1).to_le_bytes();
        bytes[4] |= 0b0000_0100;
        assert!(matches!(
            decode_footer_le(&bytes),
            Err(SeekTableError::ReservedBitsSet { descriptor: 0x84 })
        ));
    }

    #[test]
    fn footer_unused_bits_are_ignored() {
        let mut bytes = Footer::new(1).to_le_bytes();
        bytes[4] |= 0b0000_0011;
        let footer = decode_footer_le(&bytes).unwrap();
        assert_eq!(footer.descriptor, SeekTableDescriptor::CHECKSUM);
    }

    #[test]
    fn footer_without_checksum_flag_decodes() {
        let mut bytes = Footer::new(0).to_le_bytes();
        bytes[4] = 0;
        let footer = decode_footer_le(&bytes).unwrap();
        assert!(!footer.has_checksums());
    }

    #[test]
    fn count_disagreeing_with_length_is_rejected() {
        let mut payload = FrameEntry::default().to_le_bytes().to_vec();
        payload.extend_from_slice(&Footer::new(2).to_le_bytes());
        assert!(matches!(
            decode_seek_table(&payload),
            Err(SeekTableError::LengthMismatch { expected: 33, actual: 21 })
        ));
    }

    #[test]
    fn max_frame_count_with_short_payload_is_rejected() {
        let payload = Footer::new(u32::MAX).to_le_bytes();
        match decode_seek_table(&payload) {
            Err(SeekTableError::LengthMismatch { expected, actual: 9 }) => assert!(expected > 9),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn table_len_overflow_is_none() {
        assert_eq!(checked_seek_table_len(usize::MAX / FrameEntry::LEN + 1), None);
        assert_eq!(checked_seek_table_len(usize::MAX), None);
        assert_eq!(checked_seek_table_len(2), Some(33));
    }
}
