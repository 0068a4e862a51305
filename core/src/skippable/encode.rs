use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{MAX_SKIPPABLE_PAYLOAD, MAX_SKIPPABLE_TAG, SKIPPABLE_FRAME_MAGIC, SKIPPABLE_HEADER_LEN};
use crate::skippable::types::SkippableFrameError;

/// Encode the 8-byte skippable frame header for a payload of `payload_len`.
///
/// Layout:
///
/// ```text
/// [ magic = 0x184D2A50 | tag (4) ]
/// [ frame_size (4) ]
/// ```
pub fn encode_skippable_header(
    tag: u8,
    payload_len: usize,
) -> Result<[u8; SKIPPABLE_HEADER_LEN], SkippableFrameError> {
    if tag > MAX_SKIPPABLE_TAG {
        return Err(SkippableFrameError::InvalidTag(tag));
    }
    let frame_size = u32::try_from(payload_len).map_err(|_| SkippableFrameError::PayloadTooLarge {
        have: payload_len,
        max: MAX_SKIPPABLE_PAYLOAD,
    })?;

    let mut out = [0u8; SKIPPABLE_HEADER_LEN];
    LittleEndian::write_u32(&mut out[0..4], SKIPPABLE_FRAME_MAGIC | tag as u32);
    LittleEndian::write_u32(&mut out[4..8], frame_size);
    Ok(out)
}

/// Wrap `payload` in a skippable frame. The payload is copied verbatim and
/// never inspected.
pub fn wrap(tag: u8, payload: &[u8]) -> Result<Vec<u8>, SkippableFrameError> {
    let header = encode_skippable_header(tag, payload.len())?;

    let mut out = Vec::with_capacity(SKIPPABLE_HEADER_LEN + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    Ok(out)
}
