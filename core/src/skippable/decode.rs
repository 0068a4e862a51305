use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{SKIPPABLE_HEADER_LEN, SKIPPABLE_TAG_MASK};
use crate::skippable::types::{is_skippable_magic, SkippableFrameError, SkippableFrameView};

/// Parse exactly one skippable frame from `wire`.
///
/// Caller guarantees the slice starts at a frame boundary. Trailing bytes
/// after the declared payload are rejected.
pub fn parse_skippable_frame(wire: &[u8]) -> Result<SkippableFrameView<'_>, SkippableFrameError> {
    if wire.len() < SKIPPABLE_HEADER_LEN {
        return Err(SkippableFrameError::Truncated);
    }

    let magic = LittleEndian::read_u32(&wire[0..4]);
    if !is_skippable_magic(magic) {
        return Err(SkippableFrameError::NotSkippable(magic));
    }

    let frame_size = LittleEndian::read_u32(&wire[4..8]) as usize;
    let expected = match SKIPPABLE_HEADER_LEN.checked_add(frame_size) {
        Some(expected) => expected,
        None => return Err(SkippableFrameError::LengthMismatch { expected: usize::MAX, actual: wire.len() }),
    };
    if wire.len() < expected {
        return Err(SkippableFrameError::Truncated);
    }
    if wire.len() != expected {
        return Err(SkippableFrameError::LengthMismatch { expected, actual: wire.len() });
    }

    Ok(SkippableFrameView {
        tag: (magic & SKIPPABLE_TAG_MASK) as u8,
        payload: &wire[SKIPPABLE_HEADER_LEN..],
    })
}
