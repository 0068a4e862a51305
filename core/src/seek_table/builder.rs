//! seek_table/builder.rs
//! Append-only accumulation of frame entries for one stream.

use log::debug;

use crate::constants::MAX_NUMBER_OF_FRAMES;
use crate::seek_table::encode::{encode_footer_le, encode_frame_entry_le};
use crate::seek_table::types::{seek_table_len, Footer, FrameEntry, SeekTableError};

/// Owns the ordered entries of one stream and serializes them on demand.
#[derive(Debug, Clone)]
pub struct SeekTableBuilder {
    entries: Vec<FrameEntry>,
    max_frames: u64,
}

impl Default for SeekTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekTableBuilder {
    pub fn new() -> Self {
        Self::with_max_frames(MAX_NUMBER_OF_FRAMES)
    }

    /// Builder that refuses to finalize more than `max_frames` entries.
    /// The cap never exceeds what the u32 footer count can hold.
    pub fn with_max_frames(max_frames: u64) -> Self {
        Self {
            entries: Vec::new(),
            max_frames: max_frames.min(MAX_NUMBER_OF_FRAMES),
        }
    }

    #[inline]
    pub fn append(&mut self, entry: FrameEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_frames(&self) -> u64 {
        self.max_frames
    }

    pub fn entries(&self) -> &[FrameEntry] {
        &self.entries
    }

    /// Serialize all entries followed by the footer.
    ///
    /// Returns the bare table (`12 * N + 9` bytes), not wrapped in a
    /// skippable frame.
    ///
    /// # Errors
    /// - `SeekTableError::TooManyFrames` if more than `max_frames` entries
    ///   were appended. Nothing is serialized in that case.
    pub fn finalize(&self) -> Result<Vec<u8>, SeekTableError> {
        let n = self.entries.len();
        let too_many = || SeekTableError::TooManyFrames { have: n, max: self.max_frames };

        if n as u64 > self.max_frames {
            return Err(too_many());
        }
        let count = u32::try_from(n).map_err(|_| too_many())?;

        let mut table = vec![0u8; seek_table_len(n)];
        let (body, tail) = table.split_at_mut(n * FrameEntry::LEN);

        for (slot, entry) in body.chunks_exact_mut(FrameEntry::LEN).zip(&self.entries) {
            encode_frame_entry_le(entry, slot)?;
        }
        encode_footer_le(&Footer::new(count), tail)?;

        debug!("seek table finalized: {} frames, {} bytes", n, table.len());
        Ok(table)
    }
}
