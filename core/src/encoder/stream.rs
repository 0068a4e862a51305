//! encoder/stream.rs
//! Whole-buffer helper on top of `Encoder`.

use crate::encoder::config::ConfigError;
use crate::encoder::core::Encoder;
use crate::types::SeekableError;
use crate::utils::concat_frames;

/// Split `data` into `chunk_size` pieces, encode each, and return the full
/// seekable stream: every compressed chunk followed by the seek table frame.
///
/// Consumes the encoder's session: it is Closed on return.
pub fn encode_chunked(
    encoder: &mut Encoder,
    data: &[u8],
    chunk_size: usize,
) -> Result<Vec<u8>, SeekableError> {
    if chunk_size == 0 {
        return Err(ConfigError::ZeroLimit { field: "chunk_size" }.into());
    }

    let mut frames = data
        .chunks(chunk_size)
        .map(|chunk| encoder.encode(chunk))
        .collect::<Result<Vec<_>, _>>()?;
    frames.push(encoder.end_stream()?);

    Ok(concat_frames(&frames))
}
