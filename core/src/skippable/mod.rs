//! Skippable frame envelope.
//!
//! Responsibilities:
//! - Wrap an opaque payload in a zstd skippable frame
//! - Parse an envelope back with strict validation
//!
//! Non-responsibilities:
//! - Interpreting the payload
//! - Compression

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{SkippableFrameError, SkippableFrameView};
pub use encode::{encode_skippable_header, wrap};
pub use decode::parse_skippable_frame;
