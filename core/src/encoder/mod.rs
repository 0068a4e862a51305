//! encoder/mod.rs
//! Public facade: `Encoder` with `encode` and `end_stream`.

pub mod config;
pub mod core;
pub mod stream;

pub use config::{ConfigError, EncoderConfig};
pub use self::core::{Encoder, EncoderState};
pub use stream::encode_chunked;
