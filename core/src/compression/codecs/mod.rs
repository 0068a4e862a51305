//! compression/codecs/mod.rs
//! Concrete `Compressor` implementations.

pub mod zstd;

pub use self::zstd::*;
