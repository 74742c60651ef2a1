//! Samplepack core
//!
//! This crate implements the nibble-packing transform that converts a raw
//! 8-bit audio sample stream into the packed format consumed by the player:
//! one output byte per sample pair, with the left channel's upper nibble
//! shifted into the low nibble and the right channel's upper nibble kept in
//! the high nibble.
//!
//! # Overview
//!
//! The input is a plain byte stream. In [`ChannelMode::Stereo`] the bytes are
//! interleaved left/right pairs; in [`ChannelMode::Mono`] every byte is a
//! single sample duplicated into both channels. The transform is a single
//! sequential pass with no lookahead and no state between pairs.
//!
//! # Example
//!
//! ```
//! use samplepack_core::{pack_bytes, ChannelMode};
//!
//! let packed = pack_bytes(&[0x10, 0x20], ChannelMode::Stereo)?;
//! assert_eq!(packed, vec![0x21]);
//! # Ok::<(), samplepack_core::PackError>(())
//! ```
//!
//! # Crate structure
//!
//! - [`pack_stream()`] - streaming entry point over `Read`/`Write`
//! - [`pack_bytes()`] - in-memory convenience wrapper
//! - [`pack_pair()`] - the pure per-pair byte transform
//! - [`error`] - error types

pub mod error;
pub mod pack;

pub use error::{PackError, PackResult};
pub use pack::{pack_bytes, pack_pair, pack_stream, ChannelMode};
