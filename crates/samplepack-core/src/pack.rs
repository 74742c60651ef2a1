//! The nibble-packing transform.
//!
//! One output byte encodes one sample pair: the right channel keeps its
//! upper nibble in the high bits, the left channel's upper nibble is shifted
//! down into the low bits. Mono input duplicates each sample into both
//! channels, so output length equals input length; stereo input consumes two
//! bytes per output byte.

use std::fmt;
use std::io::{ErrorKind, Read, Write};

use crate::error::{PackError, PackResult};

/// Channel layout of the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Every input byte is one sample, duplicated into both channels.
    Mono,
    /// Input bytes are interleaved left/right pairs.
    #[default]
    Stereo,
}

impl ChannelMode {
    /// Returns the string representation for messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelMode::Mono => "mono",
            ChannelMode::Stereo => "stereo",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Packs one sample pair into a single byte.
///
/// Computes `(left >> 4) | (right & 0xF0)`. The shift operates on the raw
/// unsigned byte and zero-fills, matching the reference converter exactly:
/// samples are nominally signed 8-bit, but the original never sign-extends,
/// so `pack_pair(0x80, 0x00)` is `0x08`, not `0xF8`.
pub fn pack_pair(left: u8, right: u8) -> u8 {
    (left >> 4) | (right & 0xF0)
}

/// Reads a single byte, treating a clean end of stream as `None`.
fn read_byte<R: Read>(reader: &mut R) -> PackResult<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Packs an entire sample stream.
///
/// Reads sample pairs from `reader` until end of stream and writes one packed
/// byte per pair to `writer`. End of stream at a pair boundary is normal
/// termination; in [`ChannelMode::Stereo`], end of stream after the left byte
/// of a pair is [`PackError::OddStereoInput`]. Bytes packed before such a
/// failure have already been written.
///
/// Reads one byte at a time, so callers should hand in buffered I/O.
///
/// # Returns
/// The number of packed bytes written.
pub fn pack_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    mode: ChannelMode,
) -> PackResult<u64> {
    let mut written = 0u64;

    while let Some(left) = read_byte(&mut reader)? {
        let right = match mode {
            ChannelMode::Mono => left,
            ChannelMode::Stereo => {
                read_byte(&mut reader)?.ok_or(PackError::OddStereoInput)?
            }
        };

        writer.write_all(&[pack_pair(left, right)])?;
        written += 1;
    }

    Ok(written)
}

/// Packs an in-memory byte slice.
///
/// Convenience wrapper over [`pack_stream`] for callers that already hold the
/// whole input. On error the partial output is discarded.
pub fn pack_bytes(input: &[u8], mode: ChannelMode) -> PackResult<Vec<u8>> {
    let mut output = Vec::with_capacity(match mode {
        ChannelMode::Mono => input.len(),
        ChannelMode::Stereo => input.len() / 2,
    });
    pack_stream(input, &mut output, mode)?;
    Ok(output)
}
