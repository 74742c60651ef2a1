//! Pack command implementation
//!
//! Streams the selected input through the core packer and writes the packed
//! bytes to standard output. Complete pairs packed before an odd-length
//! stereo failure have already been written when the error surfaces.

use anyhow::{Context, Result};
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use samplepack_core::{pack_stream, ChannelMode};

use crate::input::InputSource;

/// Run the pack command
///
/// # Arguments
/// * `input` - Positional input argument (`-` for standard input)
/// * `mode` - Channel layout of the input stream
///
/// # Returns
/// Exit code: 0 on success (including empty input), error otherwise
pub fn run(input: &str, mode: ChannelMode) -> Result<ExitCode> {
    let source = InputSource::from_arg(input);
    let reader = source
        .open()
        .with_context(|| format!("failed to open {}", source))?;

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    pack_source(reader, &mut writer, mode, &source)?;
    writer.flush().context("failed to flush packed output")?;

    Ok(ExitCode::SUCCESS)
}

/// Packs an opened source into `writer`, naming the source in errors.
fn pack_source<R, W>(reader: R, writer: W, mode: ChannelMode, source: &InputSource) -> Result<u64>
where
    R: io::Read,
    W: Write,
{
    pack_stream(BufReader::new(reader), writer, mode)
        .with_context(|| format!("failed to pack {} input from {}", mode, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pack_source_stereo() {
        let input = [0x10u8, 0x20, 0x30, 0x40];
        let mut output = Vec::new();
        let source = InputSource::from_arg("-");
        let written = pack_source(&input[..], &mut output, ChannelMode::Stereo, &source).unwrap();
        assert_eq!(written, 2);
        assert_eq!(output, vec![0x21, 0x43]);
    }

    #[test]
    fn test_pack_source_error_names_mode_and_source() {
        let input = [0x10u8];
        let mut output = Vec::new();
        let source = InputSource::from_arg("track.raw");
        let err =
            pack_source(&input[..], &mut output, ChannelMode::Stereo, &source).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("stereo"));
        assert!(message.contains("track.raw"));
        assert!(message.contains("odd number of bytes"));
    }

    #[test]
    fn test_pack_source_mono_never_sees_odd_failure() {
        let input = [0x10u8, 0x20, 0x30];
        let mut output = Vec::new();
        let source = InputSource::from_arg("-");
        let written = pack_source(&input[..], &mut output, ChannelMode::Mono, &source).unwrap();
        assert_eq!(written, 3);
        assert_eq!(output, vec![0x11, 0x22, 0x33]);
    }
}
