//! samplepack - converts raw signed 8-bit audio to packed nibble format
//!
//! Reads a raw sample stream from a file or standard input and writes the
//! packed stream to standard output, one byte per sample pair.

use clap::Parser;
use std::process::ExitCode;

use samplepack_core::ChannelMode;

mod commands;
mod input;

/// Samplepack - raw 8-bit sample stream to packed nibble converter
#[derive(Parser)]
#[command(name = "samplepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw sample file (`-` reads standard input)
    input: String,

    /// Treat the input as mono (one sample per byte) instead of stereo pairs
    #[arg(long)]
    mono: bool,
}

impl Cli {
    fn mode(&self) -> ChannelMode {
        if self.mono {
            ChannelMode::Mono
        } else {
            ChannelMode::Stereo
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::pack::run(&cli.input, cli.mode()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
