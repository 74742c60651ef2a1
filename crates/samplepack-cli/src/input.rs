//! Input-source selection for the converter.
//!
//! The positional argument is either a file path or the placeholder `-` for
//! standard input. This module dispatches between the two and hands back a
//! plain reader, keeping the command handler source-agnostic.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Placeholder argument that selects standard input.
pub const STDIN_PLACEHOLDER: &str = "-";

/// Where the raw sample stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from standard input.
    Stdin,
    /// Read from a named file.
    File(PathBuf),
}

impl InputSource {
    /// Builds a source from the positional CLI argument.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_PLACEHOLDER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Opens the source for sequential reading.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "standard input"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_selects_stdin() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
    }

    #[test]
    fn test_path_selects_file() {
        assert_eq!(
            InputSource::from_arg("music/track.raw"),
            InputSource::File(PathBuf::from("music/track.raw"))
        );
    }

    #[test]
    fn test_display_names_the_source() {
        assert_eq!(InputSource::Stdin.to_string(), "standard input");
        assert_eq!(
            InputSource::from_arg("track.raw").to_string(),
            "track.raw"
        );
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let source = InputSource::from_arg("definitely/not/here.raw");
        assert!(source.open().is_err());
    }
}
