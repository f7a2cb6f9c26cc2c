/// Errors from the field-cutting layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a cut run.
///
/// Malformed field-spec tokens and out-of-range indices are not represented
/// here: they are dropped silently.
#[derive(Debug, Error)]
pub enum CutError {
    /// `-f` was not given, or was given an empty string.
    #[error("fields (-f) must be specified")]
    MissingFields,

    /// `-d` was given an empty string.
    #[error("delimiter (-d) must not be empty")]
    EmptyDelimiter,

    /// Reading standard input failed.
    #[error("Error reading input: {source}")]
    Input {
        #[source]
        source: io::Error,
    },

    /// Opening or reading a named input file failed.
    #[error("Error reading input: {}: {source}", path.display())]
    InputFile {
        /// The file that could not be read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing results to standard output failed.
    #[error("Error writing output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl CutError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingFields
            | Self::EmptyDelimiter
            | Self::Input { .. }
            | Self::InputFile { .. }
            | Self::Output { .. } => 1,
        }
    }

    /// Whether this is a configuration problem (reported with an `Error:` prefix).
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingFields | Self::EmptyDelimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_message_includes_path() {
        let err = CutError::InputFile {
            path: PathBuf::from("data.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Error reading input: data.txt: not found");
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_errors() {
        assert!(CutError::MissingFields.is_config());
        assert!(CutError::EmptyDelimiter.is_config());
        assert_eq!(CutError::MissingFields.exit_code(), 1);
    }
}
