//! Transcoding errors.

use std::io;

/// Errors that abort a transcoding pass.
///
/// End of input is never an error; it simply ends the pass.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("Malformed escape sequence: input ended immediately after ESC")]
    TruncatedEscape,

    #[error("Failed to read input")]
    Read(#[source] io::Error),

    #[error("Failed to write output")]
    Write(#[source] io::Error),
}
