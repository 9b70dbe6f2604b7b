//! Error types for operator input.

use thiserror::Error;

/// Input failures that cannot be fixed by asking again.
///
/// Validation failures (a bad name, a bad phone number) never surface here;
/// the validators re-prompt instead.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream ended while a prompt was waiting.
    #[error("Input closed while waiting for: {0}")]
    Closed(String),

    /// A number was expected but the line did not parse as one.
    #[error("Expected a whole number, got {0:?}")]
    NotANumber(String),

    /// Reading from or writing to the terminal failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
