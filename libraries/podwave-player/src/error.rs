//! Error types for the player view core

use thiserror::Error;

/// Player errors
///
/// Store operations are total; only the seek surface is fallible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Seek target lies past the end of the current episode
    #[error("Seek position {position}s past episode end ({duration}s)")]
    SeekOutOfRange {
        /// Requested position in seconds
        position: u32,
        /// Episode duration in seconds
        duration: u32,
    },
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
