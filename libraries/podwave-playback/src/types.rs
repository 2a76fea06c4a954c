//! Core types for playback state management

use serde::{Deserialize, Serialize};

/// A single playable audio item
///
/// Contains all metadata needed for playback and display.
/// Episodes are handed over fully populated by the surrounding
/// application and are never mutated once placed in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Participating members, already joined for display
    pub members: String,

    /// Episode duration in whole seconds
    pub duration: u32,

    /// Thumbnail image URI
    pub thumbnail: String,

    /// Audio source URI handed to the host audio element
    pub url: String,
}

/// Configuration for the player store
///
/// Sets the initial transport flags. Playback itself always starts
/// stopped with an empty playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,
}
