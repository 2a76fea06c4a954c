//! Transport control enablement
//!
//! Derives which of the five transport buttons are usable from the
//! current store state. The rendering layer reads these flags verbatim;
//! nothing here is stored.

use podwave_playback::PlayerStore;

/// Enablement flags for the transport controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Shuffle toggle: needs an episode and a list worth shuffling
    pub shuffle: bool,

    /// Previous button: needs an episode before the current one
    pub previous: bool,

    /// Play/pause button: needs a selected episode
    pub play_pause: bool,

    /// Next button: needs a next episode (always true under shuffle on a
    /// non-empty list)
    pub next: bool,

    /// Loop toggle: needs a selected episode
    pub looping: bool,
}

impl Controls {
    /// Derive the enablement flags from the store
    pub fn from_store(store: &PlayerStore) -> Self {
        let has_episode = store.current_episode().is_some();

        Self {
            shuffle: has_episode && store.len() > 1,
            previous: has_episode && store.has_previous(),
            play_pause: has_episode,
            next: has_episode && store.has_next(),
            looping: has_episode,
        }
    }

    /// Flags with every control disabled (no episode selected)
    pub fn disabled() -> Self {
        Self {
            shuffle: false,
            previous: false,
            play_pause: false,
            next: false,
            looping: false,
        }
    }
}
