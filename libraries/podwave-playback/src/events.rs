//! Store change events
//!
//! Event-based communication for view synchronization. Every effective
//! store mutation notifies subscribers with one or more of these events,
//! in mutation order. Events carry just enough to decide what to re-read
//! from the store; they are not a second copy of the state.

use serde::{Deserialize, Serialize};

/// Events emitted by the player store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The playlist was replaced wholesale (`play` or `play_list`)
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// The current index moved within the existing playlist
    ///
    /// Only emitted when the index actually changes. A shuffle draw that
    /// lands on the current index produces no event, so the view keeps
    /// the running source untouched.
    EpisodeChanged {
        /// New current index
        index: usize,
    },

    /// The playing flag changed
    PlayingChanged {
        /// New playing flag
        playing: bool,
    },

    /// The loop flag changed
    LoopingChanged {
        /// New loop flag
        looping: bool,
    },

    /// The shuffle flag changed
    ShufflingChanged {
        /// New shuffle flag
        shuffling: bool,
    },

    /// The playlist was emptied and playback stopped
    Cleared,
}
