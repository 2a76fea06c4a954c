//! Player store - playlist and transport state
//!
//! Holds the playlist, the current index, and the transport flags, and
//! exposes the mutation operations the rest of the application drives
//! playback through. Every operation is total: out-of-range input is
//! clamped or ignored, never reported as an error.
//!
//! Views observe the store through an explicit subscription interface:
//! [`PlayerStore::subscribe`] registers a listener invoked synchronously
//! after each effective mutation. Listeners must not call back into the
//! store; buffer the event and act after the mutating call returns.

use crate::events::PlayerEvent;
use crate::shuffle::random_episode_index;
use crate::types::{Episode, PlayerConfig};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to the process-wide store
///
/// The store is created once at application start and passed explicitly
/// to every component that needs it. All access happens on the single UI
/// thread.
pub type SharedStore = Rc<RefCell<PlayerStore>>;

/// Handle returned by [`PlayerStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlayerEvent)>;

/// Playlist plus transport state for the player
///
/// State transitions:
/// - `play` / `play_list` replace the playlist wholesale and start
///   playback.
/// - `play_next` / `play_previous` move the current index; under shuffle,
///   `play_next` draws a uniformly random index (repeats allowed).
/// - `clear_player_state` empties the playlist and stops playback; it is
///   also the natural end-of-list path.
///
/// `has_next` and `has_previous` are derived on demand, never stored.
pub struct PlayerStore {
    episodes: Vec<Episode>,
    current_index: usize,
    playing: bool,
    looping: bool,
    shuffling: bool,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PlayerStore {
    /// Create a new, empty store
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            episodes: Vec::new(),
            current_index: 0,
            playing: false,
            looping: config.looping,
            shuffling: config.shuffling,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a new store wrapped in the shared single-threaded handle
    pub fn shared(config: PlayerConfig) -> SharedStore {
        Rc::new(RefCell::new(Self::new(config)))
    }

    // ===== Playback Operations =====

    /// Play a single episode outside any list context
    ///
    /// Replaces the playlist with a one-element list and starts playback.
    pub fn play(&mut self, episode: Episode) {
        tracing::debug!("playing single episode: {}", episode.title);
        self.episodes = vec![episode];
        self.current_index = 0;
        let started = !self.playing;
        self.playing = true;

        self.notify(PlayerEvent::PlaylistChanged { length: 1 });
        if started {
            self.notify(PlayerEvent::PlayingChanged { playing: true });
        }
    }

    /// Play `list` starting at `index`
    ///
    /// Replaces the playlist wholesale. A start index past the end is
    /// clamped to the last episode; an empty list degenerates to
    /// [`clear_player_state`](Self::clear_player_state).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        if list.is_empty() {
            self.clear_player_state();
            return;
        }

        let clamped = index.min(list.len() - 1);
        if clamped != index {
            tracing::warn!("start index {} past end of list, clamping to {}", index, clamped);
        }

        tracing::debug!("playing list of {} from index {}", list.len(), clamped);
        self.episodes = list;
        self.current_index = clamped;
        let started = !self.playing;
        self.playing = true;

        self.notify(PlayerEvent::PlaylistChanged {
            length: self.episodes.len(),
        });
        if started {
            self.notify(PlayerEvent::PlayingChanged { playing: true });
        }
    }

    /// Flip the playing flag
    ///
    /// No-op while the playlist is empty: only `play` / `play_list` can
    /// start playback from the empty state.
    pub fn toggle_play(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        self.playing = !self.playing;
        self.notify(PlayerEvent::PlayingChanged {
            playing: self.playing,
        });
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        self.notify(PlayerEvent::LoopingChanged {
            looping: self.looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffling = !self.shuffling;
        self.notify(PlayerEvent::ShufflingChanged {
            shuffling: self.shuffling,
        });
    }

    /// Set the playing flag directly
    ///
    /// Reconciliation path for the host primitive's own play/pause
    /// notifications (OS media keys and the like). Setting `true` is
    /// ignored while the playlist is empty, and setting the current value
    /// notifies nobody, which keeps the reconciliation loop quiet.
    pub fn set_playing_state(&mut self, state: bool) {
        if state && self.episodes.is_empty() {
            return;
        }
        if self.playing == state {
            return;
        }
        self.playing = state;
        self.notify(PlayerEvent::PlayingChanged { playing: state });
    }

    /// Advance to the next episode
    ///
    /// Under shuffle, draws a uniformly random index over the whole
    /// playlist; the draw may land on the current episode again. Without
    /// shuffle, advances by one when a next episode exists. Otherwise a
    /// no-op.
    pub fn play_next(&mut self) {
        if self.shuffling && !self.episodes.is_empty() {
            let next = random_episode_index(self.episodes.len());
            self.set_index(next);
        } else if self.has_next() {
            let next = self.current_index + 1;
            self.set_index(next);
        }
    }

    /// Step back to the previous episode; no-op at the start of the list
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            let previous = self.current_index - 1;
            self.set_index(previous);
        }
    }

    /// Empty the playlist and stop playback
    ///
    /// Removing the current episode is what stops playback; the playing
    /// flag is cleared to uphold the playing-implies-episode invariant.
    pub fn clear_player_state(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        tracing::debug!("clearing player state");
        self.episodes.clear();
        self.current_index = 0;
        self.playing = false;
        self.notify(PlayerEvent::Cleared);
    }

    fn set_index(&mut self, index: usize) {
        if index == self.current_index {
            return;
        }
        self.current_index = index;
        self.notify(PlayerEvent::EpisodeChanged { index });
    }

    // ===== Derived State =====

    /// Whether a next episode exists
    ///
    /// Shuffle makes any non-empty playlist navigable forward; otherwise
    /// a next episode must exist in list order.
    pub fn has_next(&self) -> bool {
        !self.episodes.is_empty()
            && (self.shuffling || self.current_index + 1 < self.episodes.len())
    }

    /// Whether a previous episode exists in list order
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// The episode at the current index, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    // ===== State Queries =====

    /// The current playlist
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Index of the current episode (0 while the playlist is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the current episode loops
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether forward navigation shuffles
    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }

    /// Number of episodes in the playlist
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    // ===== Subscriptions =====

    /// Register a listener invoked after each effective mutation
    ///
    /// Returns a handle for [`unsubscribe`](Self::unsubscribe). Listeners
    /// run synchronously on the mutating call and must not re-enter the
    /// store.
    pub fn subscribe(&mut self, listener: impl FnMut(&PlayerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was still registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: PlayerEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerStore")
            .field("episodes", &self.episodes.len())
            .field("current_index", &self.current_index)
            .field("playing", &self.playing)
            .field("looping", &self.looping)
            .field("shuffling", &self.shuffling)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
