//! Player - audio element synchronization
//!
//! The view-side counterpart of the store: subscribes to store changes,
//! drives the host audio element (load/play/pause/loop), owns the
//! transient progress counter, and feeds the element's notifications back
//! into the store.
//!
//! Store events are buffered into an inbox by the subscription listener
//! and applied by [`Player::sync`]. Every player-initiated mutation syncs
//! on the spot; after mutating the store from elsewhere (an episode list
//! page calling `play_list`, say), call `sync` once control returns to
//! the host loop.

use crate::controls::Controls;
use crate::element::AudioElement;
use crate::error::{PlayerError, Result};
use crate::format::format_duration;
use podwave_playback::{Episode, PlayerEvent, SharedStore, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Player view core over a host audio element
///
/// Owns the element and the progress counter; shares the store with the
/// rest of the application. All activity happens on the single UI thread.
pub struct Player<A: AudioElement> {
    store: SharedStore,
    element: A,

    /// Elapsed playback of the current episode, whole seconds
    progress: u32,

    /// Set once the current source's metadata has loaded; time updates
    /// arriving before that are ignored
    tracking: bool,

    inbox: Rc<RefCell<Vec<PlayerEvent>>>,
    subscription: SubscriptionId,
}

impl<A: AudioElement> Player<A> {
    /// Create a player over `element`, subscribed to `store`
    pub fn new(store: SharedStore, element: A) -> Self {
        let inbox: Rc<RefCell<Vec<PlayerEvent>>> = Rc::default();
        let sink = Rc::clone(&inbox);
        let subscription = store
            .borrow_mut()
            .subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let mut player = Self {
            store,
            element,
            progress: 0,
            tracking: false,
            inbox,
            subscription,
        };

        // The store may carry a configured loop flag from before the
        // element existed
        let looping = player.store.borrow().is_looping();
        player.element.set_looping(looping);
        player
    }

    /// Apply store changes to the element
    ///
    /// Drains the event inbox in mutation order. Idempotent when nothing
    /// changed; cheap enough to call after every host-loop turn.
    pub fn sync(&mut self) {
        let events = std::mem::take(&mut *self.inbox.borrow_mut());

        for event in events {
            match event {
                PlayerEvent::PlaylistChanged { .. } | PlayerEvent::EpisodeChanged { .. } => {
                    self.load_current();
                }
                PlayerEvent::PlayingChanged { playing } => {
                    if playing {
                        self.element.play();
                    } else {
                        self.element.pause();
                    }
                }
                PlayerEvent::LoopingChanged { looping } => {
                    self.element.set_looping(looping);
                }
                PlayerEvent::ShufflingChanged { .. } => {
                    // Shuffle only affects future navigation
                }
                PlayerEvent::Cleared => {
                    tracing::debug!("playlist cleared, pausing element");
                    self.element.pause();
                    self.progress = 0;
                    self.tracking = false;
                }
            }
        }
    }

    fn load_current(&mut self) {
        let (url, looping) = {
            let store = self.store.borrow();
            match store.current_episode() {
                Some(episode) => (episode.url.clone(), store.is_looping()),
                None => return,
            }
        };

        tracing::debug!("loading source: {}", url);
        self.tracking = false;
        self.element.set_source(&url, true);
        self.element.set_looping(looping);
    }

    // ===== User Controls =====

    /// Play/pause button
    pub fn toggle_play(&mut self) {
        self.store.borrow_mut().toggle_play();
        self.sync();
    }

    /// Loop toggle
    pub fn toggle_loop(&mut self) {
        self.store.borrow_mut().toggle_loop();
        self.sync();
    }

    /// Shuffle toggle
    pub fn toggle_shuffle(&mut self) {
        self.store.borrow_mut().toggle_shuffle();
        self.sync();
    }

    /// Next button
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.store.borrow_mut().play_next();
        self.sync();
    }

    /// Previous button
    pub fn previous(&mut self) {
        self.store.borrow_mut().play_previous();
        self.sync();
    }

    /// Jump to `seconds` within the current episode
    ///
    /// Commands the element and updates progress immediately rather than
    /// waiting for the next time-update, so the UI never snaps back
    /// under the user's thumb.
    pub fn seek(&mut self, seconds: u32) -> Result<()> {
        let duration = self
            .store
            .borrow()
            .current_episode()
            .map(|episode| episode.duration)
            .ok_or(PlayerError::NoEpisodeLoaded)?;

        if seconds > duration {
            return Err(PlayerError::SeekOutOfRange {
                position: seconds,
                duration,
            });
        }

        self.element.seek(Duration::from_secs(u64::from(seconds)));
        self.progress = seconds;
        Ok(())
    }

    // ===== Element Notifications =====

    /// The current source's metadata finished loading
    ///
    /// Fired once per episode, after duration and the seekable range are
    /// known. Rewinds the element and arms time-update tracking.
    pub fn on_metadata_loaded(&mut self) {
        self.element.seek(Duration::ZERO);
        self.progress = 0;
        self.tracking = true;
    }

    /// Periodic position notification from the element
    pub fn on_time_update(&mut self) {
        if !self.tracking {
            return;
        }
        self.progress = self.element.position().as_secs() as u32;
    }

    /// The element started playing on its own (OS media keys and the
    /// like); reconcile the store
    pub fn on_play(&mut self) {
        self.store.borrow_mut().set_playing_state(true);
        self.sync();
    }

    /// The element paused on its own; reconcile the store
    pub fn on_pause(&mut self) {
        self.store.borrow_mut().set_playing_state(false);
        self.sync();
    }

    /// The current source played to its end
    ///
    /// The sole auto-advance path: move on when a next episode exists,
    /// otherwise clear the player. Never fires while the element loops
    /// natively.
    pub fn on_ended(&mut self) {
        {
            let mut store = self.store.borrow_mut();
            if store.has_next() {
                store.play_next();
            } else {
                store.clear_player_state();
            }
        }
        self.sync();
    }

    // ===== View Queries =====

    /// Elapsed playback of the current episode, whole seconds
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Elapsed playback formatted for display
    pub fn progress_label(&self) -> String {
        format_duration(self.progress)
    }

    /// Current episode duration formatted for display ("00:00" with no
    /// episode selected)
    pub fn duration_label(&self) -> String {
        let duration = self
            .store
            .borrow()
            .current_episode()
            .map_or(0, |episode| episode.duration);
        format_duration(duration)
    }

    /// The episode being played, if any
    pub fn current_episode(&self) -> Option<Episode> {
        self.store.borrow().current_episode().cloned()
    }

    /// Transport control enablement for the rendering layer
    pub fn controls(&self) -> Controls {
        Controls::from_store(&self.store.borrow())
    }

    /// The shared store handle
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// The host audio element
    pub fn element(&self) -> &A {
        &self.element
    }

    /// Mutable access to the host audio element
    pub fn element_mut(&mut self) -> &mut A {
        &mut self.element
    }
}

impl<A: AudioElement> Drop for Player<A> {
    fn drop(&mut self) {
        self.store.borrow_mut().unsubscribe(self.subscription);
    }
}
