//! Host audio element trait
//!
//! Abstracts the environment-supplied audio primitive (an HTML `<audio>`
//! element, a media framework handle, a test double). The trait covers
//! the imperative half of the contract; notifications flow the other way,
//! with the host glue calling the player's `on_*` handlers.

use std::time::Duration;

/// Host-provided audio primitive
///
/// Implementors decode and play a single source URI. Commands are fire
/// and forget: a later command supersedes an in-flight one, and playback
/// failures stay on the host side of this boundary.
///
/// The host is expected to deliver the primitive's notifications
/// (metadata-loaded, time-update, play, pause, ended) to the matching
/// [`Player`](crate::Player) handlers.
pub trait AudioElement {
    /// Load a new source URI, optionally starting playback once ready
    fn set_source(&mut self, url: &str, autoplay: bool);

    /// Start or resume playback of the current source
    fn play(&mut self);

    /// Pause playback, keeping the current position
    fn pause(&mut self);

    /// Jump to `position` from the start of the source
    fn seek(&mut self, position: Duration);

    /// Current playback position from the start of the source
    fn position(&self) -> Duration;

    /// Enable or disable the primitive's native looping
    ///
    /// While looping, the primitive restarts the source itself and never
    /// emits an `ended` notification.
    fn set_looping(&mut self, looping: bool);
}

/// Inert audio element for unit tests
///
/// Swallows every command; reports a settable position.
#[cfg(test)]
pub(crate) struct SilentElement {
    pub(crate) position: Duration,
}

#[cfg(test)]
impl SilentElement {
    pub(crate) fn new() -> Self {
        Self {
            position: Duration::ZERO,
        }
    }
}

#[cfg(test)]
impl AudioElement for SilentElement {
    fn set_source(&mut self, _url: &str, _autoplay: bool) {}

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_looping(&mut self, _looping: bool) {}
}
