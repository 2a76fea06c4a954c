//! Shuffle index selection
//!
//! Uniform random selection over the playlist. Repeats of the current
//! index are allowed: the product keeps the simplest policy, and a repeat
//! costs nothing because the view ignores a draw that lands on the
//! episode already playing.

use rand::Rng;

/// Pick a uniformly random episode index in `[0, len)`
///
/// `len` must be non-zero; callers guard against empty playlists.
pub(crate) fn random_episode_index(len: usize) -> usize {
    debug_assert!(len > 0, "shuffle over an empty playlist");
    rand::thread_rng().gen_range(0..len)
}
