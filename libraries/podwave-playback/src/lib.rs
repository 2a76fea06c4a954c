//! Podwave - Playback State Management
//!
//! Playlist and transport state for the Podwave player.
//!
//! This crate provides:
//! - The player store: playlist, current index, play/loop/shuffle flags
//! - Derived navigation flags (`has_next` / `has_previous`)
//! - Shuffle advancement (uniform random, repeats allowed)
//! - An explicit subscription interface for view synchronization
//!
//! # Architecture
//!
//! `podwave-playback` is completely host-agnostic:
//! - No dependency on any UI framework
//! - No dependency on the audio element (that boundary lives in
//!   `podwave-player`)
//!
//! All state lives on the single UI thread; the store is created once at
//! application start and passed around as a [`SharedStore`] handle.
//!
//! # Example
//!
//! ```rust
//! use podwave_playback::{Episode, PlayerConfig, PlayerStore};
//!
//! let mut store = PlayerStore::new(PlayerConfig::default());
//!
//! let episode = Episode {
//!     title: "Faladev #30".to_string(),
//!     members: "Diego e Richard".to_string(),
//!     duration: 1260,
//!     thumbnail: "https://cdn.example.com/ep30.jpg".to_string(),
//!     url: "https://cdn.example.com/ep30.mp3".to_string(),
//! };
//!
//! store.play(episode);
//! assert!(store.is_playing());
//! assert!(!store.has_next());
//! ```

#![warn(missing_docs)]

pub mod events;
mod shuffle;
mod store;
pub mod types;

// Public exports
pub use events::PlayerEvent;
pub use store::{PlayerStore, SharedStore, SubscriptionId};
pub use types::{Episode, PlayerConfig};
