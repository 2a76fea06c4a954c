//! Podwave - Player View Core
//!
//! The view-side half of the Podwave player: keeps a host-provided audio
//! element in sync with the playback store, tracks listening progress,
//! and derives control enablement for the rendering layer.
//!
//! This crate provides:
//! - [`AudioElement`]: the trait modeling the host audio primitive
//! - [`Player`]: the controller between store, element, and host glue
//! - [`Controls`]: enablement flags for the transport buttons
//! - [`format_duration`]: `mm:ss` / `hh:mm:ss` time labels
//!
//! # Architecture
//!
//! Rendering and styling stay in the surrounding application; this crate
//! owns only the playback-sync logic. The host implements
//! [`AudioElement`] for its audio primitive and routes the primitive's
//! notifications to the matching [`Player`] handlers (`on_ended`,
//! `on_time_update`, ...).
//!
//! # Example
//!
//! ```rust,no_run
//! use podwave_playback::{PlayerConfig, PlayerStore};
//! use podwave_player::{AudioElement, Player};
//! use std::time::Duration;
//!
//! struct MyAudioHandle {
//!     // ... host-specific playback handle
//! }
//!
//! impl AudioElement for MyAudioHandle {
//!     fn set_source(&mut self, url: &str, autoplay: bool) { /* ... */ }
//!     fn play(&mut self) { /* ... */ }
//!     fn pause(&mut self) { /* ... */ }
//!     fn seek(&mut self, position: Duration) { /* ... */ }
//!     fn position(&self) -> Duration { Duration::ZERO }
//!     fn set_looping(&mut self, looping: bool) { /* ... */ }
//! }
//!
//! let store = PlayerStore::shared(PlayerConfig::default());
//! let mut player = Player::new(store.clone(), MyAudioHandle {});
//!
//! // Elsewhere, an episode page starts a playlist...
//! # let episodes = Vec::new();
//! store.borrow_mut().play_list(episodes, 0);
//! // ...and the host loop lets the player catch up
//! player.sync();
//! ```

#![warn(missing_docs)]

mod controls;
mod element;
mod error;
mod format;
mod player;

// Public exports
pub use controls::Controls;
pub use element::AudioElement;
pub use error::{PlayerError, Result};
pub use format::format_duration;
pub use player::Player;
