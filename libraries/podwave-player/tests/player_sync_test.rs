//! Player/element synchronization tests
//!
//! Drives the player the way host glue would — store mutations on one
//! side, element notifications on the other — and checks the command
//! stream reaching the audio element.

use podwave_playback::{Episode, PlayerConfig, PlayerStore, SharedStore};
use podwave_player::{AudioElement, Player};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    SetSource { url: String, autoplay: bool },
    Play,
    Pause,
    Seek(u64),
    SetLooping(bool),
}

/// Audio element double that records every command it receives
struct RecordingElement {
    log: Rc<RefCell<Vec<Command>>>,
    position: Rc<RefCell<Duration>>,
}

impl RecordingElement {
    fn new() -> (Self, Rc<RefCell<Vec<Command>>>, Rc<RefCell<Duration>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let position = Rc::new(RefCell::new(Duration::ZERO));
        let element = Self {
            log: Rc::clone(&log),
            position: Rc::clone(&position),
        };
        (element, log, position)
    }
}

impl AudioElement for RecordingElement {
    fn set_source(&mut self, url: &str, autoplay: bool) {
        self.log.borrow_mut().push(Command::SetSource {
            url: url.to_string(),
            autoplay,
        });
    }

    fn play(&mut self) {
        self.log.borrow_mut().push(Command::Play);
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(Command::Pause);
    }

    fn seek(&mut self, position: Duration) {
        *self.position.borrow_mut() = position;
        self.log.borrow_mut().push(Command::Seek(position.as_secs()));
    }

    fn position(&self) -> Duration {
        *self.position.borrow()
    }

    fn set_looping(&mut self, looping: bool) {
        self.log.borrow_mut().push(Command::SetLooping(looping));
    }
}

fn episode(title: &str, duration: u32) -> Episode {
    Episode {
        title: title.to_string(),
        members: "Test Members".to_string(),
        duration,
        thumbnail: format!("https://cdn.example.com/{}.jpg", title),
        url: format!("https://cdn.example.com/{}.mp3", title),
    }
}

fn player_with_log() -> (
    Player<RecordingElement>,
    SharedStore,
    Rc<RefCell<Vec<Command>>>,
    Rc<RefCell<Duration>>,
) {
    let store = PlayerStore::shared(PlayerConfig::default());
    let (element, log, position) = RecordingElement::new();
    let player = Player::new(Rc::clone(&store), element);
    log.borrow_mut().clear(); // drop construction-time loop setup
    (player, store, log, position)
}

// ===== Store-Driven Commands =====

#[test]
fn test_playing_an_episode_loads_source_and_starts_playback() {
    let (mut player, store, log, _) = player_with_log();

    store.borrow_mut().play(episode("a", 120));
    player.sync();

    assert_eq!(
        *log.borrow(),
        vec![
            Command::SetSource {
                url: "https://cdn.example.com/a.mp3".to_string(),
                autoplay: true,
            },
            Command::SetLooping(false),
            Command::Play,
        ]
    );
}

#[test]
fn test_each_playing_flip_drives_one_transport_command() {
    let (mut player, store, log, _) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    log.borrow_mut().clear();

    player.toggle_play();
    assert_eq!(*log.borrow(), vec![Command::Pause]);

    player.toggle_play();
    assert_eq!(
        *log.borrow(),
        vec![Command::Pause, Command::Play]
    );
}

#[test]
fn test_next_button_reloads_the_element_source() {
    let (mut player, store, log, _) = player_with_log();
    store
        .borrow_mut()
        .play_list(vec![episode("a", 60), episode("b", 60)], 0);
    player.sync();
    log.borrow_mut().clear();

    player.next();
    assert_eq!(
        *log.borrow(),
        vec![
            Command::SetSource {
                url: "https://cdn.example.com/b.mp3".to_string(),
                autoplay: true,
            },
            Command::SetLooping(false),
        ]
    );
}

#[test]
fn test_loop_toggle_is_forwarded_to_the_element() {
    let (mut player, store, log, _) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    log.borrow_mut().clear();

    player.toggle_loop();
    assert_eq!(*log.borrow(), vec![Command::SetLooping(true)]);

    player.toggle_loop();
    assert_eq!(
        *log.borrow(),
        vec![Command::SetLooping(true), Command::SetLooping(false)]
    );
}

#[test]
fn test_shuffle_toggle_commands_nothing() {
    let (mut player, store, log, _) = player_with_log();
    store
        .borrow_mut()
        .play_list(vec![episode("a", 60), episode("b", 60)], 0);
    player.sync();
    log.borrow_mut().clear();

    player.toggle_shuffle();
    assert!(log.borrow().is_empty());
}

// ===== Element Notifications =====

#[test]
fn test_metadata_load_rewinds_element_and_progress() {
    let (mut player, store, log, position) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    *position.borrow_mut() = Duration::from_secs(33);
    log.borrow_mut().clear();

    player.on_metadata_loaded();
    assert_eq!(*log.borrow(), vec![Command::Seek(0)]);
    assert_eq!(player.progress(), 0);

    *position.borrow_mut() = Duration::from_secs(12);
    player.on_time_update();
    assert_eq!(player.progress(), 12);
}

#[test]
fn test_progress_floors_fractional_positions() {
    let (mut player, store, _, position) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    player.on_metadata_loaded();

    *position.borrow_mut() = Duration::from_millis(45_900);
    player.on_time_update();
    assert_eq!(player.progress(), 45);
}

#[test]
fn test_seek_is_optimistic() {
    let (mut player, store, log, position) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    player.on_metadata_loaded();
    log.borrow_mut().clear();

    player.seek(45).unwrap();
    assert_eq!(*log.borrow(), vec![Command::Seek(45)]);
    // Progress moved before any time-update arrived
    assert_eq!(player.progress(), 45);
    assert_eq!(*position.borrow(), Duration::from_secs(45));
}

#[test]
fn test_ended_advances_when_a_next_episode_exists() {
    let (mut player, store, log, _) = player_with_log();
    store
        .borrow_mut()
        .play_list(vec![episode("a", 60), episode("b", 60)], 0);
    player.sync();
    log.borrow_mut().clear();

    player.on_ended();
    assert_eq!(store.borrow().current_index(), 1);
    assert_eq!(
        *log.borrow(),
        vec![
            Command::SetSource {
                url: "https://cdn.example.com/b.mp3".to_string(),
                autoplay: true,
            },
            Command::SetLooping(false),
        ]
    );
}

#[test]
fn test_ended_on_the_last_episode_clears_and_pauses() {
    let (mut player, store, log, _) = player_with_log();
    store
        .borrow_mut()
        .play_list(vec![episode("a", 60), episode("b", 60)], 1);
    player.sync();
    log.borrow_mut().clear();

    player.on_ended();
    assert!(store.borrow().is_empty());
    assert!(!store.borrow().is_playing());
    assert_eq!(*log.borrow(), vec![Command::Pause]);
    assert_eq!(player.progress(), 0);
}

#[test]
fn test_external_pause_reconciles_without_feedback() {
    let (mut player, store, log, _) = player_with_log();
    store.borrow_mut().play(episode("a", 120));
    player.sync();
    log.borrow_mut().clear();

    // OS media keys paused the element; the element echoes its pause
    player.on_pause();
    assert!(!store.borrow().is_playing());
    assert_eq!(*log.borrow(), vec![Command::Pause]);

    // A second notification for the same state is absorbed by the store
    player.on_pause();
    assert_eq!(*log.borrow(), vec![Command::Pause]);

    player.on_play();
    assert!(store.borrow().is_playing());
    assert_eq!(*log.borrow(), vec![Command::Pause, Command::Play]);
}

// ===== Out-of-Band Store Mutations =====

#[test]
fn test_sync_catches_up_after_external_mutations() {
    let (mut player, store, log, _) = player_with_log();

    // An episode page queues a playlist and pauses before the player
    // gets a turn
    {
        let mut store = store.borrow_mut();
        store.play_list(vec![episode("a", 60), episode("b", 60)], 0);
        store.toggle_play();
    }

    player.sync();
    assert_eq!(
        *log.borrow(),
        vec![
            Command::SetSource {
                url: "https://cdn.example.com/a.mp3".to_string(),
                autoplay: true,
            },
            Command::SetLooping(false),
            Command::Play,
            Command::Pause,
        ]
    );

    // Nothing new: sync is idempotent
    log.borrow_mut().clear();
    player.sync();
    assert!(log.borrow().is_empty());
}
