// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios over the video screen: playback invariants, the
//! interaction counters, and the dialog lifecycles, driven exactly the way
//! the update loop drives them.

use iced_reel::catalog::{Catalog, MockCatalog};
use iced_reel::config::Config;
use iced_reel::player;
use iced_reel::ui::video_screen::{self, Message};
use iced_reel::ui::{donate_dialog, share_dialog};
use std::time::{Duration, Instant};

fn screen(id: &str) -> video_screen::State {
    let catalog = MockCatalog::new();
    let record = catalog.get(id).expect("record exists").clone();
    let (mut state, _task) = video_screen::State::new(record, &Config::default());
    let duration = state.record().duration_secs;
    state.update(Message::MediaReady {
        duration_secs: duration,
    });
    state
}

#[test]
fn like_toggle_round_trip_has_no_drift() {
    let mut state = screen("1");
    assert_eq!(state.interactions().likes(), 3_800);

    state.update(Message::ToggleLike);
    assert!(state.interactions().liked());
    assert_eq!(state.interactions().likes(), 3_801);

    state.update(Message::ToggleLike);
    assert!(!state.interactions().liked());
    assert_eq!(state.interactions().likes(), 3_800);
}

#[test]
fn subscribe_toggle_round_trips() {
    let mut state = screen("1");
    assert!(!state.interactions().subscribed());

    state.update(Message::ToggleSubscribe);
    assert!(state.interactions().subscribed());
    state.update(Message::ToggleSubscribe);
    assert!(!state.interactions().subscribed());
}

#[test]
fn playback_commands_before_media_ready_are_silent_no_ops() {
    let catalog = MockCatalog::new();
    let record = catalog.get("1").expect("record exists").clone();
    let (mut state, _task) = video_screen::State::new(record, &Config::default());

    state.update(Message::Player(player::Message::TogglePlay));
    state.update(Message::Player(player::Message::Seek(10.0)));

    assert!(!state.player().is_bound());
    assert!(!state.player().is_playing());
    assert_eq!(state.player().position_secs(), 0.0);
}

#[test]
fn seek_clamps_to_the_known_duration() {
    let mut state = screen("1");

    state.update(Message::Player(player::Message::Seek(10_000.0)));
    assert_eq!(state.player().position_secs(), 245.0);

    state.update(Message::Player(player::Message::Seek(-3.0)));
    assert_eq!(state.player().position_secs(), 0.0);
}

#[test]
fn volume_and_mute_stay_coupled() {
    let mut state = screen("1");

    state.update(Message::Player(player::Message::SetVolume(0.0)));
    assert!(state.player().muted());

    state.update(Message::Player(player::Message::SetVolume(0.6)));
    assert!(!state.player().muted());

    state.update(Message::Player(player::Message::ToggleMute));
    assert!(state.player().muted());
    assert_eq!(state.player().effective_volume(), 0.0);

    state.update(Message::Player(player::Message::ToggleMute));
    assert!(!state.player().muted());
    assert!((state.player().volume() - 0.6).abs() < f32::EPSILON);
}

#[test]
fn playback_ends_at_the_duration() {
    let mut state = screen("4");
    state.update(Message::Player(player::Message::TogglePlay));

    let t0 = Instant::now();
    state.tick(t0);
    state.tick(t0 + Duration::from_secs(500));

    assert!(!state.player().is_playing());
    assert_eq!(state.player().position_secs(), 154.0);
}

#[test]
fn controls_hide_while_playing_and_return_on_pointer_activity() {
    let mut state = screen("1");
    state.update(Message::Player(player::Message::TogglePlay));

    let t0 = Instant::now();
    state.update(Message::Player(player::Message::PointerMoved(t0)));
    state.tick(t0 + Duration::from_secs(2));
    assert!(state.player().controls_visible());

    state.tick(t0 + Duration::from_secs(4));
    assert!(!state.player().controls_visible());

    state.update(Message::Player(player::Message::PointerMoved(
        t0 + Duration::from_secs(5),
    )));
    assert!(state.player().controls_visible());
}

#[test]
fn copied_indicator_resets_without_stacking() {
    let mut state = screen("1");
    state.update(Message::OpenShare);

    let t0 = Instant::now();
    state.update(Message::Share(share_dialog::Message::CopyLink(t0)));
    state.update(Message::Share(share_dialog::Message::CopyLink(
        t0 + Duration::from_secs(1),
    )));

    state.tick(t0 + Duration::from_secs(2));
    assert!(
        state.share_dialog().expect("dialog open").copied(),
        "the replaced deadline must not fire early"
    );

    state.tick(t0 + Duration::from_secs(3));
    assert!(!state.share_dialog().expect("dialog open").copied());
}

#[test]
fn donate_confirm_toasts_closes_and_resets() {
    let mut state = screen("3");

    state.update(Message::OpenDonate);
    assert_eq!(
        state.donate_dialog().expect("dialog open").amount(),
        donate_dialog::DEFAULT_AMOUNT
    );

    state.update(Message::Donate(donate_dialog::Message::PresetPressed(50)));
    state.update(Message::Donate(donate_dialog::Message::MessageChanged(
        "beautiful aurora".into(),
    )));
    let event = state.update(Message::Donate(donate_dialog::Message::Confirm));

    assert!(matches!(event, video_screen::Event::Notify(_)));
    assert!(state.donate_dialog().is_none());

    state.update(Message::OpenDonate);
    let dialog = state.donate_dialog().expect("dialog reopened");
    assert_eq!(dialog.amount(), donate_dialog::DEFAULT_AMOUNT);
    assert!(dialog.message().is_empty());
}

#[test]
fn closing_the_share_dialog_drops_its_transient_state() {
    let mut state = screen("2");

    state.update(Message::OpenShare);
    state.update(Message::Share(share_dialog::Message::CopyLink(
        Instant::now(),
    )));
    state.update(Message::Share(share_dialog::Message::Close));
    assert!(state.share_dialog().is_none());

    state.update(Message::OpenShare);
    assert!(!state.share_dialog().expect("dialog reopened").copied());
}

#[test]
fn fullscreen_round_trip_returns_to_windowed_intent() {
    let mut state = screen("1");

    let entered = state.update(Message::Player(player::Message::ToggleFullscreen));
    assert!(matches!(
        entered,
        video_screen::Event::SetFullscreen(true)
    ));
    assert!(state.player().fullscreen());

    // An exit taken outside the toggle (Escape, OS-level) resyncs the flag.
    state.sync_fullscreen(false);
    assert!(!state.player().fullscreen());
}
