// SPDX-License-Identifier: MPL-2.0
//! Playback state machine.
//!
//! State mutations happen synchronously inside [`PlayerState::handle`];
//! passive progress (the clock, controls auto-hide) flows through
//! [`PlayerState::tick`]. Timers are a single replaceable `Instant` per
//! concern: replacing the instant cancels whatever was pending.

use super::surface::MediaSurface;
use crate::config::{MAX_VOLUME, MIN_VOLUME, UNMUTE_FALLBACK_VOLUME};
use std::time::{Duration, Instant};

/// User intents and pointer activity consumed by [`PlayerState::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle play/pause.
    TogglePlay,
    /// Jump to a position in seconds (clamped to the media duration).
    Seek(f64),
    /// Set the volume (clamped to `[0, 1]`; zero implies muted).
    SetVolume(f32),
    /// Toggle mute, restoring the last non-zero volume on unmute.
    ToggleMute,
    /// Toggle fullscreen intent.
    ToggleFullscreen,
    /// Pointer moved over the player area at the given instant.
    PointerMoved(Instant),
}

/// Reactions the parent must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The window should enter or leave exclusive fullscreen.
    SetFullscreen(bool),
}

/// Playback state for a single bound media surface.
///
/// Before a surface is attached every playback command is a silent no-op;
/// the screen simply has not finished loading metadata yet.
pub struct PlayerState {
    surface: Option<Box<dyn MediaSurface>>,
    playing: bool,
    position_secs: f64,
    duration_secs: f64,
    volume: f32,
    /// Last non-zero volume, restored by unmute.
    last_volume: f32,
    muted: bool,
    fullscreen: bool,
    controls_visible: bool,
    /// Replaceable handle for the auto-hide window; every pointer move
    /// replaces it, which is the cancellation.
    last_activity: Instant,
    hide_delay: Duration,
    /// Baseline for the next clock advance; cleared on every transition so
    /// resuming never produces a jump.
    last_clock: Option<Instant>,
}

impl PlayerState {
    pub fn new(volume: f32, hide_delay: Duration) -> Self {
        let volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        Self {
            surface: None,
            playing: false,
            position_secs: 0.0,
            duration_secs: 0.0,
            volume,
            last_volume: if volume > 0.0 {
                volume
            } else {
                UNMUTE_FALLBACK_VOLUME
            },
            muted: volume == 0.0,
            fullscreen: false,
            controls_visible: true,
            last_activity: Instant::now(),
            hide_delay,
            last_clock: None,
        }
    }

    /// Binds the media surface once metadata is available.
    ///
    /// This is the metadata-loaded notification: the duration becomes known
    /// and commands start reaching a real target. The current volume is
    /// pushed down so the surface starts at the preferred level.
    pub fn attach(&mut self, mut surface: Box<dyn MediaSurface>, duration_secs: f64) {
        surface.set_volume(self.effective_volume());
        self.surface = Some(surface);
        self.duration_secs = duration_secs.max(0.0);
        self.position_secs = self.position_secs.clamp(0.0, self.duration_secs);
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::TogglePlay => {
                self.toggle_play();
                Effect::None
            }
            Message::Seek(position_secs) => {
                self.seek(position_secs);
                Effect::None
            }
            Message::SetVolume(volume) => {
                self.set_volume(volume);
                Effect::None
            }
            Message::ToggleMute => {
                self.toggle_mute();
                Effect::None
            }
            Message::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                Effect::SetFullscreen(self.fullscreen)
            }
            Message::PointerMoved(now) => {
                self.controls_visible = true;
                self.last_activity = now;
                Effect::None
            }
        }
    }

    fn toggle_play(&mut self) {
        let Some(surface) = &mut self.surface else {
            return;
        };

        if self.playing {
            surface.pause();
            self.playing = false;
            self.controls_visible = true;
        } else {
            surface.play();
            self.playing = true;
        }
        self.last_clock = None;
    }

    fn seek(&mut self, position_secs: f64) {
        let Some(surface) = &mut self.surface else {
            return;
        };

        let target = position_secs.clamp(0.0, self.duration_secs);
        self.position_secs = target;
        surface.seek(target);
    }

    fn set_volume(&mut self, volume: f32) {
        if self.surface.is_none() {
            return;
        }

        let volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        self.volume = volume;
        self.muted = volume == 0.0;
        if volume > 0.0 {
            self.last_volume = volume;
        }
        self.push_volume();
    }

    fn toggle_mute(&mut self) {
        if self.surface.is_none() {
            return;
        }

        if self.muted {
            self.volume = if self.last_volume > 0.0 {
                self.last_volume
            } else {
                UNMUTE_FALLBACK_VOLUME
            };
            self.muted = false;
        } else {
            if self.volume > 0.0 {
                self.last_volume = self.volume;
            }
            self.muted = true;
        }
        self.push_volume();
    }

    fn push_volume(&mut self) {
        let effective = self.effective_volume();
        if let Some(surface) = &mut self.surface {
            surface.set_volume(effective);
        }
    }

    /// Advances the observed clock and evaluates the auto-hide window.
    ///
    /// Crossing the duration is the ended notification: playback stops and
    /// the position parks at the end.
    pub fn tick(&mut self, now: Instant) {
        if self.playing {
            if let Some(prev) = self.last_clock {
                let elapsed = now.saturating_duration_since(prev).as_secs_f64();
                self.position_secs += elapsed;
                if self.duration_secs > 0.0 && self.position_secs >= self.duration_secs {
                    self.finish();
                    return;
                }
            }
            self.last_clock = Some(now);

            if self.controls_visible
                && now.saturating_duration_since(self.last_activity) >= self.hide_delay
            {
                self.controls_visible = false;
            }
        }
    }

    fn finish(&mut self) {
        self.position_secs = self.duration_secs;
        self.playing = false;
        self.controls_visible = true;
        self.last_clock = None;
    }

    /// Forces the fullscreen flag to what the platform reports. Covers
    /// exits taken outside the toggle button (Escape, OS-level exit).
    pub fn sync_fullscreen(&mut self, actual: bool) {
        self.fullscreen = actual;
    }

    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Output volume actually sent to the surface: zero whenever muted.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Play,
        Pause,
        Seek(f64),
        Volume(f32),
    }

    struct FakeSurface(Rc<RefCell<Vec<Command>>>);

    impl MediaSurface for FakeSurface {
        fn play(&mut self) {
            self.0.borrow_mut().push(Command::Play);
        }
        fn pause(&mut self) {
            self.0.borrow_mut().push(Command::Pause);
        }
        fn seek(&mut self, position_secs: f64) {
            self.0.borrow_mut().push(Command::Seek(position_secs));
        }
        fn set_volume(&mut self, volume: f32) {
            self.0.borrow_mut().push(Command::Volume(volume));
        }
    }

    const HIDE: Duration = Duration::from_secs(3);

    fn bound_player(duration_secs: f64) -> (PlayerState, Rc<RefCell<Vec<Command>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut player = PlayerState::new(1.0, HIDE);
        player.attach(Box::new(FakeSurface(Rc::clone(&log))), duration_secs);
        log.borrow_mut().clear();
        (player, log)
    }

    #[test]
    fn commands_are_no_ops_without_a_surface() {
        let mut player = PlayerState::new(1.0, HIDE);

        player.handle(Message::TogglePlay);
        player.handle(Message::Seek(10.0));
        player.handle(Message::SetVolume(0.2));
        player.handle(Message::ToggleMute);

        assert!(!player.is_playing());
        assert_eq!(player.position_secs(), 0.0);
        assert!((player.volume() - 1.0).abs() < f32::EPSILON);
        assert!(!player.muted());
    }

    #[test]
    fn toggle_play_commands_the_surface() {
        let (mut player, log) = bound_player(100.0);

        player.handle(Message::TogglePlay);
        assert!(player.is_playing());
        player.handle(Message::TogglePlay);
        assert!(!player.is_playing());

        assert_eq!(*log.borrow(), vec![Command::Play, Command::Pause]);
    }

    #[test]
    fn seek_clamps_above_duration() {
        let (mut player, log) = bound_player(120.0);

        player.handle(Message::Seek(500.0));
        assert_eq!(player.position_secs(), 120.0);
        assert_eq!(*log.borrow(), vec![Command::Seek(120.0)]);
    }

    #[test]
    fn seek_clamps_below_zero() {
        let (mut player, _log) = bound_player(120.0);

        player.handle(Message::Seek(-5.0));
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn zero_volume_implies_muted() {
        let (mut player, _log) = bound_player(100.0);

        player.handle(Message::SetVolume(0.0));
        assert!(player.muted());
        assert_eq!(player.effective_volume(), 0.0);

        player.handle(Message::SetVolume(0.7));
        assert!(!player.muted());
        assert!((player.effective_volume() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn set_volume_clamps_to_unit_range() {
        let (mut player, _log) = bound_player(100.0);

        player.handle(Message::SetVolume(2.5));
        assert!((player.volume() - 1.0).abs() < f32::EPSILON);

        player.handle(Message::SetVolume(-1.0));
        assert_eq!(player.volume(), 0.0);
        assert!(player.muted());
    }

    #[test]
    fn toggle_mute_is_an_involution() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::SetVolume(0.6));

        let before = (player.volume(), player.muted());
        player.handle(Message::ToggleMute);
        assert!(player.muted());
        assert_eq!(player.effective_volume(), 0.0);
        player.handle(Message::ToggleMute);
        assert_eq!((player.volume(), player.muted()), before);
    }

    #[test]
    fn unmute_falls_back_to_half_volume() {
        let (mut player, log) = bound_player(100.0);

        player.handle(Message::SetVolume(0.0));
        player.handle(Message::ToggleMute);

        assert!(!player.muted());
        assert!((player.volume() - 0.5).abs() < f32::EPSILON);
        assert_eq!(
            log.borrow().last(),
            Some(&Command::Volume(UNMUTE_FALLBACK_VOLUME))
        );
    }

    #[test]
    fn mute_keeps_stored_volume_but_silences_output() {
        let (mut player, log) = bound_player(100.0);

        player.handle(Message::SetVolume(0.8));
        player.handle(Message::ToggleMute);

        assert!((player.volume() - 0.8).abs() < f32::EPSILON);
        assert_eq!(player.effective_volume(), 0.0);
        assert_eq!(log.borrow().last(), Some(&Command::Volume(0.0)));
    }

    #[test]
    fn clock_advances_position_while_playing() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::TogglePlay);

        let t0 = Instant::now();
        player.tick(t0);
        player.tick(t0 + Duration::from_secs(2));

        assert!((player.position_secs() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn clock_is_ignored_while_paused() {
        let (mut player, _log) = bound_player(100.0);

        let t0 = Instant::now();
        player.tick(t0);
        player.tick(t0 + Duration::from_secs(5));
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn crossing_the_duration_ends_playback() {
        let (mut player, _log) = bound_player(10.0);
        player.handle(Message::TogglePlay);

        let t0 = Instant::now();
        player.tick(t0);
        player.tick(t0 + Duration::from_secs(30));

        assert!(!player.is_playing());
        assert_eq!(player.position_secs(), 10.0);
        assert!(player.controls_visible());
    }

    #[test]
    fn controls_hide_after_idle_window_while_playing() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::TogglePlay);

        let t0 = Instant::now();
        player.handle(Message::PointerMoved(t0));
        player.tick(t0 + Duration::from_secs(2));
        assert!(player.controls_visible());

        player.tick(t0 + Duration::from_secs(4));
        assert!(!player.controls_visible());
    }

    #[test]
    fn pointer_movement_replaces_the_pending_hide() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::TogglePlay);

        let t0 = Instant::now();
        player.handle(Message::PointerMoved(t0));
        player.handle(Message::PointerMoved(t0 + Duration::from_secs(2)));

        // Old deadline (t0 + 3s) must not fire; only the replaced one does.
        player.tick(t0 + Duration::from_secs(4));
        assert!(player.controls_visible());
        player.tick(t0 + Duration::from_secs(6));
        assert!(!player.controls_visible());
    }

    #[test]
    fn controls_never_hide_while_paused() {
        let (mut player, _log) = bound_player(100.0);

        let t0 = Instant::now();
        player.handle(Message::PointerMoved(t0));
        player.tick(t0 + Duration::from_secs(60));
        assert!(player.controls_visible());
    }

    #[test]
    fn pausing_reveals_controls() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::TogglePlay);

        let t0 = Instant::now();
        player.handle(Message::PointerMoved(t0));
        player.tick(t0 + Duration::from_secs(4));
        assert!(!player.controls_visible());

        player.handle(Message::TogglePlay);
        assert!(player.controls_visible());
    }

    #[test]
    fn toggle_fullscreen_produces_window_effect() {
        let (mut player, _log) = bound_player(100.0);

        let effect = player.handle(Message::ToggleFullscreen);
        assert_eq!(effect, Effect::SetFullscreen(true));
        assert!(player.fullscreen());

        let effect = player.handle(Message::ToggleFullscreen);
        assert_eq!(effect, Effect::SetFullscreen(false));
    }

    #[test]
    fn external_exit_resynchronizes_the_flag() {
        let (mut player, _log) = bound_player(100.0);
        player.handle(Message::ToggleFullscreen);
        assert!(player.fullscreen());

        player.sync_fullscreen(false);
        assert!(!player.fullscreen());
    }

    #[test]
    fn attach_pushes_the_preferred_volume() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut player = PlayerState::new(0.3, HIDE);
        player.attach(Box::new(FakeSurface(Rc::clone(&log))), 42.0);

        assert!(player.is_bound());
        assert_eq!(player.duration_secs(), 42.0);
        assert_eq!(*log.borrow(), vec![Command::Volume(0.3)]);
    }
}
