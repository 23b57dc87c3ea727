// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the catalog, the top-level screens and
//! the ambient services (toasts, clipboard, window mode). It keeps policy
//! decisions (routing, fullscreen ownership, which timers run) close to
//! the main update loop so user-facing behavior is easy to audit.

use crate::catalog::{Catalog, MockCatalog};
use crate::config::{self, Config};
use crate::ui::navbar::{self, View};
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{feed, messages_view, profile, video_screen};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{
    alignment, event, keyboard, time, window, Element, Event as RuntimeEvent, Length,
    Subscription, Task, Theme,
};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Cadence of the shared tick subscription while any timer is live.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Root application state.
pub struct App {
    catalog: MockCatalog,
    screen: Screen,
    navbar: navbar::State,
    notifications: notifications::Manager,
    config: Config,
    fullscreen: bool,
    window_id: Option<window::Id>,
}

/// Top-level screens. The home views and the video screen are mutually
/// exclusive; navigating rebuilds the target's state from the catalog.
enum Screen {
    Home(HomeView),
    Video(video_screen::State),
    /// Terminal state for an identifier the catalog doesn't know.
    NotFound { id: String },
}

/// The four views reachable from the navigation bar.
enum HomeView {
    Feed(feed::State),
    Profile(profile::State),
    Saved(feed::State),
    Messages,
}

impl HomeView {
    fn kind(&self) -> View {
        match self {
            HomeView::Feed(_) => View::Feed,
            HomeView::Profile(_) => View::Profile,
            HomeView::Saved(_) => View::Saved,
            HomeView::Messages => View::Messages,
        }
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Feed(feed::Message),
    Profile(profile::Message),
    Video(video_screen::Message),
    Notification(notifications::Message),
    /// Shared periodic tick driving every live timer.
    Tick(Instant),
    WindowOpened(window::Id),
    EscapePressed,
    /// Result of polling the actual window mode while fullscreen.
    FullscreenMode(window::Mode),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional video identifier to open directly on the playback screen.
    pub video: Option<String>,
    /// Optional theme override taking precedence over the settings file.
    pub theme: Option<ThemeMode>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_default();
        if let Some(theme) = flags.theme {
            config.theme_mode = theme;
        }

        let catalog = MockCatalog::new();
        let mut app = App {
            screen: Screen::Home(HomeView::Feed(feed::State::feed(&catalog))),
            catalog,
            navbar: navbar::State::default(),
            notifications: notifications::Manager::new(),
            config,
            fullscreen: false,
            window_id: None,
        };

        let task = match flags.video {
            Some(id) => app.open_video(&id),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Home(view) => match view.kind() {
                View::Feed => "Rainbow".to_string(),
                View::Profile => "Rainbow — Profile".to_string(),
                View::Saved => "Rainbow — Saved".to_string(),
                View::Messages => "Rainbow — Messages".to_string(),
            },
            Screen::Video(state) => format!("Rainbow — {}", state.record().title),
            Screen::NotFound { .. } => "Rainbow — Not found".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.config.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                match navbar::update(&mut self.navbar, navbar_message) {
                    navbar::Event::None => Task::none(),
                    navbar::Event::Navigate(view) => self.navigate(view),
                    navbar::Event::Search(query) => {
                        // No search index exists over the mock data; record
                        // the query the way the original client logs it.
                        tracing::info!(query = %query, "search submitted");
                        Task::none()
                    }
                }
            }
            Message::Feed(feed_message) => {
                let event = match &mut self.screen {
                    Screen::Home(HomeView::Feed(state) | HomeView::Saved(state)) => {
                        state.update(&self.catalog, feed_message)
                    }
                    _ => feed::Event::None,
                };
                match event {
                    feed::Event::OpenVideo(id) => self.open_video(&id),
                    feed::Event::None => Task::none(),
                }
            }
            Message::Profile(profile_message) => {
                let event = match &mut self.screen {
                    Screen::Home(HomeView::Profile(state)) => {
                        state.update(&self.catalog, profile_message)
                    }
                    _ => profile::Event::None,
                };
                match event {
                    profile::Event::OpenVideo(id) => self.open_video(&id),
                    profile::Event::None => Task::none(),
                }
            }
            Message::Video(video_message) => {
                let event = match &mut self.screen {
                    Screen::Video(state) => state.update(video_message),
                    _ => video_screen::Event::None,
                };
                match event {
                    video_screen::Event::None => Task::none(),
                    video_screen::Event::SetFullscreen(desired) => self.set_fullscreen(desired),
                    video_screen::Event::Copy(url) => {
                        self.notifications.push(
                            Notification::success("Link copied")
                                .with_body("Now you can share it anywhere"),
                        );
                        iced::clipboard::write(url)
                    }
                    video_screen::Event::Notify(notification) => {
                        self.notifications.push(notification);
                        Task::none()
                    }
                }
            }
            Message::Notification(notification_message) => {
                self.notifications.handle(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                if let Screen::Video(state) = &mut self.screen {
                    state.tick(now);
                }

                // While fullscreen, verify the flag against the platform:
                // an OS-level exit must resynchronize the state.
                if self.fullscreen {
                    if let Some(window_id) = self.window_id {
                        return window::mode(window_id).map(Message::FullscreenMode);
                    }
                }
                Task::none()
            }
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::none()
            }
            Message::EscapePressed => {
                if self.fullscreen {
                    self.set_fullscreen(false)
                } else {
                    Task::none()
                }
            }
            Message::FullscreenMode(mode) => {
                if self.fullscreen && mode == window::Mode::Windowed {
                    tracing::debug!("fullscreen exited outside the app; resyncing");
                    self.set_fullscreen(false)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Switches to one of the four home views, rebuilding its state from
    /// the catalog. Per-view state never survives navigation.
    fn navigate(&mut self, view: View) -> Task<Message> {
        tracing::debug!(?view, "navigate");
        self.screen = Screen::Home(match view {
            View::Feed => HomeView::Feed(feed::State::feed(&self.catalog)),
            View::Profile => HomeView::Profile(profile::State::new(&self.catalog)),
            View::Saved => HomeView::Saved(feed::State::saved(&self.catalog)),
            View::Messages => HomeView::Messages,
        });
        Task::none()
    }

    /// Resolves a video identifier and opens its screen; unknown
    /// identifiers land on the terminal not-found screen.
    fn open_video(&mut self, id: &str) -> Task<Message> {
        match self.catalog.get(id) {
            Some(record) => {
                let (state, task) = video_screen::State::new(record.clone(), &self.config);
                self.screen = Screen::Video(state);
                task.map(Message::Video)
            }
            None => {
                tracing::info!(id, "video not found");
                self.screen = Screen::NotFound { id: id.to_string() };
                Task::none()
            }
        }
    }

    fn set_fullscreen(&mut self, desired: bool) -> Task<Message> {
        if let Screen::Video(state) = &mut self.screen {
            state.sync_fullscreen(desired);
        }

        if self.fullscreen == desired {
            return Task::none();
        }
        self.fullscreen = desired;

        let Some(window_id) = self.window_id else {
            // No window yet; the flag is synced and the mode poll will
            // catch up once one opens.
            return Task::none();
        };

        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode::<Message>(window_id, mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, window| match event {
            RuntimeEvent::Window(window::Event::Opened { .. }) => {
                Some(Message::WindowOpened(window))
            }
            RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        });

        let needs_tick = self.notifications.has_notifications()
            || self.fullscreen
            || matches!(&self.screen, Screen::Video(state) if state.needs_tick());
        let tick = if needs_tick {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, tick])
    }

    fn view(&self) -> Element<'_, Message> {
        // Fullscreen playback shows nothing but the player.
        if self.fullscreen {
            if let Screen::Video(state) = &self.screen {
                let player = state.view_fullscreen().map(Message::Video);
                let toasts = Toast::view_overlay(&self.notifications).map(Message::Notification);
                return Stack::new().push(player).push(toasts).into();
            }
        }

        let current_view = match &self.screen {
            Screen::Home(view) => Some(view.kind()),
            _ => None,
        };
        let bar = navbar::view(&self.navbar, current_view).map(Message::Navbar);

        let content: Element<'_, Message> = match &self.screen {
            Screen::Home(HomeView::Feed(state) | HomeView::Saved(state)) => {
                state.view(&self.catalog).map(Message::Feed)
            }
            Screen::Home(HomeView::Profile(state)) => {
                state.view(&self.catalog).map(Message::Profile)
            }
            Screen::Home(HomeView::Messages) => messages_view::view(),
            Screen::Video(state) => state.view().map(Message::Video),
            Screen::NotFound { .. } => not_found_view(),
        };

        let page = Column::new()
            .push(bar)
            .push(Container::new(content).width(Length::Fill).height(Length::Fill));

        let toasts = Toast::view_overlay(&self.notifications).map(Message::Notification);
        Stack::new().push(page).push(toasts).into()
    }
}

/// Terminal screen for an unknown video identifier.
fn not_found_view<'a>() -> Element<'a, Message> {
    use crate::ui::design_tokens::{palette, spacing, typography};

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Video not found").size(typography::TITLE_LG))
        .push(
            Text::new("It may have been removed, or the link is wrong")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            button(Text::new("Back to the feed").size(typography::BODY))
                .on_press(Message::Navbar(navbar::Message::Navigate(View::Feed)))
                .padding([spacing::XS, spacing::MD])
                .style(crate::ui::styles::button_rainbow),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::video_card;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn starts_on_the_feed() {
        let app = app();
        assert!(matches!(&app.screen, Screen::Home(HomeView::Feed(_))));
        assert_eq!(app.title(), "Rainbow");
    }

    #[test]
    fn navigation_switches_between_the_four_views() {
        let mut app = app();

        for (view, expected) in [
            (View::Profile, "Rainbow — Profile"),
            (View::Saved, "Rainbow — Saved"),
            (View::Messages, "Rainbow — Messages"),
            (View::Feed, "Rainbow"),
        ] {
            let _ = app.update(Message::Navbar(navbar::Message::Navigate(view)));
            assert_eq!(app.title(), expected);
        }
    }

    #[test]
    fn opening_a_card_routes_to_the_video_screen() {
        let mut app = app();
        let _ = app.update(Message::Feed(feed::Message::Card(0, video_card::Message::Open)));

        match &app.screen {
            Screen::Video(state) => assert_eq!(state.record().id, "1"),
            _ => panic!("expected the video screen"),
        }
    }

    #[test]
    fn unknown_identifier_lands_on_not_found_without_panicking() {
        let (mut app, _task) = App::new(Flags {
            video: Some("missing".to_string()),
            theme: None,
        });

        assert!(matches!(&app.screen, Screen::NotFound { id } if id == "missing"));

        // Navigating away recovers normally.
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(View::Feed)));
        assert!(matches!(&app.screen, Screen::Home(HomeView::Feed(_))));
    }

    #[test]
    fn startup_flag_opens_the_video_screen() {
        let (app, _task) = App::new(Flags {
            video: Some("2".to_string()),
            theme: None,
        });
        assert!(matches!(&app.screen, Screen::Video(_)));
    }

    #[test]
    fn navigating_away_from_a_video_drops_its_state() {
        let mut app = app();
        let _ = app.update(Message::Feed(feed::Message::Card(0, video_card::Message::Open)));
        let _ = app.update(Message::Video(video_screen::Message::ToggleLike));

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(View::Feed)));
        let _ = app.update(Message::Feed(feed::Message::Card(0, video_card::Message::Open)));

        match &app.screen {
            Screen::Video(state) => {
                // Fresh mount, seeded back from the record.
                assert!(!state.interactions().liked());
                assert_eq!(state.interactions().likes(), 3_800);
            }
            _ => panic!("expected the video screen"),
        }
    }

    #[test]
    fn escape_without_fullscreen_is_a_no_op() {
        let mut app = app();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.fullscreen);
    }

    #[test]
    fn fullscreen_mode_report_resyncs_the_flag() {
        let mut app = app();
        app.fullscreen = true;

        let _ = app.update(Message::FullscreenMode(window::Mode::Windowed));
        assert!(!app.fullscreen);
    }

    #[test]
    fn theme_flag_overrides_the_settings_file() {
        let (app, _task) = App::new(Flags {
            video: None,
            theme: Some(ThemeMode::Light),
        });
        assert_eq!(app.config.theme_mode, ThemeMode::Light);
    }
}
