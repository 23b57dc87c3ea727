// SPDX-License-Identifier: MPL-2.0
//! The video screen: player, social actions, description, side panels and
//! the share/donate dialogs.
//!
//! All of the screen's state is created on mount from the catalog record
//! and dropped on navigation away. The dialogs are modeled as `Option`s:
//! opening builds a fresh default state, closing drops it, which is what
//! resets their transient fields.

mod controls;

use crate::catalog::VideoRecord;
use crate::config::Config;
use crate::player::{self, PlayerState, SimulatedSurface};
use crate::share;
use crate::social::{self, InteractionState};
use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::{donate_dialog, share_dialog};
use iced::widget::{button, container, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Task};
use std::time::Instant;

/// Collapsed descriptions cut off after this many characters.
const DESCRIPTION_PREVIEW_CHARS: usize = 180;

pub struct State {
    record: VideoRecord,
    player: PlayerState,
    interactions: InteractionState,
    share: Option<share_dialog::State>,
    donate: Option<donate_dialog::State>,
    description_expanded: bool,
    autoplay: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    /// The media surface finished loading metadata.
    MediaReady { duration_secs: f64 },
    ToggleLike,
    ToggleSubscribe,
    OpenShare,
    Share(share_dialog::Message),
    OpenDonate,
    Donate(donate_dialog::Message),
    ToggleDescription,
}

/// Events the root application must carry out.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The window should enter or leave fullscreen.
    SetFullscreen(bool),
    /// Write this text to the system clipboard and confirm with a toast.
    Copy(String),
    /// Show a toast.
    Notify(Notification),
}

impl State {
    /// Builds the screen and the task that reports the media surface ready.
    ///
    /// The mock catalog resolves instantly, but the screen still goes
    /// through the async ready notification so the unbound-player guards
    /// stay honest.
    pub fn new(record: VideoRecord, config: &Config) -> (Self, Task<Message>) {
        let duration_secs = record.duration_secs;
        let state = Self {
            player: PlayerState::new(config.volume(), config.overlay_timeout()),
            interactions: InteractionState::from_record(&record),
            share: None,
            donate: None,
            description_expanded: false,
            autoplay: config.autoplay(),
            record,
        };

        let ready = Task::perform(async move { duration_secs }, |duration_secs| {
            Message::MediaReady { duration_secs }
        });

        (state, ready)
    }

    pub fn record(&self) -> &VideoRecord {
        &self.record
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn interactions(&self) -> &InteractionState {
        &self.interactions
    }

    pub fn share_dialog(&self) -> Option<&share_dialog::State> {
        self.share.as_ref()
    }

    pub fn donate_dialog(&self) -> Option<&donate_dialog::State> {
        self.donate.as_ref()
    }

    pub fn description_expanded(&self) -> bool {
        self.description_expanded
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Player(player_message) => match self.player.handle(player_message) {
                player::Effect::SetFullscreen(fullscreen) => Event::SetFullscreen(fullscreen),
                player::Effect::None => Event::None,
            },
            Message::MediaReady { duration_secs } => {
                self.player.attach(
                    Box::new(SimulatedSurface::new(self.record.media_url.clone())),
                    duration_secs,
                );
                if self.autoplay {
                    self.player.handle(player::Message::TogglePlay);
                }
                Event::None
            }
            Message::ToggleLike => {
                self.interactions.toggle_like();
                Event::None
            }
            Message::ToggleSubscribe => {
                self.interactions.toggle_subscribe();
                Event::None
            }
            Message::OpenShare => {
                self.share = Some(share_dialog::State::new(
                    share::watch_url(&self.record.id),
                    self.record.title.clone(),
                ));
                Event::None
            }
            Message::Share(dialog_message) => {
                let Some(dialog) = &mut self.share else {
                    return Event::None;
                };
                match dialog.update(dialog_message) {
                    share_dialog::Event::None => Event::None,
                    share_dialog::Event::Close => {
                        self.share = None;
                        Event::None
                    }
                    share_dialog::Event::Copy(url) => Event::Copy(url),
                    share_dialog::Event::ShareFailed(platform) => Event::Notify(
                        Notification::warning("Couldn't open the browser")
                            .with_body(format!("Sharing to {} failed", platform.label())),
                    ),
                }
            }
            Message::OpenDonate => {
                self.donate = Some(donate_dialog::State::new());
                Event::None
            }
            Message::Donate(dialog_message) => {
                let Some(dialog) = &mut self.donate else {
                    return Event::None;
                };
                match dialog.update(dialog_message) {
                    donate_dialog::Event::None => Event::None,
                    donate_dialog::Event::Close => {
                        self.donate = None;
                        Event::None
                    }
                    donate_dialog::Event::Donated { amount } => {
                        self.donate = None;
                        Event::Notify(
                            Notification::success("Thank you for your support! 💙").with_body(
                                format!("You sent ${amount} to {}", self.record.author),
                            ),
                        )
                    }
                }
            }
            Message::ToggleDescription => {
                self.description_expanded = !self.description_expanded;
                Event::None
            }
        }
    }

    /// Forwards the periodic tick to the timer-backed pieces.
    pub fn tick(&mut self, now: Instant) {
        self.player.tick(now);
        if let Some(dialog) = &mut self.share {
            dialog.tick(now);
        }
    }

    /// Whether the periodic tick subscription must stay alive.
    pub fn needs_tick(&self) -> bool {
        self.player.is_playing() || self.share.as_ref().is_some_and(share_dialog::State::needs_tick)
    }

    pub fn sync_fullscreen(&mut self, actual: bool) {
        self.player.sync_fullscreen(actual);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = Row::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(
                Column::new()
                    .spacing(spacing::MD)
                    .width(Length::FillPortion(2))
                    .push(self.player_view())
                    .push(self.details_view()),
            )
            .push(
                Column::new()
                    .spacing(spacing::MD)
                    .width(Length::Fixed(sizing::SIDE_PANEL_WIDTH))
                    .push(self.earnings_panel())
                    .push(self.stats_panel()),
            );

        let base = iced::widget::scrollable(page);

        if let Some(dialog) = &self.share {
            modal(
                base.into(),
                dialog.view().map(Message::Share),
                Message::Share(share_dialog::Message::Close),
            )
        } else if let Some(dialog) = &self.donate {
            modal(
                base.into(),
                dialog.view(&self.record.author).map(Message::Donate),
                Message::Donate(donate_dialog::Message::Close),
            )
        } else {
            base.into()
        }
    }

    /// The player alone, filling the window; used while fullscreen.
    pub fn view_fullscreen(&self) -> Element<'_, Message> {
        self.player_frame(Length::Fill)
    }

    fn player_view(&self) -> Element<'_, Message> {
        self.player_frame(Length::Fixed(sizing::PLAYER_HEIGHT))
    }

    fn player_frame(&self, height: Length) -> Element<'_, Message> {
        let backdrop = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(height)
            .style(styles::thumbnail(&self.record.id));

        let mut layers = Stack::new().push(backdrop);

        if !self.player.is_playing() {
            let big_play = button(icons::tinted(
                icons::sized(icons::play(), sizing::ICON_LG),
                palette::WHITE,
            ))
            .on_press(Message::Player(player::Message::TogglePlay))
            .padding(spacing::MD)
            .style(styles::button_rainbow);

            layers = layers.push(
                Container::new(big_play)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            );
        }

        if self.player.controls_visible() {
            layers = layers.push(
                Column::new()
                    .push(Space::new().height(Length::Fill))
                    .push(controls::view(&self.player).map(Message::Player)),
            );
        }

        let frame = Container::new(layers)
            .width(Length::Fill)
            .height(height)
            .style(styles::player_backdrop);

        mouse_area(frame)
            .on_move(|_point| Message::Player(player::Message::PointerMoved(Instant::now())))
            .on_press(Message::Player(player::Message::TogglePlay))
            .into()
    }

    fn details_view(&self) -> Element<'_, Message> {
        let mut tags = Row::new().spacing(spacing::XXS);
        for tag in &self.record.tags {
            tags = tags.push(
                Container::new(Text::new(format!("#{tag}")).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::panel),
            );
        }

        let subscribe_button = button(
            Text::new(if self.interactions.subscribed() {
                "Subscribed"
            } else {
                "Subscribe"
            })
            .size(typography::BODY),
        )
        .on_press(Message::ToggleSubscribe)
        .padding([spacing::XS, spacing::MD])
        .style(if self.interactions.subscribed() {
            styles::button_muted
        } else {
            styles::button_rainbow
        });

        let author_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(components::avatar::<Message>(
                &self.record.author,
                sizing::AVATAR_MD,
            ))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(&self.record.author).size(typography::TITLE_SM))
                    .push(
                        Text::new(format!(
                            "{} subscribers",
                            social::format_count(self.record.subscribers)
                        ))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                    ),
            )
            .push(subscribe_button)
            .push(Space::new().width(Length::Fill))
            .push(self.action_row());

        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(&self.record.title).size(typography::TITLE_LG))
            .push(tags)
            .push(author_row)
            .push(self.description_panel())
            .into()
    }

    fn action_row(&self) -> Element<'_, Message> {
        let like_button = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::heart(), sizing::ICON_SM))
                .push(
                    Text::new(social::format_count(self.interactions.likes()))
                        .size(typography::BODY),
                ),
        )
        .on_press(Message::ToggleLike)
        .padding([spacing::XS, spacing::MD])
        .style(if self.interactions.liked() {
            styles::button_rainbow
        } else {
            styles::button_outline
        });

        let donate_button = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::dollar(), sizing::ICON_SM))
                .push(Text::new("Donate").size(typography::BODY)),
        )
        .on_press(Message::OpenDonate)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_outline);

        let share_button = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::share(), sizing::ICON_SM))
                .push(Text::new("Share").size(typography::BODY)),
        )
        .on_press(Message::OpenShare)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_outline);

        Row::new()
            .spacing(spacing::XS)
            .push(like_button)
            .push(donate_button)
            .push(share_button)
            .into()
    }

    fn description_panel(&self) -> Element<'_, Message> {
        let meta_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::tinted(
                        icons::sized(icons::eye(), sizing::ICON_SM),
                        palette::GRAY_400,
                    ))
                    .push(
                        Text::new(format!(
                            "{} views",
                            social::format_count(self.record.views)
                        ))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                    ),
            )
            .push(
                Text::new(self.record.upload_date_display())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        let description = if self.description_expanded {
            self.record.description.clone()
        } else {
            preview(&self.record.description)
        };

        let toggle = button(
            Text::new(if self.description_expanded {
                "Show less"
            } else {
                "Show more"
            })
            .size(typography::CAPTION)
            .color(palette::BRAND_PINK),
        )
        .on_press(Message::ToggleDescription)
        .padding(spacing::XXS)
        .style(styles::button_ghost);

        container(
            Column::new()
                .spacing(spacing::XS)
                .push(meta_row)
                .push(Text::new(description).size(typography::BODY))
                .push(toggle),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::panel)
        .into()
    }

    fn earnings_panel(&self) -> Element<'_, Message> {
        let split_row = |label: &'static str, value: f64| {
            Row::new()
                .push(Text::new(label).size(typography::CAPTION))
                .push(Space::new().width(Length::Fill))
                .push(Text::new(format!("${value:.2}")).size(typography::CAPTION))
        };

        let withdraw = button(Text::new("Withdraw funds").size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(styles::button_muted);

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(alignment::Vertical::Center)
                        .push(icons::tinted(
                            icons::sized(icons::dollar(), sizing::ICON_MD),
                            palette::WHITE,
                        ))
                        .push(Text::new("Your earnings").size(typography::TITLE_SM)),
                )
                .push(Text::new(format!("${:.2}", self.record.earnings)).size(typography::DISPLAY))
                .push(split_row("From views:", self.record.view_revenue()))
                .push(split_row("Donations:", self.record.donation_revenue()))
                .push(withdraw),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::rainbow_banner)
        .into()
    }

    fn stats_panel(&self) -> Element<'_, Message> {
        let stat_row = |label: &'static str, value: String| {
            Row::new()
                .push(
                    Text::new(label)
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                )
                .push(Space::new().width(Length::Fill))
                .push(Text::new(value).size(typography::BODY))
        };

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(alignment::Vertical::Center)
                        .push(icons::sized(icons::trending_up(), sizing::ICON_MD))
                        .push(Text::new("Video statistics").size(typography::TITLE_SM)),
                )
                .push(stat_row("Views", social::format_count(self.record.views)))
                .push(stat_row(
                    "Likes",
                    social::format_count(self.interactions.likes()),
                ))
                .push(stat_row(
                    "Rating",
                    format!(
                        "{:.1}%",
                        self.record.rating_percent(self.interactions.likes())
                    ),
                )),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::card)
        .into()
    }
}

/// Cuts a collapsed description down to its preview length.
fn preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        description.to_string()
    } else {
        let cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{cut}…")
    }
}

/// Stacks a dialog over the page with a dimmed backdrop; pressing the
/// backdrop closes the dialog.
fn modal<'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::modal_backdrop),
    )
    .on_press(on_dismiss);

    let centered_dialog = Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(base)
        .push(backdrop)
        .push(centered_dialog)
        .into()
}
