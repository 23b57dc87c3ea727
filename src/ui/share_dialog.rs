// SPDX-License-Identifier: MPL-2.0
//! Share dialog: copy the watch link or hand it to one of the five
//! external platforms.
//!
//! The "copied" indicator is transient: copying records an instant and the
//! periodic tick clears it two seconds later. Copying again replaces the
//! instant, so a pending reset never stacks with a new one.

use crate::share::{self, Platform};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{alignment, Color, Element, Length};
use std::time::{Duration, Instant};

/// How long the copy button shows the check mark.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct State {
    url: String,
    title: String,
    copied_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The copy button was pressed at the given instant.
    CopyLink(Instant),
    ShareTo(Platform),
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    /// The parent must write this text to the system clipboard.
    Copy(String),
    /// Launching the browser for this platform failed.
    ShareFailed(Platform),
}

impl State {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            copied_at: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the check mark is currently showing.
    pub fn copied(&self) -> bool {
        self.copied_at.is_some()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CopyLink(now) => {
                self.copied_at = Some(now);
                Event::Copy(self.url.clone())
            }
            Message::ShareTo(platform) => match share::open(platform, &self.url, &self.title) {
                Ok(()) => {
                    tracing::debug!(platform = platform.label(), "opened share target");
                    Event::None
                }
                Err(_) => Event::ShareFailed(platform),
            },
            Message::Close => Event::Close,
        }
    }

    /// Clears the copied indicator once its window has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now.saturating_duration_since(copied_at) >= COPIED_RESET {
                self.copied_at = None;
            }
        }
    }

    /// Whether the periodic tick still has work to do here.
    pub fn needs_tick(&self) -> bool {
        self.copied_at.is_some()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("Share video").size(typography::TITLE_MD))
            .push(
                Text::new("Choose how to share this video with friends")
                    .size(typography::BODY)
                    .color(crate::ui::design_tokens::palette::GRAY_400),
            );

        let copy_icon = if self.copied() {
            icons::check()
        } else {
            icons::copy()
        };
        let copy_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text_input("", &self.url)
                    .padding(spacing::XS)
                    .width(Length::Fill),
            )
            .push(
                button(icons::sized(copy_icon, sizing::ICON_SM))
                    .on_press_with(|| Message::CopyLink(Instant::now()))
                    .padding(spacing::XS)
                    .style(styles::button_outline),
            );

        let mut platform_rows = Column::new().spacing(spacing::XS);
        for pair in Platform::ALL.chunks(2) {
            let mut row = Row::new().spacing(spacing::XS);
            for platform in pair {
                row = row.push(
                    button(
                        Row::new()
                            .spacing(spacing::XS)
                            .align_y(alignment::Vertical::Center)
                            .push(icons::sized(platform_icon(*platform), sizing::ICON_SM))
                            .push(Text::new(platform.label()).size(typography::BODY)),
                    )
                    .on_press(Message::ShareTo(*platform))
                    .padding([spacing::XS, spacing::MD])
                    .width(Length::Fill)
                    .style(styles::button_social(platform_color(*platform))),
                );
            }
            platform_rows = platform_rows.push(row);
        }

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(copy_row)
            .push(platform_rows)
            .push(
                button(Text::new("Close").size(typography::BODY))
                    .on_press(Message::Close)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button_ghost),
            );

        container(content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::dialog)
            .into()
    }
}

fn platform_icon(platform: Platform) -> iced::widget::svg::Svg<'static> {
    match platform {
        Platform::Vk => icons::share(),
        Platform::Telegram => icons::send(),
        Platform::WhatsApp => icons::message_circle(),
        Platform::Twitter => icons::share(),
        Platform::Facebook => icons::share(),
    }
}

fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::Vk => Color::from_rgb(0.15, 0.39, 0.92),
        Platform::Telegram => Color::from_rgb(0.05, 0.65, 0.91),
        Platform::WhatsApp => Color::from_rgb(0.09, 0.64, 0.29),
        Platform::Twitter => Color::from_rgb(0.38, 0.65, 0.98),
        Platform::Facebook => Color::from_rgb(0.11, 0.31, 0.85),
    }
}
