// SPDX-License-Identifier: MPL-2.0
//! Donate dialog: preset amounts, a free-form amount, an optional message.
//!
//! This is a stub boundary: confirming produces a toast and resets the
//! dialog; a real payment collaborator would attach where the confirm
//! event surfaces.

use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Amount the dialog opens with.
pub const DEFAULT_AMOUNT: u64 = 100;

/// Smallest value the input accepts.
pub const MIN_AMOUNT: u64 = 1;

/// Quick-select amounts, mirrored from the platform's web client.
pub const PRESET_AMOUNTS: [u64; 5] = [50, 100, 200, 500, 1000];

#[derive(Debug, Clone)]
pub struct State {
    amount: u64,
    message: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AmountChanged(String),
    PresetPressed(u64),
    MessageChanged(String),
    Confirm,
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    /// The viewer confirmed a donation of this amount.
    Donated { amount: u64 },
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AmountChanged(raw) => {
                // Unparseable edits are ignored; the input keeps its last
                // valid value, with the minimum enforced at 1.
                if let Ok(value) = raw.parse::<u64>() {
                    self.amount = value.max(MIN_AMOUNT);
                } else if raw.is_empty() {
                    self.amount = MIN_AMOUNT;
                }
                Event::None
            }
            Message::PresetPressed(value) => {
                self.amount = value;
                Event::None
            }
            Message::MessageChanged(text) => {
                self.message = text;
                Event::None
            }
            Message::Confirm => Event::Donated {
                amount: self.amount,
            },
            Message::Close => Event::Close,
        }
    }

    pub fn view<'a>(&'a self, creator_name: &'a str) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::tinted(
                        icons::sized(icons::heart(), sizing::ICON_MD),
                        palette::LIKE_PINK,
                    ))
                    .push(Text::new("Support the creator").size(typography::TITLE_MD)),
            )
            .push(
                Text::new("Send a donation to your favorite creator")
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        let creator_card = container(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(components::avatar::<Message>(
                    creator_name,
                    sizing::AVATAR_MD,
                ))
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(creator_name).size(typography::TITLE_SM))
                        .push(
                            Text::new("Content creator")
                                .size(typography::CAPTION)
                                .color(palette::GRAY_400),
                        ),
                ),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::panel);

        let mut presets = Row::new().spacing(spacing::XS);
        for preset in PRESET_AMOUNTS {
            presets = presets.push(
                button(Text::new(preset.to_string()).size(typography::BODY))
                    .on_press(Message::PresetPressed(preset))
                    .padding([spacing::XXS, spacing::SM])
                    .width(Length::Fill)
                    .style(if self.amount == preset {
                        styles::button_rainbow
                    } else {
                        styles::button_outline
                    }),
            );
        }

        let amount_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text_input("Amount", &self.amount.to_string())
                    .on_input(Message::AmountChanged)
                    .padding(spacing::XS)
                    .width(Length::Fill),
            )
            .push(Text::new("$").size(typography::TITLE_SM).color(palette::GRAY_400));

        let message_input = text_input("Write something nice to the creator...", &self.message)
            .on_input(Message::MessageChanged)
            .padding(spacing::XS)
            .width(Length::Fill);

        let info_box = container(
            Row::new()
                .spacing(spacing::XS)
                .push(icons::tinted(
                    icons::sized(icons::info(), sizing::ICON_SM),
                    palette::INFO_500,
                ))
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new("How do donations work?").size(typography::BODY))
                        .push(
                            Text::new(
                                "100% of the amount goes to the creator. The minimum \
                                 donation is $50. You can donate anonymously.",
                            )
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                        ),
                ),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::panel);

        let confirm = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::dollar(), sizing::ICON_SM))
                .push(Text::new(format!("Send ${}", self.amount)).size(typography::TITLE_SM)),
        )
        .on_press(Message::Confirm)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button_rainbow);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(creator_card)
            .push(Text::new("Donation amount").size(typography::BODY))
            .push(presets)
            .push(amount_row)
            .push(Text::new("Message (optional)").size(typography::BODY))
            .push(message_input)
            .push(info_box)
            .push(confirm)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_opens_with_the_default_amount() {
        let state = State::new();
        assert_eq!(state.amount(), DEFAULT_AMOUNT);
        assert!(state.message().is_empty());
    }

    #[test]
    fn presets_set_the_amount_directly() {
        let mut state = State::new();
        state.update(Message::PresetPressed(500));
        assert_eq!(state.amount(), 500);
    }

    #[test]
    fn typed_amounts_are_clamped_to_the_minimum() {
        let mut state = State::new();

        state.update(Message::AmountChanged("0".into()));
        assert_eq!(state.amount(), MIN_AMOUNT);

        state.update(Message::AmountChanged("250".into()));
        assert_eq!(state.amount(), 250);
    }

    #[test]
    fn junk_input_keeps_the_previous_amount() {
        let mut state = State::new();
        state.update(Message::AmountChanged("abc".into()));
        assert_eq!(state.amount(), DEFAULT_AMOUNT);
    }

    #[test]
    fn clearing_the_input_falls_to_the_minimum() {
        let mut state = State::new();
        state.update(Message::AmountChanged(String::new()));
        assert_eq!(state.amount(), MIN_AMOUNT);
    }

    #[test]
    fn confirm_reports_the_amount() {
        let mut state = State::new();
        state.update(Message::PresetPressed(200));
        state.update(Message::MessageChanged("great video!".into()));

        let event = state.update(Message::Confirm);
        assert!(matches!(event, Event::Donated { amount: 200 }));
    }

    #[test]
    fn a_fresh_dialog_is_reset() {
        // The parent drops the state on close; reopening builds a new one.
        let mut state = State::new();
        state.update(Message::PresetPressed(1000));
        state.update(Message::MessageChanged("hi".into()));

        let reopened = State::new();
        assert_eq!(reopened.amount(), DEFAULT_AMOUNT);
        assert!(reopened.message().is_empty());
    }
}
