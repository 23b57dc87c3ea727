// SPDX-License-Identifier: MPL-2.0
//! Feed card for a single video.
//!
//! Each card owns its interaction state, seeded from the record when the
//! surrounding view mounts. Pressing the thumbnail opens the video screen;
//! the like/save toggles stay local to the card.

use crate::catalog::VideoRecord;
use crate::social::{self, InteractionState};
use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Per-card state.
#[derive(Debug, Clone)]
pub struct State {
    pub video_id: String,
    pub interactions: InteractionState,
}

impl State {
    pub fn from_record(record: &VideoRecord) -> Self {
        Self {
            video_id: record.id.clone(),
            interactions: InteractionState::from_record(record),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleLike,
    ToggleSave,
    Open,
}

/// Events the parent view must react to.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Open(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleLike => {
            state.interactions.toggle_like();
            Event::None
        }
        Message::ToggleSave => {
            state.interactions.toggle_save();
            Event::None
        }
        Message::Open => Event::Open(state.video_id.clone()),
    }
}

pub fn view<'a>(record: &'a VideoRecord, state: &State) -> Element<'a, Message> {
    let like_button = button(icons::sized(icons::heart(), sizing::ICON_SM))
        .on_press(Message::ToggleLike)
        .padding(spacing::XS)
        .style(styles::button_card_toggle(
            palette::LIKE_PINK,
            state.interactions.liked(),
        ));

    let save_button = button(icons::sized(icons::bookmark(), sizing::ICON_SM))
        .on_press(Message::ToggleSave)
        .padding(spacing::XS)
        .style(styles::button_card_toggle(
            palette::SAVE_PURPLE,
            state.interactions.saved(),
        ));

    let toggles = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(like_button)
        .push(save_button)
        .spacing(spacing::XS)
        .padding(spacing::SM);

    let author_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(components::avatar::<Message>(&record.author, sizing::AVATAR_SM))
        .push(
            Text::new(&record.author)
                .size(typography::BODY)
                .color(palette::WHITE),
        );

    let counts = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::eye(), sizing::ICON_SM),
            palette::WHITE,
        ))
        .push(
            Text::new(social::format_grouped(record.views))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .push(icons::tinted(
            icons::sized(icons::heart(), sizing::ICON_SM),
            palette::WHITE,
        ))
        .push(
            Text::new(social::format_grouped(state.interactions.likes()))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        );

    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in record.tags.iter().take(3) {
        tags = tags.push(
            Container::new(
                Text::new(format!("#{tag}"))
                    .size(typography::CAPTION)
                    .color(palette::WHITE),
            )
            .padding([2.0, spacing::XS])
            .style(styles::controls_scrim),
        );
    }

    let info = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(author_row)
        .push(
            Text::new(&record.title)
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(counts)
        .push(tags);

    let thumbnail = Container::new(
        Column::new()
            .push(toggles)
            .push(Space::new().height(Length::Fill))
            .push(info),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .height(Length::Fixed(sizing::CARD_THUMB_HEIGHT))
    .style(styles::thumbnail(&record.id));

    mouse_area(container(thumbnail).style(styles::card))
        .on_press(Message::Open)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, MockCatalog};

    fn card_for(id: &str) -> State {
        let catalog = MockCatalog::new();
        State::from_record(catalog.get(id).expect("record exists"))
    }

    #[test]
    fn state_is_seeded_from_the_record() {
        let state = card_for("5");
        assert!(state.interactions.liked());
        assert!(state.interactions.saved());
        assert_eq!(state.interactions.likes(), 8_400);
    }

    #[test]
    fn double_toggle_returns_to_the_seeded_counts() {
        let mut state = card_for("1");
        let before = state.interactions;

        update(&mut state, Message::ToggleLike);
        update(&mut state, Message::ToggleLike);
        update(&mut state, Message::ToggleSave);
        update(&mut state, Message::ToggleSave);

        assert_eq!(state.interactions, before);
    }

    #[test]
    fn open_event_carries_the_video_id() {
        let mut state = card_for("3");
        let event = update(&mut state, Message::Open);
        assert!(matches!(event, Event::Open(id) if id == "3"));
    }
}
