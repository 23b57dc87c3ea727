// SPDX-License-Identifier: MPL-2.0
//! Profile view: banner, channel header, stat row and the three tabs
//! (videos, liked, about).

use crate::catalog::{filter, Catalog};
use crate::social;
use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::{feed, video_card};
use iced::widget::{button, container, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// How many of the channel's videos the first tab shows.
const VIDEOS_TAB_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Videos,
    Liked,
    About,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Videos, Tab::Liked, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Videos => "Videos",
            Tab::Liked => "Liked",
            Tab::About => "About",
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    tab: Tab,
    following: bool,
    cards: Vec<video_card::State>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ToggleFollow,
    Card(usize, video_card::Message),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenVideo(String),
}

impl State {
    pub fn new(catalog: &dyn Catalog) -> Self {
        let mut state = Self {
            tab: Tab::default(),
            following: catalog.profile().is_following,
            cards: Vec::new(),
        };
        state.rebuild(catalog);
        state
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn following(&self) -> bool {
        self.following
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn rebuild(&mut self, catalog: &dyn Catalog) {
        let visible: Vec<_> = match self.tab {
            Tab::Videos => catalog.list().iter().take(VIDEOS_TAB_COUNT).collect(),
            Tab::Liked => filter::liked(catalog.list()),
            Tab::About => Vec::new(),
        };
        self.cards = visible
            .into_iter()
            .map(video_card::State::from_record)
            .collect();
    }

    pub fn update(&mut self, catalog: &dyn Catalog, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                self.rebuild(catalog);
                Event::None
            }
            Message::ToggleFollow => {
                self.following = !self.following;
                Event::None
            }
            Message::Card(index, card_message) => {
                let Some(card) = self.cards.get_mut(index) else {
                    return Event::None;
                };
                match video_card::update(card, card_message) {
                    video_card::Event::Open(id) => Event::OpenVideo(id),
                    video_card::Event::None => Event::None,
                }
            }
        }
    }

    pub fn view<'a>(&'a self, catalog: &'a dyn Catalog) -> Element<'a, Message> {
        let profile = catalog.profile();

        let banner = Container::new(Space::new().height(Length::Fixed(sizing::BANNER_HEIGHT)))
            .width(Length::Fill)
            .style(styles::rainbow_banner);

        let follow_label = if self.following {
            "Following"
        } else {
            "Follow"
        };
        let follow_icon = if self.following {
            icons::check()
        } else {
            icons::user_plus()
        };
        let follow_button = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(follow_icon, sizing::ICON_SM))
                .push(Text::new(follow_label).size(typography::BODY)),
        )
        .on_press(Message::ToggleFollow)
        .padding([spacing::XS, spacing::MD])
        .style(if self.following {
            styles::button_muted
        } else {
            styles::button_rainbow
        });

        let message_button = button(icons::sized(icons::message_circle(), sizing::ICON_SM))
            .padding(spacing::XS)
            .style(styles::button_outline);

        let stats = Row::new()
            .spacing(spacing::XL)
            .push(components::stat::<Message>(
                profile.videos.to_string(),
                "Videos",
            ))
            .push(components::stat::<Message>(
                social::format_grouped(profile.followers),
                "Followers",
            ))
            .push(components::stat::<Message>(
                social::format_grouped(profile.following),
                "Following",
            ));

        let header = Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .push(components::avatar::<Message>(
                &profile.name,
                sizing::AVATAR_LG,
            ))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(&profile.name).size(typography::TITLE_LG))
                    .push(
                        Text::new(format!("@{}", profile.username))
                            .size(typography::BODY)
                            .color(palette::GRAY_400),
                    )
                    .push(Text::new(&profile.bio).size(typography::BODY))
                    .push(stats)
                    .width(Length::Fill),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(follow_button)
                    .push(message_button),
            );

        let mut tab_row = Row::new().spacing(spacing::XS);
        for tab in Tab::ALL {
            tab_row = tab_row.push(
                button(Text::new(tab.label()).size(typography::BODY))
                    .on_press(Message::TabSelected(tab))
                    .padding([spacing::XS, spacing::MD])
                    .style(if self.tab == tab {
                        styles::button_rainbow
                    } else {
                        styles::button_ghost
                    }),
            );
        }

        let tab_body: Element<'a, Message> = match self.tab {
            Tab::Videos | Tab::Liked => {
                feed::grid(catalog, &self.cards).map(|message| match message {
                    feed::Message::Card(index, card_message) => Message::Card(index, card_message),
                    // The grid never emits tag presses; keep the mapping total.
                    feed::Message::TagPressed(_) => Message::TabSelected(Tab::Videos),
                })
            }
            Tab::About => container(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new("About the channel").size(typography::TITLE_SM))
                    .push(Text::new(&profile.about).size(typography::BODY)),
            )
            .padding(spacing::LG)
            .max_width(560.0)
            .style(styles::card)
            .into(),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .push(banner)
            .push(
                Column::new()
                    .spacing(spacing::LG)
                    .padding(spacing::LG)
                    .push(header)
                    .push(tab_row)
                    .push(tab_body),
            );

        scrollable(content).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    #[test]
    fn videos_tab_shows_the_first_four_records() {
        let catalog = MockCatalog::new();
        let state = State::new(&catalog);
        assert_eq!(state.tab(), Tab::Videos);
        assert_eq!(state.card_count(), 4);
    }

    #[test]
    fn liked_tab_shows_the_liked_subset() {
        let catalog = MockCatalog::new();
        let mut state = State::new(&catalog);

        state.update(&catalog, Message::TabSelected(Tab::Liked));
        assert_eq!(state.card_count(), 2);
    }

    #[test]
    fn about_tab_has_no_cards() {
        let catalog = MockCatalog::new();
        let mut state = State::new(&catalog);

        state.update(&catalog, Message::TabSelected(Tab::About));
        assert_eq!(state.card_count(), 0);
    }

    #[test]
    fn follow_toggles_both_ways() {
        let catalog = MockCatalog::new();
        let mut state = State::new(&catalog);
        assert!(!state.following());

        state.update(&catalog, Message::ToggleFollow);
        assert!(state.following());
        state.update(&catalog, Message::ToggleFollow);
        assert!(!state.following());
    }

    #[test]
    fn switching_tabs_reseeds_card_state() {
        // Navigation away drops per-card toggles.
        let catalog = MockCatalog::new();
        let mut state = State::new(&catalog);

        state.update(&catalog, Message::Card(0, video_card::Message::ToggleLike));
        state.update(&catalog, Message::TabSelected(Tab::Liked));
        state.update(&catalog, Message::TabSelected(Tab::Videos));

        assert_eq!(
            state.cards[0].interactions.likes(),
            catalog.list()[0].likes
        );
    }
}
