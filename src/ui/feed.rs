// SPDX-License-Identifier: MPL-2.0
//! Feed and saved views: the tag strip, the card grid, and the explicit
//! empty state for an empty saved list.
//!
//! Card state is rebuilt whenever the visible subset changes (tag selected,
//! view switched), matching the mount semantics of the rest of the app:
//! nothing survives navigation.

use crate::catalog::{self, filter, Catalog};
use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::video_card;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Columns in the card grid.
const GRID_COLUMNS: usize = 4;

/// Which subset of the catalog this instance shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// The whole catalog, optionally narrowed by the selected tag.
    All,
    /// Only records the viewer has saved.
    Saved,
}

#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    selected_tag: Option<String>,
    cards: Vec<video_card::State>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TagPressed(String),
    Card(usize, video_card::Message),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenVideo(String),
}

impl State {
    /// Feed over the full catalog.
    pub fn feed(catalog: &dyn Catalog) -> Self {
        let mut state = Self {
            mode: Mode::All,
            selected_tag: None,
            cards: Vec::new(),
        };
        state.rebuild(catalog);
        state
    }

    /// Saved-only view.
    pub fn saved(catalog: &dyn Catalog) -> Self {
        let mut state = Self {
            mode: Mode::Saved,
            selected_tag: None,
            cards: Vec::new(),
        };
        state.rebuild(catalog);
        state
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[video_card::State] {
        &self.cards
    }

    /// Recreates card state for the currently visible subset.
    fn rebuild(&mut self, catalog: &dyn Catalog) {
        let visible = match self.mode {
            Mode::All => filter::by_tag(catalog.list(), self.selected_tag.as_deref()),
            Mode::Saved => filter::saved(catalog.list()),
        };
        self.cards = visible
            .into_iter()
            .map(video_card::State::from_record)
            .collect();
    }

    pub fn update(&mut self, catalog: &dyn Catalog, message: Message) -> Event {
        match message {
            Message::TagPressed(tag) => {
                self.selected_tag = filter::toggle_tag(self.selected_tag.as_deref(), &tag);
                self.rebuild(catalog);
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
        match self.mode {
            Mode::All => self.feed_view(catalog),
            Mode::Saved => self.saved_view(catalog),
        }
    }

    fn feed_view<'a>(&'a self, catalog: &'a dyn Catalog) -> Element<'a, Message> {
        let strip_title = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::trending_up(), sizing::ICON_MD),
                palette::BRAND_PINK,
            ))
            .push(Text::new("Popular tags").size(typography::TITLE_MD));

        let mut strip = Row::new().spacing(spacing::XS);
        for tag in catalog::POPULAR_TAGS {
            let selected = self.selected_tag.as_deref() == Some(tag);
            strip = strip.push(
                button(Text::new(format!("#{tag}")).size(typography::BODY))
                    .on_press(Message::TagPressed(tag.to_string()))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::badge(selected)),
            );
        }

        let heading = match self.selected_tag.as_deref() {
            Some(tag) => format!("Videos tagged #{tag}"),
            None => "Recommended for you".to_string(),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(strip_title)
            .push(strip)
            .push(Text::new(heading).size(typography::TITLE_MD))
            .push(grid(catalog, &self.cards));

        scrollable(content).into()
    }

    fn saved_view<'a>(&'a self, catalog: &'a dyn Catalog) -> Element<'a, Message> {
        let title = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::bookmark(), sizing::ICON_MD),
                palette::BRAND_PINK,
            ))
            .push(Text::new("Saved videos").size(typography::TITLE_MD));

        let body: Element<'a, Message> = if self.cards.is_empty() {
            components::empty_state(icons::bookmark(), "You haven't saved any videos yet")
        } else {
            grid(catalog, &self.cards)
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(body);

        scrollable(content).into()
    }
}

/// Lays cards out in fixed-width rows. Cards whose records have vanished
/// from the catalog are skipped; the mock catalog never changes, so in
/// practice every card renders.
pub(crate) fn grid<'a>(
    catalog: &'a dyn Catalog,
    cards: &'a [video_card::State],
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG);
    for (chunk_index, chunk) in cards.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (offset, card) in chunk.iter().enumerate() {
            let index = chunk_index * GRID_COLUMNS + offset;
            if let Some(record) = catalog.get(&card.video_id) {
                row = row.push(
                    video_card::view(record, card).map(move |m| Message::Card(index, m)),
                );
            }
        }
        rows = rows.push(row);
    }

    Container::new(rows).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    #[test]
    fn feed_starts_unfiltered() {
        let catalog = MockCatalog::new();
        let state = State::feed(&catalog);
        assert!(state.selected_tag().is_none());
        assert_eq!(state.card_count(), catalog.list().len());
    }

    #[test]
    fn selecting_a_tag_narrows_the_grid() {
        let catalog = MockCatalog::new();
        let mut state = State::feed(&catalog);

        state.update(&catalog, Message::TagPressed("nature".into()));
        assert_eq!(state.selected_tag(), Some("nature"));
        assert_eq!(state.card_count(), 2);
    }

    #[test]
    fn selecting_the_same_tag_twice_clears_the_filter() {
        let catalog = MockCatalog::new();
        let mut state = State::feed(&catalog);

        state.update(&catalog, Message::TagPressed("city".into()));
        state.update(&catalog, Message::TagPressed("city".into()));

        assert!(state.selected_tag().is_none());
        assert_eq!(state.card_count(), catalog.list().len());
    }

    #[test]
    fn changing_the_filter_resets_card_state() {
        let catalog = MockCatalog::new();
        let mut state = State::feed(&catalog);

        // Like the first card, then change the filter; the rebuilt card
        // must be back at the record's seeded count.
        state.update(&catalog, Message::Card(0, video_card::Message::ToggleLike));
        assert_eq!(state.cards()[0].interactions.likes(), 3_801);

        state.update(&catalog, Message::TagPressed("nature".into()));
        state.update(&catalog, Message::TagPressed("nature".into()));
        assert_eq!(state.cards()[0].interactions.likes(), 3_800);
    }

    #[test]
    fn card_open_bubbles_up_with_the_id() {
        let catalog = MockCatalog::new();
        let mut state = State::feed(&catalog);

        let event = state.update(&catalog, Message::Card(2, video_card::Message::Open));
        assert!(matches!(event, Event::OpenVideo(id) if id == "3"));
    }

    #[test]
    fn saved_view_lists_only_saved_records() {
        let catalog = MockCatalog::new();
        let state = State::saved(&catalog);
        let ids: Vec<&str> = state.cards().iter().map(|c| c.video_id.as_str()).collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn out_of_range_card_message_is_ignored() {
        let catalog = MockCatalog::new();
        let mut state = State::feed(&catalog);
        let event = state.update(&catalog, Message::Card(99, video_card::Message::ToggleLike));
        assert!(matches!(event, Event::None));
    }
}
