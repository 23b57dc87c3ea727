// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar carries the brand, the search field, and the buttons that move
//! between the four top-level views. It emits events upward; the root
//! application owns the actual routing.

use crate::ui::components;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text_input, Container, Row, Text};
use iced::{alignment, Border, Element, Length};

/// The four top-level views reachable from the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Feed,
    Profile,
    Saved,
    Messages,
}

/// Navigation bar state: just the search field contents.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub query: String,
}

/// Messages emitted by the bar's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    QuerySubmitted,
    Navigate(View),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(View),
    Search(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::QuerySubmitted => Event::Search(state.query.clone()),
        Message::Navigate(view) => Event::Navigate(view),
    }
}

/// Render the navigation bar. `current` is `None` on screens outside the
/// four top-level views (the video page), so no button shows as active.
pub fn view<'a>(state: &'a State, current: Option<View>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("Rainbow")
                .size(typography::TITLE_LG)
                .color(palette::BRAND_PINK),
        )
        .push(
            Container::new(Text::new("Beta").size(typography::CAPTION).color(palette::WHITE))
                .padding([2.0, spacing::XS])
                .style(|_theme| iced::widget::container::Style {
                    background: Some(styles::rainbow_gradient(std::f32::consts::FRAC_PI_4)),
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Border::default()
                    },
                    ..iced::widget::container::Style::default()
                }),
        );

    let search = text_input("Search videos, tags...", &state.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::QuerySubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(320.0));

    let buttons = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(nav_button(icons::home(), View::Feed, current))
        .push(nav_button(icons::bookmark(), View::Saved, current))
        .push(nav_button(icons::message_circle(), View::Messages, current))
        .push(
            button(components::avatar::<Message>("Rainbow User", sizing::AVATAR_SM))
                .on_press(Message::Navigate(View::Profile))
                .padding(spacing::XXS)
                .style(styles::button_ghost),
        );

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(Container::new(search).width(Length::Fill).align_x(alignment::Horizontal::Center))
        .push(buttons);

    container(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(|theme: &iced::Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.base.color,
            )),
            ..iced::widget::container::Style::default()
        })
        .into()
}

fn nav_button<'a>(icon: Svg<'static>, target: View, current: Option<View>) -> Element<'a, Message> {
    let icon = icons::sized(icon, sizing::ICON_MD);
    let styled = if current == Some(target) {
        button(icons::tinted(icon, palette::WHITE)).style(styles::button_rainbow)
    } else {
        button(icon).style(styles::button_ghost)
    };

    styled
        .on_press(Message::Navigate(target))
        .padding(spacing::XS)
        .into()
}
