// SPDX-License-Identifier: MPL-2.0
//! Small shared view helpers: avatars, stat blocks, empty states.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Border, Element, Length};

/// Circular initial-letter avatar. Remote avatar images are referenced by
/// the dataset but never fetched; the first letter of the name stands in.
pub fn avatar<'a, M: 'a>(name: &str, size: f32) -> Element<'a, M> {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    Container::new(
        Text::new(initial)
            .size(size * 0.45)
            .color(palette::WHITE)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme| container::Style {
        background: Some(styles::rainbow_gradient(std::f32::consts::FRAC_PI_3)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

/// Big number over a caption, used in the profile stat row.
pub fn stat<'a, M: 'a>(value: String, label: &'a str) -> Element<'a, M> {
    Column::new()
        .push(Text::new(value).size(typography::TITLE_LG))
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XXS)
        .into()
}

/// Centered icon-plus-message block for views with nothing to show.
pub fn empty_state<'a, M: 'a>(icon: Svg<'static>, message: &'a str) -> Element<'a, M> {
    Container::new(
        Column::new()
            .push(icons::tinted(
                icons::sized(icon, crate::ui::design_tokens::sizing::ICON_XXL),
                palette::GRAY_400,
            ))
            .push(
                Text::new(message)
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_400),
            )
            .align_x(alignment::Horizontal::Center)
            .spacing(spacing::MD),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
