// SPDX-License-Identifier: MPL-2.0
//! Placeholder for the messaging view; the feature does not exist yet.

use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::icons;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>() -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(components::empty_state::<M>(
            icons::message_circle(),
            "Messages",
        ))
        .push(
            Text::new("Messaging is coming soon")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
