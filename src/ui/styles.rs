// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons, containers and the brand gradient.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Radians, Theme};

/// The brand gradient: purple through pink to orange.
pub fn rainbow_gradient(angle: f32) -> Background {
    let linear = Linear::new(Radians(angle))
        .add_stop(0.0, palette::BRAND_PURPLE)
        .add_stop(0.5, palette::BRAND_PINK)
        .add_stop(1.0, palette::BRAND_ORANGE);
    Background::Gradient(linear.into())
}

/// Thumbnail placeholder gradient, keyed so each video gets a stable pair
/// of colors without shipping image assets.
pub fn thumbnail(key: &str) -> impl Fn(&Theme) -> container::Style {
    const STOPS: [Color; 6] = [
        palette::BRAND_PURPLE,
        palette::BRAND_PINK,
        palette::BRAND_ORANGE,
        palette::INFO_500,
        palette::SUCCESS_500,
        palette::WARNING_500,
    ];

    let hash = key
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    let from = STOPS[hash as usize % STOPS.len()];
    let to = STOPS[(hash as usize / STOPS.len() + 1) % STOPS.len()];

    move |_theme: &Theme| {
        let linear = Linear::new(Radians(std::f32::consts::FRAC_PI_4))
            .add_stop(0.0, from)
            .add_stop(1.0, to);
        container::Style {
            background: Some(Background::Gradient(linear.into())),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Primary action button carrying the brand gradient.
pub fn button_rainbow(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => rainbow_gradient(std::f32::consts::FRAC_PI_2),
        _ => rainbow_gradient(std::f32::consts::FRAC_PI_4),
    };

    button::Style {
        background: Some(background),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Secondary state for toggles that are currently on (subscribed, muted).
pub fn button_muted(theme: &Theme, _status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.weak;

    button::Style {
        background: Some(Background::Color(base.color)),
        text_color: base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined neutral button.
pub fn button_outline(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(extended.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button that only shows a surface on hover.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(extended.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Button for the on-video controls overlay: white glyphs over translucent
/// black so they read on any frame.
pub fn button_overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Circular accent toggle used on feed cards; `active` paints the accent.
pub fn button_card_toggle(
    accent: Color,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            Background::Color(accent)
        } else {
            let alpha = match status {
                button::Status::Hovered => 0.3,
                _ => opacity::OVERLAY_SUBTLE,
            };
            Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })
        };

        button::Style {
            background: Some(background),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Solid single-color button for the social share targets.
pub fn button_social(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                r: (color.r * 0.85),
                g: (color.g * 0.85),
                b: (color.b * 0.85),
                a: color.a,
            },
            _ => color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Card surface with a border and a soft shadow.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Muted panel surface (description box, stats rows).
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Full-bleed brand banner (profile header, earnings panel).
pub fn rainbow_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(rainbow_gradient(std::f32::consts::FRAC_PI_4)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Black backdrop behind the video frame.
pub fn player_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Scrim behind the playback controls so they read over bright frames.
pub fn controls_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Tag badge; `selected` paints the brand gradient like the original client.
pub fn badge(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();

        if selected {
            button::Style {
                background: Some(rainbow_gradient(std::f32::consts::FRAC_PI_4)),
                text_color: palette::WHITE,
                border: Border {
                    radius: radius::FULL.into(),
                    ..Border::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        } else {
            let background = match status {
                button::Status::Hovered => Some(Background::Color(extended.background.weak.color)),
                _ => None,
            };
            button::Style {
                background,
                text_color: extended.background.base.text,
                border: Border {
                    color: extended.background.strong.color,
                    width: border::WIDTH_SM,
                    radius: radius::FULL.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_gradient_is_stable_per_key() {
        let theme = Theme::Dark;
        let a1 = thumbnail("1")(&theme);
        let a2 = thumbnail("1")(&theme);
        assert_eq!(a1.background, a2.background);
    }

    #[test]
    fn badge_selected_uses_gradient() {
        let theme = Theme::Light;
        let style = badge(true)(&theme, button::Status::Active);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }

    #[test]
    fn overlay_button_brightens_on_hover() {
        let theme = Theme::Dark;
        let idle = button_overlay(&theme, button::Status::Active);
        let hovered = button_overlay(&theme, button::Status::Hovered);
        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => 0.0,
        };
        assert!(alpha(&hovered) > alpha(&idle));
    }
}
