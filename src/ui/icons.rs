// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are inline 24x24 SVG paths drawn with `currentColor`, so a single
//! definition serves every theme; [`tinted`] recolors at the call site.
//! Handles are cached with `OnceLock` so each icon is parsed once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g. `heart`, not `like_button`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $path:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' \
                         fill='currentColor'><path d='",
                        $path,
                        "'/></svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(play, "Solid triangle pointing right.", "M8 5v14l11-7z");
define_icon!(
    pause,
    "Two vertical bars.",
    "M6 19h4V5H6v14zm8-14v14h4V5h-4z"
);
define_icon!(
    heart,
    "Filled heart.",
    "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 \
     4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 \
     11.54L12 21.35z"
);
define_icon!(
    bookmark,
    "Filled bookmark ribbon.",
    "M17 3H7c-1.1 0-2 .9-2 2v16l7-3 7 3V5c0-1.1-.9-2-2-2z"
);
define_icon!(
    volume,
    "Speaker with sound waves.",
    "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 \
     2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 \
     7-4.49 7-8.77s-2.99-7.86-7-8.77z"
);
define_icon!(
    volume_mute,
    "Speaker crossed out.",
    "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 \
     .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 \
     5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 \
     1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 \
     12 8.18V4z"
);
define_icon!(
    maximize,
    "Corners pointing outward.",
    "M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z"
);
define_icon!(
    minimize,
    "Corners pointing inward.",
    "M5 16h3v3h2v-5H5v2zm3-8H5v2h5V5H8v3zm6 11h2v-3h3v-2h-5v5zm2-11V5h-2v5h5V8h-3z"
);
define_icon!(
    home,
    "House silhouette.",
    "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"
);
define_icon!(
    message_circle,
    "Speech bubble.",
    "M20 2H4c-1.1 0-2 .9-2 2v18l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2z"
);
define_icon!(
    search,
    "Magnifying glass.",
    "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 \
     9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5z"
);
define_icon!(
    share,
    "Three connected nodes.",
    "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 \
     1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 \
     9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 \
     2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92s2.92-1.31 \
     2.92-2.92-1.31-2.92-2.92-2.92z"
);
define_icon!(
    dollar,
    "Dollar sign.",
    "M11.8 10.9c-2.27-.59-3-1.2-3-2.15 0-1.09 1.01-1.85 2.7-1.85 1.78 0 2.44.85 2.5 \
     2.1h2.21c-.07-1.72-1.12-3.3-3.21-3.81V3h-3v2.16c-1.94.42-3.5 1.68-3.5 3.61 0 2.31 \
     1.91 3.46 4.7 4.13 2.5.6 3 1.48 3 2.41 0 .69-.49 1.79-2.7 1.79-2.06 \
     0-2.87-.92-2.98-2.1h-2.2c.12 2.19 1.76 3.42 3.68 3.83V21h3v-2.15c1.95-.37 3.5-1.5 \
     3.5-3.55 0-2.84-2.43-3.81-4.7-4.4z"
);
define_icon!(
    check,
    "Check mark.",
    "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"
);
define_icon!(
    copy,
    "Two stacked sheets.",
    "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 \
     2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z"
);
define_icon!(
    eye,
    "Open eye.",
    "M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 \
     11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 \
     5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z"
);
define_icon!(
    user_plus,
    "Person with a plus sign.",
    "M15 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm-9-2V7H4v3H1v2h3v3h2v-3h3v-2H6zm9 \
     4c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z"
);
define_icon!(
    trending_up,
    "Rising line chart arrow.",
    "M16 6l2.29 2.29-4.88 4.88-4-4L2 16.59 3.41 18l6-6 4 4 6.3-6.29L22 12V6z"
);
define_icon!(
    send,
    "Paper plane.",
    "M2.01 21L23 12 2.01 3 2 10l15 2-15 2z"
);
define_icon!(
    info,
    "Circled letter i.",
    "M11 7h2v2h-2zm0 4h2v6h-2zm1-9C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 \
     10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z"
);
define_icon!(
    warning,
    "Triangle with exclamation mark.",
    "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"
);
define_icon!(
    cross,
    "Diagonal cross.",
    "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 \
     19 19 17.59 13.41 12z"
);

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon in a fixed color regardless of theme.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}
