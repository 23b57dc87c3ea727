// SPDX-License-Identifier: MPL-2.0
//! Share targets and their deep-link templates.
//!
//! Each platform takes the percent-encoded watch link and title; links open
//! in the system browser and the outcome is not tracked beyond logging.

use crate::error::{Error, Result};

const BASE_URL: &str = "https://rainbow.video";

/// External platforms offered in the share dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Vk,
    Telegram,
    WhatsApp,
    Twitter,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Vk,
        Platform::Telegram,
        Platform::WhatsApp,
        Platform::Twitter,
        Platform::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Vk => "VK",
            Platform::Telegram => "Telegram",
            Platform::WhatsApp => "WhatsApp",
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
        }
    }
}

/// Canonical public link for a video page.
pub fn watch_url(video_id: &str) -> String {
    format!("{BASE_URL}/watch/{video_id}")
}

/// Builds the platform-specific share link with the page URL and title
/// percent-encoded.
pub fn share_url(platform: Platform, url: &str, title: &str) -> String {
    let encoded_url = urlencoding::encode(url);
    let encoded_title = urlencoding::encode(title);

    match platform {
        Platform::Vk => {
            format!("https://vk.com/share.php?url={encoded_url}&title={encoded_title}")
        }
        Platform::Telegram => {
            format!("https://t.me/share/url?url={encoded_url}&text={encoded_title}")
        }
        Platform::WhatsApp => format!("https://wa.me/?text={encoded_title}%20{encoded_url}"),
        Platform::Twitter => {
            format!("https://twitter.com/intent/tweet?url={encoded_url}&text={encoded_title}")
        }
        Platform::Facebook => {
            format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}")
        }
    }
}

/// Opens the share link in a new browser context. Fire-and-forget: nothing
/// tracks whether the share went through, only whether the browser launched.
pub fn open(platform: Platform, url: &str, title: &str) -> Result<()> {
    let link = share_url(platform, url, title);
    webbrowser::open(&link).map_err(|err| {
        tracing::warn!(platform = platform.label(), error = %err, "failed to open share link");
        Error::Share(err.to_string())
    })
}
