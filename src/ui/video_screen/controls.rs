// SPDX-License-Identifier: MPL-2.0
//! Playback controls toolbar.
//!
//! A single row rendered over the bottom of the video frame: play/pause,
//! the timeline scrubber, the time display, volume, and fullscreen.

use crate::player::{Message, PlayerState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, slider, Row, Text};
use iced::{alignment, Element, Length};

/// Timeline slider step in seconds.
const SLIDER_STEP_SECS: f64 = 0.1;

/// Volume slider step.
const VOLUME_STEP: f32 = 0.01;

/// Renders the controls toolbar for the current playback state.
pub fn view(player: &PlayerState) -> Element<'_, Message> {
    let icon_size = sizing::ICON_SM;

    let play_pause_icon = if player.is_playing() {
        icons::pause()
    } else {
        icons::play()
    };
    let play_pause_button = button(icons::sized(play_pause_icon, icon_size))
        .on_press(Message::TogglePlay)
        .padding(spacing::XS)
        .style(styles::button_overlay);

    // The slider needs a non-empty range before metadata arrives.
    let timeline_end = if player.duration_secs() > 0.0 {
        player.duration_secs()
    } else {
        100.0
    };
    let timeline = slider(0.0..=timeline_end, player.position_secs(), Message::Seek)
        .step(SLIDER_STEP_SECS)
        .width(Length::FillPortion(1));

    let time_display = Text::new(format!(
        "{} / {}",
        format_time(player.position_secs()),
        format_time(player.duration_secs())
    ))
    .size(typography::CAPTION);

    let volume_icon = if player.muted() || player.volume() == 0.0 {
        icons::volume_mute()
    } else {
        icons::volume()
    };
    let mute_button = button(icons::sized(volume_icon, icon_size))
        .on_press(Message::ToggleMute)
        .padding(spacing::XS)
        .style(styles::button_overlay);

    // While muted the slider sits at zero, like the effective output.
    let volume_slider = slider(0.0..=1.0, player.effective_volume(), Message::SetVolume)
        .step(VOLUME_STEP)
        .width(Length::Fixed(80.0));

    let fullscreen_icon = if player.fullscreen() {
        icons::minimize()
    } else {
        icons::maximize()
    };
    let fullscreen_button = button(icons::sized(fullscreen_icon, icon_size))
        .on_press(Message::ToggleFullscreen)
        .padding(spacing::XS)
        .style(styles::button_overlay);

    let controls = Row::new()
        .push(play_pause_button)
        .push(timeline)
        .push(time_display)
        .push(mute_button)
        .push(volume_slider)
        .push(fullscreen_button)
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center);

    container(controls)
        .width(Length::Fill)
        .style(styles::controls_scrim)
        .into()
}

/// Formats seconds as `m:ss` (minutes unpadded, matching the platform's
/// web client).
pub(crate) fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45.0), "0:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "2:05");
    }

    #[test]
    fn format_time_handles_long_durations() {
        assert_eq!(format_time(3_665.0), "61:05");
    }

    #[test]
    fn format_time_clamps_negative_values() {
        assert_eq!(format_time(-10.0), "0:00");
    }
}
