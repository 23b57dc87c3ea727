// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_reel=info")),
        )
        .compact()
        .init();

    let mut args = pico_args::Arguments::from_env();

    let theme = args
        .opt_value_from_str::<_, String>("--theme")
        .ok()
        .flatten()
        .and_then(|value| ThemeMode::parse(&value));

    let flags = Flags {
        theme,
        video: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
