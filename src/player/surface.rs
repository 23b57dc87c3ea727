// SPDX-License-Identifier: MPL-2.0
//! Command seam between the playback controller and the media subsystem.

/// A playable media resource.
///
/// The controller only ever issues commands through this trait; it learns
/// about progress separately, from notifications. Codec handling, buffering
/// and the actual clock belong to the implementation.
pub trait MediaSurface {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position_secs: f64);
    fn set_volume(&mut self, volume: f32);
}

/// Stand-in media surface for the mock catalog.
///
/// There is no real decoder behind the sample records, so commands are
/// accepted and traced; the playback clock is driven by the subscription
/// layer instead.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    media_url: String,
}

impl SimulatedSurface {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }
}

impl MediaSurface for SimulatedSurface {
    fn play(&mut self) {
        tracing::trace!(url = %self.media_url, "surface: play");
    }

    fn pause(&mut self) {
        tracing::trace!(url = %self.media_url, "surface: pause");
    }

    fn seek(&mut self, position_secs: f64) {
        tracing::trace!(url = %self.media_url, position_secs, "surface: seek");
    }

    fn set_volume(&mut self, volume: f32) {
        tracing::trace!(url = %self.media_url, volume, "surface: set volume");
    }
}
