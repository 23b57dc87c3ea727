// SPDX-License-Identifier: MPL-2.0
//! Video playback controller.
//!
//! [`PlayerState`] is the state machine for a single playing video: play and
//! pause, the observed clock, seek clamping, volume/mute coupling, the
//! fullscreen flag and controls auto-hide. Commands go out through the
//! [`MediaSurface`] trait; progress comes back in passively through
//! [`PlayerState::tick`] and the attach call, the same way a real decoder
//! would report time-update and metadata-loaded notifications.

mod state;
mod surface;

pub use state::{Effect, Message, PlayerState};
pub use surface::{MediaSurface, SimulatedSurface};
