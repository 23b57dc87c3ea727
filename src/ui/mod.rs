// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Video feed with the tag strip, plus the saved view
//! - [`profile`] - Channel profile with its tabs
//! - [`video_screen`] - Playback page with actions, panels and dialogs
//! - [`messages_view`] - Placeholder for the future messaging view
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation bar and the view enum it routes between
//! - [`video_card`] - Feed card with per-card interaction state
//! - [`share_dialog`] / [`donate_dialog`] - Modal dialogs
//! - [`notifications`] - Toast notification system for user feedback
//! - [`components`] - Reusable UI pieces (avatars, stats, empty states)
//! - [`styles`] - Centralized styling (buttons, containers, gradients)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod components;
pub mod design_tokens;
pub mod donate_dialog;
pub mod feed;
pub mod icons;
pub mod messages_view;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod share_dialog;
pub mod styles;
pub mod theming;
pub mod video_card;
pub mod video_screen;
