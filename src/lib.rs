// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a desktop client for the Rainbow short-video platform,
//! built with the Iced GUI framework.
//!
//! All data is an in-memory mock catalog; the crate is the presentation
//! layer and its controllers: a feed, a playback screen with social
//! interactions, a profile, and the dialogs around them.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod player;
pub mod share;
pub mod social;
pub mod ui;
