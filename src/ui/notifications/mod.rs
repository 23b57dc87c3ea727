// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions (link copied,
//! donation sent) or flag failures without blocking interaction. A manager
//! caps how many are visible at once and handles auto-dismiss; the toast
//! module renders them into a bottom-right overlay.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
pub use toast::Toast;
