//! Telegram Bot API client for dripfeed.
//!
//! Covers the single call the poster needs: `sendMessage` to one fixed
//! channel, HTML-formatted, with link previews disabled.

mod client;
mod error;

pub use client::{TelegramClient, format_post};
pub use error::TelegramError;
