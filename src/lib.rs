//! tg-keyboard - fluent builders for Telegram keyboards
//!
//! Builds the two keyboard payloads a bot attaches to messages: inline keyboards
//! (buttons beneath a message) and reply keyboards (text buttons replacing the
//! user's keyboard).
//!
//! ## Architecture
//!
//! - `keyboard` - Builders, button records, and conversion into teloxide types
//! - `error` - Error types
//! - `config` - Environment configuration for `keyboard-preview`
//! - `utils` - Button list parsing

pub mod config;
pub mod error;
pub mod keyboard;
pub mod utils;

pub use error::{KeyboardError, Result};
pub use keyboard::{
    InlineButton, InlineKeyboardBuilder, InlineKeyboardMarkup, ReplyKeyboardBuilder,
    ReplyKeyboardMarkup,
};
