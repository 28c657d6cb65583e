//! Error types.

use thiserror::Error;

/// Errors produced while assembling or converting keyboards.
#[derive(Debug, Error)]
pub enum KeyboardError {
    /// A grid was requested with zero buttons per row.
    #[error("row width must be at least 1, got {0}")]
    InvalidRowWidth(usize),

    /// A button carries more than one action; teloxide would keep only one.
    #[error("button {text:?} has {count} actions, Telegram accepts exactly one")]
    MultipleActions { text: String, count: usize },

    /// teloxide refused the markup (bad URL, `pay: false`, button without action).
    #[error("keyboard is not accepted by teloxide: {0}")]
    Conversion(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeyboardError>;
