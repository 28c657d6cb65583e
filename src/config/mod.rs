//! Configuration for the preview binary.
//!
//! Loads configuration from environment variables (and `.env`).

use std::env;
use thiserror::Error;

use crate::keyboard::DEFAULT_ROW_WIDTH;

/// Which keyboard to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardKind {
    #[default]
    Inline,
    Reply,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("KEYBOARD_KIND must be `inline` or `reply`, got {0:?}")]
    InvalidKind(String),

    #[error("KEYBOARD_ROW_WIDTH must be a positive integer, got {0:?}")]
    InvalidRowWidth(String),
}

/// Preview configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: KeyboardKind,

    /// Buttons per row
    pub row_width: usize,

    /// Raw comma-separated button list.
    /// Inline entries are `Text|action`, reply entries are plain labels.
    pub buttons: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let kind = match lookup("KEYBOARD_KIND") {
            None => KeyboardKind::default(),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "inline" => KeyboardKind::Inline,
                "reply" => KeyboardKind::Reply,
                _ => return Err(ConfigError::InvalidKind(raw)),
            },
        };

        let row_width = match lookup("KEYBOARD_ROW_WIDTH") {
            None => DEFAULT_ROW_WIDTH,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => width,
                _ => return Err(ConfigError::InvalidRowWidth(raw)),
            },
        };

        Ok(Self {
            kind,
            row_width,
            buttons: lookup("KEYBOARD_BUTTONS").unwrap_or_default(),
        })
    }
}
