//! keyboard-preview
//!
//! Builds a keyboard from environment configuration and prints its Bot API JSON.
//!
//! ```text
//! KEYBOARD_KIND=inline KEYBOARD_BUTTONS="Docs|https://example.com,Ok|confirm:ok" keyboard-preview
//! ```

use teloxide::types::{InlineKeyboardMarkup, KeyboardMarkup};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tg_keyboard::config::{Config, KeyboardKind};
use tg_keyboard::{keyboard, utils};

fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crates
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tg_keyboard=info,keyboard_preview=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Building {:?} keyboard, {} buttons per row", config.kind, config.row_width);

    let json = match config.kind {
        KeyboardKind::Inline => {
            let buttons = utils::parse_inline_buttons(&config.buttons);
            let markup = keyboard::of_inline_width(config.row_width, buttons)?;
            warn_if_empty(markup.is_empty());
            let json = serde_json::to_string_pretty(&markup)?;

            match InlineKeyboardMarkup::try_from(markup) {
                Ok(_) => info!("Keyboard is accepted by teloxide"),
                Err(e) => warn!("Keyboard would be rejected: {}", e),
            }
            json
        }
        KeyboardKind::Reply => {
            let labels = utils::parse_labels(&config.buttons);
            let markup = keyboard::of_reply_width(config.row_width, labels)?;
            warn_if_empty(markup.is_empty());
            let json = serde_json::to_string_pretty(&markup)?;

            let converted = KeyboardMarkup::from(markup);
            info!("Reply keyboard has {} rows", converted.keyboard.len());
            json
        }
    };

    println!("{}", json);

    Ok(())
}

fn warn_if_empty(empty: bool) {
    if empty {
        warn!("Keyboard is empty, set KEYBOARD_BUTTONS");
    }
}
