//! Conversion into teloxide markup types.
//!
//! Inline keyboards go through their Bot API JSON form, so teloxide applies the
//! same checks it applies to markup received from Telegram. Buttons with more
//! than one action are refused up front, since teloxide would silently keep one.

use teloxide::types::{self as tg, KeyboardButton, KeyboardMarkup};
use tracing::{trace, warn};

use super::inline::InlineKeyboardMarkup;
use super::reply::ReplyKeyboardMarkup;
use crate::error::KeyboardError;

impl TryFrom<InlineKeyboardMarkup> for tg::InlineKeyboardMarkup {
    type Error = KeyboardError;

    fn try_from(markup: InlineKeyboardMarkup) -> Result<Self, Self::Error> {
        if let Some(button) = markup.buttons().find(|b| b.action_count() > 1) {
            warn!("Inline button {:?} has several actions", button.text);
            return Err(KeyboardError::MultipleActions {
                text: button.text.clone(),
                count: button.action_count(),
            });
        }

        let value = serde_json::to_value(&markup)?;
        trace!("Converting inline keyboard: {}", value);

        serde_json::from_value(value).map_err(|e| {
            warn!("teloxide rejected inline keyboard: {}", e);
            KeyboardError::Conversion(e)
        })
    }
}

impl From<ReplyKeyboardMarkup> for KeyboardMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        let rows: Vec<Vec<KeyboardButton>> = markup
            .keyboard
            .into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect())
            .collect();
        KeyboardMarkup::new(rows)
    }
}
