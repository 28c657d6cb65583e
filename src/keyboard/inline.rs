//! Inline keyboard builder.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Rows;
use super::button::{CallbackGame, InlineButton, LoginUrl};

/// Rows of inline buttons attached beneath a message.
///
/// Serializes to the Bot API `InlineKeyboardMarkup` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    pub fn rows(&self) -> &[Vec<InlineButton>] {
        &self.inline_keyboard
    }

    pub fn is_empty(&self) -> bool {
        self.inline_keyboard.is_empty()
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.inline_keyboard.iter().flatten()
    }
}

/// Accumulates inline buttons into rows.
///
/// Every `*button` call appends to the current row, [`row`](Self::row) closes it
/// and [`build`](Self::build) closes the last one and returns the grid. Empty rows
/// never reach the grid.
///
/// ```
/// use tg_keyboard::keyboard;
///
/// let markup = keyboard::inline()
///     .callback_button("Yes", "confirm:yes")
///     .callback_button("No", "confirm:no")
///     .row()
///     .url_button("Docs", "https://example.com")
///     .build();
///
/// assert_eq!(markup.rows().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineKeyboardBuilder {
    keyboard: Vec<Vec<InlineButton>>,
    row: Vec<InlineButton>,
}

impl InlineKeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully formed button to the current row.
    pub fn button(&mut self, button: InlineButton) -> &mut Self {
        self.row.push(button);
        self
    }

    /// Append a callback button.
    pub fn callback_button(
        &mut self,
        text: impl Into<String>,
        callback_data: impl Into<String>,
    ) -> &mut Self {
        self.button(InlineButton::callback(text, callback_data))
    }

    /// Append a login button for `login_url` with no extra login options.
    pub fn login_button(
        &mut self,
        text: impl Into<String>,
        login_url: impl Into<String>,
    ) -> &mut Self {
        self.login_button_with(text, LoginUrl::new(login_url))
    }

    pub fn login_button_with(&mut self, text: impl Into<String>, login_url: LoginUrl) -> &mut Self {
        self.button(InlineButton::login(text, login_url))
    }

    /// Append a button that launches the bot's game.
    pub fn game_button(&mut self, text: impl Into<String>) -> &mut Self {
        self.game_button_with(text, CallbackGame::default())
    }

    pub fn game_button_with(&mut self, text: impl Into<String>, game: CallbackGame) -> &mut Self {
        self.button(InlineButton::game(text, game))
    }

    pub fn url_button(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.button(InlineButton::url(text, url))
    }

    pub fn switch_inline_button(
        &mut self,
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> &mut Self {
        self.button(InlineButton::switch_inline_query(text, query))
    }

    pub fn switch_inline_current_chat_button(
        &mut self,
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> &mut Self {
        self.button(InlineButton::switch_inline_query_current_chat(text, query))
    }

    pub fn pay_button(&mut self, text: impl Into<String>, pay: bool) -> &mut Self {
        self.button(InlineButton::pay(text, pay))
    }

    /// Close the current row. Does nothing if the row is empty.
    pub fn row(&mut self) -> &mut Self {
        if !self.row.is_empty() {
            trace!("Flushing inline row with {} buttons", self.row.len());
            self.keyboard.push(std::mem::take(&mut self.row));
        }
        self
    }

    /// Flush the pending row and return the grid built so far.
    ///
    /// Calling it again without adding buttons returns an equal grid.
    pub fn build(&mut self) -> InlineKeyboardMarkup {
        self.row();
        debug!("Built inline keyboard with {} rows", self.keyboard.len());
        InlineKeyboardMarkup::new(self.keyboard.clone())
    }
}

impl Rows for InlineKeyboardBuilder {
    type Item = InlineButton;

    fn start_row(&mut self) {
        self.row();
    }

    fn push(&mut self, item: InlineButton) {
        self.button(item);
    }
}
