//! Inline button record.
//!
//! Field names follow the Bot API `InlineKeyboardButton` object. Every action is
//! optional and nothing stops a caller from setting several; Telegram only
//! honors one of them.

use serde::{Deserialize, Serialize};

/// Login descriptor for a `login_url` button.
///
/// See <https://core.telegram.org/bots/api#loginurl>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    /// HTTPS URL opened with user authorization data appended
    pub url: String,

    /// New text of the button in forwarded messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,

    /// Username of the bot used for authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,

    /// Ask for permission to send messages to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

impl LoginUrl {
    /// Create a login descriptor with only the URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            forward_text: None,
            bot_username: None,
            request_write_access: None,
        }
    }

    #[must_use]
    pub fn forward_text(mut self, text: impl Into<String>) -> Self {
        self.forward_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    #[must_use]
    pub fn request_write_access(mut self, request: bool) -> Self {
        self.request_write_access = Some(request);
        self
    }
}

/// Marker that launches the bot's game. Holds no information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// A single button of an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    /// Label shown on the button
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<LoginUrl>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineButton {
    /// Create a button with a label and no action attached.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: None,
            url: None,
            login_url: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    /// Button that sends `data` back to the bot in a callback query.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(text).with_callback_data(data)
    }

    /// Button that opens `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text).with_url(url)
    }

    /// Button that logs the user in through `login_url`.
    pub fn login(text: impl Into<String>, login_url: LoginUrl) -> Self {
        Self::new(text).with_login_url(login_url)
    }

    /// Button that launches the bot's game.
    pub fn game(text: impl Into<String>, game: CallbackGame) -> Self {
        Self::new(text).with_callback_game(game)
    }

    /// Button that asks the user to pick a chat and inserts `query` there.
    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(text).with_switch_inline_query(query)
    }

    /// Button that inserts `query` into the current chat's input field.
    pub fn switch_inline_query_current_chat(
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self::new(text).with_switch_inline_query_current_chat(query)
    }

    /// Payment button. Telegram only accepts `true`.
    pub fn pay(text: impl Into<String>, pay: bool) -> Self {
        Self::new(text).with_pay(pay)
    }

    #[must_use]
    pub fn with_callback_data(mut self, data: impl Into<String>) -> Self {
        self.callback_data = Some(data.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_login_url(mut self, login_url: LoginUrl) -> Self {
        self.login_url = Some(login_url);
        self
    }

    #[must_use]
    pub fn with_switch_inline_query(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_switch_inline_query_current_chat(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query_current_chat = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_callback_game(mut self, game: CallbackGame) -> Self {
        self.callback_game = Some(game);
        self
    }

    #[must_use]
    pub fn with_pay(mut self, pay: bool) -> Self {
        self.pay = Some(pay);
        self
    }

    /// Number of actions set on this button.
    pub fn action_count(&self) -> usize {
        [
            self.callback_data.is_some(),
            self.url.is_some(),
            self.login_url.is_some(),
            self.switch_inline_query.is_some(),
            self.switch_inline_query_current_chat.is_some(),
            self.callback_game.is_some(),
            self.pay.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
