//! Button list parser.
//!
//! Parses the comma-separated button lists used by the preview binary:
//! - Reply keyboards: `Yes,No,Cancel`
//! - Inline keyboards: `Text|action` entries, e.g. `Docs|https://example.com,Ok|confirm:ok`
//!
//! An inline action starting with `http://`, `https://` or `tg://` makes a URL
//! button, anything else is callback data.

use tracing::warn;

use crate::keyboard::InlineButton;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "tg://"];

/// Parse a list of `Text|action` entries, skipping malformed ones.
pub fn parse_inline_buttons(input: &str) -> Vec<InlineButton> {
    split_entries(input)
        .filter_map(|entry| {
            let button = parse_inline_button(entry);
            if button.is_none() {
                warn!("Skipping malformed button entry: {:?}", entry);
            }
            button
        })
        .collect()
}

/// Parse a single `Text|action` entry.
///
/// Returns `None` if the separator is missing or either side is blank.
pub fn parse_inline_button(entry: &str) -> Option<InlineButton> {
    let (text, action) = entry.split_once('|')?;

    let text = text.trim();
    let action = action.trim();
    if text.is_empty() || action.is_empty() {
        return None;
    }

    let lower = action.to_lowercase();
    if URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        Some(InlineButton::url(text, action))
    } else {
        Some(InlineButton::callback(text, action))
    }
}

/// Parse a list of reply keyboard labels.
pub fn parse_labels(input: &str) -> Vec<String> {
    split_entries(input).map(str::to_string).collect()
}

fn split_entries(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_callback_and_url() {
        let buttons = parse_inline_buttons("Docs|https://example.com, Ok|confirm:ok");

        assert_eq!(
            buttons,
            vec![
                InlineButton::url("Docs", "https://example.com"),
                InlineButton::callback("Ok", "confirm:ok"),
            ]
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let buttons = parse_inline_buttons("NoAction, |empty, Blank| ,Good|data,,");

        assert_eq!(buttons, vec![InlineButton::callback("Good", "data")]);
    }

    #[test]
    fn test_tg_scheme_is_url() {
        let button = parse_inline_button("Chat|TG://resolve?domain=example").unwrap();

        assert_eq!(button.url.as_deref(), Some("TG://resolve?domain=example"));
        assert!(button.callback_data.is_none());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels(" Yes ,No,, Cancel"), vec!["Yes", "No", "Cancel"]);
        assert!(parse_labels("").is_empty());
    }
}
