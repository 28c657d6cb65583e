//! Keyboard builders.
//!
//! - [`inline()`] / [`reply()`] - fluent builders
//! - [`of_inline`] / [`of_reply`] - lay out a flat list of buttons in fixed-width rows
//! - [`button`] - shorthand for a callback button, meant for use with [`of_inline`]

mod button;
mod convert;
mod inline;
mod reply;

pub use button::{CallbackGame, InlineButton, LoginUrl};
pub use inline::{InlineKeyboardBuilder, InlineKeyboardMarkup};
pub use reply::{ReplyKeyboardBuilder, ReplyKeyboardMarkup};

use crate::error::{KeyboardError, Result};

/// Buttons per row used by [`of_inline`] and [`of_reply`].
pub const DEFAULT_ROW_WIDTH: usize = 2;

/// Builder state the row layout needs.
pub(crate) trait Rows {
    type Item;

    fn start_row(&mut self);
    fn push(&mut self, item: Self::Item);
}

/// Start a builder for an inline keyboard.
pub fn inline() -> InlineKeyboardBuilder {
    InlineKeyboardBuilder::new()
}

/// Start a builder for a reply keyboard.
pub fn reply() -> ReplyKeyboardBuilder {
    ReplyKeyboardBuilder::new()
}

/// Shorthand for [`InlineButton::callback`].
pub fn button(text: impl Into<String>, callback_data: impl Into<String>) -> InlineButton {
    InlineButton::callback(text, callback_data)
}

/// Lay out `buttons` two per row.
pub fn of_inline(buttons: impl IntoIterator<Item = InlineButton>) -> InlineKeyboardMarkup {
    let mut builder = inline();
    fill_rows(&mut builder, DEFAULT_ROW_WIDTH, buttons);
    builder.build()
}

/// Lay out `buttons` with `row_width` buttons per row; the last row may be shorter.
pub fn of_inline_width(
    row_width: usize,
    buttons: impl IntoIterator<Item = InlineButton>,
) -> Result<InlineKeyboardMarkup> {
    check_row_width(row_width)?;
    let mut builder = inline();
    fill_rows(&mut builder, row_width, buttons);
    Ok(builder.build())
}

/// Lay out text buttons two per row.
pub fn of_reply(labels: impl IntoIterator<Item = impl Into<String>>) -> ReplyKeyboardMarkup {
    let mut builder = reply();
    fill_rows(&mut builder, DEFAULT_ROW_WIDTH, labels.into_iter().map(Into::into));
    builder.build()
}

/// Lay out text buttons with `row_width` per row.
pub fn of_reply_width(
    row_width: usize,
    labels: impl IntoIterator<Item = impl Into<String>>,
) -> Result<ReplyKeyboardMarkup> {
    check_row_width(row_width)?;
    let mut builder = reply();
    fill_rows(&mut builder, row_width, labels.into_iter().map(Into::into));
    Ok(builder.build())
}

fn check_row_width(row_width: usize) -> Result<()> {
    if row_width == 0 {
        return Err(KeyboardError::InvalidRowWidth(row_width));
    }
    Ok(())
}

/// Break the row before every item whose index is a multiple of `row_width`.
///
/// `row_width` must be non-zero.
fn fill_rows<B: Rows>(
    builder: &mut B,
    row_width: usize,
    items: impl IntoIterator<Item = B::Item>,
) {
    for (i, item) in items.into_iter().enumerate() {
        if i % row_width == 0 {
            builder.start_row();
        }
        builder.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_inline_default_width() {
        let markup = of_inline([
            button("text1", "callback1"),
            button("text2", "callback2"),
            button("text3", "callback3"),
        ]);

        assert_eq!(
            markup.rows(),
            &[
                vec![button("text1", "callback1"), button("text2", "callback2")],
                vec![button("text3", "callback3")],
            ]
        );
    }

    #[test]
    fn test_of_inline_exact_multiple_has_uniform_rows() {
        let markup = of_inline([button("a", "1"), button("b", "2")]);

        assert_eq!(
            markup,
            InlineKeyboardMarkup::new(vec![vec![button("a", "1"), button("b", "2")]])
        );
    }

    #[test]
    fn test_of_inline_vertical() {
        let markup = of_inline_width(
            1,
            [
                button("text1", "callback1"),
                button("text2", "callback2"),
                button("text3", "callback3"),
            ],
        )
        .unwrap();

        assert_eq!(
            markup.rows(),
            &[
                vec![button("text1", "callback1")],
                vec![button("text2", "callback2")],
                vec![button("text3", "callback3")],
            ]
        );
    }

    #[test]
    fn test_of_inline_wide_rows() {
        let buttons: Vec<InlineButton> = (0..8)
            .map(|i| button(i.to_string(), i.to_string()))
            .collect();

        let markup = of_inline_width(3, buttons.clone()).unwrap();

        let widths: Vec<usize> = markup.rows().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 3, 2]);
        assert_eq!(markup.buttons().cloned().collect::<Vec<_>>(), buttons);
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        assert!(of_inline(Vec::<InlineButton>::new()).is_empty());
        assert!(of_reply(Vec::<String>::new()).is_empty());
        assert!(of_inline_width(4, Vec::<InlineButton>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_row_width_is_rejected() {
        assert!(matches!(
            of_inline_width(0, [button("a", "b")]),
            Err(KeyboardError::InvalidRowWidth(0))
        ));
        assert!(matches!(
            of_reply_width(0, ["a"]),
            Err(KeyboardError::InvalidRowWidth(0))
        ));
    }

    #[test]
    fn test_of_reply_horizontal() {
        let markup = of_reply(["text1", "text2"]);

        assert_eq!(
            markup,
            ReplyKeyboardMarkup::new(vec![vec!["text1".to_string(), "text2".to_string()]])
        );
    }

    #[test]
    fn test_of_reply_vertical() {
        let markup = of_reply_width(1, ["text1", "text2", "text3"]).unwrap();

        assert_eq!(
            markup.labels().collect::<Vec<_>>(),
            vec!["text1", "text2", "text3"]
        );
        assert_eq!(markup.rows().len(), 3);
    }

    #[test]
    fn test_of_reply_default_width_remainder() {
        let markup = of_reply(vec![String::from("a"), String::from("b"), String::from("c")]);

        let widths: Vec<usize> = markup.rows().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 1]);
    }

    #[test]
    fn test_button_shorthand() {
        assert_eq!(button("hello", "world"), InlineButton::callback("hello", "world"));
    }
}
