//! Reply keyboard builder.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Rows;

/// Rows of text buttons that replace the user's keyboard.
///
/// Labels are kept as plain strings and written as `KeyboardButton` objects
/// carrying only `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    #[serde(with = "label_rows")]
    pub keyboard: Vec<Vec<String>>,
}

impl ReplyKeyboardMarkup {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { keyboard: rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.keyboard
    }

    pub fn is_empty(&self) -> bool {
        self.keyboard.is_empty()
    }

    /// All labels in reading order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.keyboard.iter().flatten().map(String::as_str)
    }
}

/// (De)serializes label rows as rows of `{"text": label}`.
mod label_rows {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct LabelRef<'a> {
        text: &'a str,
    }

    #[derive(Deserialize)]
    struct Label {
        text: String,
    }

    pub fn serialize<S: Serializer>(
        rows: &[Vec<String>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<LabelRef<'_>>> = rows
            .iter()
            .map(|row| row.iter().map(|text| LabelRef { text }).collect())
            .collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<String>>, D::Error> {
        let rows = Vec::<Vec<Label>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|label| label.text).collect())
            .collect())
    }
}

/// Accumulates text labels into rows. Same row rules as the inline builder.
#[derive(Debug, Clone, Default)]
pub struct ReplyKeyboardBuilder {
    keyboard: Vec<Vec<String>>,
    row: Vec<String>,
}

impl ReplyKeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text button to the current row.
    pub fn button(&mut self, text: impl Into<String>) -> &mut Self {
        self.row.push(text.into());
        self
    }

    /// Close the current row. Does nothing if the row is empty.
    pub fn row(&mut self) -> &mut Self {
        if !self.row.is_empty() {
            trace!("Flushing reply row with {} buttons", self.row.len());
            self.keyboard.push(std::mem::take(&mut self.row));
        }
        self
    }

    /// Flush the pending row and return the grid built so far.
    pub fn build(&mut self) -> ReplyKeyboardMarkup {
        self.row();
        debug!("Built reply keyboard with {} rows", self.keyboard.len());
        ReplyKeyboardMarkup::new(self.keyboard.clone())
    }
}

impl Rows for ReplyKeyboardBuilder {
    type Item = String;

    fn start_row(&mut self) {
        self.row();
    }

    fn push(&mut self, item: String) {
        self.button(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_single_button() {
        let markup = ReplyKeyboardBuilder::new().button("hello").build();

        assert_eq!(markup, ReplyKeyboardMarkup::new(rows(&[&["hello"]])));
    }

    #[test]
    fn test_trailing_row_is_not_counted_twice() {
        let markup = ReplyKeyboardBuilder::new().button("hello").row().build();

        assert_eq!(markup, ReplyKeyboardMarkup::new(rows(&[&["hello"]])));
    }

    #[test]
    fn test_empty_rows_are_dropped() {
        let markup = ReplyKeyboardBuilder::new()
            .row()
            .button("a")
            .button("b")
            .row()
            .row()
            .button("c")
            .build();

        assert_eq!(markup.rows(), rows(&[&["a", "b"], &["c"]]).as_slice());
        assert_eq!(markup.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut builder = ReplyKeyboardBuilder::new();
        builder.button("a").row().button("b");

        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn test_wire_shape() {
        let markup = ReplyKeyboardBuilder::new()
            .button("yes")
            .button("no")
            .row()
            .button("cancel")
            .build();

        let value = serde_json::to_value(&markup).unwrap();
        assert_eq!(
            value,
            json!({
                "keyboard": [
                    [{ "text": "yes" }, { "text": "no" }],
                    [{ "text": "cancel" }]
                ]
            })
        );

        let parsed: ReplyKeyboardMarkup = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, markup);
    }
}
