//! Utility functions.

pub mod parser;

pub use parser::{parse_inline_buttons, parse_labels};
