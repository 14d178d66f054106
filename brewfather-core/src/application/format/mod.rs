//! Plain-text rendering of API documents for tool results
//!
//! Renderers never fail: missing values print as `N/A`.

pub mod batch;
pub mod ingredient;
pub mod inventory;
pub mod recipe;
pub mod tracker;

use std::fmt::Display;

/// Separator between records of a list
pub const RECORD_SEPARATOR: &str = "---\n";

const NOT_AVAILABLE: &str = "N/A";

/// Line-oriented text builder
#[derive(Debug, Default)]
pub(crate) struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub(crate) fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.lines.push(format!("{label}: {value}"));
        self
    }

    pub(crate) fn opt_field<T: Display>(&mut self, label: &str, value: Option<T>) -> &mut Self {
        self.field(label, or_na(value))
    }

    /// Blank line, underlined title
    pub(crate) fn section(&mut self, title: &str) -> &mut Self {
        self.blank();
        self.lines.push(format!("{title}:"));
        self.lines.push("-".repeat(title.chars().count() + 1));
        self
    }

    pub(crate) fn banner(&mut self, title: &str, width: usize) -> &mut Self {
        self.lines.push(title.to_string());
        self.lines.push("=".repeat(width));
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub(crate) fn finish(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

pub(crate) fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Joins rendered records, or returns `empty` when there are none.
pub(crate) fn join_records(records: Vec<String>, empty: &str) -> String {
    if records.is_empty() {
        empty.to_string()
    } else {
        records.join(RECORD_SEPARATOR)
    }
}
