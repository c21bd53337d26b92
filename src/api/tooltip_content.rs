use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::format_number;

/// Text shown inside the hover tooltip: a date label and the point's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub label: String,
    pub value: f64,
}

impl TooltipContent {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Plain form, `"<label>: <value>"`.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Markup form with an emphasized label, `"<strong><label>:</strong> <value>"`.
    #[must_use]
    pub fn html(&self) -> String {
        format!(
            "<strong>{}:</strong> {}",
            escape_html(&self.label),
            format_number(self.value)
        )
    }
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, format_number(self.value))
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
