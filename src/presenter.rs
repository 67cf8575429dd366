//! Rendering a [`Comic`] as display text or JSON

use crate::error::{Error, Result};
use crate::types::Comic;

/// Output encoding for comic metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four-line human-readable text
    Text,
    /// Single-line JSON object
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring case
    ///
    /// Returns `None` for anything that is not `text` or `json`, including the
    /// empty string. Callers treat `None` as "print no metadata".
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Render a comic as `Title`, `Number`, `Description` and `Date` lines
///
/// There is no trailing newline.
#[must_use]
pub fn to_display_text(comic: &Comic) -> String {
    format!(
        "Title: {}\nNumber: {}\nDescription: {}\nDate: {}",
        comic.title, comic.number, comic.description, comic.date
    )
}

/// Render a comic as a single-line JSON object
///
/// # Errors
///
/// Returns [`Error::Encode`] if serialization fails.
pub fn to_structured_text(comic: &Comic) -> Result<String> {
    serde_json::to_string(comic).map_err(Error::Encode)
}

/// Render a comic in the selected format, or nothing when no format is selected
pub fn render(comic: &Comic, format: Option<OutputFormat>) -> Result<Option<String>> {
    match format {
        Some(OutputFormat::Text) => Ok(Some(to_display_text(comic))),
        Some(OutputFormat::Json) => to_structured_text(comic).map(Some),
        None => Ok(None),
    }
}
