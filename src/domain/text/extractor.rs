use crate::error::{AppError, AppResult};
use scraper::{Html, Selector};

/// Elements whose text is read aloud, matched by tag name only
const TEXT_ELEMENTS: &str = "title, h1, h2, h3, h4, h5, h6, p";

/// Extract readable text from an HTML document.
///
/// Every matching element is visited in document order and its full text
/// content is appended followed by a newline. A matching element nested inside
/// another matching element is visited on its own as well, so its text appears
/// once for each match. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD and the rest of the page is still read.
pub fn extract_text(document: &[u8]) -> AppResult<String> {
    let html = String::from_utf8_lossy(document);

    let selector = Selector::parse(TEXT_ELEMENTS)
        .map_err(|e| AppError::Parse(format!("invalid element selector: {}", e)))?;

    let parsed = Html::parse_document(&html);
    let mut text = String::new();
    let mut elements = 0usize;

    for element in parsed.select(&selector) {
        text.extend(element.text());
        text.push('\n');
        elements += 1;
    }

    tracing::debug!(
        elements = elements,
        characters = text.chars().count(),
        "Text extracted from HTML"
    );

    Ok(text)
}
