use scraper::{Html, Node};

use super::matcher::{find_node, is_element};
use crate::domain::error::UrbanError;

/// The homepage title reads `"Urban Dictionary, January 29: Icicle
/// Fingers"`; the word of the day is everything after this separator.
const TITLE_SEPARATOR: &str = ": ";

/// Pull the word of the day out of the first `<title>` element.
///
/// Returns `Ok(None)` when the document has no title at all; the caller
/// decides whether that is an error.
pub(crate) fn find_word_of_the_day(doc: &Html) -> Result<Option<String>, UrbanError> {
    let title = match find_node(doc.tree.root(), &|n: &Node| is_element(n, "title")) {
        Some(node) => node,
        None => return Ok(None),
    };

    let text = title
        .first_child()
        .and_then(|child| child.value().as_text())
        .ok_or(UrbanError::MalformedTitle)?;

    let segments: Vec<&str> = text.split(TITLE_SEPARATOR).collect();
    if segments.len() != 2 || segments[1].is_empty() {
        return Err(UrbanError::UnparseableTitle);
    }

    Ok(Some(segments[1].to_string()))
}
