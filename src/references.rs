use tower_lsp::lsp_types::{Location, Position, Range, Url};

use crate::{document::TextSource, index::first_occurrence_per_line, word::word_at};

/// Every line of the document that contains the word under the cursor.
///
/// Matching is plain substring search, so occurrences inside longer identifiers, comments
/// and string literals count too. Only the first occurrence on each line is reported.
pub fn references(doc: &impl TextSource, uri: &Url, cursor_position: Position) -> Vec<Location> {
    occurrences(doc, cursor_position)
        .map(|(_, ranges)| {
            ranges
                .into_iter()
                .map(|range| Location {
                    uri: uri.clone(),
                    range,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// The word under the cursor and the range of its first occurrence on each line.
pub(crate) fn occurrences(
    doc: &impl TextSource,
    cursor_position: Position,
) -> Option<(String, Vec<Range>)> {
    let text = doc.get_text();
    let word = word_at(&text, cursor_position)?;
    let ranges = first_occurrence_per_line(&text, &word);

    Some((word, ranges))
}
