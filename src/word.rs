//! Identifier extraction at a cursor position.
//!
//! Positions are in UTF-16 columns. A column that falls inside a surrogate pair
//! refers to the character that pair encodes.

use std::ops::Range;

use itertools::Itertools;
use tower_lsp::lsp_types::Position;
use tracing::debug;

use crate::{document::TextSource, index::split_lines};

/// Alphanumeric, `_` or `$`.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Char-index bounds of the identifier touching `position`, along with the line's chars.
fn word_bounds(text: &str, position: Position) -> Option<(Vec<char>, Range<usize>)> {
    let line = position.line as usize;
    let character = position.character as usize;

    let Some(chars) = split_lines(text).nth(line).map(|l| l.chars().collect_vec()) else {
        debug!(line, "No word: line is outside the document");
        return None;
    };

    let mut column = 0;
    let Some(cursor) = chars.iter().position(|c| {
        column += c.len_utf16();
        column > character
    }) else {
        debug!(line, character, "No word: character is outside the line");
        return None;
    };

    let start = chars[..cursor]
        .iter()
        .rposition(|c| !is_identifier_char(*c))
        .map_or(0, |i| i + 1);
    let end = chars[cursor..]
        .iter()
        .position(|c| !is_identifier_char(*c))
        .map_or(chars.len(), |i| cursor + i);

    Some((chars, start..end))
}

fn utf16_column(chars: &[char], index: usize) -> usize {
    chars[..index].iter().map(|c| c.len_utf16()).sum()
}

/// Column range of the identifier touching `position`.
///
/// Returns `None` when the position is outside the document, including a cursor sitting
/// exactly at the end of a line. The returned range may be empty when neither the character
/// under the cursor nor the one before it is an identifier character.
pub fn word_span(text: &str, position: Position) -> Option<Range<usize>> {
    let (chars, bounds) = word_bounds(text, position)?;

    Some(utf16_column(&chars, bounds.start)..utf16_column(&chars, bounds.end))
}

/// The identifier touching `position`, or `None` if there is none.
pub fn word_at(doc: &impl TextSource, position: Position) -> Option<String> {
    let (chars, bounds) = word_bounds(&doc.get_text(), position)?;
    if bounds.is_empty() {
        return None;
    }

    Some(chars[bounds].iter().collect())
}
