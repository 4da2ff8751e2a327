use tower_lsp::lsp_types::{Location, Position, Url};

use crate::{document::TextSource, index::SymbolIndex, word::word_at};

/// Jump from the identifier under the cursor to the first declaration with the same name.
///
/// Resolution is by name over the whole document: scopes, shadowing and other files are
/// not considered. Parameters and call sites of undeclared names resolve to nothing.
pub fn goto_definition(
    index: &SymbolIndex,
    doc: &impl TextSource,
    uri: &Url,
    cursor_position: Position,
) -> Option<Location> {
    let word = word_at(doc, cursor_position)?;

    index.symbol_named(uri, &word).map(|symbol| symbol.location())
}
