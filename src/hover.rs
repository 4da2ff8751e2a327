//! Hover provider.
//!
//! Hovering over the name of a recorded declaration shows its name and kind:
//!
//! ```text
//! (variable) `myVar`
//! ```
//!
//! Only the declaration range itself is hoverable; usages elsewhere in the document
//! show nothing. Hover can be disabled via [`Settings::hover`].

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, Url};

use crate::{
    config::Settings,
    index::{Symbol, SymbolIndex},
};

/// Generate hover content for the declaration under the cursor.
///
/// Returns `None` if hover is disabled or no recorded declaration range contains `position`.
pub fn hover(
    index: &SymbolIndex,
    uri: &Url,
    position: Position,
    settings: &Settings,
) -> Option<Hover> {
    if !settings.hover {
        return None;
    }

    index.symbol_at_position(uri, position).map(|symbol| Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_symbol(symbol),
        }),
        range: Some(symbol.range),
    })
}

fn format_symbol(symbol: &Symbol) -> String {
    format!("({}) `{}`", symbol.kind, symbol.name)
}
