//! Document symbol provider.
//!
//! Implements `textDocument/documentSymbol` as a flat outline of the indexed declarations:
//!
//! | Declaration | LSP Kind | Example |
//! |-------------|----------|---------|
//! | Binding | `Variable` | `let total = 0` |
//! | Function | `Function` | `function main(` |
//!
//! Symbols are returned in declaration order.

use tower_lsp::lsp_types::{DocumentSymbol, DocumentSymbolResponse, Url};

use crate::index::{Symbol, SymbolIndex};

pub fn document_symbol(index: &SymbolIndex, uri: &Url) -> DocumentSymbolResponse {
    DocumentSymbolResponse::Nested(symbols_to_flat_list(index.symbols(uri)))
}

#[allow(deprecated)] // field deprecated has been deprecated in favor of using tags
fn symbols_to_flat_list(symbols: &[Symbol]) -> Vec<DocumentSymbol> {
    symbols
        .iter()
        .map(|s| DocumentSymbol {
            name: s.name.clone(),
            kind: s.kind.into(),
            range: s.range,
            selection_range: s.range,
            detail: Some(s.kind.to_string()),
            deprecated: None,
            tags: None,
            children: None,
        })
        .collect()
}
