mod helpers;
mod shapes;
mod types;

pub use helpers::{find_column, first_occurrence_per_line, line_len, line_range, split_lines};
pub use shapes::{DeclarationShape, DECLARATION_SHAPES};
pub use types::{Rangeable, Symbol, SymbolKind};

use std::collections::HashMap;

use itertools::Itertools;
use tower_lsp::lsp_types::{Position, Url};
use tracing::debug;

#[derive(Debug, Default)]
/// The symbol table of every document seen so far, keyed by URI.
///
/// Each document's entry is replaced wholesale whenever it is re-indexed. Entries are never
/// removed, so a document that has been closed keeps its last symbols for the lifetime of the index.
pub struct SymbolIndex {
    symbols: HashMap<Url, Vec<Symbol>>,
}

impl SymbolIndex {
    pub fn new() -> SymbolIndex {
        SymbolIndex::default()
    }

    /// Rescan `text` and replace the symbols recorded for `uri`.
    pub fn index(&mut self, uri: &Url, text: &str) {
        let symbols = scan(uri, text);
        debug!(uri = %uri, count = symbols.len(), "indexed document");

        match self.symbols.get_mut(uri) {
            Some(existing) => *existing = symbols,
            None => {
                self.symbols.insert(uri.clone(), symbols);
            }
        }
    }

    /// Symbols of `uri` in declaration order; empty if the document was never indexed.
    pub fn symbols(&self, uri: &Url) -> &[Symbol] {
        self.symbols.get(uri).map(Vec::as_slice).unwrap_or_default()
    }

    /// First symbol of `uri` whose range contains `position`.
    pub fn symbol_at_position(&self, uri: &Url, position: Position) -> Option<&Symbol> {
        self.symbols(uri)
            .iter()
            .find(|symbol| symbol.includes_position(position))
    }

    /// First symbol of `uri` declared with `name`, regardless of scope.
    pub fn symbol_named(&self, uri: &Url, name: &str) -> Option<&Symbol> {
        self.symbols(uri).iter().find(|symbol| symbol.name == name)
    }

    /// Number of documents with an entry in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn scan(uri: &Url, text: &str) -> Vec<Symbol> {
    split_lines(text)
        .enumerate()
        .flat_map(|(number, line)| {
            DECLARATION_SHAPES.iter().filter_map(move |shape| {
                let name = shape.match_line(line)?;
                // The recorded range is the first occurrence of the name on the line,
                // which can precede the declaration itself.
                let column = find_column(line, name)?;

                Some(Symbol {
                    name: name.to_string(),
                    kind: shape.kind,
                    range: line_range(number, column, line_len(name)),
                    uri: uri.clone(),
                })
            })
        })
        .collect_vec()
}
