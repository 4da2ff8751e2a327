//! Core types for the symbol index.
//!
//! This module contains the data stored per document:
//! - `SymbolKind`: Whether a declaration binds a variable or a function
//! - `Symbol`: One naive declaration with its name range and owning document
//! - `Rangeable`: Position containment shared by everything carrying a range

use std::fmt;

use tower_lsp::lsp_types::{self, Position, Range, Url};

/// The kind of declaration a [`Symbol`] was recorded from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Variable,
    Function,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SymbolKind> for lsp_types::SymbolKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Variable => lsp_types::SymbolKind::VARIABLE,
            SymbolKind::Function => lsp_types::SymbolKind::FUNCTION,
        }
    }
}

/// A declaration found on a single line.
///
/// `range` covers the first occurrence of `name` on the declaration line,
/// which is not necessarily the occurrence the declaration shape matched.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    /// Back-reference to the document the symbol was declared in.
    pub uri: Url,
}

impl Symbol {
    pub fn location(&self) -> lsp_types::Location {
        lsp_types::Location {
            uri: self.uri.clone(),
            range: self.range,
        }
    }
}

pub trait Rangeable {
    fn range(&self) -> &Range;

    fn includes_position(&self, position: Position) -> bool {
        let range = self.range();
        (range.start.line < position.line
            || (range.start.line == position.line && range.start.character <= position.character))
            && (range.end.line > position.line
                || (range.end.line == position.line && range.end.character >= position.character))
    }
}

impl Rangeable for Symbol {
    fn range(&self) -> &Range {
        &self.range
    }
}
