//! Declaration shapes recognized by the indexer.
//!
//! A shape is a single-line pattern with one capture group for the declared
//! identifier. Shapes are tried in the order of [`DECLARATION_SHAPES`] and each
//! reports at most one declaration per line.
//!
//! Identifiers are the same character class the word locator uses
//! ([`crate::word::is_identifier_char`]).

use once_cell::sync::Lazy;
use regex::Regex;

use super::SymbolKind;

static BINDING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:let|const|var)\s+(?<name>[\p{Alphabetic}\p{N}_$]+)\s*=")
        .expect("Binding shape not constructing")
}); // let name =

static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfunction\s+(?<name>[\p{Alphabetic}\p{N}_$]+)\s*\(")
        .expect("Function shape not constructing")
}); // function name(

pub struct DeclarationShape {
    pub kind: SymbolKind,
    pattern: &'static Lazy<Regex>,
}

impl DeclarationShape {
    /// The identifier declared on `line`, if the shape matches.
    ///
    /// Only the leftmost match counts; later matches on the same line are ignored.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|captures| captures.name("name"))
            .map(|name| name.as_str())
    }
}

pub static DECLARATION_SHAPES: [DeclarationShape; 2] = [
    DeclarationShape {
        kind: SymbolKind::Variable,
        pattern: &BINDING_RE,
    },
    DeclarationShape {
        kind: SymbolKind::Function,
        pattern: &FUNCTION_RE,
    },
];
