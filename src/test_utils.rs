//! Shared test utilities for symscan.
//!
//! This module provides common fixtures used across multiple test modules.
//! It is only compiled when running tests.

use tower_lsp::lsp_types::Url;

use crate::index::SymbolIndex;

/// A variable, a function and a usage of the variable inside the function.
pub const SIMPLE_PROGRAM: &str = "let myVar = 10;\nfunction myFunc() {\n  console.log(myVar);\n}";

/// A `file://` URI for a fixture document.
pub fn test_uri(name: &str) -> Url {
    Url::parse(&format!("file:///workspace/{name}")).expect("Failed to build test uri")
}

/// Indexes `text` under a fresh URI.
///
/// Returns a tuple of (Url, SymbolIndex) so the caller can run queries against the document.
///
/// # Example
///
/// ```ignore
/// use crate::test_utils::indexed;
///
/// let (uri, index) = indexed("main.js", "let a = 1;");
/// assert_eq!(index.symbols(&uri).len(), 1);
/// ```
pub fn indexed(name: &str, text: &str) -> (Url, SymbolIndex) {
    let uri = test_uri(name);
    let mut index = SymbolIndex::new();
    index.index(&uri, text);
    (uri, index)
}
