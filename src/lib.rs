//! symscan: a small declaration index behind a Language Server
//!
//! This crate provides the core of the `symscan` server: a per-document table of
//! naive declarations and the position queries answered from it.
//!
//! # Overview
//!
//! - **Indexing**: Every change rescans the document line by line for `let`/`const`/`var`
//!   bindings and `function` declarations
//! - **Queries**: Hover, go-to-definition, find-references and rename
//! - **Diagnostics**: Warnings for lines over the configured length
//! - **Completion**: A fixed pair of suggestions
//!
//! Nothing here understands the language being edited. Names are matched by text,
//! references are substring matches, and a document's symbols only see that document.
//!
//! # Architecture
//!
//! - [`index`]: The [`index::SymbolIndex`] service and the declaration shapes
//! - [`word`]: Identifier extraction at a cursor position
//! - [`document`]: Open documents and the [`document::TextSource`] trait
//! - [`workspace`]: Documents, index and settings, and what each notification does to them
//! - [`backend`]: The `tower-lsp` [`LanguageServer`](tower_lsp::LanguageServer) wiring
//!
//! # Usage
//!
//! ```ignore
//! use symscan::index::SymbolIndex;
//! use symscan::gotodef::goto_definition;
//!
//! let text = "let a = 1;\nlet b = a;";
//! let mut index = SymbolIndex::new();
//! index.index(&uri, text);
//! let location = goto_definition(&index, &text, &uri, Position::new(1, 8));
//! ```

// Core modules - symbol table and documents
pub mod document;
pub mod index;
pub mod word;

// LSP feature modules
pub mod completion;
pub mod diagnostics;
pub mod gotodef;
pub mod hover;
pub mod references;
pub mod rename;
pub mod symbol;

// Server and configuration
pub mod backend;
pub mod config;
pub mod workspace;

// Test utilities (only available in test builds)
#[cfg(test)]
pub mod test_utils;
