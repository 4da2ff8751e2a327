//! Server state behind the `tower-lsp` handlers.
//!
//! A [`Workspace`] holds the open documents, the symbol index and the settings, and
//! implements what each notification and request does to them. [`crate::backend`]
//! only forwards to it and publishes whatever diagnostics it returns.

use tower_lsp::lsp_types::{
    Diagnostic, DocumentSymbolResponse, Hover, Location, Position,
    TextDocumentContentChangeEvent, Url, WorkspaceEdit,
};
use tracing::debug;

use crate::{
    config::Settings,
    diagnostics,
    document::{Document, DocumentStore},
    gotodef, hover,
    index::SymbolIndex,
    references, rename, symbol,
};

#[derive(Debug, Default)]
pub struct Workspace {
    documents: DocumentStore,
    index: SymbolIndex,
    settings: Settings,
}

impl Workspace {
    pub fn new(settings: Settings) -> Workspace {
        Workspace {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Store and index a newly opened document, returning its diagnostics.
    pub fn open(&mut self, uri: Url, text: &str, version: i32) -> Vec<Diagnostic> {
        self.documents.open(uri.clone(), text, version);
        self.refresh(&uri, text)
    }

    /// Apply a batch of changes, then re-index and re-check the new text.
    ///
    /// A rejected batch leaves the text, the index entry and the published diagnostics
    /// as they were.
    pub fn change(
        &mut self,
        uri: &Url,
        version: i32,
        changes: &[TextDocumentContentChangeEvent],
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let text = self.documents.change(uri, version, changes)?;
        Ok(self.refresh(uri, &text))
    }

    /// Drop the document's text. Its index entry stays until it is reopened.
    pub fn close(&mut self, uri: &Url) {
        if self.documents.close(uri).is_none() {
            debug!(uri = %uri, "Closed a document that was not open");
        }
    }

    fn refresh(&mut self, uri: &Url, text: &str) -> Vec<Diagnostic> {
        self.index.index(uri, text);
        let diagnostics = diagnostics::check(text, &self.settings);
        debug!(uri = %uri, count = diagnostics.len(), "checked document");
        diagnostics
    }

    fn document(&self, uri: &Url) -> Option<&Document> {
        let document = self.documents.get(uri);
        if document.is_none() {
            debug!(uri = %uri, "Request for a document that is not open");
        }
        document
    }

    /// Answered from the index alone, so closed documents still hover.
    pub fn hover(&self, uri: &Url, position: Position) -> Option<Hover> {
        hover::hover(&self.index, uri, position, &self.settings)
    }

    pub fn definition(&self, uri: &Url, position: Position) -> Option<Location> {
        let document = self.document(uri)?;
        gotodef::goto_definition(&self.index, document, uri, position)
    }

    pub fn references(&self, uri: &Url, position: Position) -> Vec<Location> {
        self.document(uri)
            .map(|document| references::references(document, uri, position))
            .unwrap_or_default()
    }

    pub fn rename(&self, uri: &Url, position: Position, new_name: &str) -> Option<WorkspaceEdit> {
        let document = self.document(uri)?;
        rename::rename(document, uri, position, new_name)
    }

    pub fn document_symbols(&self, uri: &Url) -> DocumentSymbolResponse {
        symbol::document_symbol(&self.index, uri)
    }
}
