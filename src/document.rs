//! Open documents and their current text.
//!
//! The store keeps one [`Rope`] per open URI and applies `didChange` events to it,
//! either as full replacements or as incremental range edits. Everything that reads
//! a document's text goes through the [`TextSource`] trait so tests can pass plain
//! strings instead.

use std::collections::HashMap;

use anyhow::{anyhow, Context as _};
use ropey::Rope;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent, Url};

/// Anything that can hand out its current full text.
pub trait TextSource {
    fn get_text(&self) -> String;
}

impl TextSource for str {
    fn get_text(&self) -> String {
        self.to_string()
    }
}

impl TextSource for String {
    fn get_text(&self) -> String {
        self.clone()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn get_text(&self) -> String {
        (**self).get_text()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub rope: Rope,
    pub version: i32,
}

impl Document {
    pub fn new(text: &str, version: i32) -> Document {
        Document {
            rope: Rope::from_str(text),
            version,
        }
    }

    /// Apply one content change. Incremental changes are positioned in UTF-16 columns.
    pub fn apply_change(&mut self, change: &TextDocumentContentChangeEvent) -> anyhow::Result<()> {
        match change.range {
            None => {
                self.rope = Rope::from_str(&change.text);
            }
            Some(range) => {
                let start = self
                    .char_index(range.start)
                    .context("Change start is outside the document")?;
                let end = self
                    .char_index(range.end)
                    .context("Change end is outside the document")?;
                if start > end {
                    return Err(anyhow!("Change range is reversed: {start} > {end}"));
                }

                self.rope.remove(start..end);
                self.rope.insert(start, &change.text);
            }
        }

        Ok(())
    }

    /// Converts a position into an absolute char index.
    ///
    /// A position may sit at the end of a line (or of the document) but not past it.
    /// Lines break on `\n`, `\r\n` and a lone `\r` only, matching [`crate::index::split_lines`].
    fn char_index(&self, position: Position) -> anyhow::Result<usize> {
        let line = position.line as usize;
        if line >= self.rope.len_lines() {
            return Err(anyhow!(
                "Line {line} is past the last line ({})",
                self.rope.len_lines().saturating_sub(1)
            ));
        }

        let line_start = self.rope.line_to_char(line);
        let line_slice = self.rope.line(line);
        let mut content_chars = line_slice.len_chars();
        while content_chars > 0 && matches!(line_slice.char(content_chars - 1), '\n' | '\r') {
            content_chars -= 1;
        }
        let content_len = line_slice.char_to_utf16_cu(content_chars);

        let character = position.character as usize;
        if character > content_len {
            return Err(anyhow!(
                "Character {character} is past the end of line {line} ({content_len})"
            ));
        }

        Ok(line_start + line_slice.utf16_cu_to_char(character))
    }
}

impl TextSource for Document {
    fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<Url, Document>,
}

impl DocumentStore {
    pub fn new() -> DocumentStore {
        DocumentStore::default()
    }

    pub fn open(&mut self, uri: Url, text: &str, version: i32) {
        self.documents.insert(uri, Document::new(text, version));
    }

    /// Apply a batch of changes in order and return the resulting text.
    ///
    /// The batch is all-or-nothing: if any change is rejected the document keeps its previous text.
    pub fn change(
        &mut self,
        uri: &Url,
        version: i32,
        changes: &[TextDocumentContentChangeEvent],
    ) -> anyhow::Result<String> {
        let document = self
            .documents
            .get_mut(uri)
            .ok_or_else(|| anyhow!("Document is not open: {uri}"))?;

        let mut updated = document.clone();
        for change in changes {
            updated.apply_change(change)?;
        }
        updated.version = version;
        *document = updated;

        Ok(document.get_text())
    }

    pub fn close(&mut self, uri: &Url) -> Option<Document> {
        self.documents.remove(uri)
    }

    pub fn get(&self, uri: &Url) -> Option<&Document> {
        self.documents.get(uri)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
