use std::collections::HashMap;

use tower_lsp::lsp_types::{Position, TextEdit, Url, WorkspaceEdit};

use crate::{document::TextSource, references::occurrences};

/// Replace the word under the cursor on every line where [`crate::references::references`] finds it.
///
/// Edits never leave the source document. Returns `None` when there is no word under the
/// cursor or `new_name` is empty.
pub fn rename(
    doc: &impl TextSource,
    uri: &Url,
    cursor_position: Position,
    new_name: &str,
) -> Option<WorkspaceEdit> {
    if new_name.is_empty() {
        return None;
    }

    let (_old_name, ranges) = occurrences(doc, cursor_position)?;

    let edits: Vec<TextEdit> = ranges
        .into_iter()
        .map(|range| TextEdit {
            range,
            new_text: new_name.to_string(),
        })
        .collect();

    Some(WorkspaceEdit {
        changes: Some(HashMap::from([(uri.clone(), edits)])),
        ..Default::default()
    })
}
