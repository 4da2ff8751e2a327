//! Completion provider.
//!
//! Completion is advertised so clients send `.`-triggered requests, but the suggestions
//! are a fixed pair that do not depend on the document or the cursor. Details are filled
//! in lazily by [`resolve_completion`], keyed on the item's `data` tag.

use serde_json::Value;
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, CompletionResponse, Documentation};

struct FixedItem {
    label: &'static str,
    tag: u64,
    detail: &'static str,
    documentation: &'static str,
}

static FIXED_ITEMS: [FixedItem; 2] = [
    FixedItem {
        label: "TypeScript",
        tag: 1,
        detail: "TypeScript details",
        documentation: "TypeScript documentation",
    },
    FixedItem {
        label: "JavaScript",
        tag: 2,
        detail: "JavaScript details",
        documentation: "JavaScript documentation",
    },
];

pub fn get_completions() -> CompletionResponse {
    CompletionResponse::Array(
        FIXED_ITEMS
            .iter()
            .map(|item| CompletionItem {
                label: item.label.to_string(),
                kind: Some(CompletionItemKind::TEXT),
                data: Some(Value::from(item.tag)),
                ..Default::default()
            })
            .collect(),
    )
}

/// Fill in `detail` and `documentation` for one of the fixed items; other items pass through.
pub fn resolve_completion(mut item: CompletionItem) -> CompletionItem {
    let fixed = item
        .data
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|tag| FIXED_ITEMS.iter().find(|fixed| fixed.tag == tag));

    if let Some(fixed) = fixed {
        item.detail = Some(fixed.detail.to_string());
        item.documentation = Some(Documentation::String(fixed.documentation.to_string()));
    }

    item
}
