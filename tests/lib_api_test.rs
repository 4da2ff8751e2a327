//! Integration tests for the symscan library public API.
//!
//! These tests drive a document through the same steps the server takes:
//! open it in a store, index it, then run queries against the stored document.

use std::fs;

use tempfile::TempDir;
use tower_lsp::lsp_types::{
    HoverContents, Position, TextDocumentContentChangeEvent, Url,
};

// Import from the symscan library crate (external consumer perspective)
use symscan::config::Settings;
use symscan::diagnostics::check;
use symscan::document::{DocumentStore, TextSource};
use symscan::gotodef::goto_definition;
use symscan::hover::hover;
use symscan::index::{split_lines, SymbolIndex, SymbolKind};
use symscan::references::references;
use symscan::rename::rename;
use symscan::word::word_at;
use symscan::workspace::Workspace;

const PROGRAM: &str = "let myVar = 10;\nfunction myFunc() {\n  console.log(myVar);\n}";

/// Helper: Open `text` in a store and index it, as `didOpen` does.
fn open(text: &str) -> (Url, DocumentStore, SymbolIndex) {
    let uri = Url::parse("file:///workspace/main.js").expect("Failed to build uri");
    let mut store = DocumentStore::new();
    store.open(uri.clone(), text, 1);
    let mut index = SymbolIndex::new();
    index.index(&uri, text);
    (uri, store, index)
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_single_binding_example() {
    let (uri, store, index) = open("let myVar = 10;");
    let doc = store.get(&uri).unwrap();

    let symbols = index.symbols(&uri);
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "myVar");
    assert_eq!(symbols[0].kind, SymbolKind::Variable);
    assert_eq!(symbols[0].range.start, Position::new(0, 4));
    assert_eq!(symbols[0].range.end, Position::new(0, 9));

    assert_eq!(word_at(doc, Position::new(0, 6)).as_deref(), Some("myVar"));

    let hover = hover(&index, &uri, Position::new(0, 6), &Settings::default())
        .expect("Should hover the declaration");
    match hover.contents {
        HoverContents::Markup(markup) => assert!(markup.value.contains("variable")),
        other => panic!("Unexpected hover contents: {other:?}"),
    }
}

#[test]
fn test_program_example() {
    let (uri, store, index) = open(PROGRAM);
    let doc = store.get(&uri).unwrap();
    let usage = Position::new(2, 16);

    assert_eq!(index.symbols(&uri).len(), 2);

    let definition = goto_definition(&index, doc, &uri, usage).expect("Should find a definition");
    assert_eq!(definition.range.start, Position::new(0, 4));

    let lines: Vec<u32> = references(doc, &uri, usage)
        .iter()
        .map(|l| l.range.start.line)
        .collect();
    assert!(lines.contains(&0) && lines.contains(&2));
}

#[test]
fn test_rename_agrees_with_references() {
    let (uri, store, _index) = open(PROGRAM);
    let doc = store.get(&uri).unwrap();
    let usage = Position::new(2, 16);

    let refs = references(doc, &uri, usage);
    let edit = rename(doc, &uri, usage, "renamed").expect("Should rename");
    let changes = edit.changes.expect("Should have changes");

    assert_eq!(changes[&uri].len(), refs.len());
    assert!(changes[&uri].iter().all(|e| e.new_text == "renamed"));
}

#[test]
fn test_declaration_line_is_always_referenced() {
    let text = "var a1 = 0;\nfunction step(n) {\n  let next = n + a1;\n}\nconst tail = next;";
    let (uri, store, index) = open(text);
    let doc = store.get(&uri).unwrap();

    for symbol in index.symbols(&uri) {
        let line = split_lines(text).nth(symbol.range.start.line as usize).unwrap();
        assert!(line.contains(&symbol.name));

        let lines: Vec<u32> = references(doc, &uri, symbol.range.start)
            .iter()
            .map(|l| l.range.start.line)
            .collect();
        assert!(lines.contains(&symbol.range.start.line), "{}", symbol.name);
    }
}

// ============================================================================
// Change Tests
// ============================================================================

#[test]
fn test_incremental_change_then_reindex() {
    let (uri, mut store, mut index) = open(PROGRAM);

    let change = TextDocumentContentChangeEvent {
        range: Some(tower_lsp::lsp_types::Range {
            start: Position::new(0, 4),
            end: Position::new(0, 9),
        }),
        range_length: None,
        text: "total".to_string(),
    };
    let text = store.change(&uri, 2, &[change]).unwrap();
    index.index(&uri, &text);

    let names: Vec<&str> = index.symbols(&uri).iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["total", "myFunc"]);
    assert_eq!(store.get(&uri).unwrap().get_text(), text);

    // The usage still says myVar, which no longer has a declaration.
    let doc = store.get(&uri).unwrap();
    assert!(goto_definition(&index, doc, &uri, Position::new(2, 16)).is_none());
}

#[test]
fn test_index_survives_close() {
    let (uri, mut store, index) = open(PROGRAM);

    store.close(&uri);

    assert!(store.get(&uri).is_none());
    assert_eq!(index.symbols(&uri).len(), 2);
}

#[test]
fn test_workspace_form_feed_edit_then_rename() {
    let uri = Url::parse("file:///workspace/paged.js").unwrap();
    let mut workspace = Workspace::default();
    workspace.open(uri.clone(), "let a = 1;\x0c// page\nlet b = 2;", 1);

    let change = TextDocumentContentChangeEvent {
        range: Some(tower_lsp::lsp_types::Range {
            start: Position::new(1, 4),
            end: Position::new(1, 5),
        }),
        range_length: None,
        text: "bb".to_string(),
    };
    workspace.change(&uri, 2, &[change]).expect("Change should apply");

    let doc = workspace.documents().get(&uri).unwrap();
    assert_eq!(doc.get_text(), "let a = 1;\u{c}// page\nlet bb = 2;");
    let names: Vec<&str> = workspace
        .index()
        .symbols(&uri)
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "bb"]);

    let edit = workspace
        .rename(&uri, Position::new(1, 5), "c")
        .expect("Should rename");
    assert_eq!(edit.changes.unwrap()[&uri][0].range.start, Position::new(1, 4));
}

// ============================================================================
// Diagnostics and Settings Tests
// ============================================================================

#[test]
fn test_long_line_diagnostic() {
    let text = format!("{}\n{}", "a".repeat(80), "b".repeat(85));

    let diags = check(&text, &Settings::default());

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].range.start, Position::new(1, 80));
    assert_eq!(diags[0].range.end, Position::new(1, 85));
}

#[test]
fn test_settings_from_workspace_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join(".symscan.json"), r#"{ "max_line_length": 20 }"#).unwrap();

    let user_settings = temp_dir.path().join("no-user-settings");
    let settings = Settings::from_sources(user_settings.to_str().unwrap(), temp_dir.path())
        .expect("Settings should load");

    assert_eq!(settings.max_line_length, 20);
    assert_eq!(check(&"c".repeat(25), &settings).len(), 1);
}
