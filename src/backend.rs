//! The `tower-lsp` server.
//!
//! [`Backend`] wraps a [`Workspace`] in a lock and turns its results into protocol
//! responses. Text synchronization notifications publish the diagnostics the workspace
//! returns; rejected changes are logged and publish nothing.

use std::path::PathBuf;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionOptions, CompletionParams, CompletionResponse, Diagnostic,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, DocumentSymbolParams, DocumentSymbolResponse,
    GotoDefinitionParams, GotoDefinitionResponse, Hover, HoverParams, HoverProviderCapability,
    InitializeParams, InitializeResult, InitializedParams, Location, MessageType, OneOf,
    PositionEncodingKind, ReferenceParams, RenameParams, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind, TextDocumentSyncOptions,
    TextDocumentSyncSaveOptions, Url, WorkspaceEdit,
};
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::{completion, config::Settings, workspace::Workspace};

pub struct Backend {
    client: Client,
    workspace: RwLock<Workspace>,
}

impl Backend {
    pub fn new(client: Client) -> Backend {
        Backend {
            client,
            workspace: RwLock::new(Workspace::default()),
        }
    }

    async fn publish(&self, uri: Url, version: i32, diagnostics: Vec<Diagnostic>) {
        debug!(uri = %uri, count = diagnostics.len(), "publishing diagnostics");
        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

fn root_dir(params: &InitializeParams) -> Option<PathBuf> {
    let folder_uri = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| folder.uri.clone());

    #[allow(deprecated)] // root_uri is deprecated in favor of workspace_folders
    let uri = folder_uri.or_else(|| params.root_uri.clone())?;

    uri.to_file_path().ok()
}

/// Columns are always UTF-16 code units, the encoding every client supports.
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        position_encoding: Some(PositionEncodingKind::UTF16),
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::INCREMENTAL),
                save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                ..Default::default()
            },
        )),
        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            trigger_characters: Some(vec![".".to_string()]),
            ..Default::default()
        }),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        definition_provider: Some(OneOf::Left(true)),
        references_provider: Some(OneOf::Left(true)),
        rename_provider: Some(OneOf::Left(true)),
        document_symbol_provider: Some(OneOf::Left(true)),
        ..Default::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(root_dir) = root_dir(&params) {
            match Settings::new(&root_dir) {
                Ok(settings) => self.workspace.write().await.set_settings(settings),
                Err(e) => {
                    warn!(error = %e, "Failed to load settings, using defaults");
                    self.client
                        .log_message(
                            MessageType::ERROR,
                            format!("Failed to load settings, using defaults: {e}"),
                        )
                        .await;
                }
            }
        }

        Ok(InitializeResult {
            capabilities: server_capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        info!("server initialized");
        self.client
            .log_message(MessageType::INFO, "symscan initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        let diagnostics = self.workspace.write().await.open(
            document.uri.clone(),
            &document.text,
            document.version,
        );

        self.publish(document.uri, document.version, diagnostics).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let result = self
            .workspace
            .write()
            .await
            .change(&uri, version, &params.content_changes);

        match result {
            Ok(diagnostics) => self.publish(uri, version, diagnostics).await,
            Err(e) => {
                warn!(uri = %uri, error = %e, "Rejected document change");
                self.client
                    .log_message(MessageType::WARNING, format!("Rejected change to {uri}: {e}"))
                    .await;
            }
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        debug!(uri = %params.text_document.uri, "document saved");
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.workspace
            .write()
            .await
            .close(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let position = params.text_document_position_params;

        Ok(self
            .workspace
            .read()
            .await
            .hover(&position.text_document.uri, position.position))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let position = params.text_document_position_params;

        Ok(self
            .workspace
            .read()
            .await
            .definition(&position.text_document.uri, position.position)
            .map(GotoDefinitionResponse::Scalar))
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        // `include_declaration` has no effect: declarations are matched like any other line.
        let position = params.text_document_position;

        Ok(Some(
            self.workspace
                .read()
                .await
                .references(&position.text_document.uri, position.position),
        ))
    }

    async fn rename(&self, params: RenameParams) -> Result<Option<WorkspaceEdit>> {
        let position = params.text_document_position;

        Ok(self.workspace.read().await.rename(
            &position.text_document.uri,
            position.position,
            &params.new_name,
        ))
    }

    async fn completion(&self, _params: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(Some(completion::get_completions()))
    }

    async fn completion_resolve(&self, params: CompletionItem) -> Result<CompletionItem> {
        Ok(completion::resolve_completion(params))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        Ok(Some(
            self.workspace
                .read()
                .await
                .document_symbols(&params.text_document.uri),
        ))
    }
}
