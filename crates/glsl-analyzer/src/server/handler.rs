use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info, warn};

use crate::server::{settings::ServerSettings, state::GlslLanguageServer};

#[tower_lsp::async_trait]
impl LanguageServer for GlslLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing glsl-analyzer...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        let position_encoding = negotiate_position_encoding(&params.capabilities);
        if position_encoding.is_none() {
            debug!("Client does not offer utf-32 positions; columns past astral characters will be off");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                position_encoding,
                // Extraction always rescans the whole text, so only full sync is offered.
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "glsl-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        info!("glsl-analyzer initialized");
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated glsl-analyzer settings");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down glsl-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        let version = params.text_document.version;
        let filename = short_name(&uri);

        info!("Opened {filename} (v{version}, {} bytes)", text.len());
        self.document_store.open(uri, text, version);

        if self.settings_snapshot().await.logging.level.allows_info() {
            self.log_to_client(MessageType::INFO, format!("Opened {filename}")).await;
        }
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        let filename = short_name(&uri);

        if let Err(error) = self.document_store.change(uri, params.content_changes, version) {
            warn!("Ignoring change to {filename} (v{version}): {error}");
            if self.settings_snapshot().await.logging.level.allows_warn() {
                self.log_to_client(MessageType::WARNING, format!("Ignoring change to {filename}: {error}")).await;
            }
            return;
        }
        debug!("Rescanned {filename} (v{version})");
    }

    async fn did_save(
        &self,
        params: DidSaveTextDocumentParams,
    ) {
        debug!("Saved {}", short_name(&params.text_document.uri));
        self.document_store.save();
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        // Only one document is tracked; the request URI does not select anything.
        let symbols = self.document_store.current_symbols();
        debug!("[symbols] {} symbols for {}", symbols.len(), short_name(&params.text_document.uri));
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

/// Columns are counted in code points, which is what utf-32 means to LSP.
fn negotiate_position_encoding(capabilities: &ClientCapabilities) -> Option<PositionEncodingKind> {
    let offered = capabilities.general.as_ref()?.position_encodings.as_ref()?;
    offered.contains(&PositionEncodingKind::UTF32).then_some(PositionEncodingKind::UTF32)
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}
