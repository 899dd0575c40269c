use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::sync::RwLock;
use tower_lsp::{Client, lsp_types::MessageType};
use tracing::warn;

use crate::{document::DocumentStore, server::settings::ServerSettings};

const CLIENT_NOTIFICATION_PREFIX: &str = "glsl-analyzer:";

/// The glsl-analyzer backend that implements the Language Server Protocol.
pub struct GlslLanguageServer {
    /// The LSP client handle, used to forward log messages back.
    pub(crate) client: Client,

    /// The tracked document and its symbols.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl GlslLanguageServer {
    /// Create a new `GlslLanguageServer` wired to the given LSP client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        *self.settings.write().await = settings;
    }

    /// Forward a message to the client's log. A client that went away must not take the handler down.
    pub(crate) async fn log_to_client(
        &self,
        typ: MessageType,
        message: impl AsRef<str>,
    ) {
        let message = format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref());
        let result = AssertUnwindSafe(self.client.log_message(typ, message)).catch_unwind().await;
        if result.is_err() {
            warn!("log_message panicked (client may have disconnected)");
        }
    }
}
