use std::sync::{Mutex, MutexGuard, PoisonError};

use tower_lsp::lsp_types::{DocumentSymbol, TextDocumentContentChangeEvent, Url};
use tracing::debug;

use super::{DocumentError, DocumentState, MalformedChange};

/// Holds the single tracked document and its extracted symbols.
///
/// One mutex covers the whole state. Writers hold it across both extraction
/// passes and readers hold it while projecting, so nobody ever observes
/// structs from one revision next to functions from another.
#[derive(Debug, Default)]
pub struct DocumentStore {
    state: Mutex<DocumentState>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `uri`, replacing whatever document was tracked before.
    pub fn open(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) {
        let mut state = self.lock();
        *state = DocumentState::scan(uri, text, version);
        debug!(
            "[store] opened v{version}: {} structs, {} functions",
            state.structs.len(),
            state.functions.len()
        );
    }

    /// Replace the document with the text carried by a full-sync change.
    ///
    /// Anything other than a single whole-text record is rejected and the
    /// previous state stays authoritative.
    pub fn change(
        &self,
        uri: Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> Result<(), DocumentError> {
        let text = whole_document_text(changes)?;
        let mut state = self.lock();
        *state = DocumentState::scan(uri, text, version);
        debug!(
            "[store] changed to v{version}: {} structs, {} functions",
            state.structs.len(),
            state.functions.len()
        );
        Ok(())
    }

    /// The editor owns persistence; nothing to do.
    pub fn save(&self) {}

    /// Structs then functions of the current revision.
    pub fn current_symbols(&self) -> Vec<DocumentSymbol> {
        self.lock().symbols()
    }

    pub fn snapshot(&self) -> DocumentState {
        self.lock().clone()
    }

    // Every write replaces the state in one assignment, so a poisoned lock
    // still guards a consistent revision.
    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn whole_document_text(mut changes: Vec<TextDocumentContentChangeEvent>) -> Result<String, DocumentError> {
    if changes.len() > 1 {
        return Err(DocumentError::MalformedChangeEvent(MalformedChange::MultipleChanges(changes.len())));
    }
    let Some(change) = changes.pop() else {
        return Err(DocumentError::MalformedChangeEvent(MalformedChange::NoChanges));
    };
    if change.range.is_some() || change.range_length.is_some() {
        return Err(DocumentError::MalformedChangeEvent(MalformedChange::RangedEdit));
    }
    Ok(change.text)
}

#[cfg(test)]
#[path = "../../tests/src/document/document_store_tests.rs"]
mod tests;
