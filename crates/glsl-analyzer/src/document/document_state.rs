use tower_lsp::lsp_types::{DocumentSymbol, Url};

use crate::symbols::{FunctionDef, StructDef, document_symbols, extract_functions, extract_structs};

/// One text revision together with the declarations found in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentState {
    /// `None` until the first document is opened.
    pub uri: Option<Url>,
    pub version: i32,
    pub text: String,
    pub structs: Vec<StructDef>,
    pub functions: Vec<FunctionDef>,
}

impl DocumentState {
    /// Scan `text` with both passes. Functions always see the structs of this same text.
    pub fn scan(
        uri: Url,
        text: String,
        version: i32,
    ) -> Self {
        let structs = extract_structs(&text);
        let functions = extract_functions(&text, &structs);
        Self {
            uri: Some(uri),
            version,
            text,
            structs,
            functions,
        }
    }

    pub fn symbols(&self) -> Vec<DocumentSymbol> {
        document_symbols(&self.structs, &self.functions)
    }
}
