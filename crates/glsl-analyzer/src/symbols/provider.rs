use tower_lsp::lsp_types::{DocumentSymbol, Range, SymbolKind};

use super::scanner::{extract_functions, extract_structs};
use super::types::{FunctionDef, StructDef};

/// Project extracted declarations into the flat symbol list sent to the client.
///
/// All structs come first, then all functions, each group in document order.
pub fn document_symbols(
    structs: &[StructDef],
    functions: &[FunctionDef],
) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::with_capacity(structs.len() + functions.len());
    symbols.extend(structs.iter().map(|s| declaration_symbol(&s.name, s.range, SymbolKind::CLASS)));
    symbols.extend(functions.iter().map(|f| declaration_symbol(&f.name, f.range, SymbolKind::FUNCTION)));
    symbols
}

/// Run both extraction passes over `source` and project the result.
pub fn extract_symbols(source: &str) -> Vec<DocumentSymbol> {
    let structs = extract_structs(source);
    let functions = extract_functions(source, &structs);
    document_symbols(&structs, &functions)
}

fn declaration_symbol(
    name: &str,
    range: Range,
    kind: SymbolKind,
) -> DocumentSymbol {
    DocumentSymbol {
        name: name.to_string(),
        detail: None,
        kind,
        tags: None,
        #[allow(deprecated)]
        deprecated: None,
        range,
        selection_range: range,
        children: Some(Vec::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/provider_tests.rs"]
mod tests;
