use tower_lsp::lsp_types::Range;

/// A `struct Name {` header found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub name: String,
    /// Span of the struct name only.
    pub range: Range,
}

/// A `ReturnType name(` header whose return type was recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    /// Span of the function name only.
    pub range: Range,
}
