use once_cell::sync::Lazy;
use regex::{Match, Regex};
use tower_lsp::lsp_types::{Position, Range};
use tracing::{debug, warn};

use crate::glsl::{BUILTIN_TYPES, VOID_TYPE};
use crate::text_pos::LineIndex;

use super::types::{FunctionDef, StructDef};

static STRUCT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bstruct\s+(\w+)\s*\{").expect("struct header pattern is valid"));

/// Find every `struct Name {` header, in document order.
///
/// Bodies are never parsed; only the header up to `{` has to be present.
pub fn extract_structs(source: &str) -> Vec<StructDef> {
    let lines = LineIndex::new(source);
    STRUCT_HEADER
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| StructDef {
            name: name.as_str().to_string(),
            range: identifier_range(&lines, name),
        })
        .collect()
}

/// Find every `ReturnType name(` header whose return type is a builtin,
/// one of `structs`, or `void`, in document order.
///
/// `structs` must come from the same text as `source`.
pub fn extract_functions(
    source: &str,
    structs: &[StructDef],
) -> Vec<FunctionDef> {
    let types = return_types(structs);
    let alternation = types.iter().map(|name| regex::escape(name)).collect::<Vec<_>>().join("|");
    let pattern = format!(r"\b(?:{alternation})\s+(\w+)\s*\(");

    let header = match Regex::new(&pattern) {
        Ok(header) => header,
        Err(error) => {
            warn!("[symbols] function header pattern rejected ({} struct names): {error}", structs.len());
            return Vec::new();
        },
    };

    let lines = LineIndex::new(source);
    let functions: Vec<FunctionDef> = header
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| FunctionDef {
            name: name.as_str().to_string(),
            range: identifier_range(&lines, name),
        })
        .collect();

    debug!("[symbols] {} functions across {} return types", functions.len(), types.len());
    functions
}

/// Admissible return types: builtins, then struct names, then `void`.
/// First occurrence wins when a name repeats.
pub fn return_types(structs: &[StructDef]) -> Vec<&str> {
    let mut types: Vec<&str> = BUILTIN_TYPES.to_vec();
    for name in structs.iter().map(|s| s.name.as_str()).chain([VOID_TYPE]) {
        if !types.contains(&name) {
            types.push(name);
        }
    }
    types
}

// `\w` never matches a newline, so the name ends on the line it starts on.
fn identifier_range(
    lines: &LineIndex<'_>,
    name: Match<'_>,
) -> Range {
    let start = lines.position(name.start());
    let end = Position::new(start.line, start.character + name.as_str().chars().count() as u32);
    Range::new(start, end)
}

#[cfg(test)]
#[path = "../../tests/src/symbols/scanner_tests.rs"]
mod tests;
