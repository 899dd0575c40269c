mod provider;
mod scanner;
mod types;

pub use provider::{document_symbols, extract_symbols};
pub use scanner::{extract_functions, extract_structs, return_types};
pub use types::{FunctionDef, StructDef};
