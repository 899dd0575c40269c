pub mod document;
pub mod glsl;
pub mod server;
pub mod symbols;
pub mod text_pos;

pub use document::{DocumentError, DocumentState, DocumentStore};
pub use server::GlslLanguageServer;
pub use symbols::{FunctionDef, StructDef, document_symbols, extract_functions, extract_structs, extract_symbols};
