pub mod builtins;

pub use builtins::{BUILTIN_TYPES, VOID_TYPE};
