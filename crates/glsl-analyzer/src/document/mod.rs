pub(crate) mod document_state;
pub(crate) mod document_store;
pub(crate) mod error;

pub use document_state::DocumentState;
pub use document_store::DocumentStore;
pub use error::{DocumentError, MalformedChange};
