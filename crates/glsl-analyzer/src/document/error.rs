use std::fmt::{Display, Formatter};

/// Why a change notification could not be treated as a whole-document replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedChange {
    NoChanges,
    MultipleChanges(usize),
    RangedEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The change payload was not a single full-text record. The stored document is untouched.
    MalformedChangeEvent(MalformedChange),
}

impl Display for MalformedChange {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::NoChanges => write!(f, "no content changes"),
            Self::MultipleChanges(count) => write!(f, "{count} content changes, expected exactly one"),
            Self::RangedEdit => write!(f, "ranged edit received, only full-text sync is supported"),
        }
    }
}

impl Display for DocumentError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::MalformedChangeEvent(reason) => write!(f, "malformed change event: {reason}"),
        }
    }
}

impl std::error::Error for DocumentError {}
