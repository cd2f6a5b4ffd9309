use thiserror::Error;

/// Errors that can occur during suffix tree operations.
///
/// Queries never fail; only insertion and record lookup are fallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuffixTreeError {
    /// The terminator chooser exhausted its reserved range.
    #[error("No terminator available: reserved range U+2980..=U+2AFF is exhausted")]
    NoTerminatorAvailable,

    /// The input contains a code point from the reserved terminator range.
    #[error("Input contains reserved code point {ch:?}; U+2980..=U+2AFF is reserved for terminators")]
    ReservedCharacterInInput {
        /// The offending code point
        ch: char,
    },

    /// The id was never returned by `insert_string` on this tree.
    #[error("Unknown string id {id}")]
    UnknownStringId {
        /// The unrecognized id value
        id: usize,
    },
}

/// A specialized Result type for suffix tree operations.
pub type Result<T> = std::result::Result<T, SuffixTreeError>;

impl SuffixTreeError {
    /// Creates a new ReservedCharacterInInput error.
    pub(crate) fn reserved_character(ch: char) -> Self {
        Self::ReservedCharacterInInput { ch }
    }

    /// Creates a new UnknownStringId error.
    pub(crate) fn unknown_string_id(id: usize) -> Self {
        Self::UnknownStringId { id }
    }
}
