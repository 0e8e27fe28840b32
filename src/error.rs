use thiserror::Error;

/// Errors reported by a [`Bijection`](crate::Bijection) and its views
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BijectionError {
    /// The addressed key (or, through an inverse view, value) is not in the map
    #[error("key not found")]
    KeyNotFound,
    /// The pair at `index` shares its key with an earlier, different pair
    #[error("pair {index} repeats a key already paired with another value")]
    DuplicateKey {
        /// Position of the offending pair in the input
        index: usize,
    },
    /// The pair at `index` shares its value with an earlier, different pair
    #[error("pair {index} repeats a value already paired with another key")]
    DuplicateValue {
        /// Position of the offending pair in the input
        index: usize,
    },
}
