use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonalGenomeError {
    /// A required argument was missing, e.g. a marker identifier or an element of a
    /// marker identifier collection.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A decoded value violates an invariant a well-formed response never breaks.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The response stream could not be read or tokenized.
    #[error("Failed to decode response: {0}")]
    DecodeFailed(String),
}

pub type Result<T> = std::result::Result<T, PersonalGenomeError>;
