use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `encode` was given an empty word, there is no head letter to keep.
    #[error("invalid input: cannot encode an empty word")]
    InvalidInput,

    #[error("invalid soundex code {code:?}: {reason}")]
    InvalidCode { code: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
