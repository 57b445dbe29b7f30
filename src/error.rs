use std::error::Error;
use std::fmt;

/// Error kinds surfaced by the classification pipeline and inference service.
///
/// The boundary layer maps `InvalidArgument` to a client error and the other
/// two kinds to server errors; none of them are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Bad caller input: zero sample count, empty or degenerate fit input,
    /// or a feature outside its declared range.
    InvalidArgument(String),
    /// Inference was requested before a fitted state was installed.
    NotReady,
    /// Unexpected failure inside scaling or prediction (e.g. a non-finite
    /// intermediate value).
    Internal(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ModelError::NotReady => write!(f, "model is not trained yet"),
            ModelError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl Error for ModelError {}
