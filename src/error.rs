use thiserror::Error;

/// Recoverable failures of saved-place operations; the UI shows them as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("This place is already saved!")]
    AlreadySaved,
    #[error("No saved place at index {index} (have {len})")]
    OutOfRange { index: usize, len: usize },
}
