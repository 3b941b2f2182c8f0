use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("station `{0}` does not exist on this line")]
    NotFound(String),

    #[error("station `{0}` already exists on this line")]
    DuplicateName(String),

    #[error("line structure is corrupted: {0}")]
    Corrupted(String),
}

impl LineError {
    /// Whether the error reports a broken registry/topology rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, LineError::Corrupted(_))
    }
}
