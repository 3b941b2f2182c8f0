use thiserror::Error;

use crate::line::LineError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Line(#[from] LineError),

    #[error("station `{0}` is marked negative and cannot be a route endpoint")]
    IneligibleEndpoint(String),

    #[error("no direction from `{start}` reaches `{end}` although both are on the line")]
    Unreachable { start: String, end: String },
}

impl PlanError {
    /// Whether the error reports a broken line structure rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        match self {
            PlanError::Line(err) => err.is_invariant_violation(),
            PlanError::IneligibleEndpoint(_) => false,
            PlanError::Unreachable { .. } => true,
        }
    }
}
