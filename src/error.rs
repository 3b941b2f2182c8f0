use thiserror::Error;

use crate::impl_err;
use crate::line::LineError;
use crate::planner::PlanError;

/// Any error raised by the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Line(LineError),

    #[error(transparent)]
    Plan(PlanError),
}

impl Error {
    pub fn is_invariant_violation(&self) -> bool {
        match self {
            Error::Line(err) => err.is_invariant_violation(),
            Error::Plan(err) => err.is_invariant_violation(),
        }
    }
}

impl_err!(LineError, Line);
impl_err!(PlanError, Plan);

pub type Result<T> = std::result::Result<T, Error>;
