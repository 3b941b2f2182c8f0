#![doc = include_str!("../readme.md")]

pub mod error;
pub mod line;
pub mod planner;
pub mod util;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use line::{CircularLine, Direction, Line, LineError, LineKind, LineVariant, LinearLine};
#[doc(inline)]
pub use planner::{PlanError, Routable, Route, RoutePlanner};
