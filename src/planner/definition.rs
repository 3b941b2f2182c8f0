use crate::line::Line;
use crate::planner::error::PlanError;
use crate::planner::route::Route;

/// The walk strategy a line topology plans routes with.
///
/// New topologies plug into [`RoutePlanner`](crate::planner::RoutePlanner)
/// by implementing this trait; the planner never inspects the concrete type.
pub trait Routable: Line {
    /// Walks from `start` towards `end`, skipping negative stations.
    ///
    /// Both names have already been checked to exist and to be eligible
    /// endpoints. `Ok(None)` means no direction reached `end`.
    fn walk(&self, start: &str, end: &str) -> Result<Option<Route>, PlanError>;
}
