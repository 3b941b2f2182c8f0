use log::debug;
use measure_time::debug_time;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::line::Line;
use crate::planner::definition::Routable;
use crate::planner::error::PlanError;
use crate::planner::route::Route;

/// Plans routes between two stations of the same line.
///
/// The planner holds no state; it borrows a line per call. Lines shared
/// between threads must be guarded externally, since `plan` reads the
/// negative flags that `mark_negative` writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoutePlanner;

impl RoutePlanner {
    pub fn new() -> Self {
        RoutePlanner
    }

    /// Finds the route from `start` to `end` on `line`.
    ///
    /// Fails with [`PlanError::Line`] if either station is absent, and with
    /// [`PlanError::IneligibleEndpoint`] if either is flagged negative.
    /// Negative stations between the two are left out of the route.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, line), level = Level::INFO))]
    pub fn plan<L>(&self, line: &L, start: &str, end: &str) -> Result<Option<Route>, PlanError>
    where
        L: Routable + ?Sized,
    {
        debug_time!("RoutePlanner::plan");
        debug!("Planning {start} -> {end} on {} ({})", line.name(), line.kind());

        self.validate(line, start, end)?;
        let route = line.walk(start, end)?;

        if let Some(route) = &route {
            debug!("Chose {} route: {route}", route.direction());
        }

        Ok(route)
    }

    fn validate<L>(&self, line: &L, start: &str, end: &str) -> Result<(), PlanError>
    where
        L: Line + ?Sized,
    {
        let start_station = line.get(start)?;
        let end_station = line.get(end)?;

        for station in [start_station, end_station] {
            if station.is_negative() {
                return Err(PlanError::IneligibleEndpoint(station.name().to_string()));
            }
        }

        Ok(())
    }
}
