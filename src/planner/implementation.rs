use log::{debug, error, warn};
use strum::IntoEnumIterator;

use crate::line::{CircularLine, Direction, Line, LineVariant, LinearLine, Station, Traversal};
use crate::planner::definition::Routable;
use crate::planner::error::PlanError;
use crate::planner::route::Route;

/// Accumulates the non-negative stations of a traversal up to and
/// including `end`. Returns `None` if the traversal never reaches `end`.
pub(crate) fn collect_until<'a>(traversal: Traversal<'a>, end: &str) -> Option<Vec<&'a Station>> {
    let mut path = Vec::new();

    for station in traversal {
        if !station.is_negative() {
            path.push(station);
        }

        if station.name() == end {
            return Some(path);
        }
    }

    None
}

impl Routable for LinearLine {
    /// Takes whichever direction reaches `end`, trying forward first.
    fn walk(&self, start: &str, end: &str) -> Result<Option<Route>, PlanError> {
        for direction in Direction::iter() {
            if let Some(path) = collect_until(self.iter(start, direction)?, end) {
                return Ok(Some(Route::new(self.name(), direction, path)));
            }

            debug!("{end} does not lie {direction} of {start} on {}", self.name());
        }

        error!(
            "Neither direction from {start} reached {end} on {}, line is corrupted",
            self.name()
        );

        Err(PlanError::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

impl Routable for CircularLine {
    /// Walks the ring both ways and keeps the shorter path, preferring
    /// forward on a tie.
    fn walk(&self, start: &str, end: &str) -> Result<Option<Route>, PlanError> {
        let forward = collect_until(self.iter_forward(start)?, end);
        let backward = collect_until(self.iter_backward(start)?, end);

        let chosen = match (forward, backward) {
            (Some(forward), Some(backward)) if forward.len() <= backward.len() => {
                Some((Direction::Forward, forward))
            }
            (_, Some(backward)) => Some((Direction::Backward, backward)),
            (Some(forward), None) => Some((Direction::Forward, forward)),
            (None, None) => None,
        };

        match chosen {
            Some((direction, path)) => Ok(Some(Route::new(self.name(), direction, path))),
            None => {
                warn!(
                    "No direction from {start} reached {end} on ring {}",
                    self.name()
                );
                Ok(None)
            }
        }
    }
}

impl Routable for LineVariant {
    fn walk(&self, start: &str, end: &str) -> Result<Option<Route>, PlanError> {
        match self {
            LineVariant::Linear(line) => line.walk(start, end),
            LineVariant::Circular(line) => line.walk(start, end),
        }
    }
}
