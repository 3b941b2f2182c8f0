use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::line::{Direction, Station};

/// An ordered sequence of stop names from a start to an end station,
/// inclusive, with no negative stations in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    line: String,
    direction: Direction,
    stops: Vec<String>,
}

impl Route {
    pub(crate) fn new<'a>(
        line: &str,
        direction: Direction,
        path: impl IntoIterator<Item = &'a Station>,
    ) -> Self {
        Route {
            line: line.to_string(),
            direction,
            stops: path
                .into_iter()
                .map(|station| station.name().to_string())
                .collect(),
        }
    }

    /// Name of the line the route was planned on.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The traversal direction the route follows.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn names(&self) -> Vec<&str> {
        self.stops.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn into_stops(self) -> Vec<String> {
        self.stops
    }
}

impl From<Route> for Vec<String> {
    fn from(route: Route) -> Self {
        route.stops
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stops.iter().join(" -> "))
    }
}
