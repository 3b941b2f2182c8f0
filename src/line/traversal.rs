//! Lazy cursor over the stations of a line.

use std::iter::FusedIterator;

use strum::{Display, EnumIter, EnumString};

use crate::line::registry::Registry;
use crate::line::station::{Station, StationIx};

/// Which link a traversal follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// How a traversal decides it has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Stop once the link in the travel direction is absent.
    Open,
    /// Stop right before the starting station would be visited again.
    Ring,
}

/// Iterator over the stations reachable from a start station, inclusive
/// of the start. Every call to `iter_forward`/`iter_backward` on a line
/// hands out a fresh cursor.
///
/// The cursor never yields more stations than the registry holds, so a
/// traversal is finite even if the links were somehow broken.
#[derive(Clone, Debug)]
pub struct Traversal<'a> {
    registry: &'a Registry,

    start: StationIx,
    cursor: Option<StationIx>,
    remaining: usize,

    direction: Direction,
    bound: Bound,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(
        registry: &'a Registry,
        start: StationIx,
        direction: Direction,
        bound: Bound,
    ) -> Self {
        Traversal {
            registry,
            start,
            cursor: Some(start),
            remaining: registry.len(),
            direction,
            bound,
        }
    }

    /// A traversal that yields nothing, used for empty lines.
    pub(crate) fn empty(registry: &'a Registry, direction: Direction, bound: Bound) -> Self {
        Traversal {
            registry,
            start: StationIx(0),
            cursor: None,
            remaining: 0,
            direction,
            bound,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Station;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            self.cursor = None;
            return None;
        }

        let registry = self.registry;
        let Some(station) = self.cursor.and_then(|ix| registry.station(ix)) else {
            self.cursor = None;
            return None;
        };
        self.remaining -= 1;

        let following = match self.direction {
            Direction::Forward => station.next,
            Direction::Backward => station.prev,
        };

        self.cursor = match self.bound {
            Bound::Open => following,
            Bound::Ring => following.filter(|ix| *ix != self.start),
        };

        Some(station)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            None => (0, Some(0)),
            Some(_) => (self.remaining.min(1), Some(self.remaining)),
        }
    }
}

impl FusedIterator for Traversal<'_> {}
